//! Chat Session - In-memory transcript of one conversation.
//!
//! Nothing is persisted: the transcript lives as long as the session value.

use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Message, RiskTier, Sentiment};
use crate::notice::{CrisisNotice, NoticeSink};
use crate::triage::{TriageAnalyzer, TriageOutcome};

pub const WELCOME_MESSAGE: &str = "Habari! I'm here to listen and support you. This is a safe space where you can share your thoughts and feelings. How are you doing today?";

pub struct ChatSession {
    id: String,
    messages: Vec<Message>,
    analyzer: Arc<TriageAnalyzer>,
    sink: Arc<dyn NoticeSink>,
}

impl ChatSession {
    /// Opens a session whose transcript starts with the welcome message.
    pub fn new(analyzer: Arc<TriageAnalyzer>, sink: Arc<dyn NoticeSink>) -> Self {
        let id = Uuid::new_v4().to_string();
        info!(session_id = %id, "Chat session opened");

        Self {
            id,
            messages: vec![Message::system(WELCOME_MESSAGE, Sentiment::Positive, RiskTier::Low)],
            analyzer,
            sink,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    /// Handles one user message.
    ///
    /// Blank input changes nothing and returns `None`. Otherwise the user
    /// message and the reply are appended, and a high tier sends the chat
    /// crisis notice to the sink.
    pub fn submit(&mut self, text: &str) -> Option<TriageOutcome> {
        let Some(outcome) = self.analyzer.analyze(text) else {
            debug!(session_id = %self.id, "Ignoring blank message");
            return None;
        };

        self.messages.push(Message::user(text));
        self.messages.push(Message::system(
            outcome.reply.clone(),
            outcome.classification.sentiment,
            outcome.classification.risk_tier,
        ));

        if outcome.urgent_notice_requested {
            self.sink.notify(CrisisNotice::for_chat());
        }

        info!(
            session_id = %self.id,
            messages = self.messages.len(),
            outcome = %outcome.summary(),
            "Chat turn processed"
        );
        Some(outcome)
    }
}
