//! Out-of-band crisis notices.
//!
//! Raised whenever a risk tier resolves to high, separately from the chat
//! transcript. Delivery is fire-and-forget: nothing waits for the UI to
//! acknowledge a notice, and a missing receiver is only logged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// Where the high tier was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSource {
    Chat,
    Assessment,
}

/// An emergency or crisis-line contact named in every notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisContact {
    pub name: String,
    pub contact: String,
}

impl CrisisContact {
    fn new(name: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: contact.to_string(),
        }
    }
}

/// The emergency and crisis-line contacts, in display order.
pub fn crisis_contacts() -> Vec<CrisisContact> {
    vec![
        CrisisContact::new("Emergency", "999"),
        CrisisContact::new("Kenya Red Cross", "1199"),
        CrisisContact::new("Befrienders Kenya", "0722 178 177"),
        CrisisContact::new("Crisis Text Line", "Text TALK to 741741"),
    ]
}

/// Urgent alert for the UI, distinct from any chat reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisNotice {
    pub source: NoticeSource,
    pub title: String,
    pub message: String,
    pub contacts: Vec<CrisisContact>,
    pub raised_at: DateTime<Utc>,
}

impl CrisisNotice {
    /// Notice raised by a high-risk chat message.
    pub fn for_chat() -> Self {
        Self {
            source: NoticeSource::Chat,
            title: "Crisis Support Available".to_string(),
            message: "If you're in immediate danger, please call 999 or visit your nearest hospital."
                .to_string(),
            contacts: crisis_contacts(),
            raised_at: Utc::now(),
        }
    }

    /// Notice raised by a high-risk questionnaire result.
    pub fn for_assessment() -> Self {
        Self {
            source: NoticeSource::Assessment,
            title: "Immediate Support Needed".to_string(),
            message: "Please reach out to a mental health professional or emergency services immediately."
                .to_string(),
            contacts: crisis_contacts(),
            raised_at: Utc::now(),
        }
    }

    /// Multi-line text rendering for terminals and logs.
    pub fn render(&self) -> String {
        let mut out = format!("{}: {}", self.title, self.message);
        for contact in &self.contacts {
            out.push_str(&format!("\n  - {}: {}", contact.name, contact.contact));
        }
        out
    }
}

/// Receives crisis notices on behalf of the UI layer.
pub trait NoticeSink: Send + Sync {
    /// Hands a notice over. Must not block and must not fail the caller.
    fn notify(&self, notice: CrisisNotice);
}

/// Forwards notices into a tokio channel read by the UI.
#[derive(Clone)]
pub struct ChannelNoticeSink {
    sender: mpsc::UnboundedSender<CrisisNotice>,
}

impl ChannelNoticeSink {
    /// Creates a sink and the receiver the UI should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<CrisisNotice>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NoticeSink for ChannelNoticeSink {
    fn notify(&self, notice: CrisisNotice) {
        let source = notice.source;
        if self.sender.send(notice).is_err() {
            warn!(?source, "Crisis notice dropped: receiver closed");
        }
    }
}

/// Writes notices to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNoticeSink;

impl NoticeSink for TracingNoticeSink {
    fn notify(&self, notice: CrisisNotice) {
        warn!(
            source = ?notice.source,
            title = %notice.title,
            contacts = notice.contacts.len(),
            "Crisis notice raised"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_name_emergency_and_crisis_lines() {
        let contacts = crisis_contacts();
        assert!(contacts.iter().any(|c| c.contact == "999"));
        assert!(contacts.iter().any(|c| c.contact == "1199"));
    }

    #[test]
    fn test_render_lists_contacts() {
        let rendered = CrisisNotice::for_assessment().render();
        assert!(rendered.starts_with("Immediate Support Needed"));
        assert!(rendered.contains("Befrienders Kenya: 0722 178 177"));
    }

    #[tokio::test]
    async fn test_channel_sink_delivers() {
        let (sink, mut receiver) = ChannelNoticeSink::new();
        sink.notify(CrisisNotice::for_chat());

        let notice = receiver.recv().await.expect("notice delivered");
        assert_eq!(notice.source, NoticeSource::Chat);
    }

    #[test]
    fn test_channel_sink_tolerates_closed_receiver() {
        let (sink, receiver) = ChannelNoticeSink::new();
        drop(receiver);
        sink.notify(CrisisNotice::for_chat());
    }
}
