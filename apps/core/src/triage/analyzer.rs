//! Triage Analyzer - Entry point for chat text.
//!
//! Runs the risk classifier and the response generator side by side on one
//! message. The two never call each other; the analyzer only combines their
//! outputs and decides whether an urgent notice is due.

use chrono::Utc;
use tracing::debug;

use super::classifier::{KeywordRiskClassifier, RiskClassifier};
use super::outcome::TriageOutcome;
use super::responder::ResponseGenerator;
use crate::config::TriageConfig;

/// Combines classification and reply generation for chat messages
pub struct TriageAnalyzer {
    classifier: Box<dyn RiskClassifier>,
    responder: ResponseGenerator,
}

impl Default for TriageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageAnalyzer {
    /// Create an analyzer with the keyword classifier and canonical replies
    pub fn new() -> Self {
        Self::with_parts(Box::new(KeywordRiskClassifier::new()), ResponseGenerator::new())
    }

    /// Create an analyzer tuned by configuration
    pub fn from_config(config: &TriageConfig) -> Self {
        let classifier = KeywordRiskClassifier::with_config(
            config.high_risk_marker_threshold,
            config.placeholder_confidence,
        );
        Self::with_parts(
            Box::new(classifier),
            ResponseGenerator::with_selection(config.reply_selection),
        )
    }

    /// Create an analyzer around any classifier implementation
    pub fn with_parts(classifier: Box<dyn RiskClassifier>, responder: ResponseGenerator) -> Self {
        Self {
            classifier,
            responder,
        }
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Analyze one chat message.
    ///
    /// Returns `None` for empty or whitespace-only input: nothing is classified
    /// and no reply is produced.
    pub fn analyze(&self, text: &str) -> Option<TriageOutcome> {
        if text.trim().is_empty() {
            return None;
        }

        let classification = self.classifier.classify(text);
        let theme = self.responder.detect_theme(text);
        let reply = self.responder.reply_for(theme).to_string();
        let urgent_notice_requested = classification.risk_tier.requires_urgent_notice();

        let outcome = TriageOutcome {
            classification,
            theme,
            reply,
            urgent_notice_requested,
            analyzed_at: Utc::now(),
        };

        debug!(
            classifier = self.classifier.name(),
            chars = text.chars().count(),
            "{}",
            outcome.summary()
        );

        Some(outcome)
    }
}
