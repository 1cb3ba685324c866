//! Triage Outcome - Output structure for one analysed chat message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::responder::Theme;
use crate::models::ClassificationResult;

/// Everything the UI needs to answer one user message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOutcome {
    /// Sentiment and risk of the user text
    pub classification: ClassificationResult,

    /// Theme that selected the reply
    pub theme: Theme,

    /// Supportive reply for the transcript
    pub reply: String,

    /// Whether the UI must raise the out-of-band crisis notice
    pub urgent_notice_requested: bool,

    /// Timestamp of analysis
    pub analyzed_at: DateTime<Utc>,
}

impl TriageOutcome {
    /// Get a summary for logging. Never includes the user's text.
    pub fn summary(&self) -> String {
        format!(
            "Sentiment: {} ({:.0}%), Risk: {}, Theme: {}, Markers: {}, Notice: {}",
            self.classification.sentiment,
            self.classification.confidence * 100.0,
            self.classification.risk_tier,
            self.theme,
            self.classification.matched_markers.len(),
            if self.urgent_notice_requested { "yes" } else { "no" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskTier, Sentiment};

    #[test]
    fn test_summary() {
        let outcome = TriageOutcome {
            classification: ClassificationResult {
                sentiment: Sentiment::Negative,
                confidence: 0.8,
                risk_tier: RiskTier::High,
                matched_markers: vec!["suicide".to_string()],
            },
            theme: Theme::Crisis,
            reply: "reply".to_string(),
            urgent_notice_requested: true,
            analyzed_at: Utc::now(),
        };

        let summary = outcome.summary();
        assert!(summary.contains("Risk: high"));
        assert!(summary.contains("Theme: crisis"));
        assert!(summary.contains("Notice: yes"));
        assert!(!summary.contains("suicide"));
    }
}
