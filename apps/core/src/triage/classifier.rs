//! Risk classification over free text.
//!
//! `RiskClassifier` is the capability the rest of the crate depends on:
//! text in, sentiment + confidence + risk tier out. `KeywordRiskClassifier`
//! is the lexicon-driven implementation shipped today; a learned model can
//! take its place behind the same trait.

use tracing::debug;

use super::lexicon::Lexicon;
use crate::models::{ClassificationResult, RiskTier, Sentiment};

/// Distinct negative markers at or above which text is high risk.
pub const DEFAULT_HIGH_RISK_MARKER_THRESHOLD: usize = 2;

/// Fixed confidence reported by the keyword classifier. Not a computed statistic.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.8;

/// Maps a text to a sentiment and a risk tier.
pub trait RiskClassifier: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Classifies `text`. Must be deterministic and free of side effects.
    fn classify(&self, text: &str) -> ClassificationResult;
}

/// Keyword classifier counting lexicon markers.
pub struct KeywordRiskClassifier {
    lexicon: &'static Lexicon,
    high_risk_marker_threshold: usize,
    confidence: f32,
}

impl Default for KeywordRiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordRiskClassifier {
    /// Create a classifier over the standard lexicon with default tuning
    pub fn new() -> Self {
        Self::with_config(DEFAULT_HIGH_RISK_MARKER_THRESHOLD, PLACEHOLDER_CONFIDENCE)
    }

    /// Create a classifier with a custom high-risk threshold and reported confidence
    pub fn with_config(high_risk_marker_threshold: usize, confidence: f32) -> Self {
        Self {
            lexicon: Lexicon::standard(),
            high_risk_marker_threshold: high_risk_marker_threshold.max(1),
            confidence: if confidence.is_finite() {
                confidence.clamp(0.0, 1.0)
            } else {
                PLACEHOLDER_CONFIDENCE
            },
        }
    }

    pub fn high_risk_marker_threshold(&self) -> usize {
        self.high_risk_marker_threshold
    }
}

impl RiskClassifier for KeywordRiskClassifier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, text: &str) -> ClassificationResult {
        let negative = self.lexicon.negative.matches(text);
        let positive = self.lexicon.positive.matches(text);
        let neg = negative.len();
        let pos = positive.len();

        let sentiment = if neg > pos {
            Sentiment::Negative
        } else if pos > neg {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        };

        let severe = self.lexicon.high_severity.is_match(text);
        let risk_tier = if neg >= self.high_risk_marker_threshold || severe {
            RiskTier::High
        } else if neg >= 1 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        };

        debug!(
            classifier = self.name(),
            negative = neg,
            positive = pos,
            severe,
            tier = %risk_tier,
            "Classified text"
        );

        ClassificationResult {
            sentiment,
            confidence: self.confidence,
            risk_tier,
            matched_markers: negative
                .into_iter()
                .chain(positive)
                .map(str::to_string)
                .collect(),
        }
    }
}
