//! Questionnaire scoring.
//!
//! Sums the answers, maps the percentage of the maximum score to a risk
//! tier, and applies the self-harm override: any non-zero answer to the
//! self-harm item forces a high tier whatever the total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use super::questionnaire::{ItemId, Questionnaire};
use crate::models::RiskTier;

/// Percentage of the maximum score at or above which the tier is high.
pub const DEFAULT_HIGH_PERCENT: u8 = 60;

/// Percentage of the maximum score at or above which the tier is medium.
pub const DEFAULT_MEDIUM_PERCENT: u8 = 30;

/// One answer score per item id.
pub type Answers = BTreeMap<ItemId, u8>;

/// Errors that can occur while scoring a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    /// Scoring was requested before every item was answered.
    #[error("Incomplete assessment: unanswered items {missing:?}")]
    IncompleteAssessment { missing: Vec<ItemId> },
    /// An answer score that the item does not offer.
    #[error("Invalid answer {value} for item {item}")]
    InvalidAnswer { item: ItemId, value: u8 },
    /// An answer for an item that is not part of the questionnaire.
    #[error("Unknown questionnaire item {0}")]
    UnknownItem(ItemId),
}

/// Result of scoring one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub total_score: u32,
    pub max_score: u32,
    /// `total_score / max_score * 100`
    pub percentage: f32,
    pub risk_tier: RiskTier,
    /// The self-harm item was answered above zero. Implies a high tier.
    pub self_harm_flagged: bool,
}

impl AssessmentResult {
    /// Whether the UI must raise the out-of-band crisis notice.
    pub fn urgent_notice_requested(&self) -> bool {
        self.risk_tier.requires_urgent_notice()
    }
}

/// Scores answer sets against a questionnaire
pub struct AssessmentScorer {
    questionnaire: &'static Questionnaire,
    high_percent: u8,
    medium_percent: u8,
}

impl Default for AssessmentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentScorer {
    /// Create a scorer for the standard questionnaire with default thresholds
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_HIGH_PERCENT, DEFAULT_MEDIUM_PERCENT)
    }

    /// Create a scorer with custom percentage thresholds.
    ///
    /// `medium_percent` is capped at `high_percent`.
    pub fn with_thresholds(high_percent: u8, medium_percent: u8) -> Self {
        let high_percent = high_percent.min(100);
        Self {
            questionnaire: Questionnaire::standard(),
            high_percent,
            medium_percent: medium_percent.min(high_percent),
        }
    }

    pub fn questionnaire(&self) -> &'static Questionnaire {
        self.questionnaire
    }

    fn validate(&self, answers: &Answers) -> Result<(), AssessmentError> {
        let missing: Vec<ItemId> = self
            .questionnaire
            .items()
            .iter()
            .map(|item| item.id)
            .filter(|id| !answers.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(AssessmentError::IncompleteAssessment { missing });
        }

        for (&id, &value) in answers {
            let item = self
                .questionnaire
                .item(id)
                .ok_or(AssessmentError::UnknownItem(id))?;
            if !item.accepts(value) {
                return Err(AssessmentError::InvalidAnswer { item: id, value });
            }
        }

        Ok(())
    }

    fn tier_for(&self, total: u32, max: u32) -> RiskTier {
        // Integer comparison keeps boundaries exact (9/15 is exactly 60%).
        let scaled = total * 100;
        if scaled >= u32::from(self.high_percent) * max {
            RiskTier::High
        } else if scaled >= u32::from(self.medium_percent) * max {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Score a complete answer set. The input is never modified.
    pub fn score(&self, answers: &Answers) -> Result<AssessmentResult, AssessmentError> {
        self.validate(answers)?;

        let total_score: u32 = answers.values().map(|&v| u32::from(v)).sum();
        let max_score = self.questionnaire.max_score();
        let percentage = if max_score == 0 {
            0.0
        } else {
            total_score as f32 / max_score as f32 * 100.0
        };

        let self_harm_flagged = answers
            .get(&self.questionnaire.self_harm_item())
            .is_some_and(|&v| v > 0);

        let risk_tier = if self_harm_flagged {
            RiskTier::High
        } else {
            self.tier_for(total_score, max_score)
        };

        info!(
            total_score,
            max_score,
            tier = %risk_tier,
            self_harm_flagged,
            "Assessment scored"
        );

        Ok(AssessmentResult {
            total_score,
            max_score,
            percentage,
            risk_tier,
            self_harm_flagged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: [u8; 5]) -> Answers {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as ItemId + 1, v))
            .collect()
    }

    #[test]
    fn test_high_by_percentage() {
        let scorer = AssessmentScorer::new();

        let result = scorer.score(&answers([3, 3, 2, 2, 0])).unwrap();
        assert_eq!(result.total_score, 10);
        assert_eq!(result.max_score, 15);
        assert_eq!(result.risk_tier, RiskTier::High);
        assert!(!result.self_harm_flagged);
        assert!((result.percentage - 66.666_67).abs() < 0.01);
    }

    #[test]
    fn test_self_harm_override() {
        let scorer = AssessmentScorer::new();

        let result = scorer.score(&answers([0, 0, 0, 0, 1])).unwrap();
        assert_eq!(result.total_score, 1);
        assert_eq!(result.risk_tier, RiskTier::High);
        assert!(result.self_harm_flagged);
        assert!(result.urgent_notice_requested());
    }

    #[test]
    fn test_tier_boundaries() {
        let scorer = AssessmentScorer::new();

        // 9/15 = 60%
        assert_eq!(scorer.score(&answers([3, 3, 3, 0, 0])).unwrap().risk_tier, RiskTier::High);
        // 8/15 = 53.3%
        assert_eq!(scorer.score(&answers([3, 3, 2, 0, 0])).unwrap().risk_tier, RiskTier::Medium);
        // 5/15 = 33.3%
        assert_eq!(scorer.score(&answers([3, 2, 0, 0, 0])).unwrap().risk_tier, RiskTier::Medium);
        // 4/15 = 26.7%
        assert_eq!(scorer.score(&answers([2, 2, 0, 0, 0])).unwrap().risk_tier, RiskTier::Low);
        assert_eq!(scorer.score(&answers([0, 0, 0, 0, 0])).unwrap().risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_incomplete() {
        let scorer = AssessmentScorer::new();
        let mut partial = answers([1, 1, 1, 1, 1]);
        partial.remove(&2);
        partial.remove(&4);

        let err = scorer.score(&partial).unwrap_err();
        assert_eq!(err, AssessmentError::IncompleteAssessment { missing: vec![2, 4] });
    }

    #[test]
    fn test_invalid_and_unknown() {
        let scorer = AssessmentScorer::new();

        let err = scorer.score(&answers([1, 4, 1, 1, 1])).unwrap_err();
        assert_eq!(err, AssessmentError::InvalidAnswer { item: 2, value: 4 });

        let mut extra = answers([1, 1, 1, 1, 1]);
        extra.insert(6, 0);
        assert_eq!(scorer.score(&extra).unwrap_err(), AssessmentError::UnknownItem(6));
    }

    #[test]
    fn test_idempotent() {
        let scorer = AssessmentScorer::new();
        let input = answers([2, 1, 3, 0, 0]);
        let before = input.clone();

        let first = scorer.score(&input).unwrap();
        let second = scorer.score(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.percentage.to_bits(), second.percentage.to_bits());
        assert_eq!(input, before);
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = AssessmentScorer::with_thresholds(80, 90);
        // medium is capped to high: 12/15 = 80%
        assert_eq!(scorer.score(&answers([3, 3, 3, 3, 0])).unwrap().risk_tier, RiskTier::High);
        assert_eq!(scorer.score(&answers([3, 3, 3, 2, 0])).unwrap().risk_tier, RiskTier::Low);
    }
}
