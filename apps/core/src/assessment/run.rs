//! Step-by-step questionnaire run.
//!
//! Tracks the current item and the answers given so far, lets the caller
//! move back and forth, and scores the set once every item is answered.

use tracing::{info, warn};

use super::questionnaire::{ItemId, QuestionnaireItem};
use super::scorer::{AssessmentError, AssessmentResult, AssessmentScorer, Answers};
use crate::notice::{CrisisNotice, NoticeSink};

pub struct AssessmentRun {
    scorer: AssessmentScorer,
    current: usize,
    answers: Answers,
    result: Option<AssessmentResult>,
}

impl Default for AssessmentRun {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentRun {
    pub fn new() -> Self {
        Self::with_scorer(AssessmentScorer::new())
    }

    pub fn with_scorer(scorer: AssessmentScorer) -> Self {
        Self {
            scorer,
            current: 0,
            answers: Answers::new(),
            result: None,
        }
    }

    fn items(&self) -> &[QuestionnaireItem] {
        self.scorer.questionnaire().items()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &QuestionnaireItem {
        &self.items()[self.current]
    }

    pub fn current_answer(&self) -> Option<u8> {
        self.answers.get(&self.current_item().id).copied()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Records (or replaces) the answer for the current item.
    pub fn answer(&mut self, value: u8) -> Result<(), AssessmentError> {
        let id = self.current_item().id;
        self.answer_item(id, value)
    }

    /// Records (or replaces) the answer for any item.
    pub fn answer_item(&mut self, id: ItemId, value: u8) -> Result<(), AssessmentError> {
        let item = self
            .scorer
            .questionnaire()
            .item(id)
            .ok_or(AssessmentError::UnknownItem(id))?;
        if !item.accepts(value) {
            return Err(AssessmentError::InvalidAnswer { item: id, value });
        }
        self.answers.insert(id, value);
        Ok(())
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.items().len()
    }

    /// The current item has an answer, so the run may move on.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Moves to the next item. Returns false on the last item or when unanswered.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() || self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves to the previous item. Returns false on the first item.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Position through the questionnaire, in percent.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / self.items().len() as f32 * 100.0
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Scores the answers. A high tier raises the assessment crisis notice on `sink`.
    pub fn complete(&mut self, sink: &dyn NoticeSink) -> Result<AssessmentResult, AssessmentError> {
        let result = match self.scorer.score(&self.answers) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, answered = self.answers.len(), "Assessment completion refused");
                return Err(e);
            }
        };

        if result.urgent_notice_requested() {
            sink.notify(CrisisNotice::for_assessment());
        }

        info!(tier = %result.risk_tier, "Assessment run completed");
        self.result = Some(result.clone());
        Ok(result)
    }
}
