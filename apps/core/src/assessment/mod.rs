//! # Assessment Module
//!
//! Fixed five-item screening questionnaire and its risk scoring.
//!
//! ## Components
//! - `questionnaire`: The static bilingual items
//! - `scorer`: Total, percentage, tier and the self-harm override
//! - `run`: Item-by-item navigation ending in a scored result
//! - `summary`: Bilingual explanation of a result

pub mod questionnaire;
pub mod run;
pub mod scorer;
pub mod summary;

pub use questionnaire::{ItemId, Questionnaire, QuestionnaireItem, SELF_HARM_ITEM};
pub use run::AssessmentRun;
pub use scorer::{AssessmentError, AssessmentResult, AssessmentScorer, Answers};
pub use summary::RiskSummary;
