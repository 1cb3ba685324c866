//! Msaada triage core.
//!
//! Keyword risk classification and supportive replies for chat messages,
//! the five-item screening questionnaire, and the bilingual directory of
//! Kenyan mental health resources.

pub mod assessment;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod notice;
pub mod resources;
pub mod session;
pub mod triage;

#[cfg(test)]
mod tests;

pub use error::AppError;
