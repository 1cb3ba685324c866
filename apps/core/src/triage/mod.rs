//! # Triage Module
//!
//! Keyword-driven analysis of free-text chat messages.
//!
//! ## Components
//! - `lexicon`: Marker phrase sets per category
//! - `classifier`: Sentiment and risk tier classification
//! - `responder`: Theme detection and supportive replies
//! - `outcome`: Output data structure
//! - `analyzer`: Combines classifier and responder for one message

pub mod analyzer;
pub mod classifier;
pub mod lexicon;
pub mod outcome;
pub mod responder;

pub use analyzer::TriageAnalyzer;
pub use classifier::{KeywordRiskClassifier, RiskClassifier};
pub use lexicon::{Lexicon, MarkerSet};
pub use outcome::TriageOutcome;
pub use responder::{ReplySelection, ResponseGenerator, Theme};
