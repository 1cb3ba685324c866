//! Test Module
//!
//! Suite tests for the triage core.
//!
//! ## Test Categories
//! - `triage_tests`: Risk classification, theme detection and combined outcomes
//! - `assessment_tests`: Questionnaire scoring, override rule, runs and summaries
//! - `resource_tests`: Directory search and loading from files
//! - `session_tests`: Chat transcript and out-of-band crisis notices
//! - `config_tests`: Environment overrides and validation

pub mod resource_tests;
