//! Runtime configuration.
//!
//! Defaults reproduce the stock triage behavior. Every value can be
//! overridden with an `MSAADA_*` environment variable (or a `.env` file).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::assessment::scorer::{DEFAULT_HIGH_PERCENT, DEFAULT_MEDIUM_PERCENT};
use crate::error::AppError;
use crate::models::LanguagePreference;
use crate::triage::classifier::{DEFAULT_HIGH_RISK_MARKER_THRESHOLD, PLACEHOLDER_CONFIDENCE};
use crate::triage::ReplySelection;

const ENV_PREFIX: &str = "MSAADA_";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// Bunyan JSON records
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_consistency"))]
pub struct TriageConfig {
    /// Negative markers needed for a high chat risk tier.
    #[validate(range(min = 1, max = 10))]
    pub high_risk_marker_threshold: usize,
    #[validate(range(min = 0.0, max = 1.0))]
    pub placeholder_confidence: f32,
    #[validate(range(max = 100))]
    pub assessment_high_percent: u8,
    #[validate(range(max = 100))]
    pub assessment_medium_percent: u8,
    pub reply_selection: ReplySelection,
    /// Pause before a reply is shown. Presentation only.
    #[validate(range(max = 10_000))]
    pub reply_delay_ms: u64,
    pub display_language: LanguagePreference,
    /// Replaces the built-in resource directory when set.
    pub resources_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            high_risk_marker_threshold: DEFAULT_HIGH_RISK_MARKER_THRESHOLD,
            placeholder_confidence: PLACEHOLDER_CONFIDENCE,
            assessment_high_percent: DEFAULT_HIGH_PERCENT,
            assessment_medium_percent: DEFAULT_MEDIUM_PERCENT,
            reply_selection: ReplySelection::Canonical,
            reply_delay_ms: 1000,
            display_language: LanguagePreference::Primary,
            resources_path: None,
            log_format: LogFormat::Pretty,
        }
    }
}

fn validate_consistency(config: &TriageConfig) -> Result<(), ValidationError> {
    // NaN passes the range check
    if !config.placeholder_confidence.is_finite() {
        return Err(ValidationError::new("confidence_not_finite"));
    }
    if config.assessment_medium_percent > config.assessment_high_percent {
        return Err(ValidationError::new("medium_above_high"));
    }
    Ok(())
}

impl TriageConfig {
    /// Loads `.env` if present, applies `MSAADA_*` overrides and validates.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_vars()
    }

    /// Applies `MSAADA_*` overrides from the current process environment.
    pub fn from_vars() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(v) = parsed_var("HIGH_RISK_MARKER_THRESHOLD")? {
            config.high_risk_marker_threshold = v;
        }
        if let Some(v) = parsed_var("PLACEHOLDER_CONFIDENCE")? {
            config.placeholder_confidence = v;
        }
        if let Some(v) = parsed_var("ASSESSMENT_HIGH_PERCENT")? {
            config.assessment_high_percent = v;
        }
        if let Some(v) = parsed_var("ASSESSMENT_MEDIUM_PERCENT")? {
            config.assessment_medium_percent = v;
        }
        if let Some(v) = keyword_var("REPLY_SELECTION")? {
            config.reply_selection = v;
        }
        if let Some(v) = parsed_var("REPLY_DELAY_MS")? {
            config.reply_delay_ms = v;
        }
        if let Some(v) = keyword_var("DISPLAY_LANGUAGE")? {
            config.display_language = v;
        }
        if let Some(v) = raw_var("RESOURCES_PATH") {
            config.resources_path = Some(PathBuf::from(v));
        }
        if let Some(v) = keyword_var("LOG_FORMAT")? {
            config.log_format = v;
        }

        config.validate()?;
        Ok(config)
    }
}

fn raw_var(key: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, key))
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed_var<T: FromStr>(key: &str) -> Result<Option<T>, AppError> {
    raw_var(key)
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| AppError::Config(format!("{}{}: cannot parse '{}'", ENV_PREFIX, key, v)))
        })
        .transpose()
}

/// Lowercase keyword values, read through the enum's serde names.
fn keyword_var<T: DeserializeOwned>(key: &str) -> Result<Option<T>, AppError> {
    raw_var(key)
        .map(|v| {
            serde_json::from_value(serde_json::Value::String(v.to_lowercase()))
                .map_err(|_| AppError::Config(format!("{}{}: unknown value '{}'", ENV_PREFIX, key, v)))
        })
        .transpose()
}
