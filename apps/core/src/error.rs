use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors raised while scoring a questionnaire.
    #[error("Assessment error: {0}")]
    Assessment(#[from] crate::assessment::AssessmentError),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents a malformed resource directory file.
    #[error("Resource data error: {0}")]
    ResourceData(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Assessment(e) => AppError::Assessment(e.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::ResourceData(s) => AppError::ResourceData(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ResourceData(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::ResourceData(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentError;

    #[test]
    fn test_assessment_error_converts() {
        let err: AppError = AssessmentError::UnknownItem(9).into();
        assert!(matches!(err, AppError::Assessment(AssessmentError::UnknownItem(9))));
        assert!(err.to_string().contains("Assessment error"));
    }

    #[test]
    fn test_json_error_is_resource_data() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = parse.into();
        assert!(matches!(err, AppError::ResourceData(_)));
    }

    #[test]
    fn test_clone_preserves_variant() {
        let err = AppError::Config("bad".to_string());
        assert_eq!(err.clone().to_string(), "Configuration error: bad");
    }
}
