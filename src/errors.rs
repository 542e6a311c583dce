// src/errors.rs
use serde::Serialize;
use thiserror::Error;

use crate::validator::MAX_TEXT_CHARS;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SentimentError>;

/// What went wrong with a submission, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClassification {
    NoInput,
    TooLong,
    InvalidScript,
    ServerError,
}

impl ErrorClassification {
    pub fn message(&self) -> String {
        match self {
            ErrorClassification::NoInput => "Please provide Khmer input".to_string(),
            ErrorClassification::TooLong => {
                format!("Please keep your text within {} characters", MAX_TEXT_CHARS)
            }
            ErrorClassification::InvalidScript => {
                "Please enter text in Khmer language only".to_string()
            }
            ErrorClassification::ServerError => {
                "There was a problem retrieving the sentiment from the model API. Please try again."
                    .to_string()
            }
        }
    }

    /// Rejections that happen before any network call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorClassification::ServerError)
    }
}

impl std::fmt::Display for ErrorClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// JSON shape of an error as shown to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: ErrorClassification,
    pub message: String,
}

impl From<ErrorClassification> for ErrorBody {
    fn from(kind: ErrorClassification) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let kinds = [
            ErrorClassification::NoInput,
            ErrorClassification::TooLong,
            ErrorClassification::InvalidScript,
            ErrorClassification::ServerError,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_only_server_error_is_not_validation() {
        assert!(ErrorClassification::NoInput.is_validation());
        assert!(ErrorClassification::TooLong.is_validation());
        assert!(ErrorClassification::InvalidScript.is_validation());
        assert!(!ErrorClassification::ServerError.is_validation());
    }

    #[test]
    fn test_error_body_serializes_kind_in_snake_case() {
        let body = ErrorBody::from(ErrorClassification::InvalidScript);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["kind"], "invalid_script");
        assert_eq!(value["message"], "Please enter text in Khmer language only");
    }
}
