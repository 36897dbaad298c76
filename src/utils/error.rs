use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 伺服器在回應 envelope 中回報的單一錯誤
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Validation,
    Configuration,
}

#[derive(Error, Debug)]
pub enum ConversationsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("API returned errors: {}", join_details(.errors))]
    Api { errors: Vec<ApiErrorDetail> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid request: {message}")]
    Validation { message: String },

    #[error("Too many product ids: {count} requested, at most {max} allowed")]
    TooManyProducts { count: usize, max: usize },
}

fn join_details(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConversationsError {
    pub fn validation(message: impl Into<String>) -> Self {
        ConversationsError::Validation {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConversationsError::Http(_) | ConversationsError::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            ConversationsError::Api { .. } => ErrorCategory::Api,
            ConversationsError::Serialization(_)
            | ConversationsError::Io(_)
            | ConversationsError::Csv(_)
            | ConversationsError::Utf8(_) => ErrorCategory::Data,
            ConversationsError::Validation { .. } | ConversationsError::TooManyProducts { .. } => {
                ErrorCategory::Validation
            }
            ConversationsError::InvalidUrl(_)
            | ConversationsError::Config { .. }
            | ConversationsError::MissingConfig { .. }
            | ConversationsError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    /// API 錯誤代碼，僅在 `Api` 變體時有值
    pub fn api_codes(&self) -> Vec<&str> {
        match self {
            ConversationsError::Api { errors } => errors.iter().map(|e| e.code.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversationsError>;
