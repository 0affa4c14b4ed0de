use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which leg of a backend call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// The request never reached the backend or no response came back.
    Network,
    /// The backend answered with a non-2xx status.
    Backend,
    /// The backend answered 2xx but the body could not be decoded.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network"),
            Self::Backend => write!(f, "backend"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Normalized failure shape for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{operation} failed ({kind}{}): {message}", .status.map(|s| format!(", status {s}")).unwrap_or_default())]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub operation: String,
    pub status: Option<u16>,
    pub message: String,
    pub url: Option<String>,
}

impl ApiError {
    pub fn network(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            operation: operation.to_string(),
            status: None,
            message: reason.to_string(),
            url: url.map(ToString::to_string),
        }
    }

    pub fn backend(operation: &str, url: Option<&str>, status: u16, message: &str) -> Self {
        Self {
            kind: ApiErrorKind::Backend,
            operation: operation.to_string(),
            status: Some(status),
            message: message.to_string(),
            url: url.map(ToString::to_string),
        }
    }

    pub fn decode(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            operation: operation.to_string(),
            status: None,
            message: reason.to_string(),
            url: url.map(ToString::to_string),
        }
    }
}

/// Errors surfaced by the console core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ConsoleError {
    /// Local validation failed before any request was built.
    #[error("invalid {field} '{value}': {constraint}")]
    Validation {
        field: String,
        value: String,
        constraint: String,
    },

    /// The same mutation is already pending.
    #[error("request already in flight: {key}")]
    InFlight { key: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("configuration error at '{path}': {reason}")]
    Configuration { path: String, reason: String },
}

impl ConsoleError {
    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn in_flight(key: &str) -> Self {
        Self::InFlight {
            key: key.to_string(),
        }
    }

    pub fn config_error(path: &str, reason: &str) -> Self {
        Self::Configuration {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Every console failure can be retried by repeating the user action,
    /// except a broken configuration file.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation { .. } | Self::InFlight { .. } => ErrorSeverity::Low,
            Self::Api(error) => match error.kind {
                ApiErrorKind::Network => ErrorSeverity::Medium,
                ApiErrorKind::Backend => match error.status {
                    Some(status) if status >= 500 => ErrorSeverity::High,
                    _ => ErrorSeverity::Medium,
                },
                ApiErrorKind::Decode => ErrorSeverity::High,
            },
            Self::Configuration { .. } => ErrorSeverity::Critical,
        }
    }

    /// Message suitable for an open-with-error dialog.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field, constraint, .. } => {
                format!("{}: {}", field, constraint)
            }
            Self::InFlight { .. } => "This request is already being processed".to_string(),
            Self::Api(error) => match error.kind {
                ApiErrorKind::Network => {
                    format!("Could not reach the server during {}. Check your connection and try again", error.operation)
                }
                ApiErrorKind::Backend => {
                    let mut msg = format!("{} failed", error.operation);
                    if let Some(status) = error.status {
                        msg.push_str(&format!(" (status {})", status));
                    }
                    if !error.message.is_empty() {
                        msg.push_str(&format!(": {}", error.message));
                    }
                    msg
                }
                ApiErrorKind::Decode => {
                    format!("The server sent an unexpected response for {}", error.operation)
                }
            },
            Self::Configuration { path, reason } => {
                format!("Configuration file error at '{}': {}", path, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Result type alias for gateway calls
pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(ToString::to_string);
        if error.is_decode() {
            return ApiError::decode("HTTP request", url.as_deref(), &error.to_string());
        }
        match error.status() {
            Some(status) => ApiError::backend("HTTP request", url.as_deref(), status.as_u16(), &error.to_string()),
            None => ApiError::network("HTTP request", url.as_deref(), &error.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::decode("JSON decoding", None, &format!("{} (line {})", error, error.line()))
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        ConsoleError::Configuration {
            path: "<io>".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(error: toml::de::Error) -> Self {
        ConsoleError::Configuration {
            path: "<toml>".to_string(),
            reason: error.message().to_string(),
        }
    }
}
