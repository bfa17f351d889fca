//! Error types for the UpCloud SDK core.
//!
//! Two families live here:
//!
//! - **Remote errors** returned by the UpCloud API: [`LegacyError`] for the
//!   older `{"error": {...}}` responses and [`ProblemError`] for
//!   `application/problem+json` responses, joined by the [`ApiError`] sum type.
//!   These are produced by the transport layer and only inspected here (see
//!   [`crate::classify`]).
//! - **Local errors** raised by this crate itself: [`LoggingError`] and
//!   [`ConfigError`].
//!
//! # Example
//!
//! ```rust
//! use upcloud_sdk::{ApiError, LegacyError, codes};
//!
//! let err = ApiError::from(LegacyError::new(409, codes::DB_EXISTS, "Database already exists"));
//! assert!(err.is_already_exists());
//! assert_eq!(err.to_string(), "API error 409 DB_EXISTS: Database already exists");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Remote error shapes
// ============================================================================

/// Error returned by older API endpoints.
///
/// The HTTP status comes from the response line, the code and message from
/// the JSON envelope (see [`LegacyErrorBody`]).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("API error {status} {error_code}: {error_message}")]
pub struct LegacyError {
    /// HTTP status code of the response.
    #[serde(default)]
    pub status: u16,
    /// Symbolic error code, e.g. `DB_EXISTS`.
    pub error_code: String,
    /// Human readable description supplied by the API.
    #[serde(default)]
    pub error_message: String,
}

impl LegacyError {
    pub fn new(status: u16, error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            status,
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }
}

/// Wire envelope of a legacy error response: `{"error": {"error_code": ..., "error_message": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyErrorBody {
    pub error: LegacyError,
}

impl LegacyErrorBody {
    /// Attach the HTTP status, which the envelope does not carry.
    pub fn into_error(self, status: u16) -> LegacyError {
        LegacyError {
            status,
            ..self.error
        }
    }
}

/// A single entry of a problem's `invalid_params` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidParam {
    pub name: String,
    pub reason: String,
}

/// Error returned as `application/problem+json` (RFC 7807).
///
/// Only `status` and `type` matter for classification; the remaining fields
/// are kept for display.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("API problem {status}: {title}")]
pub struct ProblemError {
    /// Problem type URI, typically `<base>#<FRAGMENT>`. Empty when absent.
    #[serde(rename = "type", default)]
    pub problem_type: String,
    #[serde(default)]
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invalid_params: Vec<InvalidParam>,
}

impl ProblemError {
    pub fn new(status: u16, problem_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            problem_type: problem_type.into(),
            title: title.into(),
            status,
            correlation_id: None,
            invalid_params: Vec::new(),
        }
    }

    /// Semantic category carried by the type URI fragment, or `""`.
    pub fn fragment(&self) -> &str {
        crate::classify::fragment(&self.problem_type)
    }
}

/// Any structured error returned by the UpCloud API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Legacy(#[from] LegacyError),

    #[error(transparent)]
    Problem(#[from] ProblemError),
}

impl ApiError {
    /// HTTP status code, whichever shape this is.
    pub fn status(&self) -> u16 {
        match self {
            Self::Legacy(err) => err.status,
            Self::Problem(err) => err.status,
        }
    }

    /// Symbolic error code; only legacy errors have one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Legacy(err) => Some(err.error_code.as_str()),
            Self::Problem(_) => None,
        }
    }

    /// Problem type URI; only problem errors have one.
    pub fn problem_type(&self) -> Option<&str> {
        match self {
            Self::Legacy(_) => None,
            Self::Problem(err) => Some(err.problem_type.as_str()),
        }
    }
}

// ============================================================================
// Local errors
// ============================================================================

/// Failures of the logging facade setup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingError {
    /// `configure` ran after the logger was already set up, either by an
    /// earlier `configure` or by the first log call installing defaults.
    #[error("logger is already configured")]
    AlreadyConfigured,

    /// A global `tracing` subscriber was installed by someone else. Events
    /// still go to that subscriber.
    #[error("a global tracing subscriber is already installed")]
    SubscriberInstalled,
}

/// Failures reading configuration from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid boolean value {value:?}")]
    InvalidBool { var: String, value: String },
}
