//! Semantic classification of UpCloud API errors.
//!
//! The API signals the same condition differently depending on response
//! format: a duplicate resource is a `409` with one of several legacy codes,
//! or a `400` problem whose type fragment is `ERROR_RESOURCE_ALREADY_EXISTS`.
//! The predicates here hide that so callers can branch on meaning.
//!
//! # Example
//!
//! ```rust
//! use upcloud_sdk::{classify, ApiError, ProblemError};
//!
//! let err = ApiError::from(ProblemError::new(
//!     400,
//!     "https://developers.upcloud.com/1.3/errors#ERROR_RESOURCE_ALREADY_EXISTS",
//!     "Resource already exists",
//! ));
//! assert!(classify::is_already_exists(Some(&err)));
//! assert!(!classify::is_not_found(None));
//! ```

use crate::codes::{ALREADY_EXISTS_CODES, ALREADY_EXISTS_PROBLEM_TYPES};
use crate::error::ApiError;

/// Semantic category of a remote error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The referenced resource does not exist.
    NotFound,
    /// Duplicate create or conflicting resource.
    AlreadyExists,
    /// Credentials missing, invalid or expired.
    AuthenticationFailed,
    /// Anything else.
    Other,
}

/// `true` if `err` is an API error with status 404.
pub fn is_not_found(err: Option<&ApiError>) -> bool {
    err.is_some_and(|err| err.status() == 404)
}

/// `true` if `err` reports a duplicate resource.
pub fn is_already_exists(err: Option<&ApiError>) -> bool {
    match err {
        Some(ApiError::Legacy(err)) => {
            err.status == 409 && ALREADY_EXISTS_CODES.contains(&err.error_code.as_str())
        }
        Some(ApiError::Problem(err)) => {
            err.status == 400 && ALREADY_EXISTS_PROBLEM_TYPES.contains(&err.fragment())
        }
        None => false,
    }
}

/// `true` if `err` is an API error with status 401.
pub fn is_authentication_failed(err: Option<&ApiError>) -> bool {
    err.is_some_and(|err| err.status() == 401)
}

/// Map `err` to its [`ErrorCategory`].
pub fn classify(err: Option<&ApiError>) -> ErrorCategory {
    if is_not_found(err) {
        ErrorCategory::NotFound
    } else if is_already_exists(err) {
        ErrorCategory::AlreadyExists
    } else if is_authentication_failed(err) {
        ErrorCategory::AuthenticationFailed
    } else {
        ErrorCategory::Other
    }
}

/// Fragment of a problem type URI: everything after the first `#`.
///
/// Returns `""` when there is no `#`. Since no known category is empty, an
/// absent fragment never matches.
pub fn fragment(type_uri: &str) -> &str {
    type_uri
        .split_once('#')
        .map_or("", |(_, fragment)| fragment)
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        is_not_found(Some(self))
    }

    pub fn is_already_exists(&self) -> bool {
        is_already_exists(Some(self))
    }

    pub fn is_authentication_failed(&self) -> bool {
        is_authentication_failed(Some(self))
    }

    pub fn category(&self) -> ErrorCategory {
        classify(Some(self))
    }
}
