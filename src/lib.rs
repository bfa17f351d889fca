//! # upcloud-sdk
//!
//! Core utilities shared by the UpCloud API client layers.
//!
//! ## Key Features
//!
//! - **Logging facade**: `log_debug!` .. `log_panic!` over `tracing`, with debug
//!   output gated by the `UPCLOUD_SDK_DEBUG` environment variable
//! - **Error classification**: answer "not found?", "already exists?" and
//!   "authentication failed?" for both legacy and `application/problem+json`
//!   API errors
//!
//! ## Example
//!
//! ```rust,no_run
//! use upcloud_sdk::{codes, log_info, logging, ApiError, LegacyError};
//!
//! logging::configure().ok();
//!
//! let err = ApiError::from(LegacyError::new(404, codes::SERVER_NOT_FOUND, "Server not found"));
//! if err.is_not_found() {
//!     log_info!("server is already gone: {}", err);
//! }
//! ```

pub mod classify;
pub mod codes;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
pub mod tests;

pub use classify::{
    is_already_exists, is_authentication_failed, is_not_found, ErrorCategory,
};
pub use config::{LogConfig, DEBUG_ENV_VAR};
pub use error::{
    ApiError, ConfigError, InvalidParam, LegacyError, LegacyErrorBody, LoggingError, ProblemError,
};
