//! Logger configuration loaded from the environment.
//!
//! The only setting is the debug toggle, read from [`DEBUG_ENV_VAR`].
//!
//! ```rust
//! use upcloud_sdk::config::{parse_bool, LogConfig};
//!
//! assert_eq!(parse_bool("TRUE"), Some(true));
//! assert_eq!(parse_bool("banana"), None);
//! assert!(!LogConfig::default().debug);
//! ```

use crate::error::ConfigError;
use tracing::level_filters::LevelFilter;

/// Environment variable enabling debug output when set to a true value.
pub const DEBUG_ENV_VAR: &str = "UPCLOUD_SDK_DEBUG";

/// Settings applied by [`crate::logging::configure`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Emit `debug` messages.
    pub debug: bool,
}

impl LogConfig {
    /// Load configuration from the environment.
    /// This is the ONLY method that should access environment variables.
    ///
    /// An unparseable [`DEBUG_ENV_VAR`] is reported once on standard error and
    /// treated as unset. The logger is not up yet at this point, so stderr is
    /// the only place the diagnostic can go.
    pub fn from_env() -> Self {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}, debug logging disabled");
                Self::default()
            }
        }
    }

    /// Like [`from_env`](Self::from_env) but returns parse failures to the caller.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(DEBUG_ENV_VAR).ok().as_deref())
    }

    /// Build from the raw value of [`DEBUG_ENV_VAR`] (`None` when unset).
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };
        match parse_bool(value) {
            Some(debug) => Ok(Self { debug }),
            None => Err(ConfigError::InvalidBool {
                var: DEBUG_ENV_VAR.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Most verbose level that will be emitted.
    pub fn level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }
}

/// Parse a boolean flag: `1`/`0`, `t`/`f`, `true`/`false`, any case.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
