//! Logging facade for the UpCloud SDK.
//!
//! A thin layer over `tracing` with five severities. Call [`configure`] once
//! at startup; it reads [`DEBUG_ENV_VAR`](crate::config::DEBUG_ENV_VAR) and
//! installs a plain-text subscriber on standard output:
//!
//! ```text
//!  INFO creating server hostname=web-1
//! DEBUG request body {"server": ...}
//! ```
//!
//! No timestamps, no ANSI colors, full level names. `debug` output only
//! appears when `UPCLOUD_SDK_DEBUG` is true.
//!
//! Use the `log_*` macros, which take `format!` arguments:
//!
//! ```rust,no_run
//! use upcloud_sdk::{log_debug, log_info, logging};
//!
//! logging::configure().ok();
//! log_info!("creating server {}", "web-1");
//! log_debug!("payload size {} bytes", 512);
//! ```
//!
//! If nothing calls [`configure`], the first log call installs the default
//! setup (info level, stdout, plain text). `configure` is one-shot: once the
//! logger is set up, later calls return [`LoggingError::AlreadyConfigured`]
//! and change nothing.

use std::fmt;
use std::io::Write;

use once_cell::sync::OnceCell;
use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::field::{MakeVisitor, VisitFmt, VisitOutput};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogConfig;
use crate::error::LoggingError;

/// Exit status of a process terminated by [`panic`].
pub const PANIC_EXIT_CODE: i32 = 2;

static CONFIG: OnceCell<LogConfig> = OnceCell::new();

/// Set up the process-wide logger from the environment.
///
/// Returns the applied configuration. Fails with
/// [`LoggingError::AlreadyConfigured`] if the logger was already set up, or
/// [`LoggingError::SubscriberInstalled`] if the host installed its own global
/// `tracing` subscriber first (messages then go to that subscriber).
pub fn configure() -> Result<LogConfig, LoggingError> {
    let mut installed = None;
    let config = *CONFIG.get_or_init(|| {
        let config = LogConfig::from_env();
        installed = Some(install(config));
        config
    });

    match installed {
        Some(Ok(())) => Ok(config),
        Some(Err(err)) => Err(err),
        None => Err(LoggingError::AlreadyConfigured),
    }
}

/// Configuration in effect, if the logger has been set up.
///
/// When [`configure`] returned [`LoggingError::SubscriberInstalled`] this is
/// still the configuration read from the environment, but the host's
/// subscriber decides what is emitted.
pub fn current() -> Option<LogConfig> {
    CONFIG.get().copied()
}

/// Build the SDK's plain-text subscriber writing to `writer`.
///
/// [`configure`] installs this with standard output; hosts can use it to
/// route the same format elsewhere.
pub fn subscriber<W>(config: LogConfig, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(config.level())
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .fmt_fields(PlainFields)
        .finish()
}

/// Field formatter writing `name=value` with string values unquoted.
struct PlainFields;

impl<'a> MakeVisitor<Writer<'a>> for PlainFields {
    type Visitor = PlainVisitor<'a>;

    fn make_visitor(&self, target: Writer<'a>) -> Self::Visitor {
        PlainVisitor {
            writer: target,
            is_empty: true,
            result: Ok(()),
        }
    }
}

struct PlainVisitor<'a> {
    writer: Writer<'a>,
    is_empty: bool,
    result: fmt::Result,
}

impl PlainVisitor<'_> {
    fn write_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if self.result.is_err() {
            return;
        }
        let separator = if self.is_empty { "" } else { " " };
        self.result = if field.name() == "message" {
            write!(self.writer, "{separator}{value}")
        } else {
            write!(self.writer, "{separator}{}={value}", field.name())
        };
        self.is_empty = false;
    }
}

impl Visit for PlainVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.write_field(field, format_args!("{value}"));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.write_field(field, format_args!("{value:?}"));
    }
}

impl VisitOutput<fmt::Result> for PlainVisitor<'_> {
    fn finish(self) -> fmt::Result {
        self.result
    }
}

impl VisitFmt for PlainVisitor<'_> {
    fn writer(&mut self) -> &mut dyn fmt::Write {
        &mut self.writer
    }
}

fn install(config: LogConfig) -> Result<(), LoggingError> {
    tracing::subscriber::set_global_default(subscriber(config, std::io::stdout))
        .map_err(|_| LoggingError::SubscriberInstalled)
}

fn ensure_configured() {
    CONFIG.get_or_init(|| {
        let config = LogConfig::default();
        // A host subscriber already in place keeps receiving our events.
        let _ = install(config);
        config
    });
}

/// Log a debug message; dropped unless debug is enabled.
pub fn debug(args: fmt::Arguments<'_>) {
    ensure_configured();
    tracing::debug!("{}", args);
}

/// Log an informational message.
pub fn info(args: fmt::Arguments<'_>) {
    ensure_configured();
    tracing::info!("{}", args);
}

/// Log a warning.
pub fn warn(args: fmt::Arguments<'_>) {
    ensure_configured();
    tracing::warn!("{}", args);
}

/// Log an error.
pub fn error(args: fmt::Arguments<'_>) {
    ensure_configured();
    tracing::error!("{}", args);
}

/// Log an unrecoverable condition and terminate the process.
///
/// The message goes to the log sink at error level tagged `fatal=true`, and a
/// copy goes to standard error. The process then exits with
/// [`PANIC_EXIT_CODE`] from whichever thread called this.
pub fn panic(args: fmt::Arguments<'_>) -> ! {
    ensure_configured();
    let message = args.to_string();
    tracing::error!(fatal = true, "{}", message);
    let _ = std::io::stdout().flush();
    eprintln!("panic: {message}");
    std::process::exit(PANIC_EXIT_CODE)
}

/// Log a debug message; dropped unless `UPCLOUD_SDK_DEBUG` is true.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::logging::debug(::std::format_args!($($arg)+))
    };
}

/// Log an informational message, always emitted.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::logging::info(::std::format_args!($($arg)+))
    };
}

/// Log a warning, always emitted.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::logging::warn(::std::format_args!($($arg)+))
    };
}

/// Log an error, always emitted.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::logging::error(::std::format_args!($($arg)+))
    };
}

/// Log a fatal message and exit the process. See [`logging::panic`](crate::logging::panic).
#[macro_export]
macro_rules! log_panic {
    ($($arg:tt)+) => {
        $crate::logging::panic(::std::format_args!($($arg)+))
    };
}
