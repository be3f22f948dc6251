//! Logging initialisation for the `gen` binary
//!
//! Events go to stderr so the file list printed on stdout stays clean.
//! Library code only emits events and never installs a subscriber.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "CPGEN_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `CPGEN_LOG_FORMAT` was not valid UTF-8
    #[error("`CPGEN_LOG_FORMAT` is not valid UTF-8")]
    InvalidUnicode,
    /// `CPGEN_LOG_FORMAT` named an unknown format
    #[error("unknown log format `{0}`; expected `human` or `json`")]
    UnknownFormat(String),
    /// Another global subscriber is already installed
    #[error("a tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Output format for log events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain text lines
    #[default]
    Human,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnknownFormat(other.to_owned())),
        }
    }
}

impl LogFormat {
    /// Format selected by `CPGEN_LOG_FORMAT`, human when unset
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
            Err(env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode),
        }
    }
}

/// Install the global subscriber once
///
/// The level filter comes from `RUST_LOG` and defaults to `info`. When some
/// other subscriber already owns the global slot it is kept, and a one-line
/// notice goes to stderr.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install(LogFormat::from_env()?) {
        Ok(()) => {}
        Err(err @ LoggingError::AlreadyInstalled(_)) => report_existing_subscriber(&err),
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn report_existing_subscriber(err: &LoggingError) {
    eprintln!("keeping existing logging setup: {err}");
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let output = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let output = match format {
        LogFormat::Human => output.boxed(),
        LogFormat::Json => output.json().with_current_span(true).boxed(),
    };

    tracing_subscriber::registry().with(filter).with(output).try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("HUMAN".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!(" json ".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LoggingError::UnknownFormat(provided)) if provided == "xml"
        ));
    }

    #[test]
    fn test_second_install_reports_clash() {
        let _ = install(LogFormat::Human);
        let err = install(LogFormat::Json).unwrap_err();
        assert!(matches!(err, LoggingError::AlreadyInstalled(_)));
        assert!(err.to_string().starts_with("a tracing subscriber is already installed"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init_logging().unwrap();
        init_logging().unwrap();
    }
}
