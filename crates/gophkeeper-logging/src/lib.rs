//! Centralized `tracing` initialization shared by `gophkeeper-server` and
//! `gophkeeper-cli`.
//!
//! Ambient stack, not named by `spec.md` §1 ("logging" is listed as an
//! external collaborator) but carried regardless per the teacher's own
//! practice: every binary calls [`init`] once at startup and then uses
//! `tracing::{info,warn,error,debug}!` directly — there are no custom log
//! macros here.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing::Level;

/// Output format for log messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable plaintext format.
    #[default]
    Plaintext,
    /// Structured JSON format.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Plaintext => write!(f, "plaintext"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI-facing log level, convertible into [`tracing::Level`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliLogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

/// Initializes the global `tracing` subscriber for `component`, writing to
/// stdout. `RUST_LOG` overrides `default_level` when set.
///
/// Safe to call once per process; a second call returns an error rather
/// than panicking, since both `gophkeeper-server` and `gophkeeper-cli` may
/// share this crate inside the same test binary.
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},{component}={default_level}")));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer().json();
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
        LogFormat::Plaintext => {
            let layer = tracing_subscriber::fmt::layer();
            tracing_subscriber::registry().with(filter).with(layer).try_init()?;
        }
    }

    Ok(())
}

/// [`init`] with [`LogFormat::Plaintext`].
pub fn init_plaintext(component: &str, default_level: Level) -> anyhow::Result<()> {
    init(component, default_level, LogFormat::Plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_log_level_converts_to_tracing_level() {
        assert_eq!(Level::from(CliLogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(CliLogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(CliLogLevel::default()), Level::INFO);
    }

    #[test]
    fn log_format_displays_lowercase() {
        assert_eq!(LogFormat::Plaintext.to_string(), "plaintext");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }
}
