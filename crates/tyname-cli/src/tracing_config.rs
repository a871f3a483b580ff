//! Tracing subscriber for the `tyname` binary.
//!
//! ```bash
//! TYNAME_LOG=trace TYNAME_LOG_FORMAT=tree tyname 'java.util.List<Widget>'
//! TYNAME_LOG="tyname_solver=trace" tyname --mode response 'Widget[]'
//! RUST_LOG=debug TYNAME_LOG_FORMAT=json tyname Widget
//! ```
//!
//! `TYNAME_LOG` (falling back to `RUST_LOG`) holds the filter directives.
//! `TYNAME_LOG_FORMAT` picks `text` (default), `tree` or `json`. Output goes
//! to stderr so names printed on stdout stay machine-readable.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat `fmt` lines.
    Text,
    /// Indented spans via `tracing-tree`.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Where tracing output was requested, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    /// `None` when neither `TYNAME_LOG` nor `RUST_LOG` is set.
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            std::env::var("TYNAME_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var("TYNAME_LOG_FORMAT").ok(),
        )
    }

    pub fn from_values(
        tyname_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = tyname_log.or(rust_log)?;
        Some(Self {
            directives,
            format: format.as_deref().map_or(LogFormat::Text, LogFormat::parse),
        })
    }

    /// Install these settings as the global subscriber.
    pub fn install(&self) -> Result<(), TryInitError> {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);
        match self.format {
            LogFormat::Tree => {
                let layer = tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(layer).try_init()
            }
            LogFormat::Json => {
                let layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(layer).try_init()
            }
            LogFormat::Text => {
                let layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(layer).try_init()
            }
        }
    }
}

/// Install a subscriber when logging was requested through the environment.
pub fn init_tracing() -> Result<(), TryInitError> {
    match TracingSettings::from_env() {
        Some(settings) => settings.install(),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
    }

    #[test]
    fn tyname_log_takes_precedence() {
        let settings = TracingSettings::from_values(
            Some("tyname_solver=trace".to_string()),
            Some("warn".to_string()),
            Some("tree".to_string()),
        )
        .unwrap();
        assert_eq!(settings.directives, "tyname_solver=trace");
        assert_eq!(settings.format, LogFormat::Tree);
    }

    #[test]
    fn rust_log_is_the_fallback() {
        let settings = TracingSettings::from_values(None, Some("debug".to_string()), None).unwrap();
        assert_eq!(settings.directives, "debug");
        assert_eq!(settings.format, LogFormat::Text);
    }

    #[test]
    fn nothing_requested() {
        assert_eq!(
            TracingSettings::from_values(None, None, Some("json".to_string())),
            None
        );
    }
}
