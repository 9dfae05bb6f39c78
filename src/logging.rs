//! Tracing subscriber setup for the binary

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Human readable lines on stderr; stdout stays reserved for the result
    Stderr,
    /// JSON lines appended to a file
    File(&'a Path),
}

/// Build the filter from a default level, letting `RUST_LOG` override it.
pub fn env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    let directive =
        Directive::from_str(level).with_context(|| format!("Invalid log level: {level}"))?;
    EnvFilter::builder()
        .with_default_directive(directive)
        .from_env()
        .context("Invalid RUST_LOG directives")
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the program exits.
pub fn setup_logging(level: &str, target: LogTarget<'_>) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(level)?;

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .without_time()
                        .with_writer(std::io::stderr)
                        .with_filter(filter),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path {}", path.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_filter(filter),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("warn")]
    #[case("debug")]
    #[case("tf_version=trace")]
    fn env_filter_accepts_valid_levels(#[case] level: &str) {
        assert!(env_filter(level).is_ok());
    }

    #[test]
    fn env_filter_rejects_invalid_level() {
        assert!(env_filter("tf_version=loud").is_err());
    }
}
