//! Logging and tracing setup for the CLI.
//!
//! Human-readable events go to stderr, filtered by `RUST_LOG` or the
//! quiet/verbose flags; a JSONL copy goes to a daily-rotated log file when a
//! log location is known.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log files should go, resolved from env and config.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`ATS_LINT_LOG_PATH`), wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`ATS_LINT_LOG_DIR`, else config, else platform default).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log location from environment variables, falling back to
    /// the config-provided directory, then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("ATS_LINT_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("ATS_LINT_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                ats_lint_core::config::user_log_dir().map(|d| d.into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

/// Build the stderr event filter.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each
/// `--verbose` raises one level from the configured base.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match (config_level, verbose) {
            (_, 2..) => "trace",
            ("debug" | "trace", _) | (_, 1) => "debug",
            (other, 0) => other,
        }
    };
    EnvFilter::new(level)
}

/// Initialize logging and tracing.
///
/// Returns the appender guard; hold it for the life of the process so
/// buffered log lines are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path
            .file_name()
            .context("ATS_LINT_LOG_PATH has no file name")?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::never(dir, file_name)));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some(tracing_appender::rolling::daily(dir, "ats-lint.jsonl")));
    }

    Ok(None)
}
