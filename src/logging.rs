//! Logging initialization for penpal.
//!
//! TUI mode: logs to `.penpal/logs/penpal-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered lines when dropped; keep it alive until exit
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// File name for a session's log, stamped in UTC
pub fn log_file_name(now: DateTime<Utc>) -> String {
    format!("penpal-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Level filter: `RUST_LOG` wins, then `--debug`, then the config
fn filter_directive(config: &Config, debug_override: bool) -> String {
    let log_level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    std::env::var("RUST_LOG").unwrap_or(log_level)
}

/// Open the session log under `paths.state/logs`
fn open_log_file(config: &Config) -> Result<(NonBlocking, WorkerGuard, PathBuf)> {
    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_name = log_file_name(Utc::now());
    let path = logs_dir.join(&file_name);
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, &file_name));
    Ok((writer, guard, path))
}

/// Install the global subscriber. While the wizard owns the terminal,
/// events go to a log file; the subcommands log to stderr.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = EnvFilter::new(filter_directive(config, debug_override));

    let (writer, handle) = if is_tui_mode && config.logging.to_file {
        let (writer, guard, path) = open_log_file(config)?;
        (
            BoxMakeWriter::new(writer),
            LoggingHandle {
                _guard: Some(guard),
                log_file_path: Some(path),
            },
        )
    } else {
        (
            BoxMakeWriter::new(std::io::stderr),
            LoggingHandle {
                _guard: None,
                log_file_path: None,
            },
        )
    };
    let ansi = handle.log_file_path.is_none();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(handle)
}
