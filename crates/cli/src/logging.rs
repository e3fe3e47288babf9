//! Logging setup: a stderr layer plus an optional file layer.
//!
//! The file layer writes through a non-blocking worker. Its buffer is only
//! flushed when the returned [`LogGuard`] is dropped, so every exit after
//! [`init`] goes through [`LogGuard::exit`] or lets the guard fall out of
//! scope.

use mdindex_core::config::LoggingConfig;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Error raised while setting up logging.
#[derive(Debug)]
pub enum LogError {
    /// The configured log file could not be created.
    CreateFile(PathBuf, io::Error),
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::CreateFile(path, e) => {
                write!(f, "failed to create log file {}: {e}", path.display())
            }
        }
    }
}

impl std::error::Error for LogError {}

/// Keeps the file writer alive; dropping it flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

impl LogGuard {
    /// Flush the log file, then terminate with `code`.
    pub fn exit(self, code: i32) -> ! {
        drop(self);
        process::exit(code)
    }
}

pub fn init(cfg: &LoggingConfig) -> Result<LogGuard, LogError> {
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::WARN);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(env_filter(stderr_level));

    let (file_layer, guard) = match &cfg.file {
        Some(path) => {
            let file_level_str = cfg.file_level.as_deref().unwrap_or(&cfg.level);
            let file_level = parse_level(file_level_str).unwrap_or(LevelFilter::DEBUG);

            let file =
                File::create(path).map_err(|e| LogError::CreateFile(path.clone(), e))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
    Ok(LogGuard { _file: guard })
}

/// `RUST_LOG` when set, otherwise `default`.
fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
