//! Logging system initialization
//!
//! Sets up the tracing subscriber according to the loaded configuration:
//! console or file output, optional daily rotation, plain or JSON format.

use tracing_appender::rolling;

use crate::config::{Config, LoggingConfig};

fn file_writer(cfg: &LoggingConfig, log_file: &str) -> Box<dyn std::io::Write + Send + Sync> {
    if cfg.enable_rotation {
        let path = std::path::Path::new(log_file);
        let dir = path.parent().unwrap_or(std::path::Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("pixeltrack.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(cfg.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        return Box::new(appender);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .expect("Failed to open log file");
    Box::new(file)
}

/// Initialize the logging system. Call once during startup, after the
/// configuration has been loaded.
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so non-blocking log writes are flushed on shutdown.
///
/// # Panics
/// * If creating the log appender fails
/// * If the global subscriber is already set
pub fn init_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    let log_to_file = config
        .logging
        .file
        .as_ref()
        .is_some_and(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = if log_to_file {
        file_writer(&config.logging, config.logging.file.as_deref().unwrap_or(""))
    } else {
        Box::new(std::io::stdout())
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!log_to_file);

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
