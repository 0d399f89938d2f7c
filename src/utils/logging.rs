//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the SemestryBot application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{BotError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.level))
        .map_err(|e| BotError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| BotError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an incoming command with structured data
pub fn log_command(user_id: i64, command: &str, args: &str) {
    info!(
        user_id = user_id,
        command = command,
        args = args,
        "Command received"
    );
}

/// Log upstream API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    warn!(
        api = api,
        error = error,
        context = context,
        "Upstream API error"
    );
}

/// Log an outbound upstream request
pub fn log_api_request(api: &str, target: &str) {
    debug!(api = api, target = target, "Upstream request");
}
