//! Error handling for SemestryBot
//!
//! This module defines the main error types used throughout the application.
//! Upstream lookups return [`ApiError`]; handlers collapse it into a fixed
//! user-facing message and never let it reach the dispatcher.

use thiserror::Error;

/// Main error type for SemestryBot application
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Upstream API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Upstream lookup errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Missing or invalid input: {0}")]
    InvalidInput(String),

    #[error("Nothing found upstream")]
    NotFound,

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

/// Result type alias for SemestryBot operations
pub type Result<T> = std::result::Result<T, BotError>;

/// Result type alias for upstream lookups
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Classify a reqwest failure
    pub fn from_request(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(e.to_string())
        }
    }

    /// Catalogue key of the message shown to the user
    pub fn user_message_key(&self) -> &'static str {
        match self {
            ApiError::NotFound => "errors.not_found",
            ApiError::InvalidInput(_) => "errors.invalid_input",
            ApiError::Transport(_) | ApiError::Status(_) | ApiError::Decode(_) => "errors.connection",
        }
    }
}

impl BotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            BotError::Telegram(_) => true,
            BotError::Api(_) => true,
            BotError::Config(_) => false,
            BotError::Http(_) => true,
            BotError::Serialization(_) => false,
            BotError::Io(_) => true,
            BotError::UrlParse(_) => false,
            BotError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BotError::Config(_) => ErrorSeverity::Critical,
            BotError::Api(ApiError::NotFound) => ErrorSeverity::Info,
            BotError::Api(_) => ErrorSeverity::Warning,
            BotError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
