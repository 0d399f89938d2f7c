//! SemestryBot Telegram Bot
//!
//! A Telegram bot that answers commands from a handful of public HTTP APIs:
//! current weather, movie lookup, this month's premieres, geocoding,
//! translation and random affirmations. Every exchange is appended to a
//! per-user activity log.

#![allow(non_snake_case)]

pub mod config;
pub mod formatters;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod pagination;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, BotError, Result};

// Re-export main components for easy access
pub use handlers::{ChatReply, Command};
pub use i18n::I18n;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
