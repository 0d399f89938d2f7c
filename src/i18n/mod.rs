//! Internationalization module
//!
//! This module holds the message catalogues for the bot's replies,
//! language detection, and message formatting.

pub mod loader;

pub use loader::{I18n, TranslationParams, params};
