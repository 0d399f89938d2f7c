//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from built-in defaults, TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{
    Settings, BotConfig, ApisConfig, KeysConfig, TranslationConfig, I18nConfig,
    LoggingConfig, ActivityConfig, AssetsConfig,
};
