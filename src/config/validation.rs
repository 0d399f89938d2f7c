//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_apis_config(&settings.apis)?;
    validate_keys_config(&settings.keys)?;
    validate_translation_config(&settings.translation)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    if settings.activity.directory.is_empty() {
        return Err(BotError::Config(
            "Activity log directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BotError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate upstream base URLs
fn validate_apis_config(config: &super::ApisConfig) -> Result<()> {
    let urls = [
        ("weather_url", &config.weather_url),
        ("weather_icon_url", &config.weather_icon_url),
        ("movie_search_url", &config.movie_search_url),
        ("movie_site_url", &config.movie_site_url),
        ("movie_details_url", &config.movie_details_url),
        ("poster_url", &config.poster_url),
        ("premieres_url", &config.premieres_url),
        ("geocoding_url", &config.geocoding_url),
        ("translation_url", &config.translation_url),
        ("affirmation_url", &config.affirmation_url),
    ];

    for (name, value) in urls {
        if value.is_empty() {
            return Err(BotError::Config(format!("API URL {} is required", name)));
        }
        url::Url::parse(value)
            .map_err(|e| BotError::Config(format!("Invalid API URL {}: {}", name, e)))?;
    }

    if config.timeout_seconds == Some(0) {
        return Err(BotError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate upstream secrets
fn validate_keys_config(config: &super::KeysConfig) -> Result<()> {
    let keys = [
        ("weather", &config.weather),
        ("kinopoisk_unofficial", &config.kinopoisk_unofficial),
        ("kinopoisk_dev", &config.kinopoisk_dev),
        ("deepl", &config.deepl),
    ];

    for (name, value) in keys {
        if value.trim().is_empty() {
            return Err(BotError::Config(format!("API key {} is required", name)));
        }
    }

    Ok(())
}

fn validate_translation_config(config: &super::TranslationConfig) -> Result<()> {
    if config.target_lang.is_empty() {
        return Err(BotError::Config(
            "Translation target language is required".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(BotError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(BotError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(BotError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_empty() {
        return Err(BotError::Config(
            "Log directory is required".to_string()
        ));
    }

    Ok(())
}
