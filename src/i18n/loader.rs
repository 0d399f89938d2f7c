//! Translation loader and i18n management
//!
//! This module provides the message catalogues for every user-visible string,
//! language detection, and `{param}` message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, debug};
use crate::utils::errors::{BotError, Result};
use crate::config::I18nConfig;

const EMBEDDED_CATALOGUES: &[(&str, &str)] = &[
    ("ru", include_str!("../../translations/ru.json")),
    ("en", include_str!("../../translations/en.json")),
];

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

/// Build translation parameters from key/value pairs
pub fn params<const N: usize>(pairs: [(&str, String); N]) -> TranslationParams {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

impl I18n {
    /// Create an I18n instance backed by the catalogues compiled into the binary
    pub fn new(config: &I18nConfig) -> Result<Self> {
        let mut i18n = Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        };

        for (lang_code, content) in EMBEDDED_CATALOGUES {
            if i18n.is_language_supported(lang_code) {
                i18n.insert_catalogue(lang_code, content)?;
            }
        }

        if !i18n.translations.contains_key(&i18n.default_language) {
            return Err(BotError::Config(format!(
                "No catalogue for default language: {}",
                i18n.default_language
            )));
        }

        Ok(i18n)
    }

    /// Override catalogues with `<lang>.json` files found in `dir`
    pub async fn load_translations(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            warn!("Translations directory {} not found, keeping built-in catalogues", dir.display());
            return Ok(());
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = dir.join(format!("{}.json", lang_code));
            if !file_path.exists() {
                debug!("Translation file not found: {}", file_path.display());
                continue;
            }

            let content = fs::read_to_string(&file_path).await?;
            self.insert_catalogue(lang_code, &content)?;
            info!("Loaded translations for language: {}", lang_code);
        }

        Ok(())
    }

    fn insert_catalogue(&mut self, lang_code: &str, content: &str) -> Result<()> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(map) => {
                debug!("Loaded {} top-level translation keys for {}", map.len(), lang_code);
                self.translations.insert(lang_code.to_string(), map);
                Ok(())
            }
            _ => Err(BotError::Config(format!(
                "Invalid translation file format for {}",
                lang_code
            ))),
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let template = self
            .get_translation_value(key, effective_lang)
            .or_else(|| self.get_translation_value(key, &self.default_language));

        match template {
            Some(text) => format_message(text, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language<'a>(&'a self, lang: &'a str) -> &'a str {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang
        } else {
            &self.default_language
        }
    }

    /// Get translation value from nested JSON structure
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<&str> {
        let mut current = self.translations.get(lang)?;
        let mut parts = key.split('.').peekable();

        while let Some(part) = parts.next() {
            let value = current.get(part)?;
            if parts.peek().is_none() {
                return value.as_str();
            }
            current = value.as_object()?;
        }

        None
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Detect user language from Telegram language code
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            // "en-US" -> "en"
            let lang_code = lang.split('-').next().unwrap_or(lang).to_lowercase();
            if self.is_language_supported(&lang_code) && self.translations.contains_key(&lang_code) {
                return lang_code;
            }
        }

        self.default_language.clone()
    }
}

/// Substitute `{name}` placeholders in a single pass
fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if params.contains_key(&after[..close]) => {
                result.push_str(&params[&after[..close]]);
                rest = &after[close + 1..];
            }
            _ => {
                result.push('{');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
