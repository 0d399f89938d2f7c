//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from built-in defaults, an optional config file
//! and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub apis: ApisConfig,
    pub keys: KeysConfig,
    pub translation: TranslationConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub activity: ActivityConfig,
    pub assets: AssetsConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Base URLs of the upstream services
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApisConfig {
    pub weather_url: String,
    pub weather_icon_url: String,
    pub movie_search_url: String,
    pub movie_site_url: String,
    pub movie_details_url: String,
    pub poster_url: String,
    pub premieres_url: String,
    pub geocoding_url: String,
    pub translation_url: String,
    pub affirmation_url: String,
    /// No timeout beyond the HTTP client defaults when unset
    pub timeout_seconds: Option<u64>,
}

/// Secrets for the upstream services
#[derive(Clone, Deserialize, Serialize)]
pub struct KeysConfig {
    pub weather: String,
    pub kinopoisk_unofficial: String,
    pub kinopoisk_dev: String,
    pub deepl: String,
}

/// Translation target configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    pub target_lang: String,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_prefix: String,
}

/// Per-user activity log configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActivityConfig {
    pub directory: String,
}

/// Static files sent as fallback replies
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    pub not_found_image: String,
}

impl std::fmt::Debug for KeysConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeysConfig")
            .field("weather", &redact(&self.weather))
            .field("kinopoisk_unofficial", &redact(&self.kinopoisk_unofficial))
            .field("kinopoisk_dev", &redact(&self.kinopoisk_dev))
            .field("deepl", &redact(&self.deepl))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<empty>" } else { "<redacted>" }
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SEMESTRY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("i18n.supported_languages"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            apis: ApisConfig {
                weather_url: "http://api.openweathermap.org/data/2.5/weather".to_string(),
                weather_icon_url: "http://openweathermap.org/img/wn".to_string(),
                movie_search_url: "https://www.kinopoisk.ru/index.php".to_string(),
                movie_site_url: "https://www.kinopoisk.ru".to_string(),
                movie_details_url: "https://api.kinopoisk.dev/v1.4/movie".to_string(),
                poster_url: "https://kinopoiskapiunofficial.tech/images/posters/kp".to_string(),
                premieres_url: "https://kinopoiskapiunofficial.tech/api/v2.2/films/premieres".to_string(),
                geocoding_url: "https://nominatim.openstreetmap.org/search".to_string(),
                translation_url: "https://api-free.deepl.com/v2/translate".to_string(),
                affirmation_url: "https://www.affirmations.dev/".to_string(),
                timeout_seconds: None,
            },
            keys: KeysConfig {
                weather: String::new(),
                kinopoisk_unofficial: String::new(),
                kinopoisk_dev: String::new(),
                deepl: String::new(),
            },
            translation: TranslationConfig {
                target_lang: "RU".to_string(),
            },
            i18n: I18nConfig {
                default_language: "ru".to_string(),
                supported_languages: vec!["ru".to_string(), "en".to_string()],
                translations_dir: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: "logs/bot".to_string(),
                file_prefix: "semestry.log".to_string(),
            },
            activity: ActivityConfig {
                directory: "logs".to_string(),
            },
            assets: AssetsConfig {
                not_found_image: "./assets/img/cat-404-error.jpg".to_string(),
            },
        }
    }
}
