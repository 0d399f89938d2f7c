//! Services module
//!
//! This module contains one client per upstream API plus the per-user
//! activity log.

pub mod activity;
pub mod affirmations;
pub mod geocoding;
pub mod movies;
pub mod translation;
pub mod weather;

// Re-export commonly used services
pub use activity::ActivityLog;
pub use affirmations::AffirmationService;
pub use geocoding::GeocodingService;
pub use movies::MovieService;
pub use translation::TranslationService;
pub use weather::WeatherService;

use std::time::Duration;
use reqwest::Client;
use crate::config::settings::Settings;
use crate::utils::errors::{BotError, Result};

/// User agent for JSON APIs
pub const BOT_USER_AGENT: &str = concat!("SemestryBot/", env!("CARGO_PKG_VERSION"));

/// User agent for endpoints that reject non-browser clients
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Build an HTTP client; no timeout unless one is configured
pub(crate) fn build_client(settings: &Settings, user_agent: &str) -> Result<Client> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(seconds) = settings.apis.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    builder.build().map_err(BotError::Http)
}

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub weather_service: WeatherService,
    pub movie_service: MovieService,
    pub geocoding_service: GeocodingService,
    pub translation_service: TranslationService,
    pub affirmation_service: AffirmationService,
    pub activity_log: ActivityLog,
    pub settings: Settings,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            weather_service: WeatherService::new(settings.clone())?,
            movie_service: MovieService::new(settings.clone())?,
            geocoding_service: GeocodingService::new(settings.clone())?,
            translation_service: TranslationService::new(settings.clone())?,
            affirmation_service: AffirmationService::new(settings.clone())?,
            activity_log: ActivityLog::new(&settings.activity.directory),
            settings,
        })
    }

    /// Local image sent with not-found replies
    pub fn not_found_image(&self) -> &str {
        &self.settings.assets.not_found_image
    }
}
