//! Weather service implementation
//!
//! Looks up current conditions by city name and builds condition icon URLs.

use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;
use crate::config::settings::Settings;
use crate::models::WeatherResponse;
use crate::utils::errors::{ApiError, ApiResult, Result};
use crate::utils::logging::log_api_request;

/// Current weather lookups
#[derive(Clone, Debug)]
pub struct WeatherService {
    client: Client,
    settings: Settings,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = super::build_client(&settings, super::BOT_USER_AGENT)?;
        Ok(Self { client, settings })
    }

    /// Current weather for a city in metric units
    pub async fn current(&self, city: &str, lang: &str) -> ApiResult<WeatherResponse> {
        if city.trim().is_empty() {
            return Err(ApiError::InvalidInput("city is empty".to_string()));
        }

        log_api_request("weather", city);

        let response = self
            .client
            .get(&self.settings.apis.weather_url)
            .query(&[
                ("q", city),
                ("appid", self.settings.keys.weather.as_str()),
                ("lang", lang),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(ApiError::from_request)?;

        match response.status() {
            status if status.is_success() => {
                response.json::<WeatherResponse>().await.map_err(ApiError::from_request)
            }
            StatusCode::NOT_FOUND => {
                debug!(city = city, "City not found upstream");
                Err(ApiError::NotFound)
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// URL of the condition icon, e.g. `.../img/wn/01d@2x.png`
    pub fn icon_url(&self, icon: &str) -> ApiResult<Url> {
        let base = self.settings.apis.weather_icon_url.trim_end_matches('/');
        Url::parse(&format!("{}/{}@2x.png", base, icon))
            .map_err(|e| ApiError::Decode(format!("bad icon url: {}", e)))
    }
}
