//! Geocoding service implementation
//!
//! Resolves free-text places to coordinates.

use reqwest::Client;
use crate::config::settings::Settings;
use crate::models::GeocodePlace;
use crate::utils::errors::{ApiError, ApiResult, Result};
use crate::utils::logging::log_api_request;

/// Free-text place search
#[derive(Clone, Debug)]
pub struct GeocodingService {
    client: Client,
    settings: Settings,
}

impl GeocodingService {
    /// Create a new GeocodingService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = super::build_client(&settings, super::BROWSER_USER_AGENT)?;
        Ok(Self { client, settings })
    }

    /// Best match for `query`, [`ApiError::NotFound`] on an empty result set
    pub async fn search(&self, query: &str) -> ApiResult<GeocodePlace> {
        if query.trim().is_empty() {
            return Err(ApiError::InvalidInput("location is empty".to_string()));
        }

        log_api_request("geocoding", query);

        let response = self
            .client
            .get(&self.settings.apis.geocoding_url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await
            .map_err(ApiError::from_request)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let places: Vec<GeocodePlace> = response.json().await.map_err(ApiError::from_request)?;
        places.into_iter().next().ok_or(ApiError::NotFound)
    }
}
