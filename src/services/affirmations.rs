//! Affirmation service implementation

use reqwest::Client;
use crate::config::settings::Settings;
use crate::models::AffirmationResponse;
use crate::utils::errors::{ApiError, ApiResult, Result};
use crate::utils::logging::log_api_request;

/// Random affirmation generator
#[derive(Clone, Debug)]
pub struct AffirmationService {
    client: Client,
    settings: Settings,
}

impl AffirmationService {
    /// Create a new AffirmationService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = super::build_client(&settings, super::BOT_USER_AGENT)?;
        Ok(Self { client, settings })
    }

    pub async fn random(&self) -> ApiResult<String> {
        log_api_request("affirmation", &self.settings.apis.affirmation_url);

        let response = self
            .client
            .get(&self.settings.apis.affirmation_url)
            .send()
            .await
            .map_err(ApiError::from_request)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body: AffirmationResponse = response.json().await.map_err(ApiError::from_request)?;
        if body.affirmation.trim().is_empty() {
            return Err(ApiError::Decode("empty affirmation".to_string()));
        }

        Ok(body.affirmation)
    }
}
