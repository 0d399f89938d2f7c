//! Translation service implementation (DeepL REST API)

use reqwest::Client;
use crate::config::settings::Settings;
use crate::models::{TranslateRequest, TranslateResponse};
use crate::utils::errors::{ApiError, ApiResult, Result};
use crate::utils::logging::log_api_request;

/// Translates text into the configured target language
#[derive(Clone, Debug)]
pub struct TranslationService {
    client: Client,
    settings: Settings,
}

impl TranslationService {
    /// Create a new TranslationService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = super::build_client(&settings, super::BOT_USER_AGENT)?;
        Ok(Self { client, settings })
    }

    /// Target language code sent upstream, e.g. `RU`
    pub fn target_lang(&self) -> &str {
        &self.settings.translation.target_lang
    }

    /// Translate `text`; an empty translation is [`ApiError::NotFound`]
    pub async fn translate(&self, text: &str) -> ApiResult<String> {
        if text.trim().is_empty() {
            return Err(ApiError::InvalidInput("text is empty".to_string()));
        }

        log_api_request("translation", self.target_lang());

        let body = TranslateRequest {
            text: vec![text],
            target_lang: self.target_lang(),
        };

        let response = self
            .client
            .post(&self.settings.apis.translation_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("DeepL-Auth-Key {}", self.settings.keys.deepl),
            )
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from_request)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let translated: TranslateResponse = response.json().await.map_err(ApiError::from_request)?;
        translated
            .translations
            .into_iter()
            .map(|t| t.text)
            .find(|t| !t.trim().is_empty())
            .ok_or(ApiError::NotFound)
    }
}
