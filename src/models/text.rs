//! Text service models: affirmation generator and DeepL translation

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffirmationResponse {
    pub affirmation: String,
}

/// DeepL `/v2/translate` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: Vec<TranslatedText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatedText {
    pub detected_source_language: Option<String>,
    pub text: String,
}

/// DeepL `/v2/translate` request body
#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest<'a> {
    pub text: Vec<&'a str>,
    pub target_lang: &'a str,
}
