//! Translate command handler

use crate::formatters::format_translation;
use crate::handlers::commands::text_reply;
use crate::handlers::reply::{ChatReply, Outgoing, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::{ApiError, Result};
use crate::utils::logging::log_api_error;

/// Handle /translate <text>: echo the source next to its translation
pub async fn handle_translate(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    let lang = request.language.as_str();
    let Some(source) = request.required_args() else {
        return respond(reply, services, request, vec![text_reply(i18n, "commands.translate.usage", lang)]).await;
    };

    let translation = translate_or_fallback(services, i18n, lang, source).await;
    let text = format_translation(i18n, lang, source, &translation);

    respond(reply, services, request, vec![Outgoing::text(text, ReplyOptions::plain())]).await
}

/// Translated text, or a fixed message in its place when translation fails
pub(crate) async fn translate_or_fallback(
    services: &ServiceFactory,
    i18n: &I18n,
    lang: &str,
    text: &str,
) -> String {
    match services.translation_service.translate(text).await {
        Ok(translated) => translated,
        Err(ApiError::NotFound) => i18n.t("commands.translate.empty", lang, None),
        Err(e) => {
            log_api_error("translation", &e.to_string(), None);
            i18n.t("commands.translate.failed", lang, None)
        }
    }
}
