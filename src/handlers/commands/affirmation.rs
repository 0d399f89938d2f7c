//! Affirmation command handler

use crate::formatters::format_affirmation;
use crate::handlers::commands::translate::translate_or_fallback;
use crate::handlers::reply::{ChatReply, Outgoing, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging::log_api_error;

/// Handle /affirmation
///
/// A fetched affirmation is shown with its translation; when the fetch
/// fails the default affirmation is shown untranslated.
pub async fn handle_affirmation(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    let lang = request.language.as_str();

    let text = match services.affirmation_service.random().await {
        Ok(affirmation) => {
            let translation = translate_or_fallback(services, i18n, lang, &affirmation).await;
            format_affirmation(i18n, lang, &affirmation, &translation)
        }
        Err(e) => {
            log_api_error("affirmations", &e.to_string(), None);
            i18n.t("commands.affirmation.default", lang, None)
        }
    };

    respond(reply, services, request, vec![Outgoing::text(text, ReplyOptions::plain())]).await
}
