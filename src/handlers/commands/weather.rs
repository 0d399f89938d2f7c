//! Weather command handler

use tracing::{debug, warn};
use crate::formatters::format_weather;
use crate::handlers::commands::{not_found_reply, text_reply};
use crate::handlers::reply::{ChatReply, Outgoing, Photo, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::{ApiError, Result};
use crate::utils::logging::log_api_error;

/// Handle /weather <city>
pub async fn handle_weather(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    let lang = request.language.as_str();
    let Some(city) = request.required_args() else {
        return respond(reply, services, request, vec![text_reply(i18n, "commands.weather.usage", lang)]).await;
    };

    let message = match services.weather_service.current(city, lang).await {
        Ok(weather) => {
            let report = format_weather(i18n, lang, city, &weather);
            let icon = weather
                .condition()
                .and_then(|c| c.icon.as_deref())
                .map(|icon| services.weather_service.icon_url(icon));

            match icon {
                Some(Ok(url)) => Outgoing::photo(Photo::Url(url), report, ReplyOptions::markdown()),
                Some(Err(e)) => {
                    warn!(city = city, error = %e, "Weather icon unavailable");
                    Outgoing::text(report, ReplyOptions::markdown())
                }
                None => Outgoing::text(report, ReplyOptions::markdown()),
            }
        }
        Err(ApiError::NotFound) => {
            debug!(user_id = request.user_id, city = city, "City not found");
            not_found_reply(services, i18n, "commands.weather.not_found", lang)
        }
        Err(e) => {
            log_api_error("weather", &e.to_string(), Some(city));
            text_reply(i18n, e.user_message_key(), lang)
        }
    };

    respond(reply, services, request, vec![message]).await
}
