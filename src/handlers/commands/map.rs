//! Map command handler

use tracing::debug;
use crate::formatters::format_coordinates;
use crate::handlers::commands::{not_found_reply, text_reply};
use crate::handlers::reply::{ChatReply, Outgoing, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::{ApiError, Result};
use crate::utils::logging::log_api_error;

/// Handle /map <location>: coordinates text followed by a location pin
pub async fn handle_map(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    let lang = request.language.as_str();
    let Some(query) = request.required_args() else {
        return respond(reply, services, request, vec![text_reply(i18n, "commands.map.usage", lang)]).await;
    };

    let place = services
        .geocoding_service
        .search(query)
        .await
        .and_then(|place| place.coordinates().map(|coordinates| (place, coordinates)));

    let messages = match place {
        Ok((place, coordinates)) => vec![
            Outgoing::text(
                format_coordinates(i18n, lang, query, &place.lat, &place.lon),
                ReplyOptions::plain(),
            ),
            Outgoing::Location {
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
            },
        ],
        Err(ApiError::NotFound) => {
            debug!(user_id = request.user_id, query = query, "Location not found");
            vec![not_found_reply(services, i18n, "commands.map.not_found", lang)]
        }
        Err(e) => {
            log_api_error("geocoding", &e.to_string(), Some(query));
            vec![text_reply(i18n, e.user_message_key(), lang)]
        }
    };

    respond(reply, services, request, messages).await
}
