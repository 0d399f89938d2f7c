//! Movie command handler
//!
//! Two chained lookups: the search page yields the first hit, then the
//! details API supplies the description. A failed details lookup only
//! replaces the description; it never drops the reply.

use tracing::{debug, warn};
use crate::formatters::format_movie_caption;
use crate::handlers::commands::{not_found_reply, text_reply};
use crate::handlers::reply::{ChatReply, Outgoing, Photo, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::{CommandRequest, SearchHit};
use crate::services::ServiceFactory;
use crate::utils::errors::{ApiError, Result};
use crate::utils::helpers::truncate_text;
use crate::utils::logging::log_api_error;

/// Photo captions are capped at 1024 characters
const MAX_DESCRIPTION_CHARS: usize = 600;

/// Handle /movie <title>
pub async fn handle_movie(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    let lang = request.language.as_str();
    let Some(title) = request.required_args() else {
        return respond(reply, services, request, vec![text_reply(i18n, "commands.movie.usage", lang)]).await;
    };

    let hit = match services.movie_service.search(title).await {
        Ok(hit) => hit,
        Err(ApiError::NotFound) => {
            debug!(user_id = request.user_id, title = title, "Movie not found");
            let message = not_found_reply(services, i18n, "commands.movie.not_found", lang);
            return respond(reply, services, request, vec![message]).await;
        }
        Err(e) => {
            log_api_error("movie_search", &e.to_string(), Some(title));
            let message = text_reply(i18n, e.user_message_key(), lang);
            return respond(reply, services, request, vec![message]).await;
        }
    };

    let description = description_for(services, i18n, lang, &hit).await;
    let link = match services.movie_service.site_link(&hit.href) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(href = %hit.href, error = %e, "Cannot build film link");
            hit.href.clone()
        }
    };
    let caption = format_movie_caption(i18n, lang, &hit, &description, &link);

    let message = match services.movie_service.poster_url(&hit.film_id) {
        Ok(poster) => Outgoing::photo(Photo::Url(poster), caption, ReplyOptions::markdown()),
        Err(e) => {
            warn!(film_id = %hit.film_id, error = %e, "Cannot build poster url");
            Outgoing::text(caption, ReplyOptions::markdown())
        }
    };

    respond(reply, services, request, vec![message]).await
}

async fn description_for(services: &ServiceFactory, i18n: &I18n, lang: &str, hit: &SearchHit) -> String {
    match services.movie_service.details(&hit.film_id).await {
        Ok(details) => details
            .description
            .filter(|d| !d.trim().is_empty())
            .map(|d| truncate_text(d.trim(), MAX_DESCRIPTION_CHARS))
            .unwrap_or_else(|| i18n.t("commands.movie.no_description", lang, None)),
        Err(e) => {
            log_api_error("movie_details", &e.to_string(), Some(hit.film_id.as_str()));
            let key = match e {
                ApiError::Status(_) => "commands.movie.details_failed",
                _ => "errors.connection",
            };
            i18n.t(key, lang, None)
        }
    }
}
