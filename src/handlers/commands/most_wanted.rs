//! Most wanted movies listing
//!
//! `/most_wanted` sends page 0 as a new message; navigation buttons carry
//! `most_wanted_<page>` and edit that message in place. The listing is
//! fetched again for every page.

use chrono::{Datelike, Local};
use tracing::{debug, warn};
use crate::formatters::format_premieres_page;
use crate::handlers::commands::text_reply;
use crate::handlers::reply::{ChatReply, Outgoing, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::pagination::{MOST_WANTED, NavigationToken, PAGE_SIZE, PageWindow, navigation_keyboard};
use crate::services::ServiceFactory;
use crate::utils::errors::{ApiError, Result};
use crate::utils::helpers::month_name_upper;
use crate::utils::logging::log_api_error;

/// How a page reaches the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    Send,
    Edit,
}

impl ListingMode {
    fn message(self, text: String, options: ReplyOptions) -> Outgoing {
        match self {
            ListingMode::Send => Outgoing::Text { text, options },
            ListingMode::Edit => Outgoing::Edit { text, options },
        }
    }
}

/// Handle /most_wanted
pub async fn handle_most_wanted(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    show_page(reply, services, i18n, request, 0, ListingMode::Send).await
}

/// Handle a `most_wanted_<page>` button press; `request.args` holds the token
pub async fn handle_navigation(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    match NavigationToken::parse(&request.args) {
        Ok(token) if token.kind == MOST_WANTED => {
            show_page(reply, services, i18n, request, token.page, ListingMode::Edit).await
        }
        Ok(token) => {
            warn!(user_id = request.user_id, kind = %token.kind, "Navigation token for another listing");
            no_data(reply, services, i18n, request).await
        }
        Err(e) => {
            warn!(user_id = request.user_id, error = %e, "Rejected navigation token");
            no_data(reply, services, i18n, request).await
        }
    }
}

async fn no_data(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    let message = text_reply(i18n, "commands.most_wanted.no_data", &request.language);
    respond(reply, services, request, vec![message]).await
}

/// Fetch this month's premieres and render one page of them
pub async fn show_page(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
    page: usize,
    mode: ListingMode,
) -> Result<()> {
    let lang = request.language.as_str();
    let now = Local::now();
    let month = month_name_upper(now);

    let message = match services.movie_service.premieres(now.year(), &month).await {
        Ok(items) => {
            let window = PageWindow::new(items.len(), page, PAGE_SIZE);
            debug!(
                user_id = request.user_id,
                page = window.page,
                total_pages = window.total_pages,
                "Rendering premieres page"
            );

            let text = format_premieres_page(
                i18n,
                lang,
                &services.settings.apis.movie_site_url,
                &items,
                &window,
            );
            let keyboard = navigation_keyboard(MOST_WANTED, &window, i18n, lang);
            mode.message(text, ReplyOptions::markdown().with_markup(keyboard))
        }
        Err(e) => {
            log_api_error("premieres", &e.to_string(), Some(month.as_str()));
            let key = match e {
                ApiError::Status(_) => "commands.most_wanted.fetch_failed",
                other => other.user_message_key(),
            };
            mode.message(i18n.t(key, lang, None), ReplyOptions::plain())
        }
    };

    respond(reply, services, request, vec![message]).await
}
