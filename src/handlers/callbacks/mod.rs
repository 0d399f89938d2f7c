//! Callback query handlers module
//!
//! This module contains handlers for inline keyboard button callbacks

use std::sync::Arc;
use teloxide::{Bot, types::CallbackQuery, prelude::*};
use tracing::{debug, info, warn};
use crate::handlers::commands::most_wanted;
use crate::handlers::reply::{ChatReply, TelegramReply};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::pagination::{MOST_WANTED, MOST_WANTED_PREFIX};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    info!(user_id = user_id, callback_data = ?query.data, "Callback query received");

    // Clears the loading state on the client whatever happens next
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, callback_id = %query.id, "Failed to answer callback query");
    }

    let Some(data) = query.data.as_deref() else {
        debug!(user_id = user_id, "Callback query without data");
        return Ok(());
    };
    let Some(message) = query.message.as_ref() else {
        debug!(user_id = user_id, "Callback query without a message to edit");
        return Ok(());
    };

    let language = i18n.detect_user_language(query.from.language_code.as_deref());
    let request = CommandRequest::new(MOST_WANTED, data, user_id, &language, data);
    let reply = TelegramReply::editing(bot, message.chat().id, message.id());

    route_callback(&reply, &services, &i18n, &request).await
}

/// Route callback data to the listing it belongs to
pub async fn route_callback(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    if request.text.starts_with(MOST_WANTED_PREFIX) {
        most_wanted::handle_navigation(reply, services, i18n, request).await
    } else {
        warn!(user_id = request.user_id, data = %request.text, "Unknown callback data");
        Ok(())
    }
}
