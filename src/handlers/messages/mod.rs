//! Message handlers module
//!
//! Handles plain text. Slash commands that did not parse as a known
//! command are left unanswered.

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::commands::text_reply;
use crate::handlers::reply::{ChatReply, TelegramReply, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle incoming text messages
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };
    if is_command(text) {
        debug!(chat_id = ?msg.chat.id, "Ignoring unknown command");
        return Ok(());
    }
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = ?msg.chat.id, "Ignoring message without sender");
        return Ok(());
    };

    let language = i18n.detect_user_language(user.language_code.as_deref());
    let request = CommandRequest::new("", "", user.id.0 as i64, &language, text);
    let reply = TelegramReply::new(bot, msg.chat.id);

    handle_unknown(&reply, &services, &i18n, &request).await
}

fn is_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

/// Reply to free text with the unknown-command hint
pub async fn handle_unknown(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    debug!(user_id = request.user_id, "Unrecognized input");
    let message = text_reply(i18n, "errors.unknown_command", &request.language);
    respond(reply, services, request, vec![message]).await
}
