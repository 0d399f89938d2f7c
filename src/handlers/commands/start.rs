//! Start and help command handler
//!
//! Both commands show the command list together with the persistent reply
//! keyboard.

use teloxide::types::{KeyboardButton, KeyboardMarkup};
use tracing::debug;
use crate::handlers::reply::{ChatReply, Outgoing, ReplyOptions, respond};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle /start and /help
pub async fn handle_start(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    request: &CommandRequest,
) -> Result<()> {
    debug!(user_id = request.user_id, "Showing help");

    let text = i18n.t("commands.help.text", &request.language, None);
    let options = ReplyOptions::plain().with_markup(Some(main_keyboard()));

    respond(reply, services, request, vec![Outgoing::text(text, options)]).await
}

/// Shortcut keyboard shown under the input field
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new("/affirmation"), KeyboardButton::new("/most_wanted")],
        vec![KeyboardButton::new("/help")],
    ])
    .resize_keyboard()
}
