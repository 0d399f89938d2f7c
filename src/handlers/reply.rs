//! Reply capability handed to every handler
//!
//! Handlers describe what to send as [`Outgoing`] values and deliver them
//! through a [`ChatReply`]. [`TelegramReply`] is the production implementation.

use std::path::PathBuf;
use async_trait::async_trait;
use teloxide::{
    Bot,
    prelude::*,
    types::{ChatId, InputFile, MessageId, ParseMode, ReplyMarkup},
};
use tracing::{debug, warn};
use url::Url;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Photo source
#[derive(Debug, Clone, PartialEq)]
pub enum Photo {
    Url(Url),
    /// Local file, e.g. the not-found picture
    Asset(PathBuf),
}

impl Photo {
    fn into_input_file(self) -> InputFile {
        match self {
            Photo::Url(url) => InputFile::url(url),
            Photo::Asset(path) => InputFile::file(path),
        }
    }
}

/// Formatting of an outgoing message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyOptions {
    pub markdown: bool,
    pub markup: Option<ReplyMarkup>,
}

impl ReplyOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn markdown() -> Self {
        Self {
            markdown: true,
            markup: None,
        }
    }

    pub fn with_markup(mut self, markup: Option<impl Into<ReplyMarkup>>) -> Self {
        self.markup = markup.map(Into::into);
        self
    }
}

/// Send/edit capability of one conversation
#[async_trait]
pub trait ChatReply: Send + Sync {
    async fn send_text(&self, text: &str, options: ReplyOptions) -> Result<()>;

    async fn send_photo(&self, photo: Photo, caption: &str, options: ReplyOptions) -> Result<()>;

    async fn send_location(&self, latitude: f64, longitude: f64) -> Result<()>;

    /// Replace the text of the message that triggered the interaction
    async fn edit_text(&self, text: &str, options: ReplyOptions) -> Result<()>;
}

/// One message to deliver
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    Text { text: String, options: ReplyOptions },
    Photo { photo: Photo, caption: String, options: ReplyOptions },
    Location { latitude: f64, longitude: f64 },
    Edit { text: String, options: ReplyOptions },
}

impl Outgoing {
    pub fn text(text: String, options: ReplyOptions) -> Self {
        Outgoing::Text { text, options }
    }

    pub fn photo(photo: Photo, caption: String, options: ReplyOptions) -> Self {
        Outgoing::Photo { photo, caption, options }
    }

    /// Text shown to the user, if any
    pub fn visible_text(&self) -> Option<&str> {
        match self {
            Outgoing::Text { text, .. } | Outgoing::Edit { text, .. } => Some(text.as_str()),
            Outgoing::Photo { caption, .. } => Some(caption.as_str()),
            Outgoing::Location { .. } => None,
        }
    }

    pub async fn deliver(self, reply: &dyn ChatReply) -> Result<()> {
        match self {
            Outgoing::Text { text, options } => reply.send_text(&text, options).await,
            Outgoing::Photo { photo, caption, options } => reply.send_photo(photo, &caption, options).await,
            Outgoing::Location { latitude, longitude } => reply.send_location(latitude, longitude).await,
            Outgoing::Edit { text, options } => reply.edit_text(&text, options).await,
        }
    }
}

/// Deliver `outgoing` in order, then record the exchange whatever the outcome
pub async fn respond(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    request: &CommandRequest,
    outgoing: Vec<Outgoing>,
) -> Result<()> {
    let output = outgoing
        .iter()
        .find_map(Outgoing::visible_text)
        .unwrap_or_default()
        .to_string();

    let mut delivered = Ok(());
    for message in outgoing {
        if let Err(e) = message.deliver(reply).await {
            delivered = Err(e);
            break;
        }
    }

    if let Err(e) = services
        .activity_log
        .record(request.user_id, &request.text, &output)
        .await
    {
        warn!(user_id = request.user_id, error = %e, "Failed to write activity log");
    }

    delivered
}

/// [`ChatReply`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramReply {
    bot: Bot,
    chat_id: ChatId,
    message_id: Option<MessageId>,
}

impl TelegramReply {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self {
            bot,
            chat_id,
            message_id: None,
        }
    }

    /// Reply capability whose edits target `message_id`
    pub fn editing(bot: Bot, chat_id: ChatId, message_id: MessageId) -> Self {
        Self {
            bot,
            chat_id,
            message_id: Some(message_id),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }
}

#[async_trait]
impl ChatReply for TelegramReply {
    async fn send_text(&self, text: &str, options: ReplyOptions) -> Result<()> {
        let mut request = self.bot.send_message(self.chat_id, text);
        if options.markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }
        if let Some(markup) = options.markup {
            request = request.reply_markup(markup);
        }

        request.await?;
        Ok(())
    }

    async fn send_photo(&self, photo: Photo, caption: &str, options: ReplyOptions) -> Result<()> {
        let mut request = self
            .bot
            .send_photo(self.chat_id, photo.into_input_file())
            .caption(caption);
        if options.markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }
        if let Some(markup) = options.markup {
            request = request.reply_markup(markup);
        }

        request.await?;
        Ok(())
    }

    async fn send_location(&self, latitude: f64, longitude: f64) -> Result<()> {
        self.bot.send_location(self.chat_id, latitude, longitude).await?;
        Ok(())
    }

    async fn edit_text(&self, text: &str, options: ReplyOptions) -> Result<()> {
        let Some(message_id) = self.message_id else {
            debug!(chat_id = ?self.chat_id, "No message to edit, sending a new one");
            return self.send_text(text, options).await;
        };

        let mut request = self.bot.edit_message_text(self.chat_id, message_id, text);
        if options.markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }
        if let Some(ReplyMarkup::InlineKeyboard(keyboard)) = options.markup {
            request = request.reply_markup(keyboard);
        }

        request.await?;
        Ok(())
    }
}
