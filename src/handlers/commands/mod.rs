//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /weather, etc.

pub mod start;
pub mod weather;
pub mod movie;
pub mod map;
pub mod translate;
pub mod affirmation;
pub mod most_wanted;

use std::path::PathBuf;
use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::handlers::reply::{ChatReply, Outgoing, Photo, ReplyOptions, TelegramReply};
use crate::i18n::I18n;
use crate::models::CommandRequest;
use crate::services::ServiceFactory;
use crate::utils::errors::{BotError, Result};
use crate::utils::logging::log_command;

/// All available bot commands
///
/// Every variant takes the rest of the line so that unexpected arguments
/// never turn a known command into an unknown one.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Приветствие и список команд")]
    Start(String),
    #[command(description = "Список команд")]
    Help(String),
    #[command(description = "Прогноз погоды: /weather <город>")]
    Weather(String),
    #[command(description = "Подробнее о фильме: /movie <название>")]
    Movie(String),
    #[command(description = "Координаты локации + карта: /map <локация>")]
    Map(String),
    #[command(description = "Перевод текста на русский: /translate <текст>")]
    Translate(String),
    #[command(description = "Случайная аффирмация")]
    Affirmation(String),
    #[command(description = "Ожидаемые фильмы месяца")]
    MostWanted(String),
}

impl Command {
    /// Command name without the slash, plus its raw arguments
    pub fn name_and_args(&self) -> (&'static str, &str) {
        match self {
            Command::Start(args) => ("start", args),
            Command::Help(args) => ("help", args),
            Command::Weather(args) => ("weather", args),
            Command::Movie(args) => ("movie", args),
            Command::Map(args) => ("map", args),
            Command::Translate(args) => ("translate", args),
            Command::Affirmation(args) => ("affirmation", args),
            Command::MostWanted(args) => ("most_wanted", args),
        }
    }
}

/// Entry point for parsed commands coming from Telegram
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        BotError::InvalidInput("No user in message".to_string())
    })?;

    let (name, args) = cmd.name_and_args();
    let language = i18n.detect_user_language(user.language_code.as_deref());
    let request = CommandRequest::new(
        name,
        args,
        user.id.0 as i64,
        &language,
        msg.text().unwrap_or_default(),
    );
    log_command(request.user_id, name, &request.args);

    let reply = TelegramReply::new(bot, msg.chat.id);
    dispatch(&reply, &services, &i18n, &cmd, &request).await
}

/// Route a command to its handler
pub async fn dispatch(
    reply: &dyn ChatReply,
    services: &ServiceFactory,
    i18n: &I18n,
    cmd: &Command,
    request: &CommandRequest,
) -> Result<()> {
    match cmd {
        Command::Start(_) | Command::Help(_) => start::handle_start(reply, services, i18n, request).await,
        Command::Weather(_) => weather::handle_weather(reply, services, i18n, request).await,
        Command::Movie(_) => movie::handle_movie(reply, services, i18n, request).await,
        Command::Map(_) => map::handle_map(reply, services, i18n, request).await,
        Command::Translate(_) => translate::handle_translate(reply, services, i18n, request).await,
        Command::Affirmation(_) => affirmation::handle_affirmation(reply, services, i18n, request).await,
        Command::MostWanted(_) => most_wanted::handle_most_wanted(reply, services, i18n, request).await,
    }
}

/// Plain text reply from a catalogue key
pub(crate) fn text_reply(i18n: &I18n, key: &str, lang: &str) -> Outgoing {
    Outgoing::text(i18n.t(key, lang, None), ReplyOptions::plain())
}

/// Not-found picture captioned with a catalogue message
pub(crate) fn not_found_reply(services: &ServiceFactory, i18n: &I18n, key: &str, lang: &str) -> Outgoing {
    Outgoing::photo(
        Photo::Asset(PathBuf::from(services.not_found_image())),
        i18n.t(key, lang, None),
        ReplyOptions::plain(),
    )
}
