//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for pagination buttons
//! - Message handlers for free text
//!
//! Every handler talks to the chat through [`reply::ChatReply`] and finishes
//! with [`reply::respond`], which records the exchange in the activity log.

pub mod reply;
pub mod commands;
pub mod callbacks;
pub mod messages;

// Re-export commonly used handler functions
pub use reply::{ChatReply, Outgoing, Photo, ReplyOptions, TelegramReply, respond};
pub use commands::{Command, handle_command};
pub use callbacks::handle_callback_query;
pub use messages::handle_message;
