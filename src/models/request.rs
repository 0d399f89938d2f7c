//! Command request model

use serde::{Deserialize, Serialize};

/// One inbound interaction, discarded after handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command name without the leading slash, empty for free text
    pub command: String,
    /// Arguments with whitespace normalized
    pub args: String,
    pub user_id: i64,
    /// Catalogue language used for the reply
    pub language: String,
    /// Raw text as typed by the user, recorded in the activity log
    pub text: String,
}

impl CommandRequest {
    pub fn new(command: &str, args: &str, user_id: i64, language: &str, text: &str) -> Self {
        Self {
            command: command.to_string(),
            args: crate::utils::helpers::normalize_whitespace(args),
            user_id,
            language: language.to_string(),
            text: text.to_string(),
        }
    }

    /// Arguments, or `None` when the user gave none
    pub fn required_args(&self) -> Option<&str> {
        if self.args.is_empty() {
            None
        } else {
            Some(&self.args)
        }
    }
}
