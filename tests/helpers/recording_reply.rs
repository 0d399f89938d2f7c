//! In-memory reply capability that records every delivered message

use std::sync::Mutex;
use async_trait::async_trait;
use SemestryBot::handlers::{ChatReply, Outgoing, Photo, ReplyOptions};
use SemestryBot::utils::errors::{BotError, Result};

#[derive(Default)]
pub struct RecordingReply {
    sent: Mutex<Vec<Outgoing>>,
    failing: bool,
}

impl RecordingReply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply whose deliveries all fail, as when Telegram rejects the message
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<Outgoing> {
        self.sent.lock().expect("recording lock poisoned").clone()
    }

    /// The only message delivered; panics unless exactly one was sent
    pub fn single(&self) -> Outgoing {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one reply, got {:?}", sent);
        sent.into_iter().next().expect("one reply")
    }

    /// Visible text of the only message delivered
    pub fn single_text(&self) -> String {
        self.single()
            .visible_text()
            .map(str::to_string)
            .expect("reply with visible text")
    }

    fn record(&self, message: Outgoing) -> Result<()> {
        if self.failing {
            return Err(BotError::InvalidInput("delivery refused".to_string()));
        }
        self.sent.lock().expect("recording lock poisoned").push(message);
        Ok(())
    }
}

#[async_trait]
impl ChatReply for RecordingReply {
    async fn send_text(&self, text: &str, options: ReplyOptions) -> Result<()> {
        self.record(Outgoing::Text {
            text: text.to_string(),
            options,
        })
    }

    async fn send_photo(&self, photo: Photo, caption: &str, options: ReplyOptions) -> Result<()> {
        self.record(Outgoing::Photo {
            photo,
            caption: caption.to_string(),
            options,
        })
    }

    async fn send_location(&self, latitude: f64, longitude: f64) -> Result<()> {
        self.record(Outgoing::Location { latitude, longitude })
    }

    async fn edit_text(&self, text: &str, options: ReplyOptions) -> Result<()> {
        self.record(Outgoing::Edit {
            text: text.to_string(),
            options,
        })
    }
}
