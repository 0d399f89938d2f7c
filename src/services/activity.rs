//! Per-user activity log
//!
//! Every exchange is appended to `<directory>/<user_id>.log`. File handles are
//! opened lazily and kept in a registry keyed by user id; entries are never
//! rotated or evicted. The registry holds one open file descriptor per user
//! seen since startup, so the process fd limit bounds the number of users.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use chrono::{DateTime, Local};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::utils::errors::Result;
use crate::utils::helpers::format_timestamp;

type Handle = Arc<Mutex<File>>;

/// Append-only activity log, one file per user
#[derive(Clone, Debug)]
pub struct ActivityLog {
    directory: PathBuf,
    handles: Arc<Mutex<HashMap<i64, Handle>>>,
}

impl ActivityLog {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            handles: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Log file of a user
    pub fn log_path(&self, user_id: i64) -> PathBuf {
        self.directory.join(format!("{}.log", user_id))
    }

    /// Append one user-input/bot-output pair
    pub async fn record(&self, user_id: i64, input: &str, output: &str) -> Result<()> {
        let entry = format_entry(Local::now(), user_id, input, output);
        let handle = self.handle(user_id).await?;

        let mut file = handle.lock().await;
        file.write_all(entry.as_bytes()).await?;
        file.flush().await?;

        info!(user_id = user_id, input = input, "Activity recorded");
        Ok(())
    }

    #[cfg(test)]
    async fn open_handles(&self) -> usize {
        self.handles.lock().await.len()
    }

    async fn handle(&self, user_id: i64) -> Result<Handle> {
        let mut handles = self.handles.lock().await;
        if let Some(handle) = handles.get(&user_id) {
            return Ok(handle.clone());
        }

        fs::create_dir_all(&self.directory).await?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path(user_id))
            .await?;

        debug!(user_id = user_id, path = %self.log_path(user_id).display(), "Opened activity log");
        let handle = Arc::new(Mutex::new(file));
        handles.insert(user_id, handle.clone());
        Ok(handle)
    }
}

/// `<timestamp> - [user_id: <id>]:User: <input>\nBot: <output>\n`
pub fn format_entry(timestamp: DateTime<Local>, user_id: i64, input: &str, output: &str) -> String {
    format!(
        "{} - [user_id: {}]:User: {}\nBot: {}\n",
        format_timestamp(timestamp),
        user_id,
        input,
        output
    )
}
