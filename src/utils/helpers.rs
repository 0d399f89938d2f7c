//! Helper functions and utilities
//!
//! This module contains common text helpers used throughout the application.

use chrono::{DateTime, Datelike, Local, Month};

/// Format a timestamp for the activity log
pub fn format_timestamp(timestamp: DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S,%3f").to_string()
}

/// Upper-case English month name as expected by the premieres listing
pub fn month_name_upper(timestamp: DateTime<Local>) -> String {
    Month::try_from(timestamp.month() as u8)
        .map(|m| m.name().to_uppercase())
        .unwrap_or_else(|_| "JANUARY".to_string())
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
