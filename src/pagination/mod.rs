//! Callback-driven pagination
//!
//! Listings are re-fetched on every navigation click, so a page is fully
//! described by the listing kind and a 0-based page index carried in the
//! button's callback data as `<kind>_<page>`.

use std::ops::Range;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use thiserror::Error;
use crate::i18n::I18n;

/// Items per page
pub const PAGE_SIZE: usize = 10;

/// Listing kind of the monthly premieres
pub const MOST_WANTED: &str = "most_wanted";

/// Callback data prefix routed to the premieres listing
pub const MOST_WANTED_PREFIX: &str = "most_wanted_";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("navigation token without page separator: {0}")]
    MissingSeparator(String),

    #[error("navigation token with invalid page index: {0}")]
    InvalidPage(String),
}

/// Requested page within a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationToken {
    pub kind: String,
    pub page: usize,
}

impl NavigationToken {
    pub fn new(kind: &str, page: usize) -> Self {
        Self {
            kind: kind.to_string(),
            page,
        }
    }

    pub fn encode(&self) -> String {
        format!("{}_{}", self.kind, self.page)
    }

    /// Parse the trailing page index after the last `_`
    pub fn parse(data: &str) -> Result<Self, TokenError> {
        let (kind, page) = data
            .rsplit_once('_')
            .ok_or_else(|| TokenError::MissingSeparator(data.to_string()))?;

        let page = page
            .parse::<usize>()
            .map_err(|_| TokenError::InvalidPage(data.to_string()))?;

        Ok(Self::new(kind, page))
    }
}

/// Position of one page over a listing of `total_items`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageWindow {
    pub fn new(total_items: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
        }
    }

    /// Item indices on this page; empty past the end of the listing
    pub fn range(&self) -> Range<usize> {
        let start = self.page.saturating_mul(self.page_size).min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn has_back(&self) -> bool {
        self.page > 0
    }

    pub fn has_forward(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    /// 1-based page number for display
    pub fn display_page(&self) -> usize {
        self.page.saturating_add(1)
    }
}

/// Back/forward buttons; `None` when neither applies
pub fn navigation_keyboard(
    kind: &str,
    window: &PageWindow,
    i18n: &I18n,
    lang: &str,
) -> Option<InlineKeyboardMarkup> {
    let mut buttons = Vec::new();

    if window.has_back() {
        buttons.push(InlineKeyboardButton::callback(
            i18n.t("buttons.navigation.back", lang, None),
            NavigationToken::new(kind, window.page - 1).encode(),
        ));
    }
    if window.has_forward() {
        buttons.push(InlineKeyboardButton::callback(
            i18n.t("buttons.navigation.forward", lang, None),
            NavigationToken::new(kind, window.page.saturating_add(1)).encode(),
        ));
    }

    if buttons.is_empty() {
        None
    } else {
        Some(InlineKeyboardMarkup::new(vec![buttons]))
    }
}
