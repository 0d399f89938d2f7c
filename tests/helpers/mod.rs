//! Test helpers module
//!
//! This module provides utilities and helpers for testing SemestryBot.
//! It includes mock servers, a recording reply capability, and test context setup.

#![allow(dead_code)]

pub mod upstream_mock;
pub mod recording_reply;
pub mod test_context;

pub use telegram_mock::*;
pub use upstream_mock::*;
pub use recording_reply::*;
pub use test_context::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (called once)
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}
