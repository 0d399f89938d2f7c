//! Callback handler tests
