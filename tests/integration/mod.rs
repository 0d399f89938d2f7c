//! Integration tests module
//!
//! This module contains all integration tests for the SemestryBot handlers,
//! organized by handler type.
