//! Error handling.
//!
//! This module provides the error types for initialization, strict decoding
//! and file name parsing. Application-level code wraps these with
//! `anyhow::Context`.

mod types;

// Re-export public API
pub use types::{DecodeError, FileNameError, InitializationError};
