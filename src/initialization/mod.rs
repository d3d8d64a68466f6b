//! Application initialization.
//!
//! Sets up process-wide resources before decoding starts. Currently that is
//! the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
