//! Error types for ShardKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ShardKvError
pub type Result<T> = std::result::Result<T, ShardKvError>;

/// Unified error type for ShardKV operations
#[derive(Debug, Error)]
pub enum ShardKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// The key length field is a single byte, so 255 is the hard ceiling.
    #[error("key too long: {len} bytes (max 255)")]
    KeyTooLong { len: usize },

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Command error: {0}")]
    Command(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
