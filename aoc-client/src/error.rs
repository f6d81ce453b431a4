//! Error types for the caching client

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching or caching puzzle data
#[derive(Error, Debug)]
pub enum ClientError {
    /// Session credential is not configured
    #[error(
        "AOC_SESSION is not set; set it to your session cookie value (puzzle inputs differ by user)"
    )]
    MissingSession,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Cache entry was never written
    #[error("No cache entry at {}", path.display())]
    CacheMiss {
        /// Path of the missing cache file
        path: PathBuf,
    },

    /// Cache file IO failed
    #[error("Cache IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
