//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Puzzle client error
    #[error("Client error: {0}")]
    Client(#[from] aoc_client::ClientError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
