//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Puzzle day (1-25, validated by clap)
    pub day: u8,
    /// Whether to print answers instead of input
    pub answers: bool,
    /// Cache directory path
    pub cache_dir: PathBuf,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        Config {
            year: args.year,
            day: args.day,
            answers: args.answers,
            cache_dir: expand_tilde(&args.cache_dir),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
