//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code puzzle data fetcher
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Fetch and cache Advent of Code puzzle data", version)]
pub struct Args {
    /// Year of the puzzle
    #[arg(short, long, default_value_t = 2022)]
    pub year: u16,

    /// Day of the puzzle
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Print the answers already accepted for this day instead of its input
    #[arg(short, long)]
    pub answers: bool,

    /// Cache directory for puzzle inputs and answers
    #[arg(long, default_value = ".")]
    pub cache_dir: PathBuf,
}
