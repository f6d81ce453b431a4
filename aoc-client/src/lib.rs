//! Caching client for Advent of Code puzzle data
//!
//! This library fetches personalized puzzle inputs and previously accepted
//! answers from adventofcode.com, caching everything on disk so each
//! `(year, day)` touches the network at most once.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day, cached under `inputs/`
//! - Recovery of already-submitted answers from the puzzle page, cached
//!   under `answers/`
//! - Session cookie read once from `AOC_SESSION`, failing fast when unset
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_client::PuzzleClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PuzzleClient::from_env()?;
//!
//! // Served from inputs/input-2022-day-01.txt after the first call
//! for line in client.input_lines(2022, 1)? {
//!     println!("{}", line);
//! }
//!
//! // Answers already accepted by the site, if any
//! let answers = client.answers(2022, 1)?;
//! println!("part 1: {:?}, part 2: {:?}", answers.part1, answers.part2);
//! # Ok(())
//! # }
//! ```

mod answers;
mod cache;
mod client;
mod error;
mod http;

pub use answers::Answers;
pub use cache::PuzzleCache;
pub use client::{PuzzleClient, PuzzleClientBuilder, SESSION_ENV_VAR};
pub use error::ClientError;
