//! Basic usage example for the caching puzzle client
//!
//! This example demonstrates how to:
//! - Create a client from the AOC_SESSION environment variable
//! - Fetch puzzle input (cached under inputs/ after the first run)
//! - Read back previously accepted answers (cached under answers/)
//!
//! Note: This example requires a valid AOC session cookie to run.
//! You can get your session cookie from your browser's cookies after
//! logging in to adventofcode.com

use aoc_client::PuzzleClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads AOC_SESSION; fails fast if it is not set
    let client = PuzzleClient::from_env()?;
    println!("✓ Client created (cache rooted at the working directory)");

    let year = 2022;
    let day = 1;

    // First call fetches from adventofcode.com, later calls read from disk
    println!("\nFetching input for year {} day {}...", year, day);
    let input = client.get_input(year, day)?;
    println!("✓ Input fetched ({} bytes)", input.len());
    println!(
        "First 100 chars: {}",
        input.chars().take(100).collect::<String>()
    );

    // Answers already accepted by the site, if any
    println!("\nFetching submitted answers...");
    let answers = client.answers(year, day)?;
    match answers.part1 {
        Some(part1) => println!("✓ Part 1 answer: {}", part1),
        None => println!("ℹ Part 1 not yet solved"),
    }
    match answers.part2 {
        Some(part2) => println!("✓ Part 2 answer: {}", part2),
        None => println!("ℹ Part 2 not yet solved"),
    }

    Ok(())
}
