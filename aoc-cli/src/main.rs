//! AOC CLI - Fetch and cache Advent of Code puzzle data

mod cli;
mod config;
mod error;

use aoc_client::PuzzleClient;
use clap::Parser;
use cli::Args;
use config::Config;
use std::io::Write;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args);

    // Session is read from AOC_SESSION here, before any network access
    let client = PuzzleClient::builder()
        .session_from_env()?
        .cache_dir(config.cache_dir)
        .build()?;

    if config.answers {
        print_answers(&client, config.year, config.day)
    } else {
        print_input(&client, config.year, config.day)
    }
}

/// Print the day's input text exactly as cached
fn print_input(client: &PuzzleClient, year: u16, day: u8) -> Result<(), error::CliError> {
    let input = client.get_input(year, day)?;

    // Write bytes as-is; the input already carries its trailing newline
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(input.as_bytes())?;
    Ok(())
}

/// Print the answers accepted so far for the day
fn print_answers(client: &PuzzleClient, year: u16, day: u8) -> Result<(), error::CliError> {
    let answers = client.answers(year, day)?;

    print_slot(1, answers.part1.as_deref());
    print_slot(2, answers.part2.as_deref());
    Ok(())
}

fn print_slot(part: u8, answer: Option<&str>) {
    match answer {
        Some(value) => println!("Part {}: {}", part, value),
        None => println!("Part {}: (not yet solved)", part),
    }
}
