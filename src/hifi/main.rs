//! # hifi
//!
//! Fetches one list of a Trello board and prints it as the weekly hacks newsletter.
//!
//! The binary is intentionally thin: argument parsing, logging setup and stdout
//! writes live in `cli/`, the Trello lookups and rendering live in the `hifi`
//! library. This file only runs the CLI and turns an error into exit status 1.

mod cli;

use hifi::error::HifiError;

fn main() {
    match cli::run() {
        Ok(()) => {}
        // clap formats its own message and usage hint
        Err(HifiError::Args(e)) => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
