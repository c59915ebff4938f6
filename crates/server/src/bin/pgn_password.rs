//! Derive a password from a PGN file without going through the server.
//!
//! Usage: cargo run --bin pgn-password -- <file.pgn> [length]

use std::env;
use std::fs;
use std::process::ExitCode;

use pgn_core::{password, pgn};

const DEFAULT_LENGTH: usize = 16;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (path, length) = match args.as_slice() {
        [_, path] => (path.clone(), DEFAULT_LENGTH),
        [_, path, len] => match len.parse() {
            Ok(n) => (path.clone(), n),
            Err(_) => {
                eprintln!("invalid length: {len}");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("usage: pgn-password <file.pgn> [length]");
            return ExitCode::FAILURE;
        }
    };

    let pgn_text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("failed to read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let move_text = pgn::normalize(&pgn_text);
    match password::derive_password(&move_text, length) {
        Ok(password) => {
            println!("{password}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("password generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
