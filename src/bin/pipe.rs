//! Standalone pipe binary for tenis-polar
//!
//! Minimal filter that encodes stdin to stdout with a key pair.
//! The cipher is its own inverse, so the same invocation decodes.
//!
//! Usage:
//!   tp-pipe <KEY_A> <KEY_B> < message.txt

use std::env;
use std::io::{self, Read, Write};
use std::process;
use tenis_polar::{Cipher, KeyStatus};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: tp-pipe <KEY_A> <KEY_B>");
        process::exit(1);
    }

    let cipher = Cipher::new(&args[1], &args[2]);
    if let KeyStatus::Invalid(reason) = cipher.status() {
        return Err(reason.to_string().into());
    }

    let mut message = String::new();
    io::stdin()
        .read_to_string(&mut message)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    let encoded = cipher.encrypt(&message)?;
    io::stdout().write_all(encoded.as_bytes())?;

    Ok(())
}
