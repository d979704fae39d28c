use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tenis_polar::{keygen, Cipher, KeyStatus};

/// tenis-polar - the schoolyard letter-substitution cipher
///
/// Swap message letters around using a pair of keys like "tenis"/"polar".
/// Running encode twice with the same keys restores the original text.
#[derive(Parser)]
#[command(name = "tenis-polar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message (or a file) with a key pair
    Encode {
        /// First key
        key_a: String,

        /// Second key
        key_b: String,

        /// Message to encode (omit when using --file)
        message: Option<String>,

        /// Read the message from a file instead
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// Check whether two words can work as a key pair
    Check {
        /// First key
        key_a: String,

        /// Second key
        key_b: String,

        /// Print a YAML report instead of a one-line verdict
        #[arg(long, default_value_t = false)]
        report: bool,
    },

    /// Generate a random valid key pair
    Keygen {
        /// Letters per key: 1 to 13
        #[arg(long, short, default_value_t = 5)]
        length: usize,
    },
}

/// Validation report for the `check --report` output
#[derive(Debug, Serialize)]
struct KeyReport {
    key_a: String,
    key_b: String,
    length: usize,
    status: KeyStatus,
}

fn handle_encode(
    key_a: String,
    key_b: String,
    message: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let cipher = Cipher::new(&key_a, &key_b);

    if let KeyStatus::Invalid(reason) = cipher.status() {
        anyhow::bail!("{}", reason);
    }

    let message = match (message, file) {
        (Some(text), None) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read message from {:?}", path))?,
        (Some(_), Some(_)) => anyhow::bail!("Pass either MESSAGE or --file, not both"),
        (None, None) => anyhow::bail!("MESSAGE is required (or use --file)"),
    };

    // Status already checked, encrypt cannot fail here
    let encoded = cipher.encrypt(&message)?;
    print!("{}", encoded);
    if !encoded.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn handle_check(key_a: String, key_b: String, report: bool) -> Result<()> {
    let cipher = Cipher::new(&key_a, &key_b);

    if report {
        let report = KeyReport {
            key_a: cipher.key_a(),
            key_b: cipher.key_b(),
            length: cipher.key_a().chars().count(),
            status: *cipher.status(),
        };
        let yaml = serde_yaml::to_string(&report).context("Failed to serialize key report")?;
        print!("{}", yaml);
        if !cipher.status().is_valid() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match cipher.status() {
        KeyStatus::Valid => {
            println!("✓ Valid key pair");
            Ok(())
        }
        KeyStatus::Invalid(reason) => anyhow::bail!("{}", reason),
    }
}

fn handle_keygen(length: usize) -> Result<()> {
    let (key_a, key_b) =
        keygen::generate(length).with_context(|| format!("Cannot generate keys of length {}", length))?;

    println!("{} {}", key_a, key_b);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            key_a,
            key_b,
            message,
            file,
        } => handle_encode(key_a, key_b, message, file),
        Commands::Check {
            key_a,
            key_b,
            report,
        } => handle_check(key_a, key_b, report),
        Commands::Keygen { length } => handle_keygen(length),
    }
}
