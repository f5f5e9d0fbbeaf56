//! Command sshmini converts armored SSH signatures to compact tokens.
//!
//! ```text
//! ssh-keygen -Y sign -f ~/.ssh/id_ed25519 -n file < message.txt | sshmini
//! ```
//!
//! The token is written to stdout; any failure prints a diagnostic to stderr
//! and exits with the stage-specific nonzero code.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use sshmini_core::MinisigError;

/// Convert an armored SSH signature on stdin to a compact token on stdout.
#[derive(Parser, Debug)]
#[command(name = "sshmini", version, about)]
struct Cli {
    /// Quiet mode - only exit code, no output
    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let cli = Cli::parse();
    let code = match run() {
        Ok(token) => {
            print!("{token}");
            0
        }
        Err(e) => {
            if !cli.quiet {
                eprintln!("sshmini: {e:#}");
            }
            e.downcast_ref::<MinisigError>()
                .map_or(1, MinisigError::exit_code)
        }
    };
    std::process::exit(code);
}

fn run() -> Result<String> {
    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("reading stdin")?;

    Ok(sshmini_core::encode(&input)?)
}
