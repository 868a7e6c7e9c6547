//! Slot registry command-line tool (default binary).
//!
//! Builds the registry with every bundled game system and inspects or runs
//! implementations from the shell. Set `RUST_LOG=debug` to trace registration.

use anyhow::Result;

use game_slots::bootstrap::build_registry;
use game_slots::cli::{execute, parse_args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let registry = build_registry()?;

    let stdout = std::io::stdout();
    execute(&command, &registry, &mut stdout.lock())
}
