//! Command-line front end for the slot registry
//!
//! ```text
//! game-slots list
//! game-slots contracts <system-id>
//! game-slots resolve <config.json>
//! game-slots run <impl-id> <input-json> [--seed N]
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;

use crate::config::{GameSlotConfig, DEFAULT_SEED};
use crate::core::{SlotContext, SlotRegistry};

pub const USAGE: &str = "\
usage:
  game-slots list
  game-slots contracts <system-id>
  game-slots resolve <config.json>
  game-slots run <impl-id> <input-json> [--seed N]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Contracts { system_id: String },
    Resolve { path: PathBuf },
    Run { impl_id: String, input: String, seed: u32 },
}

/// Parse arguments, not including the program name
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(command) = args.first() else {
        return Ok(Command::Help);
    };
    let rest = &args[1..];

    match command.as_str() {
        "help" | "--help" | "-h" => Ok(Command::Help),
        "list" => {
            expect_args("list", rest, 0)?;
            Ok(Command::List)
        }
        "contracts" => {
            expect_args("contracts", rest, 1)?;
            Ok(Command::Contracts {
                system_id: rest[0].clone(),
            })
        }
        "resolve" => {
            expect_args("resolve", rest, 1)?;
            Ok(Command::Resolve {
                path: PathBuf::from(&rest[0]),
            })
        }
        "run" => parse_run(rest),
        other => Err(anyhow!("unknown command: {}", other)),
    }
}

fn expect_args(command: &str, rest: &[String], count: usize) -> Result<()> {
    if rest.len() != count {
        bail!("{}: expected {} argument(s), got {}", command, count, rest.len());
    }
    Ok(())
}

fn parse_run(args: &[String]) -> Result<Command> {
    let mut positional = Vec::new();
    let mut seed = DEFAULT_SEED;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("run: missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("run: invalid --seed value: {}", v))?;
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let [impl_id, input]: [String; 2] = positional
        .try_into()
        .map_err(|p: Vec<String>| anyhow!("run: expected <impl-id> <input-json>, got {} argument(s)", p.len()))?;
    Ok(Command::Run {
        impl_id,
        input,
        seed,
    })
}

/// Execute `command` against `registry`, writing results to `out`
pub fn execute(command: &Command, registry: &SlotRegistry, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Help => writeln!(out, "{}", USAGE)?,
        Command::List => {
            for system in registry.systems() {
                writeln!(out, "{} {}", system.id, system.version)?;
                for contract in system.contracts {
                    writeln!(out, "  {} ({})", contract.name, contract.kind.as_str())?;
                    for slot in registry.list_for_slot(system.id, contract.name) {
                        writeln!(out, "    {} {}", slot.id(), slot.version())?;
                    }
                }
            }
        }
        Command::Contracts { system_id } => {
            let contracts = registry
                .contracts(system_id)
                .ok_or_else(|| anyhow!("unknown system: {}", system_id))?;
            writeln!(out, "{}", serde_json::to_string_pretty(contracts)?)?;
        }
        Command::Resolve { path } => {
            let config = GameSlotConfig::load(path)?;
            let resolution = config.resolve(registry);
            for (name, slot) in &resolution.slots {
                writeln!(out, "{} -> {} ({})", name, slot.implementation.id(), slot.implementation.owner())?;
            }
            for error in &resolution.errors {
                writeln!(out, "error: {}", error)?;
            }
            if !resolution.is_ok() {
                bail!("{} selection(s) failed to resolve", resolution.errors.len());
            }
        }
        Command::Run {
            impl_id,
            input,
            seed,
        } => {
            let input: Value = serde_json::from_str(input).context("run: input is not valid JSON")?;
            let mut ctx = SlotContext::new(*seed);
            let output = registry.run_json(&mut ctx, impl_id, input)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}
