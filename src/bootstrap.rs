//! Registry bootstrap - install every game system
//!
//! Prefer [`build_registry`] and pass the registry by reference.
//! [`global_slot_registry`] builds one shared instance on first access for
//! callers that cannot thread a registry through.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::core::{SlotRegistry, SystemDescriptor};
use crate::{blocks, cards, runner, tiles};

/// Descriptors of every bundled system, in registration order
pub const SYSTEMS: [SystemDescriptor; 4] = [blocks::SYSTEM, tiles::SYSTEM, cards::SYSTEM, runner::SYSTEM];

/// Register all four systems into `registry`; returns how many implementations were added
///
/// Calling this again on the same registry adds nothing.
pub fn register_all_systems(registry: &mut SlotRegistry) -> Result<usize> {
    let mut inserted = blocks::register_falling_block_slot_implementations(registry)
        .context("registering falling-block slots")?;
    inserted += tiles::register_tile_match_slot_implementations(registry)
        .context("registering tile-match slots")?;
    inserted += cards::register_card_match_slot_implementations(registry)
        .context("registering card-match slots")?;
    inserted += runner::register_obstacle_runner_slot_implementations(registry)
        .context("registering obstacle-runner slots")?;

    debug!(inserted, total = registry.len(), "Registered game systems");
    Ok(inserted)
}

/// A fresh registry with every system installed
pub fn build_registry() -> Result<SlotRegistry> {
    let mut registry = SlotRegistry::new();
    register_all_systems(&mut registry)?;
    Ok(registry)
}

static GLOBAL_REGISTRY: OnceCell<SlotRegistry> = OnceCell::new();

/// Process-wide registry, built on first access
pub fn global_slot_registry() -> Result<&'static SlotRegistry> {
    GLOBAL_REGISTRY.get_or_try_init(build_registry)
}
