//! Slot selection config
//!
//! A config file binds a game's own slot names to implementation ids:
//!
//! ```json
//! {
//!   "seed": 42,
//!   "selections": {
//!     "rotation": { "system_id": "tetris", "slot_name": "rotationRule", "impl_id": "srs_rotation" },
//!     "mainScoring": { "system_id": "match3", "slot_name": "scoring", "impl_id": "cascade_multiplier" }
//!   }
//! }
//! ```
//!
//! A selection may also carry `params`. They reach the implementation through
//! [`SlotContext::params`]; the bundled implementations ignore them, so they
//! only matter for implementations registered by the host.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{resolve_slots, ResolvedSlot, SlotContext, SlotRegistry, SlotResolution, SlotSelection};

/// Seed used when a config does not name one
pub const DEFAULT_SEED: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSlotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(default)]
    pub selections: BTreeMap<String, SlotSelection>,
}

impl GameSlotConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing slot config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading slot config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Resolve every selection; failures are collected, not fatal
    pub fn resolve<'r>(&'r self, registry: &'r SlotRegistry) -> SlotResolution<'r> {
        resolve_slots(&self.selections, registry)
    }

    /// Context for running a resolved slot under this config's seed
    pub fn context_for(&self, slot: &ResolvedSlot<'_>) -> SlotContext {
        slot.context(self.seed())
    }
}
