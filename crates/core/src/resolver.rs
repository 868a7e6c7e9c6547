//! Resolution of named slot selections against a registry
//!
//! A game definition binds its own names ("mainScoring", "rotation") to
//! explicit implementation ids. [`resolve_slots`] checks every binding and
//! collects all failures instead of stopping at the first one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::context::SlotContext;
use crate::error::SlotError;
use crate::registry::SlotRegistry;
use crate::slot::ErasedSlot;

/// One binding of a slot to an implementation id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub system_id: String,
    pub slot_name: String,
    pub impl_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl SlotSelection {
    pub fn new(
        system_id: impl Into<String>,
        slot_name: impl Into<String>,
        impl_id: impl Into<String>,
    ) -> Self {
        Self {
            system_id: system_id.into(),
            slot_name: slot_name.into(),
            impl_id: impl_id.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("slot '{name}': implementation '{impl_id}' not found")]
    NotFound { name: String, impl_id: String },
    #[error("slot '{name}': implementation '{impl_id}' is not valid for {system_id}.{slot_name}")]
    Invalid {
        name: String,
        impl_id: String,
        system_id: String,
        slot_name: String,
    },
}

/// A selection bound to its registered implementation
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSlot<'r> {
    pub selection: &'r SlotSelection,
    pub implementation: &'r dyn ErasedSlot,
}

impl ResolvedSlot<'_> {
    /// Context for running this slot: seeded, carrying the selection params
    pub fn context(&self, seed: u32) -> SlotContext {
        SlotContext::new(seed).with_params(self.selection.params.clone())
    }

    pub fn run_json(&self, ctx: &mut SlotContext, input: Value) -> Result<Value, SlotError> {
        self.implementation.run_json(ctx, input)
    }
}

#[derive(Debug, Default)]
pub struct SlotResolution<'r> {
    pub slots: BTreeMap<String, ResolvedSlot<'r>>,
    pub errors: Vec<ResolveError>,
}

impl SlotResolution<'_> {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Resolve every named selection; failures are collected in `errors`
pub fn resolve_slots<'r>(
    selections: &'r BTreeMap<String, SlotSelection>,
    registry: &'r SlotRegistry,
) -> SlotResolution<'r> {
    let mut resolution = SlotResolution::default();

    for (name, selection) in selections {
        let Some(implementation) = registry.get(&selection.impl_id) else {
            resolution.errors.push(ResolveError::NotFound {
                name: name.clone(),
                impl_id: selection.impl_id.clone(),
            });
            continue;
        };

        if !registry.validate_selection(
            &selection.system_id,
            &selection.slot_name,
            &selection.impl_id,
        ) {
            resolution.errors.push(ResolveError::Invalid {
                name: name.clone(),
                impl_id: selection.impl_id.clone(),
                system_id: selection.system_id.clone(),
                slot_name: selection.slot_name.clone(),
            });
            continue;
        }

        debug!(name = %name, impl_id = %selection.impl_id, "Resolved slot");
        resolution.slots.insert(
            name.clone(),
            ResolvedSlot {
                selection,
                implementation,
            },
        );
    }

    resolution
}

/// Plain lookup by implementation id
pub fn resolve_slot_ref<'r>(impl_id: &str, registry: &'r SlotRegistry) -> Option<&'r dyn ErasedSlot> {
    registry.get(impl_id)
}
