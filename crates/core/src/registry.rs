//! Slot registry - maps implementation ids to implementations
//!
//! The registry is append-only: implementations and systems can be added but
//! never replaced or removed. Registering the exact same implementation twice
//! is a no-op; registering a different implementation under an existing id is
//! rejected.
//!
//! Systems may be registered alongside their implementations. Once a system
//! is known, implementations claiming one of its slots are checked against
//! its contracts and version at registration time.
//!
//! Registration is expected to finish before lookups begin. After that the
//! registry is only read, so a shared reference can be handed to any number of
//! evaluation sites.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::context::SlotContext;
use crate::error::SlotError;
use crate::slot::{BoxedSlot, ErasedSlot, SlotImplementation, SlotSignature};
use crate::types::SlotContract;
use crate::version::Version;

/// A game system: its id, current version, and the slots it declares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemDescriptor {
    pub id: &'static str,
    pub version: Version,
    pub contracts: &'static [SlotContract],
}

impl SystemDescriptor {
    pub fn contract(&self, slot_name: &str) -> Option<&'static SlotContract> {
        self.contracts.iter().find(|c| c.name == slot_name)
    }
}

/// Outcome of a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Newly added
    Inserted,
    /// An identical entry was already present; nothing changed
    AlreadyPresent,
}

#[derive(Debug, Default)]
pub struct SlotRegistry {
    systems: IndexMap<&'static str, SystemDescriptor>,
    entries: IndexMap<&'static str, BoxedSlot>,
}

impl SlotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a system so its contracts and version are enforced
    ///
    /// # Errors
    ///
    /// [`SlotError::SystemConflict`] when a different descriptor is already
    /// registered under the same system id.
    pub fn register_system(&mut self, system: SystemDescriptor) -> Result<Registration, SlotError> {
        if let Some(existing) = self.systems.get(system.id) {
            if *existing == system {
                return Ok(Registration::AlreadyPresent);
            }
            warn!(system_id = system.id, existing = %existing.version, "Rejected conflicting system registration");
            return Err(SlotError::SystemConflict {
                system_id: system.id.to_string(),
                existing: existing.version,
            });
        }
        debug!(system_id = system.id, version = %system.version, "Registered system");
        self.systems.insert(system.id, system);
        Ok(Registration::Inserted)
    }

    pub fn system(&self, system_id: &str) -> Option<&SystemDescriptor> {
        self.systems.get(system_id)
    }

    /// Registered systems in registration order
    pub fn systems(&self) -> impl Iterator<Item = &SystemDescriptor> + '_ {
        self.systems.values()
    }

    /// Contracts declared by a registered system
    pub fn contracts(&self, system_id: &str) -> Option<&'static [SlotContract]> {
        self.systems.get(system_id).map(|s| s.contracts)
    }

    /// Register an implementation
    ///
    /// # Errors
    ///
    /// - [`SlotError::DuplicateId`] if a different implementation already
    ///   uses the id.
    /// - [`SlotError::UnknownSlot`] / [`SlotError::Incompatible`] if the
    ///   owning system is registered and does not declare the slot, or none
    ///   of the implementation's ranges admit the system's version.
    pub fn register(&mut self, slot: BoxedSlot) -> Result<Registration, SlotError> {
        let id = slot.id();
        if let Some(existing) = self.entries.get(id) {
            if existing.fingerprint() == slot.fingerprint() {
                debug!(id, "Slot implementation already registered");
                return Ok(Registration::AlreadyPresent);
            }
            warn!(id, "Rejected conflicting slot implementation");
            return Err(SlotError::DuplicateId { id: id.to_string() });
        }

        let owner = slot.owner();
        if let Some(system) = self.systems.get(owner.system_id) {
            if system.contract(owner.slot_name).is_none() {
                warn!(id, slot = %owner, "Rejected implementation for undeclared slot");
                return Err(SlotError::UnknownSlot {
                    id: id.to_string(),
                    system_id: owner.system_id.to_string(),
                    slot_name: owner.slot_name.to_string(),
                });
            }
            if !admits(slot.as_ref(), system) {
                warn!(id, system_id = system.id, version = %system.version, "Rejected incompatible implementation");
                return Err(SlotError::Incompatible {
                    id: id.to_string(),
                    system_id: system.id.to_string(),
                    version: system.version,
                });
            }
        }

        debug!(id, slot = %owner, version = %slot.version(), "Registered slot implementation");
        self.entries.insert(id, slot);
        Ok(Registration::Inserted)
    }

    /// Register a batch; returns how many were newly inserted
    pub fn register_all<I>(&mut self, slots: I) -> Result<usize, SlotError>
    where
        I: IntoIterator<Item = BoxedSlot>,
    {
        let mut inserted = 0;
        for slot in slots {
            if self.register(slot)? == Registration::Inserted {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Look up an implementation; `None` if absent
    pub fn get(&self, id: &str) -> Option<&dyn ErasedSlot> {
        self.entries.get(id).map(|slot| slot.as_ref())
    }

    /// Look up an implementation, failing with [`SlotError::NotFound`]
    pub fn resolve(&self, id: &str) -> Result<&dyn ErasedSlot, SlotError> {
        self.get(id).ok_or_else(|| {
            debug!(id, "Slot implementation not found");
            SlotError::NotFound { id: id.to_string() }
        })
    }

    /// Look up an implementation with a known signature
    ///
    /// # Examples
    ///
    /// ```
    /// use game_slots_core::{slot_signature, SlotContext, SlotImplementation, SlotRegistry, Version};
    ///
    /// slot_signature! { Echo: "demo", "echo" => String => String }
    ///
    /// fn echo(_ctx: &mut SlotContext, input: &String) -> String {
    ///     input.clone()
    /// }
    ///
    /// static ECHO: SlotImplementation<Echo> =
    ///     SlotImplementation::new("echo", Version::new(1, 0, 0), &[], echo);
    ///
    /// let mut registry = SlotRegistry::new();
    /// registry.register(ECHO.boxed()).unwrap();
    ///
    /// let slot = registry.get_typed::<Echo>("echo").unwrap();
    /// let mut ctx = SlotContext::default();
    /// assert_eq!(slot.run(&mut ctx, &"hi".to_string()), "hi");
    /// ```
    pub fn get_typed<S: SlotSignature>(&self, id: &str) -> Result<&SlotImplementation<S>, SlotError> {
        let slot = self.resolve(id)?;
        slot.as_any()
            .downcast_ref::<SlotImplementation<S>>()
            .ok_or_else(|| SlotError::SignatureMismatch {
                id: id.to_string(),
                expected: std::any::type_name::<S>(),
                actual: slot.descriptor().signature,
            })
    }

    /// Resolve by id and run with a typed input
    pub fn run<S: SlotSignature>(
        &self,
        ctx: &mut SlotContext,
        id: &str,
        input: &S::Input,
    ) -> Result<S::Output, SlotError> {
        Ok(self.get_typed::<S>(id)?.run(ctx, input))
    }

    /// Resolve by id and run with JSON input
    pub fn run_json(&self, ctx: &mut SlotContext, id: &str, input: Value) -> Result<Value, SlotError> {
        self.resolve(id)?.run_json(ctx, input)
    }

    /// Implementations owned by one slot, in registration order
    pub fn list_for_slot(&self, system_id: &str, slot_name: &str) -> Vec<&dyn ErasedSlot> {
        self.iter()
            .filter(|slot| slot.owner().is(system_id, slot_name))
            .collect()
    }

    /// Whether `impl_id` may be bound to `(system_id, slot_name)`
    ///
    /// True iff the implementation exists, is owned by that slot, and one of
    /// its compatibility ranges names `system_id` and admits the system's
    /// registered version (any version when the system is not registered).
    pub fn validate_selection(&self, system_id: &str, slot_name: &str, impl_id: &str) -> bool {
        let Some(slot) = self.get(impl_id) else {
            return false;
        };
        if !slot.owner().is(system_id, slot_name) {
            return false;
        }
        match self.systems.get(system_id) {
            Some(system) => admits(slot, system),
            None => slot
                .compatible_with()
                .iter()
                .any(|c| c.system_id == system_id),
        }
    }

    /// All implementations in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn ErasedSlot> + '_ {
        self.entries.values().map(|slot| slot.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn admits(slot: &dyn ErasedSlot, system: &SystemDescriptor) -> bool {
    slot.compatible_with()
        .iter()
        .any(|c| c.system_id == system.id && c.range.matches(system.version))
}
