//! Core slot machinery - registry, typed slot model and shared algorithms support
//!
//! This crate knows nothing about any particular game. It provides:
//!
//! - [`slot`]: slot signatures, typed implementations and the erased form
//!   stored by the registry
//! - [`registry`]: the append-only id → implementation store, with system
//!   contracts and version compatibility checks
//! - [`resolver`]: binding named selections to registered implementations
//! - [`version`]: versions and caret-style compatibility ranges
//! - [`grid`]: rectangular boards that cannot be built ragged
//! - [`context`] and [`rng`]: the per-call context and its seedable random source
//! - [`error`]: registry and input-validation errors
//!
//! Game systems depend on this crate, declare their slots with
//! [`slot_signature!`], and expose their implementations as `static`
//! [`SlotImplementation`] values.
//!
//! # Example
//!
//! ```
//! use game_slots_core::{slot_signature, SlotContext, SlotImplementation, SlotRegistry, Version};
//!
//! slot_signature! { Points: "demo", "points" => u32 => u32 }
//!
//! fn tenfold(_ctx: &mut SlotContext, size: &u32) -> u32 {
//!     size * 10
//! }
//!
//! static TENFOLD: SlotImplementation<Points> =
//!     SlotImplementation::new("tenfold", Version::new(1, 0, 0), &[], tenfold);
//!
//! let mut registry = SlotRegistry::new();
//! registry.register(TENFOLD.boxed()).unwrap();
//!
//! let mut ctx = SlotContext::new(42);
//! assert_eq!(registry.run::<Points>(&mut ctx, "tenfold", &3).unwrap(), 30);
//! assert!(registry.get("missing").is_none());
//! ```

pub mod context;
pub mod error;
pub mod grid;
pub mod registry;
pub mod resolver;
pub mod rng;
pub mod slot;
pub mod version;

pub use game_slots_types as types;

// Re-export commonly used types for convenience
pub use context::SlotContext;
pub use error::{InputError, SlotError};
pub use grid::{Grid, GridError};
pub use registry::{Registration, SlotRegistry, SystemDescriptor};
pub use resolver::{
    resolve_slot_ref, resolve_slots, ResolveError, ResolvedSlot, SlotResolution, SlotSelection,
};
pub use rng::SimpleRng;
pub use slot::{BoxedSlot, ErasedSlot, SlotDescriptor, SlotImplementation, SlotSignature};
pub use version::{Compatibility, RangeError, Version, VersionRange};
