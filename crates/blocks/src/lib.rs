//! Falling-block system - slots for a tetromino game
//!
//! # Slots
//!
//! | Slot           | Kind   | Implementations                                               |
//! |----------------|--------|---------------------------------------------------------------|
//! | `rotationRule` | policy | `standard_rotation`, `no_wall_kick_rotation`, `srs_rotation`  |
//! | `lineClearing` | pure   | `standard_line_clear`                                         |
//! | `pieceSpawner` | pure   | `random_7_bag`, `pure_random`                                 |
//! | `dropSpeed`    | pure   | `level_based_speed`, `fixed_speed`, `interval_table_speed`    |
//!
//! Boards are `rows x cols` grids of `Option<PieceKind>` with row 0 at the
//! top. Piece positions are `(x, y)` = `(column, row)` of the shape's
//! bounding box origin.
//!
//! # Example
//!
//! ```
//! use game_slots_blocks::{register_falling_block_slot_implementations, DropSpeed, DropSpeedInput};
//! use game_slots_core::{SlotContext, SlotRegistry};
//!
//! let mut registry = SlotRegistry::new();
//! register_falling_block_slot_implementations(&mut registry).unwrap();
//!
//! let mut ctx = SlotContext::new(1);
//! let input = DropSpeedInput { level: 1, score: 0, lines_cleared: 0 };
//! let out = registry.run::<DropSpeed>(&mut ctx, "fixed_speed", &input).unwrap();
//! assert_eq!(out.frames_per_drop, 30);
//! ```

pub mod lines;
pub mod pieces;
pub mod rotation;
pub mod spawner;
pub mod speed;

use game_slots_core::types::{PieceKind, SlotContract, SlotKind};
use game_slots_core::{
    BoxedSlot, Compatibility, Grid, SlotError, SlotRegistry, SystemDescriptor,
    Version, VersionRange,
};

pub use game_slots_core::types;

pub use lines::{LineClearInput, LineClearOutput, LineClearing, STANDARD_LINE_CLEAR};
pub use rotation::{
    Piece, RotationInput, RotationOutput, RotationRule, NO_WALL_KICK_ROTATION, SRS_ROTATION,
    STANDARD_ROTATION,
};
pub use spawner::{PieceSpawner, SpawnInput, SpawnOutput, PURE_RANDOM, RANDOM_7_BAG};
pub use speed::{
    DropSpeed, DropSpeedInput, DropSpeedOutput, FIXED_SPEED, INTERVAL_TABLE_SPEED,
    LEVEL_BASED_SPEED,
};

pub const SYSTEM_ID: &str = "tetris";
pub const SYSTEM_VERSION: Version = Version::new(1, 0, 0);

/// Every implementation here supports `^1.0.0` of this system
pub const COMPATIBLE: &[Compatibility] =
    &[Compatibility::new(SYSTEM_ID, VersionRange::caret(1, 0, 0))];

/// Falling-block board; `None` is an empty cell
pub type Board = Grid<Option<PieceKind>>;

pub const CONTRACTS: &[SlotContract] = &[
    SlotContract::new(
        "rotationRule",
        SlotKind::Policy,
        "Determines how pieces rotate, including wall kick behavior",
    ),
    SlotContract::new(
        "lineClearing",
        SlotKind::Pure,
        "Detects and returns indices of completed lines to clear",
    ),
    SlotContract::new(
        "pieceSpawner",
        SlotKind::Pure,
        "Determines which piece type to spawn next",
    ),
    SlotContract::new(
        "dropSpeed",
        SlotKind::Pure,
        "Calculates drop speed based on level and score",
    ),
];

pub const SYSTEM: SystemDescriptor = SystemDescriptor {
    id: SYSTEM_ID,
    version: SYSTEM_VERSION,
    contracts: CONTRACTS,
};

/// All falling-block implementations, in registration order
pub fn slot_implementations() -> Vec<BoxedSlot> {
    vec![
        STANDARD_ROTATION.boxed(),
        NO_WALL_KICK_ROTATION.boxed(),
        SRS_ROTATION.boxed(),
        STANDARD_LINE_CLEAR.boxed(),
        RANDOM_7_BAG.boxed(),
        PURE_RANDOM.boxed(),
        LEVEL_BASED_SPEED.boxed(),
        FIXED_SPEED.boxed(),
        INTERVAL_TABLE_SPEED.boxed(),
    ]
}

/// Register the system and its implementations; safe to call repeatedly
///
/// # Errors
///
/// Fails if a conflicting system or implementation is already registered
/// under one of these ids.
pub fn register_falling_block_slot_implementations(
    registry: &mut SlotRegistry,
) -> Result<usize, SlotError> {
    registry.register_system(SYSTEM)?;
    registry.register_all(slot_implementations())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_implementation_targets_a_declared_slot() {
        for slot in slot_implementations() {
            let owner = slot.owner();
            assert_eq!(owner.system_id, SYSTEM_ID);
            assert!(SYSTEM.contract(owner.slot_name).is_some(), "{}", slot.id());
        }
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut registry = SlotRegistry::new();
        assert_eq!(register_falling_block_slot_implementations(&mut registry).unwrap(), 9);
        assert_eq!(register_falling_block_slot_implementations(&mut registry).unwrap(), 0);
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.list_for_slot(SYSTEM_ID, "rotationRule").len(), 3);
    }
}
