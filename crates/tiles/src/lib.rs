//! Tile-match system - slots for a swap-and-match game
//!
//! # Slots
//!
//! | Slot             | Kind   | Implementations                        |
//! |------------------|--------|----------------------------------------|
//! | `matchDetection` | pure   | `standard_3_match`, `diagonal_match`   |
//! | `swapRule`       | policy | `adjacent_only`                        |
//! | `scoring`        | pure   | `cascade_multiplier`, `fixed_score`    |
//! | `pieceSpawner`   | pure   | `random_uniform`                       |
//! | `feedback`       | hook   | `tags_and_conditional_behaviors`       |
//!
//! Boards are grids of `Option<u32>`: a piece type index, or `None` for an
//! empty cell.

pub mod feedback;
pub mod matching;
pub mod scoring;
pub mod spawner;
pub mod swap;

use game_slots_core::types::{SlotContract, SlotKind};
use game_slots_core::{
    BoxedSlot, Compatibility, Grid, SlotError, SlotRegistry, SystemDescriptor, Version,
    VersionRange,
};

pub use game_slots_core::types;

pub use feedback::{
    EntityTag, Feedback, FeedbackEvent, FeedbackInput, FeedbackOutput,
    TAGS_AND_CONDITIONAL_BEHAVIORS,
};
pub use matching::{Match, MatchDetection, MatchInput, DIAGONAL_MATCH, STANDARD_3_MATCH};
pub use scoring::{MatchScoring, ScoreInput, CASCADE_MULTIPLIER, FIXED_SCORE};
pub use spawner::{TileSpawnInput, TileSpawner, RANDOM_UNIFORM};
pub use swap::{SwapInput, SwapRule, ADJACENT_ONLY};

pub const SYSTEM_ID: &str = "match3";
pub const SYSTEM_VERSION: Version = Version::new(1, 0, 0);

pub const COMPATIBLE: &[Compatibility] =
    &[Compatibility::new(SYSTEM_ID, VersionRange::caret(1, 0, 0))];

/// Tile-match board; `None` is an empty cell
pub type TileBoard = Grid<Option<u32>>;

pub const CONTRACTS: &[SlotContract] = &[
    SlotContract::new(
        "matchDetection",
        SlotKind::Pure,
        "Detects matches on the board and returns matched cell groups",
    ),
    SlotContract::new(
        "swapRule",
        SlotKind::Policy,
        "Validates whether a swap between two cells is allowed",
    ),
    SlotContract::new(
        "scoring",
        SlotKind::Pure,
        "Calculates score for a match based on size and cascade level",
    ),
    SlotContract::new(
        "pieceSpawner",
        SlotKind::Pure,
        "Determines which piece type to spawn at a given position",
    ),
    SlotContract::new(
        "feedback",
        SlotKind::Hook,
        "Provides visual/audio feedback for game events via tags and behaviors",
    ),
];

pub const SYSTEM: SystemDescriptor = SystemDescriptor {
    id: SYSTEM_ID,
    version: SYSTEM_VERSION,
    contracts: CONTRACTS,
};

pub fn slot_implementations() -> Vec<BoxedSlot> {
    vec![
        STANDARD_3_MATCH.boxed(),
        DIAGONAL_MATCH.boxed(),
        ADJACENT_ONLY.boxed(),
        CASCADE_MULTIPLIER.boxed(),
        FIXED_SCORE.boxed(),
        RANDOM_UNIFORM.boxed(),
        TAGS_AND_CONDITIONAL_BEHAVIORS.boxed(),
    ]
}

/// Register the system and its implementations; safe to call repeatedly
///
/// # Errors
///
/// Fails if a conflicting system or implementation is already registered
/// under one of these ids.
pub fn register_tile_match_slot_implementations(
    registry: &mut SlotRegistry,
) -> Result<usize, SlotError> {
    registry.register_system(SYSTEM)?;
    registry.register_all(slot_implementations())
}
