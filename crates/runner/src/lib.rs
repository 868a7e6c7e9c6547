//! Obstacle-runner system - slots for a tap-to-fly game
//!
//! # Slots
//!
//! | Slot                | Kind   | Implementations                          |
//! |---------------------|--------|------------------------------------------|
//! | `jumpForce`         | pure   | `standard_jump`, `floaty_jump`           |
//! | `obstacleSpawner`   | pure   | `random_pipes`, `progressive_pipes`      |
//! | `scoring`           | pure   | `point_per_pipe`, `distance_scoring`     |
//! | `difficultyScaling` | policy | `linear_difficulty`, `stepped_difficulty`|
//!
//! Distances are world units with `y` growing downward.

pub mod difficulty;
pub mod jump;
pub mod obstacles;
pub mod scoring;

use game_slots_core::types::{SlotContract, SlotKind};
use game_slots_core::{
    BoxedSlot, Compatibility, SlotError, SlotRegistry, SystemDescriptor, Version, VersionRange,
};

pub use game_slots_core::types;

pub use difficulty::{
    DifficultyInput, DifficultyOutput, DifficultyScaling, LINEAR_DIFFICULTY, STEPPED_DIFFICULTY,
};
pub use jump::{JumpForce, JumpInput, JumpOutput, FLOATY_JUMP, STANDARD_JUMP};
pub use obstacles::{ObstacleInput, ObstacleOutput, ObstacleSpawner, PROGRESSIVE_PIPES, RANDOM_PIPES};
pub use scoring::{RunScoreInput, RunScoreOutput, RunScoring, DISTANCE_SCORING, POINT_PER_PIPE};

pub const SYSTEM_ID: &str = "flappy";
pub const SYSTEM_VERSION: Version = Version::new(1, 0, 0);

pub const COMPATIBLE: &[Compatibility] =
    &[Compatibility::new(SYSTEM_ID, VersionRange::caret(1, 0, 0))];

/// Smallest gap any rule produces
pub const MIN_GAP_SIZE: f64 = 2.5;

pub const CONTRACTS: &[SlotContract] = &[
    SlotContract::new(
        "jumpForce",
        SlotKind::Pure,
        "Calculate jump impulse based on input",
    ),
    SlotContract::new(
        "obstacleSpawner",
        SlotKind::Pure,
        "Generate pipe/obstacle gaps at intervals",
    ),
    SlotContract::new(
        "scoring",
        SlotKind::Pure,
        "Points calculation per obstacle passed",
    ),
    SlotContract::new(
        "difficultyScaling",
        SlotKind::Policy,
        "Adjust gap size and speed over time",
    ),
];

pub const SYSTEM: SystemDescriptor = SystemDescriptor {
    id: SYSTEM_ID,
    version: SYSTEM_VERSION,
    contracts: CONTRACTS,
};

pub fn slot_implementations() -> Vec<BoxedSlot> {
    vec![
        STANDARD_JUMP.boxed(),
        FLOATY_JUMP.boxed(),
        RANDOM_PIPES.boxed(),
        PROGRESSIVE_PIPES.boxed(),
        POINT_PER_PIPE.boxed(),
        DISTANCE_SCORING.boxed(),
        LINEAR_DIFFICULTY.boxed(),
        STEPPED_DIFFICULTY.boxed(),
    ]
}

/// Register the system and its implementations; safe to call repeatedly
///
/// # Errors
///
/// Fails if a conflicting system or implementation is already registered
/// under one of these ids.
pub fn register_obstacle_runner_slot_implementations(
    registry: &mut SlotRegistry,
) -> Result<usize, SlotError> {
    registry.register_system(SYSTEM)?;
    registry.register_all(slot_implementations())
}
