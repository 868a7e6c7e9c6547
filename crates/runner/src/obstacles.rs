//! Obstacle spawners - pipe gaps
//!
//! The gap centre is drawn uniformly from `[min_gap_y, max_gap_y)` using the
//! slot context's generator.

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SimpleRng, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, MIN_GAP_SIZE, SYSTEM_ID, SYSTEM_VERSION};

pub const PIPE_WIDTH: f64 = 1.5;

/// Largest fraction of the gap `progressive_pipes` removes
pub const MAX_SHRINK: f64 = 0.3;
pub const SHRINK_PER_POINT: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleInput {
    #[serde(default)]
    pub world_height: f64,
    pub min_gap_y: f64,
    pub max_gap_y: f64,
    pub gap_size: f64,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub elapsed_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleOutput {
    pub gap_center_y: f64,
    pub gap_size: f64,
    pub pipe_width: f64,
}

slot_signature! {
    /// Generate pipe/obstacle gaps at intervals
    pub ObstacleSpawner: SYSTEM_ID, "obstacleSpawner" => ObstacleInput => ObstacleOutput
}

fn gap_center(rng: &mut SimpleRng, input: &ObstacleInput) -> f64 {
    input.min_gap_y + rng.next_f64() * (input.max_gap_y - input.min_gap_y)
}

/// Gap size after shrinking for `score`
pub fn progressive_gap(gap_size: f64, score: u32) -> f64 {
    let shrink = (f64::from(score) * SHRINK_PER_POINT).min(MAX_SHRINK);
    (gap_size * (1.0 - shrink)).max(MIN_GAP_SIZE)
}

fn random_pipes(ctx: &mut SlotContext, input: &ObstacleInput) -> ObstacleOutput {
    ObstacleOutput {
        gap_center_y: gap_center(ctx.rng(), input),
        gap_size: input.gap_size,
        pipe_width: PIPE_WIDTH,
    }
}

fn progressive_pipes(ctx: &mut SlotContext, input: &ObstacleInput) -> ObstacleOutput {
    ObstacleOutput {
        gap_center_y: gap_center(ctx.rng(), input),
        gap_size: progressive_gap(input.gap_size, input.score),
        pipe_width: PIPE_WIDTH,
    }
}

pub static RANDOM_PIPES: SlotImplementation<ObstacleSpawner> =
    SlotImplementation::new("random_pipes", SYSTEM_VERSION, COMPATIBLE, random_pipes);

/// Gaps shrink as the score grows
pub static PROGRESSIVE_PIPES: SlotImplementation<ObstacleSpawner> = SlotImplementation::new(
    "progressive_pipes",
    SYSTEM_VERSION,
    COMPATIBLE,
    progressive_pipes,
);
