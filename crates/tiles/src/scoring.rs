//! Match scoring

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

/// Points per matched tile
pub const POINTS_PER_TILE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub match_size: u32,
    /// 1 for the player's own match, +1 per chained cascade
    pub cascade_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_type: Option<u32>,
}

impl ScoreInput {
    pub fn new(match_size: u32, cascade_level: u32) -> Self {
        Self {
            match_size,
            cascade_level,
            piece_type: None,
        }
    }
}

slot_signature! {
    /// Calculates score for a match based on size and cascade level
    pub MatchScoring: SYSTEM_ID, "scoring" => ScoreInput => u32
}

fn cascade_multiplier(_ctx: &mut SlotContext, input: &ScoreInput) -> u32 {
    input
        .match_size
        .saturating_mul(POINTS_PER_TILE)
        .saturating_mul(input.cascade_level)
}

fn fixed_score(_ctx: &mut SlotContext, input: &ScoreInput) -> u32 {
    input.match_size.saturating_mul(POINTS_PER_TILE)
}

pub static CASCADE_MULTIPLIER: SlotImplementation<MatchScoring> = SlotImplementation::new(
    "cascade_multiplier",
    SYSTEM_VERSION,
    COMPATIBLE,
    cascade_multiplier,
);

pub static FIXED_SCORE: SlotImplementation<MatchScoring> =
    SlotImplementation::new("fixed_score", SYSTEM_VERSION, COMPATIBLE, fixed_score);
