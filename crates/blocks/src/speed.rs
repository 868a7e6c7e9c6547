//! Drop speed - gravity by level
//!
//! | Rule                   | Frames per drop                              |
//! |------------------------|----------------------------------------------|
//! | `level_based_speed`    | `max(1, 48 - (level - 1) * 5)`               |
//! | `fixed_speed`          | 30                                           |
//! | `interval_table_speed` | millisecond table by level, 120ms past it    |
//!
//! Frames are counted at 60 fps.

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::types::{DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, FRAMES_PER_SECOND};
use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSpeedInput {
    pub level: u32,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub lines_cleared: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropSpeedOutput {
    pub frames_per_drop: u32,
    pub cells_per_second: f64,
}

impl DropSpeedOutput {
    fn from_frames(frames_per_drop: u32) -> Self {
        Self {
            frames_per_drop,
            cells_per_second: f64::from(FRAMES_PER_SECOND) / f64::from(frames_per_drop),
        }
    }
}

slot_signature! {
    /// Calculates drop speed based on level and score
    pub DropSpeed: SYSTEM_ID, "dropSpeed" => DropSpeedInput => DropSpeedOutput
}

const BASE_FRAMES: i64 = 48;
const FRAMES_PER_LEVEL: i64 = 5;
const FIXED_FRAMES: u32 = 30;

/// Gravity interval in milliseconds for a level
pub fn drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

fn level_based_speed(_ctx: &mut SlotContext, input: &DropSpeedInput) -> DropSpeedOutput {
    let frames = (BASE_FRAMES - (i64::from(input.level) - 1) * FRAMES_PER_LEVEL).max(1);
    DropSpeedOutput::from_frames(frames as u32)
}

fn fixed_speed(_ctx: &mut SlotContext, _input: &DropSpeedInput) -> DropSpeedOutput {
    DropSpeedOutput::from_frames(FIXED_FRAMES)
}

fn interval_table_speed(_ctx: &mut SlotContext, input: &DropSpeedInput) -> DropSpeedOutput {
    let interval = drop_interval_ms(input.level);
    let frames = (f64::from(interval) * f64::from(FRAMES_PER_SECOND) / 1000.0).round() as u32;
    DropSpeedOutput {
        frames_per_drop: frames.max(1),
        cells_per_second: 1000.0 / f64::from(interval),
    }
}

pub static LEVEL_BASED_SPEED: SlotImplementation<DropSpeed> = SlotImplementation::new(
    "level_based_speed",
    SYSTEM_VERSION,
    COMPATIBLE,
    level_based_speed,
);

pub static FIXED_SPEED: SlotImplementation<DropSpeed> =
    SlotImplementation::new("fixed_speed", SYSTEM_VERSION, COMPATIBLE, fixed_speed);

pub static INTERVAL_TABLE_SPEED: SlotImplementation<DropSpeed> = SlotImplementation::new(
    "interval_table_speed",
    SYSTEM_VERSION,
    COMPATIBLE,
    interval_table_speed,
);
