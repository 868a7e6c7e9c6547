//! Run scoring

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

/// Distance units per point under `distance_scoring`
pub const DISTANCE_PER_POINT: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunScoreInput {
    #[serde(default)]
    pub obstacles_passed: u32,
    #[serde(default)]
    pub distance_traveled: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunScoreOutput {
    pub points: u32,
}

slot_signature! {
    /// Points calculation per obstacle passed
    pub RunScoring: SYSTEM_ID, "scoring" => RunScoreInput => RunScoreOutput
}

fn point_per_pipe(_ctx: &mut SlotContext, input: &RunScoreInput) -> RunScoreOutput {
    RunScoreOutput {
        points: input.obstacles_passed,
    }
}

fn distance_scoring(_ctx: &mut SlotContext, input: &RunScoreInput) -> RunScoreOutput {
    // Saturating float-to-int cast; negative distance scores zero
    RunScoreOutput {
        points: (input.distance_traveled / DISTANCE_PER_POINT).floor() as u32,
    }
}

pub static POINT_PER_PIPE: SlotImplementation<RunScoring> =
    SlotImplementation::new("point_per_pipe", SYSTEM_VERSION, COMPATIBLE, point_per_pipe);

pub static DISTANCE_SCORING: SlotImplementation<RunScoring> = SlotImplementation::new(
    "distance_scoring",
    SYSTEM_VERSION,
    COMPATIBLE,
    distance_scoring,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn score(rule: &SlotImplementation<RunScoring>, passed: u32, distance: f64) -> u32 {
        let input = RunScoreInput {
            obstacles_passed: passed,
            distance_traveled: distance,
        };
        rule.run(&mut SlotContext::default(), &input).points
    }

    #[test]
    fn test_point_per_pipe() {
        assert_eq!(score(&POINT_PER_PIPE, 7, 999.0), 7);
    }

    #[test]
    fn test_distance_scoring_floors() {
        assert_eq!(score(&DISTANCE_SCORING, 7, 0.0), 0);
        assert_eq!(score(&DISTANCE_SCORING, 7, 9.99), 0);
        assert_eq!(score(&DISTANCE_SCORING, 0, 125.0), 12);
        assert_eq!(score(&DISTANCE_SCORING, 0, -5.0), 0);
    }
}
