//! Difficulty scaling - speed and gap size by score
//!
//! | Score  | Stepped speed x | Stepped gap x |
//! |--------|-----------------|---------------|
//! | < 100  | 1.0             | 1.0           |
//! | >= 100 | 1.2             | 0.9           |
//! | >= 200 | 1.4             | 0.8           |
//! | >= 500 | 1.6             | 0.7           |
//!
//! Both rules floor the gap at [`MIN_GAP_SIZE`].

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, MIN_GAP_SIZE, SYSTEM_ID, SYSTEM_VERSION};

pub const SPEED_PER_POINT: f64 = 0.02;
pub const GAP_PER_POINT: f64 = 0.01;

/// `(min score, speed multiplier, gap multiplier)`, highest tier first
const STEPS: [(u32, f64, f64); 3] = [(500, 1.6, 0.7), (200, 1.4, 0.8), (100, 1.2, 0.9)];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyInput {
    pub score: u32,
    #[serde(default)]
    pub elapsed_time: f64,
    pub base_speed: f64,
    pub base_gap_size: f64,
}

impl DifficultyInput {
    pub fn new(score: u32, base_speed: f64, base_gap_size: f64) -> Self {
        Self {
            score,
            elapsed_time: 0.0,
            base_speed,
            base_gap_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyOutput {
    pub speed: f64,
    pub gap_size: f64,
}

slot_signature! {
    /// Adjust gap size and speed over time
    pub DifficultyScaling: SYSTEM_ID, "difficultyScaling" => DifficultyInput => DifficultyOutput
}

fn linear_difficulty(_ctx: &mut SlotContext, input: &DifficultyInput) -> DifficultyOutput {
    let score = f64::from(input.score);
    DifficultyOutput {
        speed: (input.base_speed + score * SPEED_PER_POINT).min(input.base_speed * 2.0),
        gap_size: (input.base_gap_size - score * GAP_PER_POINT).max(MIN_GAP_SIZE),
    }
}

fn stepped_difficulty(_ctx: &mut SlotContext, input: &DifficultyInput) -> DifficultyOutput {
    let (speed_mul, gap_mul) = STEPS
        .iter()
        .find(|(min_score, _, _)| input.score >= *min_score)
        .map_or((1.0, 1.0), |&(_, speed, gap)| (speed, gap));
    DifficultyOutput {
        speed: input.base_speed * speed_mul,
        gap_size: (input.base_gap_size * gap_mul).max(MIN_GAP_SIZE),
    }
}

pub static LINEAR_DIFFICULTY: SlotImplementation<DifficultyScaling> = SlotImplementation::new(
    "linear_difficulty",
    SYSTEM_VERSION,
    COMPATIBLE,
    linear_difficulty,
);

pub static STEPPED_DIFFICULTY: SlotImplementation<DifficultyScaling> = SlotImplementation::new(
    "stepped_difficulty",
    SYSTEM_VERSION,
    COMPATIBLE,
    stepped_difficulty,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(rule: &SlotImplementation<DifficultyScaling>, score: u32, speed: f64, gap: f64) -> DifficultyOutput {
        rule.run(&mut SlotContext::default(), &DifficultyInput::new(score, speed, gap))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_stepped_tiers() {
        let out = scale(&STEPPED_DIFFICULTY, 250, 10.0, 4.0);
        assert!(close(out.speed, 14.0));
        assert!(close(out.gap_size, 3.2));

        let out = scale(&STEPPED_DIFFICULTY, 99, 10.0, 4.0);
        assert_eq!((out.speed, out.gap_size), (10.0, 4.0));

        let out = scale(&STEPPED_DIFFICULTY, 100, 10.0, 4.0);
        assert!(close(out.speed, 12.0));

        let out = scale(&STEPPED_DIFFICULTY, 500, 10.0, 3.0);
        assert!(close(out.speed, 16.0));
        assert_eq!(out.gap_size, MIN_GAP_SIZE);
    }

    #[test]
    fn test_input_json_shape() {
        let input: DifficultyInput = serde_json::from_value(serde_json::json!({
            "score": 250,
            "base_speed": 10.0,
            "base_gap_size": 4.0
        }))
        .unwrap();
        assert_eq!(input, DifficultyInput::new(250, 10.0, 4.0));

        let missing_base = serde_json::from_value::<DifficultyInput>(serde_json::json!({ "score": 1 }));
        assert!(missing_base.is_err());

        let json = serde_json::to_value(scale(&STEPPED_DIFFICULTY, 250, 10.0, 4.0)).unwrap();
        assert!(json["speed"].is_f64());
        assert!(json["gap_size"].is_f64());
    }

    #[test]
    fn test_linear_caps() {
        let out = scale(&LINEAR_DIFFICULTY, 100, 5.0, 6.0);
        assert!(close(out.speed, 7.0));
        assert!(close(out.gap_size, 5.0));

        let out = scale(&LINEAR_DIFFICULTY, 10_000, 5.0, 6.0);
        assert_eq!(out.speed, 10.0);
        assert_eq!(out.gap_size, MIN_GAP_SIZE);
    }
}
