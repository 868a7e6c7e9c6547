//! Timer rules - remaining time and time-up
//!
//! Times are in seconds. An unlimited timer reports no remaining time at all
//! (`remaining_time: null` in JSON) rather than an infinite value.

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerInput {
    pub elapsed_time: f64,
    pub time_limit: f64,
    #[serde(default)]
    pub wrong_matches: u32,
    #[serde(default)]
    pub penalty_per_wrong: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerOutput {
    /// `None` when the timer is unlimited
    pub remaining_time: Option<f64>,
    pub is_time_up: bool,
    pub display_time: f64,
}

impl TimerOutput {
    fn countdown(remaining: f64) -> Self {
        Self {
            remaining_time: Some(remaining),
            is_time_up: remaining <= 0.0,
            display_time: remaining,
        }
    }
}

slot_signature! {
    /// Time limits and penalties
    pub TimerRule: SYSTEM_ID, "timerRule" => TimerInput => TimerOutput
}

fn no_timer(_ctx: &mut SlotContext, _input: &TimerInput) -> TimerOutput {
    TimerOutput {
        remaining_time: None,
        is_time_up: false,
        display_time: 0.0,
    }
}

fn countdown_timer(_ctx: &mut SlotContext, input: &TimerInput) -> TimerOutput {
    TimerOutput::countdown((input.time_limit - input.elapsed_time).max(0.0))
}

fn penalty_timer(_ctx: &mut SlotContext, input: &TimerInput) -> TimerOutput {
    let penalty = f64::from(input.wrong_matches) * input.penalty_per_wrong;
    TimerOutput::countdown((input.time_limit - (input.elapsed_time + penalty)).max(0.0))
}

pub static NO_TIMER: SlotImplementation<TimerRule> =
    SlotImplementation::new("no_timer", SYSTEM_VERSION, COMPATIBLE, no_timer);

pub static COUNTDOWN_TIMER: SlotImplementation<TimerRule> =
    SlotImplementation::new("countdown_timer", SYSTEM_VERSION, COMPATIBLE, countdown_timer);

/// Countdown where each wrong match costs `penalty_per_wrong` seconds
pub static PENALTY_TIMER: SlotImplementation<TimerRule> =
    SlotImplementation::new("penalty_timer", SYSTEM_VERSION, COMPATIBLE, penalty_timer);

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(rule: &SlotImplementation<TimerRule>, elapsed: f64, limit: f64, wrong: u32, penalty: f64) -> TimerOutput {
        let input = TimerInput {
            elapsed_time: elapsed,
            time_limit: limit,
            wrong_matches: wrong,
            penalty_per_wrong: penalty,
        };
        rule.run(&mut SlotContext::default(), &input)
    }

    #[test]
    fn test_no_timer_never_ends() {
        let out = timer(&NO_TIMER, 1e9, 10.0, 50, 5.0);
        assert_eq!(out.remaining_time, None);
        assert!(!out.is_time_up);

        let json = serde_json::to_value(out).unwrap();
        assert!(json["remaining_time"].is_null());
    }

    #[test]
    fn test_countdown() {
        let out = timer(&COUNTDOWN_TIMER, 12.5, 60.0, 3, 5.0);
        assert_eq!(out.remaining_time, Some(47.5));
        assert_eq!(out.display_time, 47.5);
        assert!(!out.is_time_up);

        let out = timer(&COUNTDOWN_TIMER, 75.0, 60.0, 0, 0.0);
        assert_eq!(out.remaining_time, Some(0.0));
        assert!(out.is_time_up);

        assert!(timer(&COUNTDOWN_TIMER, 60.0, 60.0, 0, 0.0).is_time_up);
    }

    #[test]
    fn test_time_limit_is_required() {
        let missing = serde_json::from_value::<TimerInput>(serde_json::json!({ "elapsed_time": 5.0 }));
        assert!(missing.is_err());

        let input: TimerInput = serde_json::from_value(serde_json::json!({
            "elapsed_time": 5.0,
            "time_limit": 30.0
        }))
        .unwrap();
        assert_eq!(input.wrong_matches, 0);
        let out = COUNTDOWN_TIMER.run(&mut SlotContext::default(), &input);
        assert_eq!(out.remaining_time, Some(25.0));
        assert!(!out.is_time_up);
    }

    #[test]
    fn test_penalty_folds_into_elapsed() {
        let out = timer(&PENALTY_TIMER, 20.0, 60.0, 3, 5.0);
        assert_eq!(out.remaining_time, Some(25.0));

        let out = timer(&PENALTY_TIMER, 20.0, 60.0, 10, 5.0);
        assert_eq!(out.remaining_time, Some(0.0));
        assert!(out.is_time_up);
    }
}
