//! Jump impulse

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpInput {
    #[serde(default)]
    pub current_velocity_y: f64,
    #[serde(default)]
    pub is_grounded: bool,
}

/// Upward is negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpOutput {
    pub impulse_y: f64,
}

slot_signature! {
    /// Calculate jump impulse based on input
    pub JumpForce: SYSTEM_ID, "jumpForce" => JumpInput => JumpOutput
}

fn standard_jump(_ctx: &mut SlotContext, _input: &JumpInput) -> JumpOutput {
    JumpOutput { impulse_y: -8.0 }
}

fn floaty_jump(_ctx: &mut SlotContext, _input: &JumpInput) -> JumpOutput {
    JumpOutput { impulse_y: -6.0 }
}

pub static STANDARD_JUMP: SlotImplementation<JumpForce> =
    SlotImplementation::new("standard_jump", SYSTEM_VERSION, COMPATIBLE, standard_jump);

pub static FLOATY_JUMP: SlotImplementation<JumpForce> =
    SlotImplementation::new("floaty_jump", SYSTEM_VERSION, COMPATIBLE, floaty_jump);
