//! Swap rules - which cell pairs may be exchanged

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::types::CellPos;
use crate::{TileBoard, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapInput {
    pub cell_a: CellPos,
    pub cell_b: CellPos,
    /// Current board, for rules that inspect tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<TileBoard>,
}

impl SwapInput {
    pub fn new(cell_a: CellPos, cell_b: CellPos) -> Self {
        Self {
            cell_a,
            cell_b,
            board: None,
        }
    }
}

slot_signature! {
    /// Validates whether a swap between two cells is allowed
    pub SwapRule: SYSTEM_ID, "swapRule" => SwapInput => bool
}

fn adjacent_only(_ctx: &mut SlotContext, input: &SwapInput) -> bool {
    input.cell_a.manhattan(&input.cell_b) == 1
}

/// Orthogonal neighbours only
pub static ADJACENT_ONLY: SlotImplementation<SwapRule> =
    SlotImplementation::new("adjacent_only", SYSTEM_VERSION, COMPATIBLE, adjacent_only);
