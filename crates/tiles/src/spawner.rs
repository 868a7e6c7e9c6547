//! Tile spawner - which piece type fills an empty cell

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, InputError, SlotContext, SlotImplementation};

use crate::{TileBoard, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Deserialize)]
struct RawTileSpawnInput {
    row: i32,
    col: i32,
    piece_type_count: u32,
    #[serde(default)]
    board: Option<TileBoard>,
}

/// Spawn request for the cell at `(row, col)`; `piece_type_count` is at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTileSpawnInput")]
pub struct TileSpawnInput {
    row: i32,
    col: i32,
    piece_type_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    board: Option<TileBoard>,
}

impl TileSpawnInput {
    pub fn new(row: i32, col: i32, piece_type_count: u32) -> Result<Self, InputError> {
        InputError::check_min("piece_type_count", piece_type_count, 1)?;
        Ok(Self {
            row,
            col,
            piece_type_count,
            board: None,
        })
    }

    pub fn with_board(mut self, board: TileBoard) -> Self {
        self.board = Some(board);
        self
    }

    pub fn piece_type_count(&self) -> u32 {
        self.piece_type_count
    }
}

impl TryFrom<RawTileSpawnInput> for TileSpawnInput {
    type Error = InputError;

    fn try_from(raw: RawTileSpawnInput) -> Result<Self, Self::Error> {
        let input = Self::new(raw.row, raw.col, raw.piece_type_count)?;
        Ok(match raw.board {
            Some(board) => input.with_board(board),
            None => input,
        })
    }
}

slot_signature! {
    /// Determines which piece type to spawn at a given position
    pub TileSpawner: SYSTEM_ID, "pieceSpawner" => TileSpawnInput => u32
}

fn random_uniform(ctx: &mut SlotContext, input: &TileSpawnInput) -> u32 {
    ctx.rng().next_range(input.piece_type_count)
}

pub static RANDOM_UNIFORM: SlotImplementation<TileSpawner> =
    SlotImplementation::new("random_uniform", SYSTEM_VERSION, COMPATIBLE, random_uniform);
