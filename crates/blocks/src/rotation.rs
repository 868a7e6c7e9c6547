//! Rotation rules - resolve a rotation request against the board
//!
//! A rule computes the target rotation state and tries a list of position
//! offsets in order. The first placement that stays inside the side walls and
//! floor without overlapping a filled cell wins. Cells above the board
//! (`y < 0`) never collide.

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::pieces::{get_shape, guideline_kick_table, kicks_for, MinoOffset, STANDARD_KICKS};
use crate::types::{PieceKind, Rotation, RotationDirection};
use crate::{Board, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Board cells `(x, y)` covered by this piece
    pub fn cells(&self) -> [(i32, i32); 4] {
        get_shape(self.kind, self.rotation).map(|(dx, dy)| {
            (
                self.x.saturating_add(i32::from(dx)),
                self.y.saturating_add(i32::from(dy)),
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationInput {
    pub piece: Piece,
    pub board: Board,
    pub direction: RotationDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationOutput {
    pub success: bool,
    pub new_rotation: Rotation,
    pub new_x: i32,
    pub new_y: i32,
}

impl RotationOutput {
    fn rejected(piece: &Piece) -> Self {
        Self {
            success: false,
            new_rotation: piece.rotation,
            new_x: piece.x,
            new_y: piece.y,
        }
    }
}

slot_signature! {
    /// Determines how pieces rotate, including wall kick behavior
    pub RotationRule: SYSTEM_ID, "rotationRule" => RotationInput => RotationOutput
}

/// Whether `kind` at `rotation` placed at `(x, y)` hits a wall, the floor or a filled cell
pub fn collides(board: &Board, kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> bool {
    let cols = board.cols() as i32;
    let rows = board.rows() as i32;
    get_shape(kind, rotation).iter().any(|&(dx, dy)| {
        // A cell past the i32 range is off the board.
        let (Some(bx), Some(by)) = (x.checked_add(i32::from(dx)), y.checked_add(i32::from(dy)))
        else {
            return true;
        };
        if bx < 0 || bx >= cols || by >= rows {
            return true;
        }
        by >= 0 && matches!(board.get_signed(by, bx), Some(Some(_)))
    })
}

/// Try each offset in order; first non-colliding placement wins
pub fn try_rotate(input: &RotationInput, kicks: &[MinoOffset]) -> RotationOutput {
    let RotationInput {
        piece,
        board,
        direction,
    } = input;
    let new_rotation = direction.apply(piece.rotation);

    for &(dx, dy) in kicks {
        let (Some(new_x), Some(new_y)) = (
            piece.x.checked_add(i32::from(dx)),
            piece.y.checked_add(i32::from(dy)),
        ) else {
            continue;
        };
        if !collides(board, piece.kind, new_rotation, new_x, new_y) {
            return RotationOutput {
                success: true,
                new_rotation,
                new_x,
                new_y,
            };
        }
    }

    RotationOutput::rejected(piece)
}

fn target(input: &RotationInput) -> (Rotation, Rotation) {
    (input.piece.rotation, input.direction.apply(input.piece.rotation))
}

fn standard_rotation(_ctx: &mut SlotContext, input: &RotationInput) -> RotationOutput {
    let (from, to) = target(input);
    try_rotate(input, kicks_for(&STANDARD_KICKS, from, to))
}

fn no_wall_kick_rotation(_ctx: &mut SlotContext, input: &RotationInput) -> RotationOutput {
    try_rotate(input, &[(0, 0)])
}

fn srs_rotation(_ctx: &mut SlotContext, input: &RotationInput) -> RotationOutput {
    let (from, to) = target(input);
    try_rotate(
        input,
        kicks_for(guideline_kick_table(input.piece.kind), from, to),
    )
}

/// One kick table for every piece
pub static STANDARD_ROTATION: SlotImplementation<RotationRule> = SlotImplementation::new(
    "standard_rotation",
    SYSTEM_VERSION,
    COMPATIBLE,
    standard_rotation,
);

/// Rotate in place or not at all
pub static NO_WALL_KICK_ROTATION: SlotImplementation<RotationRule> = SlotImplementation::new(
    "no_wall_kick_rotation",
    SYSTEM_VERSION,
    COMPATIBLE,
    no_wall_kick_rotation,
);

/// Guideline kicks: the I piece has its own table and the O piece never kicks
pub static SRS_ROTATION: SlotImplementation<RotationRule> =
    SlotImplementation::new("srs_rotation", SYSTEM_VERSION, COMPATIBLE, srs_rotation);
