//! Line clearing - find completed rows

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{Board, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineClearInput {
    pub board: Board,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineClearOutput {
    /// Ascending row indices
    pub cleared_lines: Vec<usize>,
    pub lines_cleared: usize,
}

slot_signature! {
    /// Detects and returns indices of completed lines to clear
    pub LineClearing: SYSTEM_ID, "lineClearing" => LineClearInput => LineClearOutput
}

/// Rows where every cell is filled, top to bottom
pub fn full_rows(board: &Board) -> Vec<usize> {
    board
        .iter_rows()
        .enumerate()
        .filter(|(_, row)| row.iter().all(Option::is_some))
        .map(|(y, _)| y)
        .collect()
}

fn standard_line_clear(_ctx: &mut SlotContext, input: &LineClearInput) -> LineClearOutput {
    let cleared_lines = full_rows(&input.board);
    LineClearOutput {
        lines_cleared: cleared_lines.len(),
        cleared_lines,
    }
}

pub static STANDARD_LINE_CLEAR: SlotImplementation<LineClearing> = SlotImplementation::new(
    "standard_line_clear",
    SYSTEM_VERSION,
    COMPATIBLE,
    standard_line_clear,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;
    use game_slots_core::Grid;

    fn clear(board: Board) -> LineClearOutput {
        STANDARD_LINE_CLEAR.run(&mut SlotContext::default(), &LineClearInput { board })
    }

    #[test]
    fn test_empty_board_clears_nothing() {
        let out = clear(Grid::new(20, 10, None));
        assert!(out.cleared_lines.is_empty());
        assert_eq!(out.lines_cleared, 0);
    }

    #[test]
    fn test_full_rows_reported_ascending() {
        let mut board = Grid::new(6, 4, None);
        for y in [1, 4, 5] {
            for x in 0..4 {
                board.set(y, x, Some(PieceKind::I));
            }
        }
        // Almost full row stays.
        for x in 0..3 {
            board.set(2, x, Some(PieceKind::T));
        }

        let out = clear(board);
        assert_eq!(out.cleared_lines, vec![1, 4, 5]);
        assert_eq!(out.lines_cleared, 3);
    }

    #[test]
    fn test_board_is_not_modified() {
        let board = Grid::new(2, 2, Some(PieceKind::O));
        let input = LineClearInput {
            board: board.clone(),
        };
        let out = STANDARD_LINE_CLEAR.run(&mut SlotContext::default(), &input);
        assert_eq!(out.lines_cleared, 2);
        assert_eq!(input.board, board);
    }
}
