//! Match detection - runs of identical tiles
//!
//! A match is a maximal run of identical non-empty tiles along one line whose
//! length reaches `min_match`. Lines are scanned in a fixed order:
//!
//! 1. rows, top to bottom, each left to right
//! 2. columns, left to right, each top to bottom
//! 3. (`diagonal_match` only) down-right diagonals, then down-left diagonals,
//!    each group ordered by the run's first cell
//!
//! A cell may belong to several matches (an L or T shape yields one row run
//! and one column run).

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, InputError, SlotContext, SlotImplementation};

use crate::types::CellPos;
use crate::{TileBoard, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

/// Default minimum run length
pub const DEFAULT_MIN_MATCH: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub cells: Vec<CellPos>,
    pub piece_type: u32,
}

#[derive(Deserialize)]
struct RawMatchInput {
    board: TileBoard,
    #[serde(default)]
    rows: Option<usize>,
    #[serde(default)]
    cols: Option<usize>,
    #[serde(default = "default_min_match")]
    min_match: u32,
}

fn default_min_match() -> u32 {
    DEFAULT_MIN_MATCH
}

/// Match detection request
///
/// Declared `rows`/`cols`, when present, must agree with the board, and
/// `min_match` must be at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchInput")]
pub struct MatchInput {
    board: TileBoard,
    rows: usize,
    cols: usize,
    min_match: u32,
}

impl MatchInput {
    pub fn new(board: TileBoard, min_match: u32) -> Result<Self, InputError> {
        InputError::check_min("min_match", min_match, 1)?;
        Ok(Self {
            rows: board.rows(),
            cols: board.cols(),
            board,
            min_match,
        })
    }

    pub fn board(&self) -> &TileBoard {
        &self.board
    }

    pub fn min_match(&self) -> u32 {
        self.min_match
    }
}

impl TryFrom<RawMatchInput> for MatchInput {
    type Error = InputError;

    fn try_from(raw: RawMatchInput) -> Result<Self, Self::Error> {
        let rows = raw.rows.unwrap_or(raw.board.rows());
        let cols = raw.cols.unwrap_or(raw.board.cols());
        if rows != raw.board.rows() || cols != raw.board.cols() {
            return Err(InputError::DimensionMismatch {
                rows,
                cols,
                grid_rows: raw.board.rows(),
                grid_cols: raw.board.cols(),
            });
        }
        Self::new(raw.board, raw.min_match)
    }
}

slot_signature! {
    /// Detects matches on the board and returns matched cell groups
    pub MatchDetection: SYSTEM_ID, "matchDetection" => MatchInput => Vec<Match>
}

/// Cells from `start` stepping by `(d_row, d_col)` until leaving the board
fn walk(
    board: &TileBoard,
    start: CellPos,
    d_row: i32,
    d_col: i32,
) -> impl Iterator<Item = CellPos> {
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;
    std::iter::successors(Some(start), move |p| {
        Some(CellPos::new(p.row + d_row, p.col + d_col))
    })
    .take_while(move |p| (0..rows).contains(&p.row) && (0..cols).contains(&p.col))
}

/// Append every qualifying maximal run along one line
fn line_runs(
    board: &TileBoard,
    line: impl Iterator<Item = CellPos>,
    min_match: usize,
    out: &mut Vec<Match>,
) {
    let mut run: Vec<CellPos> = Vec::new();
    let mut run_type: Option<u32> = None;

    for pos in line {
        let tile = board.get_signed(pos.row, pos.col).copied().flatten();
        if tile != run_type {
            flush(&mut run, run_type, min_match, out);
            run_type = tile;
        }
        if tile.is_some() {
            run.push(pos);
        }
    }
    flush(&mut run, run_type, min_match, out);
}

fn flush(run: &mut Vec<CellPos>, run_type: Option<u32>, min_match: usize, out: &mut Vec<Match>) {
    if let Some(piece_type) = run_type {
        if run.len() >= min_match {
            out.push(Match {
                cells: std::mem::take(run),
                piece_type,
            });
            return;
        }
    }
    run.clear();
}

/// Row runs followed by column runs
pub fn find_line_matches(board: &TileBoard, min_match: u32) -> Vec<Match> {
    let min_match = min_match as usize;
    let mut matches = Vec::new();
    for row in 0..board.rows() as i32 {
        line_runs(board, walk(board, CellPos::new(row, 0), 0, 1), min_match, &mut matches);
    }
    for col in 0..board.cols() as i32 {
        line_runs(board, walk(board, CellPos::new(0, col), 1, 0), min_match, &mut matches);
    }
    matches
}

/// Runs along every diagonal with column step `d_col` (1 = down-right, -1 = down-left)
pub fn find_diagonal_matches(board: &TileBoard, min_match: u32, d_col: i32) -> Vec<Match> {
    let min_match = min_match as usize;
    let edge_col = if d_col > 0 { 0 } else { board.cols() as i32 - 1 };
    let starts = (0..board.cols() as i32)
        .map(|col| CellPos::new(0, col))
        .chain((1..board.rows() as i32).map(|row| CellPos::new(row, edge_col)));

    let mut matches = Vec::new();
    for start in starts {
        line_runs(board, walk(board, start, 1, d_col), min_match, &mut matches);
    }
    matches.sort_by_key(|m| m.cells.first().map(|c| (c.row, c.col)));
    matches
}

fn standard_3_match(_ctx: &mut SlotContext, input: &MatchInput) -> Vec<Match> {
    find_line_matches(&input.board, input.min_match)
}

fn diagonal_match(_ctx: &mut SlotContext, input: &MatchInput) -> Vec<Match> {
    let mut matches = find_line_matches(&input.board, input.min_match);
    matches.extend(find_diagonal_matches(&input.board, input.min_match, 1));
    matches.extend(find_diagonal_matches(&input.board, input.min_match, -1));
    matches
}

/// Horizontal and vertical runs
pub static STANDARD_3_MATCH: SlotImplementation<MatchDetection> = SlotImplementation::new(
    "standard_3_match",
    SYSTEM_VERSION,
    COMPATIBLE,
    standard_3_match,
);

/// Horizontal, vertical and diagonal runs
pub static DIAGONAL_MATCH: SlotImplementation<MatchDetection> =
    SlotImplementation::new("diagonal_match", SYSTEM_VERSION, COMPATIBLE, diagonal_match);
