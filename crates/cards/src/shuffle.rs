//! Card shufflers - lay a symbol pool out on the board
//!
//! Cells are filled in row-major order. When the pool is larger than the
//! board the layout is truncated at `rows * cols`; when it is smaller the
//! trailing cells stay empty.
//!
//! Randomness comes from the slot context unless the input carries its own
//! `seed`, in which case the layout depends on that seed alone.

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SimpleRng, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleInput {
    pub symbols: Vec<u32>,
    pub rows: usize,
    pub cols: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedSymbol {
    pub row: usize,
    pub col: usize,
    pub symbol: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOutput {
    pub layout: Vec<PlacedSymbol>,
}

slot_signature! {
    /// Distribution algorithm for card placement
    pub CardShuffler: SYSTEM_ID, "cardShuffler" => ShuffleInput => ShuffleOutput
}

/// Place `symbols` into cells in row-major order
pub fn lay_out(symbols: impl IntoIterator<Item = u32>, rows: usize, cols: usize) -> Vec<PlacedSymbol> {
    let cells = (0..rows).flat_map(|row| (0..cols).map(move |col| (row, col)));
    cells
        .zip(symbols)
        .map(|((row, col), symbol)| PlacedSymbol { row, col, symbol })
        .collect()
}

fn with_rng<T>(ctx: &mut SlotContext, seed: Option<u32>, f: impl FnOnce(&mut SimpleRng) -> T) -> T {
    match seed {
        Some(seed) => f(&mut SimpleRng::new(seed)),
        None => f(ctx.rng()),
    }
}

fn fisher_yates_shuffle(ctx: &mut SlotContext, input: &ShuffleInput) -> ShuffleOutput {
    let mut symbols = input.symbols.clone();
    with_rng(ctx, input.seed, |rng| rng.shuffle(&mut symbols));
    ShuffleOutput {
        layout: lay_out(symbols, input.rows, input.cols),
    }
}

/// Symbols with their counts, in order of first appearance
fn group_symbols(symbols: &[u32]) -> Vec<(u32, usize)> {
    let mut groups: Vec<(u32, usize)> = Vec::new();
    for &symbol in symbols {
        match groups.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, count)) => *count += 1,
            None => groups.push((symbol, 1)),
        }
    }
    groups
}

fn clustered_shuffle(ctx: &mut SlotContext, input: &ShuffleInput) -> ShuffleOutput {
    let mut groups = group_symbols(&input.symbols);
    with_rng(ctx, input.seed, |rng| rng.shuffle(&mut groups));
    let symbols = groups
        .into_iter()
        .flat_map(|(symbol, count)| std::iter::repeat(symbol).take(count));
    ShuffleOutput {
        layout: lay_out(symbols, input.rows, input.cols),
    }
}

/// Uniform permutation of the whole pool
pub static FISHER_YATES_SHUFFLE: SlotImplementation<CardShuffler> = SlotImplementation::new(
    "fisher_yates_shuffle",
    SYSTEM_VERSION,
    COMPATIBLE,
    fisher_yates_shuffle,
);

/// Shuffle symbol groups, keeping equal symbols contiguous
pub static CLUSTERED_SHUFFLE: SlotImplementation<CardShuffler> = SlotImplementation::new(
    "clustered_shuffle",
    SYSTEM_VERSION,
    COMPATIBLE,
    clustered_shuffle,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: u32) -> Vec<u32> {
        (0..n).flat_map(|s| [s, s]).collect()
    }

    fn shuffle(rule: &SlotImplementation<CardShuffler>, input: &ShuffleInput, seed: u32) -> ShuffleOutput {
        rule.run(&mut SlotContext::new(seed), input)
    }

    #[test]
    fn test_fisher_yates_is_a_permutation() {
        for seed in 1..40 {
            let input = ShuffleInput {
                symbols: vec![5, 1, 1, 9, 3, 3, 3, 0, 2],
                rows: 3,
                cols: 3,
                seed: None,
            };
            let out = shuffle(&FISHER_YATES_SHUFFLE, &input, seed);
            let mut placed: Vec<u32> = out.layout.iter().map(|p| p.symbol).collect();
            let mut expected = input.symbols.clone();
            placed.sort_unstable();
            expected.sort_unstable();
            assert_eq!(placed, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_layout_is_row_major() {
        let input = ShuffleInput {
            symbols: pairs(3),
            rows: 2,
            cols: 3,
            seed: None,
        };
        let out = shuffle(&FISHER_YATES_SHUFFLE, &input, 4);
        let cells: Vec<(usize, usize)> = out.layout.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_truncated_to_board() {
        let input = ShuffleInput {
            symbols: pairs(4),
            rows: 2,
            cols: 2,
            seed: None,
        };
        assert_eq!(shuffle(&FISHER_YATES_SHUFFLE, &input, 1).layout.len(), 4);
        assert_eq!(shuffle(&CLUSTERED_SHUFFLE, &input, 1).layout.len(), 4);
    }

    #[test]
    fn test_clustered_pairs_are_adjacent() {
        for seed in 1..40 {
            let input = ShuffleInput {
                symbols: pairs(8),
                rows: 4,
                cols: 4,
                seed: None,
            };
            let layout = shuffle(&CLUSTERED_SHUFFLE, &input, seed).layout;
            assert_eq!(layout.len(), 16);
            for symbol in 0..8 {
                let idx: Vec<usize> = layout
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.symbol == symbol)
                    .map(|(i, p)| {
                        assert_eq!(i, p.row * 4 + p.col);
                        i
                    })
                    .collect();
                assert_eq!(idx.len(), 2);
                assert_eq!(idx[1], idx[0] + 1, "seed {seed} symbol {symbol}");
            }
        }
    }

    #[test]
    fn test_clustered_keeps_group_sizes() {
        let input = ShuffleInput {
            symbols: vec![3, 1, 3, 3, 2, 1],
            rows: 2,
            cols: 3,
            seed: None,
        };
        let layout = shuffle(&CLUSTERED_SHUFFLE, &input, 12).layout;
        let count = |s| layout.iter().filter(|p| p.symbol == s).count();
        assert_eq!((count(1), count(2), count(3)), (2, 1, 3));
    }

    #[test]
    fn test_input_seed_overrides_context() {
        let input = ShuffleInput {
            symbols: pairs(8),
            rows: 4,
            cols: 4,
            seed: Some(99),
        };
        let a = shuffle(&FISHER_YATES_SHUFFLE, &input, 1);
        let b = shuffle(&FISHER_YATES_SHUFFLE, &input, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_context_seed_same_layout() {
        let input = ShuffleInput {
            symbols: pairs(6),
            rows: 3,
            cols: 4,
            seed: None,
        };
        assert_eq!(
            shuffle(&CLUSTERED_SHUFFLE, &input, 31),
            shuffle(&CLUSTERED_SHUFFLE, &input, 31)
        );
    }
}
