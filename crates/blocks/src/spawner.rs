//! Piece spawners - choose the next piece type
//!
//! Spawners are pure: the caller passes the current bag and gets the updated
//! bag back. Randomness comes from the slot context.

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SimpleRng, SlotContext, SlotImplementation};

use crate::types::PieceKind;
use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnInput {
    /// Previously spawned pieces, oldest first
    #[serde(default)]
    pub history: Vec<PieceKind>,
    /// Pieces remaining in the current bag, next first
    #[serde(default)]
    pub bag: Vec<PieceKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnOutput {
    pub next_piece: PieceKind,
    pub updated_bag: Vec<PieceKind>,
}

slot_signature! {
    /// Determines which piece type to spawn next
    pub PieceSpawner: SYSTEM_ID, "pieceSpawner" => SpawnInput => SpawnOutput
}

/// A full bag: one of each piece, shuffled
pub fn fresh_bag(rng: &mut SimpleRng) -> Vec<PieceKind> {
    let mut bag = PieceKind::ALL.to_vec();
    rng.shuffle(&mut bag);
    bag
}

fn random_7_bag(ctx: &mut SlotContext, input: &SpawnInput) -> SpawnOutput {
    let mut bag = input.bag.clone();
    if bag.is_empty() {
        bag = fresh_bag(ctx.rng());
    }

    // A fresh bag always holds seven pieces
    let next_piece = bag.remove(0);
    SpawnOutput {
        next_piece,
        updated_bag: bag,
    }
}

fn pure_random(ctx: &mut SlotContext, input: &SpawnInput) -> SpawnOutput {
    let next_piece = PieceKind::ALL[ctx.rng().next_index(PieceKind::ALL.len())];
    SpawnOutput {
        next_piece,
        updated_bag: input.bag.clone(),
    }
}

/// Draw from a bag of all seven pieces, refilling only when empty
pub static RANDOM_7_BAG: SlotImplementation<PieceSpawner> =
    SlotImplementation::new("random_7_bag", SYSTEM_VERSION, COMPATIBLE, random_7_bag);

/// Uniform draw with replacement; the bag is passed through untouched
pub static PURE_RANDOM: SlotImplementation<PieceSpawner> =
    SlotImplementation::new("pure_random", SYSTEM_VERSION, COMPATIBLE, pure_random);
