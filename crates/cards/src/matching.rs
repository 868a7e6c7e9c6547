//! Match logic - do the flipped cards form a set

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{find_card, Card, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

pub const PAIR_SCORE: u32 = 100;
pub const TRIPLE_SCORE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMatchInput {
    pub flipped_card_ids: Vec<String>,
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_matches: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMatchOutput {
    pub is_match: bool,
    pub matched_card_ids: Vec<String>,
    pub score: u32,
}

slot_signature! {
    /// What constitutes a match (pair, triple, symbol)
    pub MatchLogic: SYSTEM_ID, "matchLogic" => CardMatchInput => CardMatchOutput
}

/// Compare the first `size` flipped cards that exist; all must share a symbol
pub fn match_set(input: &CardMatchInput, size: usize, score: u32) -> CardMatchOutput {
    let set: Vec<&Card> = input
        .flipped_card_ids
        .iter()
        .filter_map(|id| find_card(&input.cards, id))
        .take(size)
        .collect();

    if set.len() < size || set.iter().any(|card| card.symbol != set[0].symbol) {
        return CardMatchOutput::default();
    }

    CardMatchOutput {
        is_match: true,
        matched_card_ids: set.iter().map(|card| card.id.clone()).collect(),
        score,
    }
}

fn pair_match(_ctx: &mut SlotContext, input: &CardMatchInput) -> CardMatchOutput {
    match_set(input, 2, PAIR_SCORE)
}

fn triple_match(_ctx: &mut SlotContext, input: &CardMatchInput) -> CardMatchOutput {
    match_set(input, 3, TRIPLE_SCORE)
}

pub static PAIR_MATCH: SlotImplementation<MatchLogic> =
    SlotImplementation::new("pair_match", SYSTEM_VERSION, COMPATIBLE, pair_match);

pub static TRIPLE_MATCH: SlotImplementation<MatchLogic> =
    SlotImplementation::new("triple_match", SYSTEM_VERSION, COMPATIBLE, triple_match);
