//! Card flipping policies
//!
//! A policy answers one tap. With a threshold of `n` face-up cards:
//!
//! - a missing, face-up or matched card never flips
//! - `n` or more face-up cards are flipped back and the tapped card stays
//!   down (the turn ends)
//! - exactly `n - 1` face-up cards: flip, then check for a match
//! - otherwise just flip

use serde::{Deserialize, Serialize};

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{find_card, Card, COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipInput {
    pub card_id: String,
    pub cards: Vec<Card>,
    /// Ids of face-up, unmatched cards, in flip order
    #[serde(default)]
    pub currently_flipped: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_flipped: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipOutput {
    pub should_flip: bool,
    pub cards_to_flip_back: Vec<String>,
    pub check_for_match: bool,
}

slot_signature! {
    /// How cards flip (single reveal, double reveal)
    pub CardFlipping: SYSTEM_ID, "cardFlipping" => FlipInput => FlipOutput
}

/// Apply the tap rule for a face-up `threshold`
pub fn flip_with_threshold(input: &FlipInput, threshold: usize) -> FlipOutput {
    let tappable = find_card(&input.cards, &input.card_id)
        .is_some_and(|card| !card.is_flipped && !card.is_matched);
    if !tappable {
        return FlipOutput::default();
    }

    let face_up = input.currently_flipped.len();
    if face_up >= threshold {
        return FlipOutput {
            should_flip: false,
            cards_to_flip_back: input.currently_flipped.clone(),
            check_for_match: false,
        };
    }

    FlipOutput {
        should_flip: true,
        cards_to_flip_back: Vec::new(),
        check_for_match: face_up + 1 == threshold,
    }
}

fn two_card_flip(_ctx: &mut SlotContext, input: &FlipInput) -> FlipOutput {
    flip_with_threshold(input, 2)
}

fn one_card_flip(_ctx: &mut SlotContext, input: &FlipInput) -> FlipOutput {
    flip_with_threshold(input, 1)
}

pub static TWO_CARD_FLIP: SlotImplementation<CardFlipping> =
    SlotImplementation::new("two_card_flip", SYSTEM_VERSION, COMPATIBLE, two_card_flip);

pub static ONE_CARD_FLIP: SlotImplementation<CardFlipping> =
    SlotImplementation::new("one_card_flip", SYSTEM_VERSION, COMPATIBLE, one_card_flip);
