//! Card-match system - slots for a memory game
//!
//! # Slots
//!
//! | Slot           | Kind   | Implementations                               |
//! |----------------|--------|-----------------------------------------------|
//! | `cardFlipping` | policy | `two_card_flip`, `one_card_flip`              |
//! | `matchLogic`   | pure   | `pair_match`, `triple_match`                  |
//! | `cardShuffler` | pure   | `fisher_yates_shuffle`, `clustered_shuffle`   |
//! | `timerRule`    | policy | `no_timer`, `countdown_timer`, `penalty_timer`|

pub mod flip;
pub mod matching;
pub mod shuffle;
pub mod timer;

use serde::{Deserialize, Serialize};

use game_slots_core::types::{CellPos, SlotContract, SlotKind};
use game_slots_core::{
    BoxedSlot, Compatibility, SlotError, SlotRegistry, SystemDescriptor, Version, VersionRange,
};

pub use game_slots_core::types;

pub use flip::{CardFlipping, FlipInput, FlipOutput, ONE_CARD_FLIP, TWO_CARD_FLIP};
pub use matching::{CardMatchInput, CardMatchOutput, MatchLogic, PAIR_MATCH, TRIPLE_MATCH};
pub use shuffle::{
    CardShuffler, PlacedSymbol, ShuffleInput, ShuffleOutput, CLUSTERED_SHUFFLE,
    FISHER_YATES_SHUFFLE,
};
pub use timer::{TimerInput, TimerOutput, TimerRule, COUNTDOWN_TIMER, NO_TIMER, PENALTY_TIMER};

pub const SYSTEM_ID: &str = "memory";
pub const SYSTEM_VERSION: Version = Version::new(1, 0, 0);

pub const COMPATIBLE: &[Compatibility] =
    &[Compatibility::new(SYSTEM_ID, VersionRange::caret(1, 0, 0))];

/// A card on the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub symbol: u32,
    #[serde(default)]
    pub is_flipped: bool,
    #[serde(default)]
    pub is_matched: bool,
    pub position: CellPos,
}

impl Card {
    /// A face-down, unmatched card
    pub fn new(id: impl Into<String>, symbol: u32, position: CellPos) -> Self {
        Self {
            id: id.into(),
            symbol,
            is_flipped: false,
            is_matched: false,
            position,
        }
    }
}

pub(crate) fn find_card<'a>(cards: &'a [Card], id: &str) -> Option<&'a Card> {
    cards.iter().find(|card| card.id == id)
}

pub const CONTRACTS: &[SlotContract] = &[
    SlotContract::new(
        "cardFlipping",
        SlotKind::Policy,
        "How cards flip (single reveal, double reveal)",
    ),
    SlotContract::new(
        "matchLogic",
        SlotKind::Pure,
        "What constitutes a match (pair, triple, symbol)",
    ),
    SlotContract::new(
        "cardShuffler",
        SlotKind::Pure,
        "Distribution algorithm for card placement",
    ),
    SlotContract::new("timerRule", SlotKind::Policy, "Time limits and penalties"),
];

pub const SYSTEM: SystemDescriptor = SystemDescriptor {
    id: SYSTEM_ID,
    version: SYSTEM_VERSION,
    contracts: CONTRACTS,
};

pub fn slot_implementations() -> Vec<BoxedSlot> {
    vec![
        TWO_CARD_FLIP.boxed(),
        ONE_CARD_FLIP.boxed(),
        PAIR_MATCH.boxed(),
        TRIPLE_MATCH.boxed(),
        FISHER_YATES_SHUFFLE.boxed(),
        CLUSTERED_SHUFFLE.boxed(),
        NO_TIMER.boxed(),
        COUNTDOWN_TIMER.boxed(),
        PENALTY_TIMER.boxed(),
    ]
}

/// Register the system and its implementations; safe to call repeatedly
///
/// # Errors
///
/// Fails if a conflicting system or implementation is already registered
/// under one of these ids.
pub fn register_card_match_slot_implementations(
    registry: &mut SlotRegistry,
) -> Result<usize, SlotError> {
    registry.register_system(SYSTEM)?;
    registry.register_all(slot_implementations())
}
