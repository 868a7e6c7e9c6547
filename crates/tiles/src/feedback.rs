//! Feedback hook - tag entities in response to game events

use serde::{Deserialize, Serialize};
use serde_json::Value;

use game_slots_core::{slot_signature, SlotContext, SlotImplementation};

use crate::{COMPATIBLE, SYSTEM_ID, SYSTEM_VERSION};

pub const MATCHED_TAG: &str = "sys.match3:matched";
pub const INVALID_SWAP_TAG: &str = "sys.match3:invalid_swap";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackEvent {
    MatchFound,
    CascadeComplete,
    NoMoves,
    SwapInvalid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackInput {
    pub event: FeedbackEvent,
    #[serde(default)]
    pub entity_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTag {
    pub entity_id: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags_to_add: Vec<EntityTag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags_to_remove: Vec<EntityTag>,
}

slot_signature! {
    /// Provides visual/audio feedback for game events via tags and behaviors
    pub Feedback: SYSTEM_ID, "feedback" => FeedbackInput => FeedbackOutput
}

fn tag_all(entity_ids: &[String], tag: &str) -> Vec<EntityTag> {
    entity_ids
        .iter()
        .map(|entity_id| EntityTag {
            entity_id: entity_id.clone(),
            tag: tag.to_string(),
        })
        .collect()
}

fn tags_and_conditional_behaviors(_ctx: &mut SlotContext, input: &FeedbackInput) -> FeedbackOutput {
    let tags_to_add = match input.event {
        FeedbackEvent::MatchFound => tag_all(&input.entity_ids, MATCHED_TAG),
        FeedbackEvent::SwapInvalid => tag_all(&input.entity_ids, INVALID_SWAP_TAG),
        FeedbackEvent::CascadeComplete | FeedbackEvent::NoMoves => Vec::new(),
    };
    FeedbackOutput {
        tags_to_add,
        tags_to_remove: Vec::new(),
    }
}

pub static TAGS_AND_CONDITIONAL_BEHAVIORS: SlotImplementation<Feedback> = SlotImplementation::new(
    "tags_and_conditional_behaviors",
    SYSTEM_VERSION,
    COMPATIBLE,
    tags_and_conditional_behaviors,
);
