//! Game slots (workspace facade crate).
//!
//! Re-exports the member crates as `game_slots::{types, core, blocks, tiles, cards, runner}`
//! and adds the process-level pieces: registry bootstrap and selection config.

pub use game_slots_blocks as blocks;
pub use game_slots_cards as cards;
pub use game_slots_core as core;
pub use game_slots_runner as runner;
pub use game_slots_tiles as tiles;
pub use game_slots_types as types;

pub mod bootstrap;
pub mod cli;
pub mod config;
