//! Registry tests - registration, lookup, compatibility and resolution

use std::collections::BTreeMap;

use game_slots::blocks::{self, DropSpeed, DropSpeedInput, DropSpeedOutput};
use game_slots::bootstrap::{build_registry, global_slot_registry};
use game_slots::core::{
    resolve_slots, Compatibility, Registration, SlotContext, SlotError, SlotImplementation,
    SlotRegistry, SlotSelection, Version, VersionRange,
};
use game_slots::tiles::MatchScoring;

fn always_one(_ctx: &mut SlotContext, _input: &DropSpeedInput) -> DropSpeedOutput {
    DropSpeedOutput {
        frames_per_drop: 1,
        cells_per_second: 60.0,
    }
}

const TETRIS_V2: &[Compatibility] = &[Compatibility::new("tetris", VersionRange::caret(2, 0, 0))];

static TURBO: SlotImplementation<DropSpeed> =
    SlotImplementation::new("turbo_speed", Version::new(2, 0, 0), TETRIS_V2, always_one);

static IMPOSTOR: SlotImplementation<DropSpeed> =
    SlotImplementation::new("fixed_speed", Version::new(1, 0, 0), blocks::COMPATIBLE, always_one);

game_slots::core::slot_signature! {
    HoldRule: "tetris", "holdRule" => u32 => bool
}

fn never(_ctx: &mut SlotContext, _input: &u32) -> bool {
    false
}

static NO_HOLD: SlotImplementation<HoldRule> =
    SlotImplementation::new("no_hold", Version::new(1, 0, 0), blocks::COMPATIBLE, never);

// ============== Registration ==============

#[test]
fn test_registration_is_idempotent() {
    let mut registry = SlotRegistry::new();
    assert_eq!(
        registry.register(blocks::FIXED_SPEED.boxed()).unwrap(),
        Registration::Inserted
    );
    assert_eq!(
        registry.register(blocks::FIXED_SPEED.boxed()).unwrap(),
        Registration::AlreadyPresent
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_conflicting_payload_is_rejected() {
    let mut registry = build_registry().unwrap();
    let err = registry.register(IMPOSTOR.boxed()).unwrap_err();
    assert!(matches!(err, SlotError::DuplicateId { ref id } if id == "fixed_speed"));

    // The first registration is untouched.
    let mut ctx = SlotContext::default();
    let out = registry
        .run::<DropSpeed>(&mut ctx, "fixed_speed", &DropSpeedInput::default())
        .unwrap();
    assert_eq!(out.frames_per_drop, 30);
}

#[test]
fn test_incompatible_implementation_is_rejected() {
    let mut registry = build_registry().unwrap();
    let err = registry.register(TURBO.boxed()).unwrap_err();
    assert!(matches!(err, SlotError::Incompatible { .. }));
    assert!(!registry.has("turbo_speed"));

    // Without the system registered there is nothing to check against.
    let mut bare = SlotRegistry::new();
    bare.register(TURBO.boxed()).unwrap();
    assert!(bare.validate_selection("tetris", "dropSpeed", "turbo_speed"));
}

#[test]
fn test_undeclared_slot_is_rejected() {
    let mut registry = build_registry().unwrap();
    let err = registry.register(NO_HOLD.boxed()).unwrap_err();
    assert!(matches!(err, SlotError::UnknownSlot { ref slot_name, .. } if slot_name == "holdRule"));
}

// ============== Lookup ==============

#[test]
fn test_missing_lookup_is_not_a_panic() {
    let registry = build_registry().unwrap();
    assert!(!registry.has("nonexistent"));
    assert!(registry.get("nonexistent").is_none());
    assert!(matches!(
        registry.resolve("nonexistent"),
        Err(SlotError::NotFound { .. })
    ));
}

#[test]
fn test_typed_lookup_checks_signature() {
    let registry = build_registry().unwrap();
    assert!(registry.get_typed::<DropSpeed>("level_based_speed").is_ok());
    let err = registry.get_typed::<MatchScoring>("level_based_speed").unwrap_err();
    assert!(matches!(err, SlotError::SignatureMismatch { .. }));
}

#[test]
fn test_json_run_path() {
    let registry = build_registry().unwrap();
    let mut ctx = SlotContext::new(3);

    let out = registry
        .run_json(&mut ctx, "level_based_speed", serde_json::json!({ "level": 2 }))
        .unwrap();
    assert_eq!(out["frames_per_drop"], 43);

    let err = registry
        .run_json(&mut ctx, "level_based_speed", serde_json::json!({ "lvl": 2 }))
        .unwrap_err();
    assert!(matches!(err, SlotError::InvalidInput { .. }));
}

#[test]
fn test_every_implementation_is_declared_and_compatible() {
    let registry = build_registry().unwrap();
    for slot in registry.iter() {
        let owner = slot.owner();
        let system = registry.system(owner.system_id).unwrap();
        assert!(system.contract(owner.slot_name).is_some(), "{}", slot.id());
        assert!(
            registry.validate_selection(owner.system_id, owner.slot_name, slot.id()),
            "{}",
            slot.id()
        );
    }
}

#[test]
fn test_list_for_slot() {
    let registry = global_slot_registry().unwrap();
    let ids: Vec<&str> = registry
        .list_for_slot("memory", "cardShuffler")
        .iter()
        .map(|s| s.id())
        .collect();
    assert_eq!(ids, vec!["fisher_yates_shuffle", "clustered_shuffle"]);
    assert!(registry.list_for_slot("memory", "nope").is_empty());
}

// ============== Resolution ==============

#[test]
fn test_resolution_collects_every_error() {
    let registry = build_registry().unwrap();
    let selections = BTreeMap::from([
        (
            "gravity".to_string(),
            SlotSelection::new("tetris", "dropSpeed", "interval_table_speed"),
        ),
        (
            "mainScoring".to_string(),
            SlotSelection::new("match3", "scoring", "nonexistent"),
        ),
        (
            "swap".to_string(),
            SlotSelection::new("match3", "swapRule", "fixed_score"),
        ),
        (
            "wrongSystem".to_string(),
            SlotSelection::new("flappy", "scoring", "fixed_score"),
        ),
    ]);

    let resolution = resolve_slots(&selections, &registry);
    assert_eq!(resolution.slots.len(), 1);
    assert_eq!(resolution.errors.len(), 3);
    assert!(resolution.errors[0].to_string().contains("not found"));
    assert!(resolution.errors[1].to_string().contains("not valid"));
    assert!(resolution.errors[2].to_string().contains("not valid"));
}

#[test]
fn test_caret_ranges() {
    let range: VersionRange = "^1.0.0".parse().unwrap();
    assert!(range.matches(Version::new(1, 0, 0)));
    assert!(range.matches(Version::new(1, 9, 3)));
    assert!(!range.matches(Version::new(2, 0, 0)));
    assert!(!range.matches(Version::new(0, 9, 0)));
}
