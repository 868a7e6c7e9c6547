//! Falling-block system tests - rotation, line clearing, spawning, speed

use game_slots::blocks::{
    Board, DropSpeed, DropSpeedInput, LineClearInput, LineClearing, Piece, PieceSpawner,
    RotationInput, RotationRule, SpawnInput,
};
use game_slots::bootstrap::build_registry;
use game_slots::core::{Grid, SlotContext, SlotRegistry};
use game_slots::types::{PieceKind, Rotation, RotationDirection};

fn registry() -> SlotRegistry {
    build_registry().unwrap()
}

fn rotate(registry: &SlotRegistry, id: &str, piece: Piece, board: Board, direction: RotationDirection) -> game_slots::blocks::RotationOutput {
    let mut ctx = SlotContext::default();
    registry
        .run::<RotationRule>(&mut ctx, id, &RotationInput { piece, board, direction })
        .unwrap()
}

// ============== Rotation ==============

#[test]
fn test_wall_kick_exhaustion() {
    let registry = registry();
    let piece = Piece::new(PieceKind::J, Rotation::East, 4, 8);
    let mut board: Board = Grid::new(20, 10, Some(PieceKind::I));
    for (x, y) in piece.cells() {
        board.set(y as usize, x as usize, None);
    }

    for id in ["standard_rotation", "no_wall_kick_rotation", "srs_rotation"] {
        let out = rotate(&registry, id, piece, board.clone(), RotationDirection::Clockwise);
        assert!(!out.success, "{id}");
        assert_eq!(out.new_rotation, Rotation::East);
        assert_eq!((out.new_x, out.new_y), (4, 8));
    }
}

#[test]
fn test_full_turn_returns_to_spawn_state() {
    let registry = registry();
    let mut piece = Piece::new(PieceKind::L, Rotation::North, 4, 4);
    let board: Board = Grid::new(20, 10, None);
    for _ in 0..4 {
        let out = rotate(&registry, "standard_rotation", piece, board.clone(), RotationDirection::Clockwise);
        assert!(out.success);
        piece = Piece::new(piece.kind, out.new_rotation, out.new_x, out.new_y);
    }
    assert_eq!(piece, Piece::new(PieceKind::L, Rotation::North, 4, 4));
}

#[test]
fn test_kick_over_filled_cell() {
    let registry = registry();
    // T at north; block the cell the east-facing shape needs below the centre.
    let piece = Piece::new(PieceKind::T, Rotation::North, 3, 5);
    let mut board: Board = Grid::new(20, 10, None);
    board.set(7, 4, Some(PieceKind::O));

    let kicked = rotate(&registry, "standard_rotation", piece, board.clone(), RotationDirection::Clockwise);
    assert!(kicked.success);
    assert_eq!(kicked.new_rotation, Rotation::East);
    assert_ne!((kicked.new_x, kicked.new_y), (3, 5));

    let stuck = rotate(&registry, "no_wall_kick_rotation", piece, board, RotationDirection::Clockwise);
    assert!(!stuck.success);
}

#[test]
fn test_rotation_json_input() {
    let registry = registry();
    let mut ctx = SlotContext::default();
    let out = registry
        .run_json(
            &mut ctx,
            "standard_rotation",
            serde_json::json!({
                "piece": { "type": "I", "rotation": 0, "x": 0, "y": 0 },
                "board": vec![vec![serde_json::Value::Null; 6]; 6],
                "direction": "counterclockwise"
            }),
        )
        .unwrap();
    assert_eq!(out["success"], true);
    assert_eq!(out["new_rotation"], 3);

    let bad_rotation = registry.run_json(
        &mut ctx,
        "standard_rotation",
        serde_json::json!({
            "piece": { "type": "I", "rotation": 4, "x": 0, "y": 0 },
            "board": [[null]],
            "direction": "clockwise"
        }),
    );
    assert!(bad_rotation.is_err());
}

#[test]
fn test_rotation_near_integer_limits_fails_quietly() {
    let registry = registry();
    let mut ctx = SlotContext::default();
    for x in [i32::MAX, i32::MIN] {
        let out = registry
            .run_json(
                &mut ctx,
                "standard_rotation",
                serde_json::json!({
                    "piece": { "type": "T", "rotation": 0, "x": x, "y": 0 },
                    "board": [[null, null, null, null]],
                    "direction": "clockwise"
                }),
            )
            .unwrap();
        assert_eq!(out["success"], false);
        assert_eq!(out["new_x"], x);
        assert_eq!(out["new_rotation"], 0);
    }
}

// ============== Line clearing ==============

#[test]
fn test_line_clear_through_registry() {
    let registry = registry();
    let mut board: Board = Grid::new(20, 10, None);
    for y in [17, 19] {
        for x in 0..10 {
            board.set(y, x, Some(PieceKind::S));
        }
    }
    let out = registry
        .run::<LineClearing>(&mut SlotContext::default(), "standard_line_clear", &LineClearInput { board })
        .unwrap();
    assert_eq!(out.cleared_lines, vec![17, 19]);
    assert_eq!(out.lines_cleared, 2);
}

// ============== Spawning ==============

#[test]
fn test_seven_bag_cycles() {
    let registry = registry();
    let spawner = registry.get_typed::<PieceSpawner>("random_7_bag").unwrap();

    for seed in [1, 42, 12345, 987_654_321] {
        let mut ctx = SlotContext::new(seed);
        let mut input = SpawnInput::default();
        for _cycle in 0..5 {
            let mut drawn = Vec::new();
            for _ in 0..7 {
                let out = spawner.run(&mut ctx, &input);
                drawn.push(out.next_piece);
                input.bag = out.updated_bag;
            }
            drawn.sort_by_key(|k| k.as_str());
            let mut all = PieceKind::ALL.to_vec();
            all.sort_by_key(|k| k.as_str());
            assert_eq!(drawn, all, "seed {seed}");
            assert!(input.bag.is_empty());
        }
    }
}

#[test]
fn test_spawner_reproducible_by_seed() {
    let registry = registry();
    let run = |seed| {
        let mut ctx = SlotContext::new(seed);
        let mut bag = Vec::new();
        let mut seq = Vec::new();
        for _ in 0..14 {
            let out = registry
                .run::<PieceSpawner>(&mut ctx, "random_7_bag", &SpawnInput { history: vec![], bag })
                .unwrap();
            seq.push(out.next_piece);
            bag = out.updated_bag;
        }
        seq
    };
    assert_eq!(run(2024), run(2024));
}

// ============== Drop speed ==============

#[test]
fn test_drop_speed_rules_disagree_as_expected() {
    let registry = registry();
    let input = DropSpeedInput {
        level: 5,
        score: 1200,
        lines_cleared: 40,
    };
    let mut ctx = SlotContext::default();
    let level = registry.run::<DropSpeed>(&mut ctx, "level_based_speed", &input).unwrap();
    let fixed = registry.run::<DropSpeed>(&mut ctx, "fixed_speed", &input).unwrap();
    let table = registry.run::<DropSpeed>(&mut ctx, "interval_table_speed", &input).unwrap();
    assert_eq!(level.frames_per_drop, 28);
    assert_eq!(fixed.frames_per_drop, 30);
    assert_eq!(table.frames_per_drop, 19);
}
