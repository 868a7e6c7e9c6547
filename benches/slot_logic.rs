use criterion::{black_box, criterion_group, criterion_main, Criterion};
use game_slots::blocks::{
    Board, LineClearInput, LineClearing, Piece, PieceSpawner, RotationInput, RotationRule,
    SpawnInput,
};
use game_slots::bootstrap::build_registry;
use game_slots::cards::{CardShuffler, ShuffleInput};
use game_slots::core::{Grid, SlotContext};
use game_slots::tiles::{MatchDetection, MatchInput, TileBoard};
use game_slots::types::{PieceKind, Rotation, RotationDirection};

fn checker_board(size: usize) -> TileBoard {
    let rows = (0..size)
        .map(|r| (0..size).map(|c| Some(((r / 3 + c) % 4) as u32)).collect())
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn bench_match_detection(c: &mut Criterion) {
    let registry = build_registry().unwrap();
    let input = MatchInput::new(checker_board(8), 3).unwrap();
    let mut ctx = SlotContext::new(1);

    c.bench_function("standard_3_match_8x8", |b| {
        b.iter(|| {
            registry
                .run::<MatchDetection>(&mut ctx, "standard_3_match", black_box(&input))
                .unwrap()
        })
    });

    c.bench_function("diagonal_match_8x8", |b| {
        b.iter(|| {
            registry
                .run::<MatchDetection>(&mut ctx, "diagonal_match", black_box(&input))
                .unwrap()
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let registry = build_registry().unwrap();
    let rule = registry.get_typed::<RotationRule>("srs_rotation").unwrap();
    let input = RotationInput {
        piece: Piece::new(PieceKind::I, Rotation::West, -1, 5),
        board: Grid::new(20, 10, None),
        direction: RotationDirection::Clockwise,
    };
    let mut ctx = SlotContext::new(1);

    c.bench_function("srs_rotation_wall_kick", |b| {
        b.iter(|| rule.run(&mut ctx, black_box(&input)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let registry = build_registry().unwrap();
    let mut board: Board = Grid::new(20, 10, None);
    for y in 16..20 {
        for x in 0..10 {
            board.set(y, x, Some(PieceKind::I));
        }
    }
    let input = LineClearInput { board };
    let mut ctx = SlotContext::new(1);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            registry
                .run::<LineClearing>(&mut ctx, "standard_line_clear", black_box(&input))
                .unwrap()
        })
    });
}

fn bench_seven_bag(c: &mut Criterion) {
    let registry = build_registry().unwrap();
    let spawner = registry.get_typed::<PieceSpawner>("random_7_bag").unwrap();
    let mut ctx = SlotContext::new(12345);
    let mut input = SpawnInput::default();

    c.bench_function("random_7_bag_draw", |b| {
        b.iter(|| {
            let out = spawner.run(&mut ctx, black_box(&input));
            input.bag = out.updated_bag;
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let registry = build_registry().unwrap();
    let input = ShuffleInput {
        symbols: (0..18).flat_map(|s| [s, s]).collect(),
        rows: 6,
        cols: 6,
        seed: None,
    };
    let mut ctx = SlotContext::new(7);

    c.bench_function("fisher_yates_shuffle_6x6", |b| {
        b.iter(|| {
            registry
                .run::<CardShuffler>(&mut ctx, "fisher_yates_shuffle", black_box(&input))
                .unwrap()
        })
    });
}

fn bench_registry_json(c: &mut Criterion) {
    let registry = build_registry().unwrap();
    let mut ctx = SlotContext::new(1);

    c.bench_function("lookup_by_id", |b| {
        b.iter(|| registry.get(black_box("interval_table_speed")))
    });

    c.bench_function("run_json_drop_speed", |b| {
        b.iter(|| {
            registry
                .run_json(
                    &mut ctx,
                    "interval_table_speed",
                    black_box(serde_json::json!({ "level": 7 })),
                )
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_match_detection,
    bench_rotation,
    bench_line_clear,
    bench_seven_bag,
    bench_shuffle,
    bench_registry_json
);
criterion_main!(benches);
