use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pure_tetris::core::{Board, GameState};
use pure_tetris::types::{GameAction, PieceKind, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.tick() {
                state = GameState::with_seed(12345);
            }
            black_box(state.score());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 18..22 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.set_cell(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    // T and friends have room to turn a few rows below the spawn point.
    for _ in 0..4 {
        state.tick();
    }

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            black_box(state.apply_action(black_box(GameAction::RotateCw)));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::with_seed(12345);
    let mut snap = Default::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotation,
    bench_snapshot
);
criterion_main!(benches);
