use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blocks::core::{Engine, Grid, Randomizer};
use tui_blocks::types::{GameAction, ShapeKind, Vec2};

fn started_engine() -> Engine {
    let mut engine = Engine::new(Randomizer::with_seed(12345));
    engine.start();
    engine
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = started_engine();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut engine = started_engine();

    // Two I pieces and an O fill the bottom row once per cycle.
    c.bench_function("clear_line_cycle", |b| {
        b.iter(|| {
            for (kind, x) in [(ShapeKind::O, 8), (ShapeKind::I, 0), (ShapeKind::I, 4)] {
                engine.spawn_kind(kind);
                engine.move_to(Vec2::new(x, 0));
                black_box(engine.hard_drop());
            }
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut engine = started_engine();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            black_box(engine.spawn());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = started_engine();

    c.bench_function("move_right", |b| {
        b.iter(|| {
            engine.handle_input(black_box(Some(GameAction::MoveRight)));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = started_engine();
    engine.move_to(Vec2::new(3, 8));

    c.bench_function("rotate_clockwise", |b| {
        b.iter(|| {
            black_box(engine.rotate_clockwise());
        })
    });
}

fn bench_grid_rotation(c: &mut Criterion) {
    let board: Grid<u8> = Grid::filled(10, 20, 3);

    c.bench_function("grid_rotate_board", |b| {
        b.iter(|| black_box(board.rotate_clockwise()))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_grid_rotation
);
criterion_main!(benches);
