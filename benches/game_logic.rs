use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfit::core::pieces::RED;
use blockfit::core::{any_fits, can_place_anywhere, shape_by_name, shapes_for, Grid};
use blockfit::engine::{GameSession, SessionConfig};
use blockfit::types::{Anchor, Difficulty};

/// Nearly full board: only the top-right cell is free
fn crowded_grid() -> Grid {
    let mut grid = Grid::new(8, 8);
    for y in 0..8 {
        for x in 0..8 {
            if (x, y) != (7, 7) {
                grid.set(x, y, Some(RED));
            }
        }
    }
    grid
}

fn bench_reachability(c: &mut Criterion) {
    let grid = crowded_grid();
    let single = shape_by_name("Single").unwrap();

    c.bench_function("can_place_anywhere_crowded", |b| {
        b.iter(|| can_place_anywhere(black_box(&grid), black_box(single)))
    });

    let checker = {
        let mut grid = Grid::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                if (x + y) % 2 == 0 {
                    grid.set(x, y, Some(RED));
                }
            }
        }
        grid
    };
    c.bench_function("any_fits_hard_pool_miss", |b| {
        b.iter(|| any_fits(black_box(&checker), shapes_for(Difficulty::Hard)[1..].iter()))
    });
}

fn bench_place_with_clears(c: &mut Criterion) {
    let mut template = crowded_grid();
    template.set(0, 0, None);
    template.set(7, 7, Some(RED));
    let single = shape_by_name("Single").unwrap();

    c.bench_function("place_clear_row_and_column", |b| {
        b.iter(|| {
            let mut grid = template.clone();
            grid.place(black_box(single), Anchor::new(0, 0), RED)
        })
    });
}

fn bench_snapshot_restore(c: &mut Criterion) {
    let mut grid = crowded_grid();
    let snapshot = grid.take_snapshot(100);

    c.bench_function("snapshot_restore", |b| {
        b.iter(|| {
            let s = grid.take_snapshot(black_box(100));
            grid.restore(black_box(&snapshot));
            s
        })
    });
}

fn bench_session_turn(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default());
    session.start(Difficulty::Hard);

    c.bench_function("session_place_then_undo", |b| {
        b.iter(|| {
            if session.place(0, Anchor::new(0, 0)).is_ok() {
                session.undo();
            }
            if !session.can_undo() {
                session.restart();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_reachability,
    bench_place_with_clears,
    bench_snapshot_restore,
    bench_session_turn
);
criterion_main!(benches);
