use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_crush::core::{find_matches, settle, GameState, Grid};
use tui_crush::types::{Coord, TokenColor, GRID_SIZE};

fn checkerboard() -> Grid {
    let mut grid = Grid::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let color = if (row + col) % 2 == 0 {
                TokenColor::Red
            } else {
                TokenColor::Green
            };
            grid.set(Coord::new(row, col), Some(color));
        }
    }
    grid
}

fn triple_board() -> Grid {
    let mut grid = checkerboard();
    for &(row, col) in &[(2, 3), (2, 5), (3, 4)] {
        grid.set(Coord::new(row, col), Some(TokenColor::Blue));
    }
    grid.set(Coord::new(2, 4), Some(TokenColor::Yellow));
    grid
}

fn bench_find_matches(c: &mut Criterion) {
    let grid = checkerboard();

    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&grid)))
    });
}

fn bench_gravity(c: &mut Criterion) {
    c.bench_function("settle_one_cleared_row", |b| {
        b.iter(|| {
            let mut grid = checkerboard();
            for col in 0..GRID_SIZE {
                grid.set(Coord::new(4, col), None);
            }
            settle(&mut grid)
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("idle_tick", |b| {
        b.iter(|| {
            state.tick();
        })
    });
}

fn bench_full_cascade(c: &mut Criterion) {
    c.bench_function("swap_and_settle_cascade", |b| {
        b.iter(|| {
            let mut state = GameState::from_grid(triple_board(), 12345);
            state.tap(Coord::new(3, 4));
            state.tap(Coord::new(2, 4));
            while state.in_resolution() {
                state.tick();
            }
            black_box(state.score())
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_gravity,
    bench_tick,
    bench_full_cascade
);
criterion_main!(benches);
