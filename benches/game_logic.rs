use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{base_shape, has_collision, Board, Game};
use gridfall::types::{PieceKind, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    game.start_game();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick();
            if !game.is_playing() {
                game.start_game();
            }
        })
    });
}

fn bench_collision_probe(c: &mut Criterion) {
    let mut board = Board::empty();
    for column in 0..BOARD_WIDTH {
        board.set(19, column, Some(PieceKind::I));
    }
    let shape = base_shape(PieceKind::T);

    c.bench_function("has_collision", |b| {
        b.iter(|| has_collision(black_box(&board), black_box(&shape), 16, 5))
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    let mut full = Board::empty();
    for row in 16..20 {
        for column in 0..BOARD_WIDTH {
            full.set(row, column, Some(PieceKind::I));
        }
    }

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = full.clone();
            let cleared = board.clear_full_rows();
            board.restore_height();
            black_box(cleared)
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new(777);
    game.start_game();

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_collision_probe,
    bench_clear_four_rows,
    bench_snapshot
);
criterion_main!(benches);
