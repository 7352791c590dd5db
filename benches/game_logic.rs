use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tourney_tetris::core::shadow::project;
use tourney_tetris::core::{ActivePiece, Board, GameController, GameSnapshot};
use tourney_tetris::types::{Command, Rotation, Shape, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameController::with_seed(12345);
    game.start();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if !game.tick() {
                game.reset();
                game.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.set(x, y, Some(Shape::I));
                }
            }
            black_box(board.clear_completed_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = GameController::with_seed(12345);
    game.start();
    let mut right = true;

    c.bench_function("apply_command_shift", |b| {
        b.iter(|| {
            let cmd = if right { Command::Right } else { Command::Left };
            if !game.apply_command(black_box(cmd)) {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = GameController::with_seed(12345);
    game.start();

    c.bench_function("apply_command_rotate", |b| {
        b.iter(|| {
            game.apply_command(black_box(Command::Rotate));
        })
    });
}

fn bench_shadow(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if x % 3 != 0 {
            board.set(x, 19, Some(Shape::Z));
        }
    }
    let piece = ActivePiece::new(Shape::L, Rotation::R1, 5, 2);

    c.bench_function("shadow_project", |b| {
        b.iter(|| black_box(project(black_box(&board), black_box(&piece))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameController::with_seed(12345);
    game.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_shadow,
    bench_snapshot
);
criterion_main!(benches);
