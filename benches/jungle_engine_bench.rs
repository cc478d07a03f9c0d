//! Jungle Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jungle_engine::evaluation::evaluate;
use jungle_engine::move_gen::generate_moves;
use jungle_engine::search::select_move_with_rng;
use jungle_engine::{
    apply_move, initial_board, legal_moves, replay, status, Coord, Difficulty, Faction,
    MoveHistory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_initial_board(c: &mut Criterion) {
    c.bench_function("initial_board", |b| b.iter(|| black_box(initial_board())));
}

fn bench_legal_moves_leaper(c: &mut Criterion) {
    let board = initial_board();

    c.bench_function("legal_moves_blue_lion", |b| {
        b.iter(|| black_box(legal_moves(&board, black_box(Coord::new(0, 0)))))
    });
}

fn bench_move_generation_both_factions(c: &mut Criterion) {
    let board = initial_board();

    c.bench_function("generate_moves_both_factions", |b| {
        b.iter(|| {
            let blue = generate_moves(&board, Faction::Blue);
            let red = generate_moves(&board, Faction::Red);
            black_box((blue.len(), red.len()))
        })
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let board = initial_board();

    c.bench_function("evaluate_starting", |b| {
        b.iter(|| black_box(evaluate(&board, Faction::Blue)))
    });
}

fn bench_status_starting(c: &mut Criterion) {
    let board = initial_board();

    c.bench_function("status_starting", |b| {
        b.iter(|| black_box(status(&board, Faction::Blue)))
    });
}

fn bench_select_move(c: &mut Criterion) {
    let board = initial_board();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("select_move_hard", |b| {
        b.iter(|| black_box(select_move_with_rng(&board, Difficulty::Hard, Faction::Blue, &mut rng)))
    });
}

fn bench_replay_sixty_plies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = initial_board();
    let mut side = Faction::Blue;
    let mut history = MoveHistory::new();
    while history.len() < 60 {
        let Some(mv) = select_move_with_rng(&board, Difficulty::Medium, side, &mut rng) else {
            break;
        };
        board = apply_move(&board, &mv);
        history.add_move(mv);
        side = side.opponent();
        if status(&board, side).is_terminal() {
            break;
        }
    }

    c.bench_function("replay_full_history", |b| {
        b.iter(|| black_box(replay(&history, history.len())))
    });
}

criterion_group!(
    benches,
    bench_initial_board,
    bench_legal_moves_leaper,
    bench_move_generation_both_factions,
    bench_evaluate_starting,
    bench_status_starting,
    bench_select_move,
    bench_replay_sixty_plies,
);
criterion_main!(benches);
