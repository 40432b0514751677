use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_reserve::core::{exchange_prefix, PieceGenerator, Snapshot};
use tetris_reserve::engine::PieceManager;
use tetris_reserve::types::MenuAction;

fn bench_play_front(c: &mut Criterion) {
    let mut mgr = PieceManager::with_seed(12345);

    c.bench_function("play_front", |b| {
        b.iter(|| {
            black_box(mgr.apply(MenuAction::PlayFront));
        })
    });
}

fn bench_reserve_cycle(c: &mut Criterion) {
    let mut mgr = PieceManager::with_seed(12345);

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            black_box(mgr.apply(MenuAction::Reserve));
            black_box(mgr.apply(MenuAction::UseReserved));
        })
    });
}

fn bench_triple_swap(c: &mut Criterion) {
    let mut mgr = PieceManager::with_seed(12345);
    for _ in 0..3 {
        mgr.apply(MenuAction::Reserve);
    }

    c.bench_function("triple_swap", |b| {
        b.iter(|| {
            black_box(mgr.apply(MenuAction::TripleSwap));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mgr = PieceManager::with_seed(12345);
    let mut snap = Snapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            mgr.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_generator(c: &mut Criterion) {
    let mut gen = PieceGenerator::new(12345);

    c.bench_function("generate_piece", |b| b.iter(|| black_box(gen.next())));
}

fn bench_exchange_prefix(c: &mut Criterion) {
    let mgr = PieceManager::with_seed(1);
    let mut queue = mgr.queue().clone();
    let mut stack = tetris_reserve::core::ReserveStack::new();
    for piece in queue.iter().take(3) {
        stack.push(*piece);
    }

    c.bench_function("exchange_prefix_3", |b| {
        b.iter(|| black_box(exchange_prefix(&mut queue, &mut stack, black_box(3))))
    });
}

criterion_group!(
    benches,
    bench_play_front,
    bench_reserve_cycle,
    bench_triple_swap,
    bench_snapshot_into,
    bench_generator,
    bench_exchange_prefix
);
criterion_main!(benches);
