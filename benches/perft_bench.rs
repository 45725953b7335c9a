use criterion::{criterion_group, criterion_main, Criterion, black_box};
use tapchess::perft::perft;
use tapchess::Board;

fn bench_perft(c: &mut Criterion) {
    let b = Board::new();
    c.bench_function("perft_startpos_d2", |ben| {
        ben.iter(|| black_box(perft(black_box(&b), 2)))
    });
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
