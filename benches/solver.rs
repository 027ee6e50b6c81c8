use criterion::{black_box, criterion_group, criterion_main, Criterion};
use envo_bot::rank::{EntropyRanker, Ranker};
use envo_bot::{Dictionary, Solver};

const TRANSCRIPT: &str = "🟥🟥🟥🟥🟥 THREE\n🟨🟥🟥🟨🟥 AROMA";

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new(Dictionary::embedded());
    c.bench_function("solve_two_rows", |b| {
        b.iter(|| solver.solve(black_box(TRANSCRIPT)))
    });
}

fn bench_entropy_pick(c: &mut Criterion) {
    let words: Vec<_> = Dictionary::embedded().all_words().copied().take(200).collect();
    c.bench_function("entropy_pick_200", |b| {
        b.iter(|| EntropyRanker.rank(black_box(&words)))
    });
}

criterion_group!(benches, bench_solve, bench_entropy_pick);
criterion_main!(benches);
