use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primerain::primality::is_prime;
use primerain::range::{wrap, Seed, Sign};
use primerain::search_log::SearchLog;
use primerain::tokens::{Family, Style};
use primerain::walker::{search, StepPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_is_prime_prime(c: &mut Criterion) {
    // largest 8-digit prime, worst case for trial division
    c.bench_function("is_prime(99_999_989)", |b| {
        b.iter(|| is_prime(black_box(99_999_989)));
    });
}

fn bench_is_prime_composite(c: &mut Criterion) {
    // semiprime with no small factor
    c.bench_function("is_prime(9973 * 10007)", |b| {
        b.iter(|| is_prime(black_box(9_973 * 10_007)));
    });
}

fn bench_wrap(c: &mut Criterion) {
    let seed = Seed::new(10_000_003).unwrap();
    c.bench_function("wrap(huge delta, minus)", |b| {
        b.iter(|| wrap(black_box(seed), black_box(u64::MAX / 3), black_box(Sign::Minus)));
    });
}

fn bench_search_full_range(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("search(full range)", |b| {
        b.iter(|| {
            let seed = Seed::draw(&mut rng);
            search(0, black_box(seed), StepPolicy::FullRange, &mut rng)
        });
    });
}

fn bench_search_bounded(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("search(bounded 1000)", |b| {
        b.iter(|| {
            let seed = Seed::draw(&mut rng);
            search(0, black_box(seed), StepPolicy::Bounded { max: 1_000 }, &mut rng)
        });
    });
}

fn bench_pool_batch(c: &mut Criterion) {
    c.bench_function("worker pool(1000 seeds, 4 workers)", |b| {
        b.iter(|| {
            let log = SearchLog::from_writer(std::io::sink());
            primerain::pool::WorkerPool::new(&log, StepPolicy::FullRange, 42)
                .run(black_box(1_000), 4)
                .unwrap()
        });
    });
}

fn bench_tokens(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    c.bench_function("tokens(emoji, alternating)", |b| {
        b.iter(|| primerain::tokens::generate(Family::Emoji, black_box(Style::Alternating), &mut rng));
    });
    c.bench_function("tokens(letters, checksum)", |b| {
        b.iter(|| primerain::tokens::generate(Family::Letters, black_box(Style::Checksum), &mut rng));
    });
}

criterion_group!(
    benches,
    bench_is_prime_prime,
    bench_is_prime_composite,
    bench_wrap,
    bench_search_full_range,
    bench_search_bounded,
    bench_pool_batch,
    bench_tokens,
);
criterion_main!(benches);
