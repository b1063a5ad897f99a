use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numseq::{Float64s, JsonSequence};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sequence(len: usize) -> Float64s {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    for len in [100, 10_000, 1_000_000] {
        let s = random_sequence(len);
        group.bench_with_input(BenchmarkId::new("sum", len), &s, |b, s| {
            b.iter(|| black_box(s.sum()))
        });
        group.bench_with_input(BenchmarkId::new("min", len), &s, |b, s| {
            b.iter(|| black_box(s.min()))
        });
        group.bench_with_input(BenchmarkId::new("contains_miss", len), &s, |b, s| {
            b.iter(|| black_box(s.contains(&5000.0)))
        });
    }
    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    for len in [100, 10_000, 1_000_000] {
        let s = random_sequence(len);
        group.bench_with_input(BenchmarkId::new("sort", len), &s, |b, s| {
            b.iter(|| black_box(s.sort()))
        });
        group.bench_with_input(BenchmarkId::new("sort_into_reversed", len), &s, |b, s| {
            b.iter(|| black_box(s.sort().into_reversed()))
        });
        group.bench_with_input(BenchmarkId::new("only", len), &s, |b, s| {
            b.iter(|| black_box(s.only(|x| *x > 0.0)))
        });
    }
    group.finish();
}

fn bench_json(c: &mut Criterion) {
    let s = random_sequence(10_000);
    c.bench_function("json_string_10k", |b| b.iter(|| black_box(s.json_string())));
}

criterion_group!(benches, bench_queries, bench_transforms, bench_json);
criterion_main!(benches);
