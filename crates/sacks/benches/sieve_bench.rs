//! Criterion benchmarks for the sieve and the spiral mapper.
//! Sizes follow the bound presets plus the domain maximum.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sacks::domain::{PRIME_BOUND, PRIME_BOUND_PRESETS};
use sacks::sieve::sieve;
use sacks::spiral::map_all;

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for &bound in PRIME_BOUND_PRESETS.iter().chain([PRIME_BOUND.max].iter()) {
        group.bench_with_input(BenchmarkId::new("sieve", bound), &bound, |b, &bound| {
            b.iter(|| sieve(bound))
        });
        let primes = sieve(bound);
        group.bench_with_input(BenchmarkId::new("map_all", bound), &primes, |b, primes| {
            b.iter(|| map_all(primes, 1.0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sieve);
criterion_main!(benches);
