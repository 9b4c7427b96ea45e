//! Criterion benchmark for one full request (clamp → sieve → search → map →
//! partition), the latency a caller sees per submission.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sacks::domain::{RawNumber, PRIME_BOUND_PRESETS};
use sacks::orchestrator::{compute, ComputationRequest, ComputeCfg};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    group.sample_size(10);
    for &bound in &PRIME_BOUND_PRESETS {
        let request = ComputationRequest {
            max_prime_raw: RawNumber::from(bound),
            polynomial_count_raw: RawNumber::from(100u32),
            generation_token: 1,
        };
        group.bench_with_input(BenchmarkId::new("request", bound), &request, |b, req| {
            b.iter(|| compute(req, ComputeCfg::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
