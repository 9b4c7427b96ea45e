//! Synchronous computation of one request: clamp, sieve, search, map, partition.

use std::collections::HashSet;
use std::time::Instant;

use crate::domain::{clamp_bound, clamp_polynomial_count};
use crate::poly_search::{find_efficient_polynomials, SearchOutcome};
use crate::sieve::sieve;
use crate::spiral::{map_all, SpiralPoint};

use super::types::{ComputationRequest, ComputationResult, ComputeCfg};

/// Clamp the raw request fields into their domains and compute the result.
pub fn compute(request: &ComputationRequest, cfg: ComputeCfg) -> ComputationResult {
    let bound = clamp_bound(request.max_prime_raw);
    let top_k = clamp_polynomial_count(request.polynomial_count_raw) as usize;
    compute_bounded(bound, top_k, request.generation_token, cfg)
}

/// Compute for an already-validated bound and polynomial count.
///
/// Total for every input: `bound < 2` or an empty selection produce empty
/// collections and `count_summary: None`.
pub fn compute_bounded(
    bound: u32,
    top_k: usize,
    generation_token: u64,
    cfg: ComputeCfg,
) -> ComputationResult {
    let started = Instant::now();
    let primes = sieve(bound);
    let (outcome, points) = search_and_map(&primes, bound, top_k, cfg);
    let count_summary = outcome.count_summary();
    let (efficient, ordered_sequences) = outcome.into_parts();
    let split = partition(&points, &efficient);

    tracing::debug!(
        generation = generation_token,
        bound,
        top_k,
        primes = points.len(),
        efficient = split.efficient_x.len(),
        sequences = ordered_sequences.len(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "computed"
    );

    ComputationResult {
        generation_token,
        bound,
        points,
        regular_x: split.regular_x,
        regular_y: split.regular_y,
        efficient_x: split.efficient_x,
        efficient_y: split.efficient_y,
        ordered_sequences,
        count_summary,
    }
}

// Search and mapping only share the prime set; they run side by side when the
// rayon pool is available.
#[cfg(feature = "parallel")]
fn search_and_map(
    primes: &crate::sieve::PrimeSet,
    bound: u32,
    top_k: usize,
    cfg: ComputeCfg,
) -> (SearchOutcome, Vec<SpiralPoint>) {
    rayon::join(
        || find_efficient_polynomials(primes, bound, top_k, cfg.search),
        || map_all(primes, cfg.step),
    )
}

#[cfg(not(feature = "parallel"))]
fn search_and_map(
    primes: &crate::sieve::PrimeSet,
    bound: u32,
    top_k: usize,
    cfg: ComputeCfg,
) -> (SearchOutcome, Vec<SpiralPoint>) {
    (
        find_efficient_polynomials(primes, bound, top_k, cfg.search),
        map_all(primes, cfg.step),
    )
}

#[derive(Default)]
struct Split {
    regular_x: Vec<f64>,
    regular_y: Vec<f64>,
    efficient_x: Vec<f64>,
    efficient_y: Vec<f64>,
}

/// Split coordinates by efficient-set membership, keeping ascending order.
fn partition(points: &[SpiralPoint], efficient: &HashSet<u32>) -> Split {
    let mut split = Split::default();
    for p in points {
        if efficient.contains(&p.value) {
            split.efficient_x.push(p.x);
            split.efficient_y.push(p.y);
        } else {
            split.regular_x.push(p.x);
            split.regular_y.push(p.y);
        }
    }
    split
}
