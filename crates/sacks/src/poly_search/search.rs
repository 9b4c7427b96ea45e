//! Exhaustive (b, c) scan with prime-run extraction and deterministic ranking.

use std::cmp::Reverse;

use crate::sieve::PrimeSet;

use super::types::{eval_quadratic, PolynomialCandidate, SearchCfg, SearchOutcome};

/// Find the `top_k` quadratics `x² + b·x + c` with the longest prime runs.
///
/// Ranking is by run length (descending), ties by `b` then `c` ascending, i.e.
/// the enumeration order. The efficient set is the union of the selected runs.
pub fn find_efficient_polynomials(
    primes: &PrimeSet,
    bound: u32,
    top_k: usize,
    cfg: SearchCfg,
) -> SearchOutcome {
    let mut candidates = collect_candidates(primes, bound, cfg);
    rank(&mut candidates);
    candidates.truncate(top_k);
    let efficient = candidates
        .iter()
        .flat_map(|cand| cand.sequence.iter().copied())
        .collect();
    SearchOutcome {
        candidates,
        efficient,
    }
}

/// Same as [`find_efficient_polynomials`] with the default (b, c) rectangle.
pub fn find_with_defaults(primes: &PrimeSet, bound: u32, top_k: usize) -> SearchOutcome {
    find_efficient_polynomials(primes, bound, top_k, SearchCfg::default())
}

/// Primes produced by `x² + b·x + c` for x = 0, 1, 2, … until the value leaves
/// `[2, bound]` or overflows i64. Consecutive repeats are dropped.
pub fn prime_run(primes: &PrimeSet, bound: u32, b: i64, c: i64) -> Vec<u32> {
    let bound = i64::from(bound);
    let mut run = Vec::new();
    let mut last = None;
    for x in 0i64.. {
        let Some(val) = eval_quadratic(b, c, x) else {
            break;
        };
        if val > bound || val < 2 {
            break;
        }
        if primes.contains(val) && last != Some(val) {
            run.push(val as u32);
            last = Some(val);
        }
    }
    run
}

/// All non-empty candidates for one `b`, in ascending `c`.
fn candidates_for_b(
    primes: &PrimeSet,
    bound: u32,
    b: i64,
    cfg: &SearchCfg,
) -> Vec<PolynomialCandidate> {
    cfg.c_range_within(bound)
        .iter()
        .filter(|&c| primes.contains(c))
        .filter_map(|c| {
            let sequence = prime_run(primes, bound, b, c);
            (!sequence.is_empty()).then_some(PolynomialCandidate { b, c, sequence })
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_candidates(
    primes: &PrimeSet,
    bound: u32,
    cfg: SearchCfg,
) -> Vec<PolynomialCandidate> {
    if primes.is_empty() {
        return Vec::new();
    }
    cfg.b_range
        .iter()
        .flat_map(|b| candidates_for_b(primes, bound, b, &cfg))
        .collect()
}

#[cfg(feature = "parallel")]
fn collect_candidates(
    primes: &PrimeSet,
    bound: u32,
    cfg: SearchCfg,
) -> Vec<PolynomialCandidate> {
    use rayon::prelude::*;

    if primes.is_empty() {
        return Vec::new();
    }
    // Per-b accumulation, single merge afterwards.
    let per_b: Vec<Vec<PolynomialCandidate>> = cfg
        .b_range
        .iter()
        .into_par_iter()
        .map(|b| candidates_for_b(primes, bound, b, &cfg))
        .collect();
    per_b.into_iter().flatten().collect()
}

/// Count descending, then (b, c) ascending. (b, c) is unique per candidate, so
/// the order is total and independent of how candidates were merged.
fn rank(candidates: &mut [PolynomialCandidate]) {
    candidates.sort_unstable_by_key(|cand| (Reverse(cand.count()), cand.b, cand.c));
}
