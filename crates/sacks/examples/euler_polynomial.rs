//! Top prime-generating quadratics below a bound.
//!
//! Purpose
//! - Show the search ranking on a familiar case: Euler's x² − x + 41 and its
//!   shifts (x² + (2k−1)·x + …) dominate the default (b, c) rectangle.
//!
//! Usage: `cargo run -p sacks --example euler_polynomial -- [bound] [top_k]`

use std::time::Instant;

use sacks::poly_search::find_with_defaults;
use sacks::sieve::sieve;

fn main() {
    let mut args = std::env::args().skip(1);
    let bound: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let top_k: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    let started = Instant::now();
    let primes = sieve(bound);
    let outcome = find_with_defaults(&primes, bound, top_k);
    let elapsed = started.elapsed().as_secs_f64() * 1e3;

    println!("bound={bound} primes={} elapsed_ms={elapsed:.3}", primes.len());
    for (rank, cand) in outcome.candidates.iter().enumerate() {
        let head: Vec<String> = cand.sequence.iter().take(6).map(u32::to_string).collect();
        println!(
            "#{:<3} x² {:+} x {:+}  count={:<4} [{}, …]",
            rank + 1,
            cand.b,
            cand.c,
            cand.count(),
            head.join(", ")
        );
    }
    if let Some(summary) = outcome.count_summary() {
        println!("counts min={} max={}", summary.min, summary.max);
    }
}
