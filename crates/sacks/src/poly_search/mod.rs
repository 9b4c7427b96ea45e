//! Prime-generating quadratic search.
//!
//! Purpose
//! - Scan the integer rectangle of `(b, c)` for `x² + b·x + c`, keep the runs of
//!   primes each quadratic produces, and select the `top_k` longest runs.
//!
//! Why this design
//! - `c` must itself be prime (the x = 0 value); this is a hard filter.
//! - Runs stop the first time a value leaves `[2, bound]`, so every scan is
//!   finite. Only `c ∈ [2, bound]` can start a run, so the scan per `b` is
//!   bounded by the prime bound whatever `c_range` says.
//! - Coefficient arithmetic is checked; an overflow ends the run.
//! - Ranking uses an explicit total key (count desc, b asc, c asc) rather than
//!   sort stability, so the `parallel` feature produces identical output.
//!
//! Code cross-refs: `sieve::PrimeSet` (primality oracle), `orchestrator::compute`.

mod search;
mod types;

pub use search::{find_efficient_polynomials, find_with_defaults, prime_run};
pub use types::{
    eval_quadratic, CountSummary, IntRange, PolynomialCandidate, SearchCfg, SearchOutcome,
};
