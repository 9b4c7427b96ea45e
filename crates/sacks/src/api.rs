//! Curated surface for embedding the engine (UNSTABLE).
//!
//! One flat namespace over the modules; breaking changes follow the modules.

// Domains and validation
pub use crate::domain::{
    clamp_bound, clamp_polynomial_count, Domain, RawNumber, LARGE_BOUND_THRESHOLD,
    POLYNOMIAL_COUNT, PRIME_BOUND, PRIME_BOUND_PRESETS,
};
// Primality
pub use crate::sieve::{sieve, PrimeSet};
// Polynomial search
pub use crate::poly_search::{
    find_efficient_polynomials, find_with_defaults, prime_run, CountSummary, IntRange,
    PolynomialCandidate, SearchCfg, SearchOutcome,
};
// Spiral
pub use crate::spiral::{map_all, point_for, polar, SpiralPoint};
// Orchestration
pub use crate::orchestrator::{
    compute, compute_bounded, spawn_worker, ComputationRequest, ComputationResult, ComputeCfg,
    GenerationCounter, SpiralClient, WorkRequest, WorkerError, WorkerHandle,
};
