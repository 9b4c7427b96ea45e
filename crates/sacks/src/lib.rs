//! Prime sieve, prime-generating quadratic search and Sacks spiral coordinates.
//!
//! Data flow
//! - request → `domain` clamps → `sieve` → {`poly_search`, `spiral`} →
//!   `orchestrator` partitions and stamps the result with the request token.
//!
//! Everything is recomputed per request; nothing is cached across requests.

pub mod api;
pub mod domain;
pub mod orchestrator;
pub mod poly_search;
pub mod sieve;
pub mod spiral;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::domain::{clamp_bound, clamp_polynomial_count, RawNumber};
    pub use crate::orchestrator::{
        compute, ComputationRequest, ComputationResult, ComputeCfg, SpiralClient,
    };
    pub use crate::poly_search::{find_efficient_polynomials, CountSummary, SearchCfg};
    pub use crate::sieve::{sieve, PrimeSet};
    pub use crate::spiral::{map_all, point_for, SpiralPoint};
}
