//! Request orchestration: validation, computation, partitioning, delivery.
//!
//! Purpose
//! - Turn a raw request into a self-contained `ComputationResult` stamped with
//!   the request's generation token, and deliver it by move from an isolated
//!   worker thread.
//!
//! Why this design
//! - Only messages cross the thread boundary; the worker keeps no reference to
//!   anything it has sent.
//! - Cancellation is cooperative and caller-side: the caller keeps the latest
//!   token and drops results carrying older ones. The worker never aborts.
//!
//! Layout: `types.rs` (messages, config), `compute.rs` (synchronous path),
//! `generation.rs` (tokens), `worker.rs` (thread, client, errors).

mod compute;
mod generation;
mod types;
mod worker;

pub use compute::{compute, compute_bounded};
pub use generation::GenerationCounter;
pub use types::{ComputationRequest, ComputationResult, ComputeCfg};
pub use worker::{spawn_worker, SpiralClient, WorkRequest, WorkerError, WorkerHandle};
