//! Dedicated worker thread and the caller-side client.
//!
//! The worker owns nothing but its configuration; requests arrive over an
//! unbounded channel and are processed strictly one at a time, in order.
//! Results are moved out over a second channel. Staleness is decided by the
//! caller ([`SpiralClient`]), never by the worker.

use std::fmt;
use std::thread::{self, JoinHandle};

use tokio::sync::{mpsc, oneshot};

use crate::domain::RawNumber;

use super::compute::compute;
use super::generation::GenerationCounter;
use super::types::{ComputationRequest, ComputationResult, ComputeCfg};

/// Errors surfaced by the worker channel.
#[derive(Debug)]
pub enum WorkerError {
    /// The OS refused to start the worker thread.
    Spawn(std::io::Error),
    /// The worker has stopped and no longer accepts requests.
    Closed,
    /// The worker stopped before acknowledging shutdown.
    ShutdownUnacknowledged,
    /// The worker thread panicked.
    Panicked,
}

impl fmt::Display for WorkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerError::Spawn(err) => write!(f, "failed to start worker thread: {err}"),
            WorkerError::Closed => write!(f, "worker channel closed"),
            WorkerError::ShutdownUnacknowledged => {
                write!(f, "worker stopped without acknowledging shutdown")
            }
            WorkerError::Panicked => write!(f, "worker thread panicked"),
        }
    }
}

impl std::error::Error for WorkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkerError::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

/// Messages understood by the worker loop.
#[derive(Debug)]
pub enum WorkRequest {
    Compute(ComputationRequest),
    Shutdown { ack: oneshot::Sender<()> },
}

/// Sending half of a running worker.
pub struct WorkerHandle {
    requests: mpsc::UnboundedSender<WorkRequest>,
    thread: JoinHandle<()>,
}

/// Start a worker thread. Returns the handle and the stream of results.
///
/// Dropping the handle lets the worker finish queued requests and exit.
pub fn spawn_worker(
    cfg: ComputeCfg,
) -> Result<(WorkerHandle, mpsc::UnboundedReceiver<ComputationResult>), WorkerError> {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (result_tx, result_rx) = mpsc::unbounded_channel();
    let thread = thread::Builder::new()
        .name("sacks-worker".into())
        .spawn(move || worker_loop(request_rx, result_tx, cfg))
        .map_err(WorkerError::Spawn)?;
    Ok((
        WorkerHandle {
            requests: request_tx,
            thread,
        },
        result_rx,
    ))
}

fn worker_loop(
    mut rx: mpsc::UnboundedReceiver<WorkRequest>,
    results: mpsc::UnboundedSender<ComputationResult>,
    cfg: ComputeCfg,
) {
    tracing::trace!("worker started");
    while let Some(work) = rx.blocking_recv() {
        match work {
            WorkRequest::Compute(request) => {
                tracing::debug!(generation = request.generation_token, "request received");
                let result = compute(&request, cfg);
                if results.send(result).is_err() {
                    tracing::debug!("result receiver dropped, stopping");
                    break;
                }
            }
            WorkRequest::Shutdown { ack } => {
                tracing::debug!("worker received shutdown signal");
                if ack.send(()).is_err() {
                    tracing::error!("worker failed to acknowledge shutdown");
                }
                break;
            }
        }
    }
    tracing::trace!("worker stopped");
}

impl WorkerHandle {
    /// Queue a request; it runs after everything queued before it.
    pub fn send(&self, request: ComputationRequest) -> Result<(), WorkerError> {
        self.requests
            .send(WorkRequest::Compute(request))
            .map_err(|_| WorkerError::Closed)
    }

    /// Stop the worker after the requests already queued, then join it.
    ///
    /// # Panics
    ///
    /// Blocks the current thread; panics if called from within an async runtime.
    pub fn shutdown(self) -> Result<(), WorkerError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        let acked = match self.requests.send(WorkRequest::Shutdown { ack: ack_tx }) {
            Ok(()) => ack_rx
                .blocking_recv()
                .map_err(|_| WorkerError::ShutdownUnacknowledged),
            Err(_) => Err(WorkerError::Closed),
        };
        drop(self.requests);
        self.thread.join().map_err(|_| WorkerError::Panicked)?;
        acked
    }
}

/// Caller side of the protocol: issues tokens, submits, and keeps only the
/// result of the latest submission.
pub struct SpiralClient {
    worker: WorkerHandle,
    results: mpsc::UnboundedReceiver<ComputationResult>,
    generation: GenerationCounter,
}

impl SpiralClient {
    pub fn spawn(cfg: ComputeCfg) -> Result<Self, WorkerError> {
        let (worker, results) = spawn_worker(cfg)?;
        Ok(Self {
            worker,
            results,
            generation: GenerationCounter::new(),
        })
    }

    /// Submit raw inputs under a fresh token; earlier submissions become stale.
    pub fn submit(
        &mut self,
        max_prime_raw: impl Into<RawNumber>,
        polynomial_count_raw: impl Into<RawNumber>,
    ) -> Result<u64, WorkerError> {
        let generation_token = self.generation.issue();
        self.worker.send(ComputationRequest {
            max_prime_raw: max_prime_raw.into(),
            polynomial_count_raw: polynomial_count_raw.into(),
            generation_token,
        })?;
        Ok(generation_token)
    }

    /// Latest token issued by this client (0 before any submission).
    #[inline]
    pub fn latest_token(&self) -> u64 {
        self.generation.latest()
    }

    fn accept(&self, result: &ComputationResult) -> bool {
        if self.generation.is_current(result.generation_token) {
            return true;
        }
        tracing::debug!(
            generation = result.generation_token,
            latest = self.generation.latest(),
            "dropping stale result"
        );
        false
    }

    /// Wait for the result of the latest submission, discarding stale ones.
    ///
    /// Waits indefinitely if nothing is pending. `None` once the worker is gone.
    pub async fn next_current(&mut self) -> Option<ComputationResult> {
        while let Some(result) = self.results.recv().await {
            if self.accept(&result) {
                return Some(result);
            }
        }
        None
    }

    /// Blocking variant of [`next_current`](Self::next_current).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime.
    pub fn blocking_next_current(&mut self) -> Option<ComputationResult> {
        while let Some(result) = self.results.blocking_recv() {
            if self.accept(&result) {
                return Some(result);
            }
        }
        None
    }

    /// Drain whatever has arrived without waiting; returns the current result
    /// if it is among them.
    pub fn try_next_current(&mut self) -> Option<ComputationResult> {
        let mut current = None;
        while let Ok(result) = self.results.try_recv() {
            if self.accept(&result) {
                current = Some(result);
            }
        }
        current
    }

    /// Stop the worker; see [`WorkerHandle::shutdown`].
    pub fn shutdown(self) -> Result<(), WorkerError> {
        self.worker.shutdown()
    }
}
