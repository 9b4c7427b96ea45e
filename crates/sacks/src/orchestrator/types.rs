//! Request/response messages and the computation configuration.
//!
//! Field names serialize in camelCase to match the message shapes consumers
//! exchange with the worker.

use serde::{Deserialize, Serialize};

use crate::domain::RawNumber;
use crate::poly_search::{CountSummary, SearchCfg};
use crate::spiral::SpiralPoint;

/// Configuration for one computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputeCfg {
    pub search: SearchCfg,
    /// Radial distance per unit of √n.
    pub step: f64,
}

impl Default for ComputeCfg {
    fn default() -> Self {
        Self {
            search: SearchCfg::default(),
            step: 1.0,
        }
    }
}

/// A request as submitted by a caller; raw fields are clamped on receipt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationRequest {
    pub max_prime_raw: RawNumber,
    pub polynomial_count_raw: RawNumber,
    pub generation_token: u64,
}

/// Everything computed for one request, owned by the receiver.
///
/// `points` lists every prime `<= bound` ascending; the regular/efficient
/// coordinate lists partition it (same relative order). `count_summary` is
/// `None` exactly when `ordered_sequences` is empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputationResult {
    pub generation_token: u64,
    pub bound: u32,
    pub points: Vec<SpiralPoint>,
    pub regular_x: Vec<f64>,
    pub regular_y: Vec<f64>,
    pub efficient_x: Vec<f64>,
    pub efficient_y: Vec<f64>,
    pub ordered_sequences: Vec<Vec<u32>>,
    pub count_summary: Option<CountSummary>,
}

impl ComputationResult {
    /// Interleaved `[value, x, y, value, x, y, …]` buffer of `points`.
    pub fn points_flat(&self) -> Vec<f64> {
        let mut flat = Vec::with_capacity(self.points.len() * 3);
        for p in &self.points {
            flat.extend_from_slice(&[f64::from(p.value), p.x, p.y]);
        }
        flat
    }

    #[inline]
    pub fn regular_len(&self) -> usize {
        self.regular_x.len()
    }

    #[inline]
    pub fn efficient_len(&self) -> usize {
        self.efficient_x.len()
    }
}
