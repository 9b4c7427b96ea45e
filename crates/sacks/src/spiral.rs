//! Sacks spiral coordinates.
//!
//! Model
//! - `n ↦ (r, θ) = (step·√n, 2π·√n)`; the angle grows with √n, so every perfect
//!   square lands on the positive x-axis and prime-rich quadratics trace arms.
//! - Non-positive `n` maps to the origin.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::sieve::PrimeSet;

/// A prime and its position on the spiral. Serialized as `[value, x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "(u32, f64, f64)", from = "(u32, f64, f64)")]
pub struct SpiralPoint {
    pub value: u32,
    pub x: f64,
    pub y: f64,
}

impl From<SpiralPoint> for (u32, f64, f64) {
    fn from(p: SpiralPoint) -> Self {
        (p.value, p.x, p.y)
    }
}

impl From<(u32, f64, f64)> for SpiralPoint {
    fn from((value, x, y): (u32, f64, f64)) -> Self {
        Self { value, x, y }
    }
}

impl SpiralPoint {
    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Polar coordinates `(r, θ)` of `n`; `(0, 0)` for `n <= 0`.
#[inline]
pub fn polar(n: i64, step: f64) -> (f64, f64) {
    if n <= 0 {
        return (0.0, 0.0);
    }
    let root = (n as f64).sqrt();
    (step * root, TAU * root)
}

/// Cartesian position of `n` on the spiral.
#[inline]
pub fn point_for(n: i64, step: f64) -> Vector2<f64> {
    if n <= 0 {
        return Vector2::zeros();
    }
    let (r, theta) = polar(n, step);
    Vector2::new(r * theta.cos(), r * theta.sin())
}

/// One point per prime, ascending by value.
pub fn map_all(primes: &PrimeSet, step: f64) -> Vec<SpiralPoint> {
    primes
        .iter()
        .map(|value| {
            let p = point_for(i64::from(value), step);
            SpiralPoint {
                value,
                x: p.x,
                y: p.y,
            }
        })
        .collect()
}
