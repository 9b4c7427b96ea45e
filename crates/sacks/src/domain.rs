//! Request domains and the clamping rule applied at the orchestrator entry.
//!
//! Policy
//! - Raw inputs are rounded to the nearest integer and clamped into their
//!   domain. NaN, non-numeric text and values that round to zero fall back to
//!   the domain minimum. Clamping never fails.
//! - The maximum bound and maximum polynomial count are the only latency
//!   guard the engine has; there are no timeouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Closed integer domain `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub min: u32,
    pub max: u32,
}

/// Supported prime bounds.
pub const PRIME_BOUND: Domain = Domain {
    min: 1_000,
    max: 1_000_000,
};

/// Supported number of selected polynomials.
pub const POLYNOMIAL_COUNT: Domain = Domain { min: 1, max: 200 };

/// Bounds above this take noticeably long to sieve, search and draw.
pub const LARGE_BOUND_THRESHOLD: u32 = 100_000;

/// Commonly used bounds (several are perfect squares, which close the spiral
/// on the positive x-axis).
pub const PRIME_BOUND_PRESETS: [u32; 6] = [10_000, 32_400, 62_500, 100_000, 250_000, 500_000];

impl Domain {
    /// Round, fall back to `min` on NaN or zero, then clamp into `[min, max]`.
    pub fn clamp(&self, raw: RawNumber) -> u32 {
        let v = raw.0.round();
        if v.is_nan() || v == 0.0 {
            return self.min;
        }
        v.clamp(f64::from(self.min), f64::from(self.max)) as u32
    }

    #[inline]
    pub fn contains(&self, v: u32) -> bool {
        (self.min..=self.max).contains(&v)
    }
}

/// A raw numeric request field before validation.
///
/// Accepts JSON numbers, numeric strings, and anything else (read as NaN).
/// Text parses after trimming; an empty string reads as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawNumber(pub f64);

impl RawNumber {
    pub const NAN: RawNumber = RawNumber(f64::NAN);

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for RawNumber {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<u32> for RawNumber {
    fn from(v: u32) -> Self {
        Self(f64::from(v))
    }
}

impl From<i32> for RawNumber {
    fn from(v: i32) -> Self {
        Self(f64::from(v))
    }
}

impl FromStr for RawNumber {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Ok(Self(0.0));
        }
        Ok(Self(t.parse::<f64>().unwrap_or(f64::NAN)))
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RawNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
            Other(serde::de::IgnoredAny),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Number(v) => RawNumber(v),
            Repr::Text(s) => s.parse().unwrap_or(RawNumber::NAN),
            Repr::Other(_) => RawNumber::NAN,
        })
    }
}

/// Clamp a raw prime bound into [`PRIME_BOUND`].
#[inline]
pub fn clamp_bound(raw: impl Into<RawNumber>) -> u32 {
    PRIME_BOUND.clamp(raw.into())
}

/// Clamp a raw polynomial count into [`POLYNOMIAL_COUNT`].
#[inline]
pub fn clamp_polynomial_count(raw: impl Into<RawNumber>) -> u32 {
    POLYNOMIAL_COUNT.clamp(raw.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_domain_values_round_to_nearest() {
        assert_eq!(clamp_bound(25_000.4), 25_000);
        assert_eq!(clamp_bound(25_000.6), 25_001);
        assert_eq!(clamp_polynomial_count(12.5), 13);
        assert_eq!(clamp_polynomial_count(200), 200);
    }

    #[test]
    fn out_of_range_values_clamp_to_the_ends() {
        assert_eq!(clamp_bound(5), PRIME_BOUND.min);
        assert_eq!(clamp_bound(-40_000), PRIME_BOUND.min);
        assert_eq!(clamp_bound(5e9), PRIME_BOUND.max);
        assert_eq!(clamp_bound(f64::INFINITY), PRIME_BOUND.max);
        assert_eq!(clamp_bound(f64::NEG_INFINITY), PRIME_BOUND.min);
        assert_eq!(clamp_polynomial_count(1_000), POLYNOMIAL_COUNT.max);
    }

    #[test]
    fn nan_and_zero_fall_back_to_minimum() {
        assert_eq!(clamp_bound(f64::NAN), PRIME_BOUND.min);
        assert_eq!(clamp_bound(0), PRIME_BOUND.min);
        assert_eq!(clamp_polynomial_count(0.3), POLYNOMIAL_COUNT.min);
        assert_eq!(clamp_polynomial_count(RawNumber::NAN), POLYNOMIAL_COUNT.min);
    }

    #[test]
    fn text_parses_or_reads_as_nan() {
        assert_eq!("  5000 ".parse::<RawNumber>().unwrap(), RawNumber(5000.0));
        assert_eq!("".parse::<RawNumber>().unwrap(), RawNumber(0.0));
        assert!("lots".parse::<RawNumber>().unwrap().value().is_nan());
        assert_eq!(clamp_bound("lots".parse::<RawNumber>().unwrap()), 1_000);
        assert_eq!(clamp_bound("62500".parse::<RawNumber>().unwrap()), 62_500);
    }

    #[test]
    fn deserializes_numbers_strings_and_junk() {
        let v: RawNumber = serde_json::from_str("123.5").unwrap();
        assert_eq!(v, RawNumber(123.5));
        let v: RawNumber = serde_json::from_str("\"77\"").unwrap();
        assert_eq!(v, RawNumber(77.0));
        let v: RawNumber = serde_json::from_str("true").unwrap();
        assert!(v.value().is_nan());
        let v: RawNumber = serde_json::from_str("null").unwrap();
        assert!(v.value().is_nan());
    }

    #[test]
    fn presets_lie_inside_the_bound_domain() {
        assert!(PRIME_BOUND_PRESETS.iter().all(|&b| PRIME_BOUND.contains(b)));
        assert!(PRIME_BOUND.contains(LARGE_BOUND_THRESHOLD));
    }
}
