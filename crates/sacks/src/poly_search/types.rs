//! Data types for the polynomial search and its outcome.
//!
//! Kept small and explicit so `search` reads as the algorithm only.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Inclusive integer interval `[lo, hi]`; empty when `lo > hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub lo: i64,
    pub hi: i64,
}

impl IntRange {
    #[inline]
    pub const fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    /// Number of integers in the interval, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        if self.lo > self.hi {
            return 0;
        }
        usize::try_from(self.hi.abs_diff(self.lo))
            .unwrap_or(usize::MAX)
            .saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Ascending iteration over the interval.
    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.lo..=self.hi
    }

    /// Overlap of two intervals; empty when they are disjoint.
    #[inline]
    pub fn intersect(&self, other: IntRange) -> IntRange {
        IntRange::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }
}

/// Search configuration: the (b, c) parameter rectangle for `x² + b·x + c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCfg {
    pub b_range: IntRange,
    /// Only primes inside this range are tried as `c`.
    pub c_range: IntRange,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            b_range: IntRange::new(-120, 120),
            c_range: IntRange::new(2, 200),
        }
    }
}

impl SearchCfg {
    /// Number of (b, c) pairs in the rectangle, saturating at `usize::MAX`.
    pub fn search_space(&self) -> usize {
        self.b_range.len().saturating_mul(self.c_range.len())
    }

    /// The `c` values worth trying below `bound`: a run starts at `c`, so only
    /// `[2, bound]` can contribute.
    pub fn c_range_within(&self, bound: u32) -> IntRange {
        self.c_range.intersect(IntRange::new(2, i64::from(bound)))
    }
}

/// One quadratic `x² + b·x + c` and the primes it produced, in x order.
///
/// Consecutive repeats are collapsed (`x² − x + 41` hits 41 at x = 0 and 1),
/// so `sequence` never holds two equal neighbours. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialCandidate {
    pub b: i64,
    pub c: i64,
    pub sequence: Vec<u32>,
}

impl PolynomialCandidate {
    #[inline]
    pub fn count(&self) -> usize {
        self.sequence.len()
    }

    /// Value of the polynomial at `x`; `None` on i64 overflow.
    #[inline]
    pub fn eval(&self, x: i64) -> Option<i64> {
        eval_quadratic(self.b, self.c, x)
    }
}

/// `x² + b·x + c`, or `None` if any step overflows i64.
#[inline]
pub fn eval_quadratic(b: i64, c: i64, x: i64) -> Option<i64> {
    x.checked_mul(x)?
        .checked_add(b.checked_mul(x)?)?
        .checked_add(c)
}

/// Min/max sequence length over the selected candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSummary {
    pub min: usize,
    pub max: usize,
}

/// Top-K candidates (best first) and the union of their primes.
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    pub candidates: Vec<PolynomialCandidate>,
    pub efficient: HashSet<u32>,
}

impl SearchOutcome {
    #[inline]
    pub fn is_efficient(&self, value: u32) -> bool {
        self.efficient.contains(&value)
    }

    pub fn ordered_sequences(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.candidates.iter().map(|c| c.sequence.as_slice())
    }

    /// `None` when no candidate was selected; never a sentinel value.
    pub fn count_summary(&self) -> Option<CountSummary> {
        let counts = self.candidates.iter().map(PolynomialCandidate::count);
        let min = counts.clone().min()?;
        let max = counts.max()?;
        Some(CountSummary { min, max })
    }

    /// Split into the efficient-prime set and the ranked sequences.
    pub fn into_parts(self) -> (HashSet<u32>, Vec<Vec<u32>>) {
        let sequences = self.candidates.into_iter().map(|c| c.sequence).collect();
        (self.efficient, sequences)
    }
}
