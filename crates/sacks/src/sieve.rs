//! Sieve of Eratosthenes over `[0, bound]`.
//!
//! Purpose
//! - Provide the primality oracle shared by the polynomial search and the
//!   spiral mapper. One sieve per request; nothing is extended incrementally.
//!
//! Model
//! - A `Vec<bool>` table of size `bound + 1` answers membership in O(1), and the
//!   ascending list of primes is collected once for ordered iteration.
//! - `bound < 2` yields the empty set (no error).

/// Primes in `[2, bound]`, with O(1) membership and ascending iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimeSet {
    bound: u32,
    is_prime: Vec<bool>,
    primes: Vec<u32>,
}

impl PrimeSet {
    /// Upper bound the set was sieved to (inclusive).
    #[inline]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Membership test for any integer; negatives and values past the bound are
    /// never members.
    #[inline]
    pub fn contains(&self, n: i64) -> bool {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.is_prime.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Primes in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.primes
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.primes.iter().copied()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.primes
    }
}

/// Largest `r` with `r * r <= n`.
fn floor_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Compute all primes `<= bound`.
///
/// O(bound log log bound) time, O(bound) space.
pub fn sieve(bound: u32) -> PrimeSet {
    if bound < 2 {
        return PrimeSet {
            bound,
            ..PrimeSet::default()
        };
    }
    let n = bound as usize;
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;
    for p in 2..=floor_sqrt(n) {
        if is_prime[p] {
            for k in (p * p..=n).step_by(p) {
                is_prime[k] = false;
            }
        }
    }
    let primes = is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &flag)| flag.then_some(i as u32))
        .collect();
    PrimeSet {
        bound,
        is_prime,
        primes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn trial_division(v: u32) -> bool {
        v >= 2 && (2..).take_while(|d| d * d <= v).all(|d| v % d != 0)
    }

    #[test]
    fn empty_below_two() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
        assert!(!sieve(1).contains(1));
    }

    #[test]
    fn primes_up_to_thirty() {
        let ps = sieve(30);
        assert_eq!(ps.as_slice(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(ps.bound(), 30);
    }

    #[test]
    fn bound_is_inclusive() {
        assert!(sieve(11).contains(11));
        assert!(sieve(2).contains(2));
        assert_eq!(sieve(2).len(), 1);
    }

    #[test]
    fn composites_and_out_of_range_are_not_members() {
        let ps = sieve(100);
        for c in [4, 6, 9, 15, 49, 91, 100] {
            assert!(!ps.contains(c), "{c} should be composite");
        }
        assert!(!ps.contains(-7));
        assert!(!ps.contains(101));
        assert!(!ps.contains(i64::MAX));
    }

    #[test]
    fn counts_match_prime_counting_function() {
        assert_eq!(sieve(1_000).len(), 168);
        assert_eq!(sieve(10_000).len(), 1_229);
        assert_eq!(sieve(1_000_000).len(), 78_498);
    }

    #[test]
    fn floor_sqrt_exact_on_squares() {
        for r in 0..2_000usize {
            assert_eq!(floor_sqrt(r * r), r);
            if r > 0 {
                assert_eq!(floor_sqrt(r * r - 1), r - 1);
            }
        }
    }

    proptest! {
        #[test]
        fn members_are_exactly_the_primes(bound in 0u32..5_000) {
            let ps = sieve(bound);
            for v in ps.iter() {
                prop_assert!(v >= 2 && v <= bound);
                prop_assert!(trial_division(v));
            }
            let expected = (0..=bound).filter(|&v| trial_division(v)).count();
            prop_assert_eq!(ps.len(), expected);
            prop_assert!(ps.as_slice().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
