//! Caller-side generation tokens for last-result-wins delivery.

/// Monotonic request counter owned by the caller.
///
/// Every submitted request captures a fresh token from [`issue`](Self::issue);
/// a completed result is kept only if its token is still the latest one issued.
/// In-flight work is never aborted, only ignored once it arrives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationCounter {
    latest: u64,
}

impl GenerationCounter {
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue the next token (first token is 1).
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Latest token issued; 0 before the first request.
    #[inline]
    pub fn latest(&self) -> u64 {
        self.latest
    }

    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        self.latest != 0 && token == self.latest
    }

    /// Superseded by a later request.
    #[inline]
    pub fn is_stale(&self, token: u64) -> bool {
        token < self.latest
    }
}
