//! Stateful sequence generator.
//!
//! Holds the two most recent terms and produces the next one on demand.
//! The starting pair (1, -1) sits one step before the canonical start, so the
//! first term produced is -1 + 1 = F(0) = 0.

use tracing::debug;

const INITIAL_PREV1: i64 = 1;
const INITIAL_PREV2: i64 = -1;

/// Generator of successive Fibonacci terms.
///
/// # Example
/// ```
/// use fibseries_core::generator::FibGenerator;
/// let mut seq = FibGenerator::new();
/// let first: Vec<u64> = seq.by_ref().take(8).collect();
/// assert_eq!(first, [0, 1, 1, 2, 3, 5, 8, 13]);
///
/// seq.reset();
/// assert_eq!(seq.next_term(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibGenerator {
    prev1: i64,
    prev2: i64,
    produced: u64,
    exhausted: bool,
}

impl FibGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev1: INITIAL_PREV1,
            prev2: INITIAL_PREV2,
            produced: 0,
            exhausted: false,
        }
    }

    /// Produce the next term, or `None` once it no longer fits the state.
    ///
    /// The last term produced is F(92), the largest term below `i64::MAX`.
    pub fn next_term(&mut self) -> Option<u64> {
        if self.exhausted {
            return None;
        }
        let Some(curr) = self.prev2.checked_add(self.prev1) else {
            self.exhausted = true;
            debug!(produced = self.produced, "generator exhausted");
            return None;
        };
        self.prev2 = self.prev1;
        self.prev1 = curr;
        self.produced += 1;
        u64::try_from(curr).ok()
    }

    /// Restore the starting pair; the next term produced is F(0) again.
    pub fn reset(&mut self) {
        self.prev1 = INITIAL_PREV1;
        self.prev2 = INITIAL_PREV2;
        self.produced = 0;
        self.exhausted = false;
    }

    /// Number of terms produced since construction or the last reset.
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced
    }
}

impl Default for FibGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibGenerator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_term()
    }
}

impl std::iter::FusedIterator for FibGenerator {}
