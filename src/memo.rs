// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized partition numbers.
//!
//! [`PartitionTable`] holds `p(0), p(1), ..., p(len - 1)` and grows on demand.
//! Entries are only ever appended, so a value once returned never changes.
//!
//! # Recurrence
//!
//! Entries are filled bottom-up with Euler's pentagonal number theorem:
//!
//! ```text
//! p(m) = Σ_{k≥1} (-1)^{k+1} [ p(m - k(3k-1)/2) + p(m - k(3k+1)/2) ]
//! ```
//!
//! The sum for step `k` stops as soon as `k(3k-1)/2 > m`; the second term is
//! dropped when `k(3k+1)/2 > m`. Each entry costs `O(√m)` big-integer
//! additions, so filling the table up to `n` is `O(n^{3/2})` additions.
//!
//! # Memory
//!
//! The table keeps every entry it has computed. `p(n)` has roughly
//! `π√(2n/3) / ln 2` bits, so a table reaching `n = 100_000` holds about
//! 10 MB of digits. Callers choosing very large `n` accept that cost.

use crate::constants::{pentagonal, pentagonal_conjugate};
use crate::statistics::{Counters, Statistics};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

/// Growable table of exact partition numbers.
///
/// A freshly created table already contains `p(0) = 1`.
#[derive(Debug, Clone)]
pub struct PartitionTable {
    values: Vec<BigUint>,
    statistics: Statistics,
}

impl PartitionTable {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create a table with room for `p(0..capacity)` without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut values = Vec::with_capacity(capacity.max(1));
        values.push(BigUint::one());
        Self {
            values,
            statistics: Statistics::new(),
        }
    }

    /// Number of entries held, i.e. one more than the largest `n` known.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: `p(0)` is present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up `p(n)` without computing anything.
    #[inline]
    pub fn get(&self, n: usize) -> Option<&BigUint> {
        self.values.get(n)
    }

    /// Counters describing how this table has been used so far.
    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    /// Return `p(n)`, growing the table if needed. Negative `n` yields zero.
    ///
    /// # Panics
    ///
    /// Panics if `n` does not fit in `usize` (only possible on targets
    /// narrower than 64 bits), since such a table cannot be allocated.
    pub fn exact(&mut self, n: i64) -> BigUint {
        if n < 0 {
            return BigUint::zero();
        }
        let Some(index) = table_index(n) else {
            panic!("p({}) needs a table larger than the address space", n);
        };

        if index < self.values.len() {
            trace!(n = n, "[PartitionTable] Cache hit");
            self.statistics.increment_counter(Counters::CacheHits);
        } else {
            self.statistics.increment_counter(Counters::CacheMisses);
            self.extend_to(index);
        }
        self.values[index].clone()
    }

    /// Ensure `p(0..=n)` are all present.
    pub fn extend_to(&mut self, n: usize) {
        let start = self.values.len();
        if n < start {
            return;
        }

        debug!(from = start, to = n, "[PartitionTable] Extending table");
        self.values.reserve(n + 1 - start);
        for m in start..=n {
            let value = self.recurrence(m);
            self.values.push(value);
        }
        self.statistics
            .add(Counters::EntriesComputed, (n + 1 - start) as u64);
    }

    /// Evaluate the pentagonal recurrence for `m`, given `p(0..m)`.
    ///
    /// Positive and negative terms are summed separately so the arithmetic
    /// stays unsigned; the final difference is `p(m) >= 0`.
    fn recurrence(&self, m: usize) -> BigUint {
        debug_assert_eq!(self.values.len(), m);

        let mut positive = BigUint::zero();
        let mut negative = BigUint::zero();

        for k in 1.. {
            let first = pentagonal(k);
            if first > m {
                break;
            }
            let sum = if k % 2 == 1 {
                &mut positive
            } else {
                &mut negative
            };
            *sum += &self.values[m - first];

            let second = pentagonal_conjugate(k);
            if second <= m {
                *sum += &self.values[m - second];
            }
        }

        positive - negative
    }
}

/// Position of `p(n)` in the table, or `None` if `n` is negative or does
/// not fit in `usize`.
fn table_index(n: i64) -> Option<usize> {
    usize::try_from(n).ok()
}

impl Default for PartitionTable {
    fn default() -> Self {
        Self::new()
    }
}
