// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Inclusive ranges of `n` to summarize.

use crate::constants::{DEFAULT_FROM, DEFAULT_TO};
use crate::error::{Error, Result};
use crate::summary::{info, PartitionSummary};
use std::ops::RangeInclusive;

/// A validated, non-empty range `from..=to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRange {
    from: i64,
    to: i64,
}

impl SummaryRange {
    /// Create a range, failing if `from > to`.
    pub fn new(from: i64, to: i64) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn start(self) -> i64 {
        self.from
    }

    pub fn end(self) -> i64 {
        self.to
    }

    pub fn as_range(self) -> RangeInclusive<i64> {
        self.from..=self.to
    }

    /// Summaries for every `n` in the range, in ascending order.
    ///
    /// Computed lazily; each item populates the shared cache.
    pub fn summaries(self) -> impl Iterator<Item = PartitionSummary> {
        self.as_range().map(info)
    }
}

impl Default for SummaryRange {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM,
            to: DEFAULT_TO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    #[test]
    fn test_default_range() {
        let range = SummaryRange::default();
        assert_eq!(range.as_range(), 1..=20);
        assert_eq!(range.summaries().count(), 20);
    }

    #[test]
    fn test_single_point_range() {
        let range = SummaryRange::new(7, 7).unwrap();
        let summaries: Vec<_> = range.summaries().collect();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].n(), 7);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(
            SummaryRange::new(10, 3),
            Err(Error::InvalidRange { from: 10, to: 3 })
        );
    }

    #[test]
    fn test_negative_bounds_are_allowed() {
        let range = SummaryRange::new(-2, 1).unwrap();
        let exact: Vec<u32> = range
            .summaries()
            .map(|s| s.exact().to_u32().unwrap())
            .collect();
        assert_eq!(exact, vec![0, 0, 1, 1]);
    }
}
