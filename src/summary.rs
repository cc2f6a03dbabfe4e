// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-`n` summary record.

use crate::congruence::forbidden;
use crate::partition::{asymptotic, exact};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::fmt;

/// Everything computed for one `n`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionSummary {
    n: i64,
    exact: BigUint,
    asymptotic: f64,
    forbidden: bool,
}

impl PartitionSummary {
    pub fn n(&self) -> i64 {
        self.n
    }

    /// Exact partition count `p(n)`.
    pub fn exact(&self) -> &BigUint {
        &self.exact
    }

    /// Hardy–Ramanujan estimate of `p(n)`.
    pub fn asymptotic(&self) -> f64 {
        self.asymptotic
    }

    pub fn forbidden(&self) -> bool {
        self.forbidden
    }

    /// `|exact - asymptotic| / exact`, or `None` when `exact` is zero.
    ///
    /// Counts too large for `f64` give `NaN` once the estimate is also infinite.
    pub fn relative_error(&self) -> Option<f64> {
        if self.exact.is_zero() {
            return None;
        }
        let exact = self.exact.to_f64().unwrap_or(f64::INFINITY);
        Some((exact - self.asymptotic).abs() / exact)
    }
}

impl fmt::Display for PartitionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q={}, exact={}, approx={:.2}, forbidden={}",
            self.n, self.exact, self.asymptotic, self.forbidden
        )
    }
}

/// Compute the exact count, the estimate and the forbidden flag for `n`.
///
/// Populates the shared cache behind [`exact`].
pub fn info(n: i64) -> PartitionSummary {
    PartitionSummary {
        n,
        exact: exact(n),
        asymptotic: asymptotic(n),
        forbidden: forbidden(n),
    }
}
