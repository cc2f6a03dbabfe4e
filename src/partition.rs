// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact and asymptotic partition counts.
//!
//! [`exact`] answers from a process-wide [`PartitionTable`] shared by every
//! caller. The table is only reachable through this module; callers that want
//! a private cache (for example one per worker thread) can own a
//! [`PartitionTable`] directly and get identical values.

use crate::memo::PartitionTable;
use crate::statistics::Statistics;
use num_bigint::BigUint;
use parking_lot::Mutex;
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Shared memoization cache. Grows monotonically for the lifetime of the process.
static SHARED_TABLE: LazyLock<Mutex<PartitionTable>> =
    LazyLock::new(|| Mutex::new(PartitionTable::new()));

/// The number of partitions of `n`.
///
/// Returns `0` for negative `n` and `1` for `n == 0`.
///
/// # Example
///
/// ```
/// use partition_stats::exact;
/// use num_bigint::BigUint;
///
/// assert_eq!(exact(4), BigUint::from(5u32));
/// assert_eq!(exact(-3), BigUint::from(0u32));
/// ```
pub fn exact(n: i64) -> BigUint {
    SHARED_TABLE.lock().exact(n)
}

/// Hardy–Ramanujan leading-order estimate of `p(n)`:
///
/// ```text
/// p̃(n) = 1 / (4n√3) · exp(π √(2n/3))
/// ```
///
/// Returns `0.0` for `n <= 0`. The estimate overshoots for small `n`
/// (`p̃(1) ≈ 1.88`, `p̃(50)` is 6.5% high) and its relative error shrinks
/// roughly like `1/√n`. Beyond `n ≈ 76_500` the exponential exceeds
/// `f64::MAX` and the result is `f64::INFINITY`; use [`log_asymptotic`] there.
pub fn asymptotic(n: i64) -> f64 {
    if n <= 0 {
        return 0.0;
    }
    let n = n as f64;
    (1.0 / (4.0 * n * 3f64.sqrt())) * (PI * (2.0 * n / 3.0).sqrt()).exp()
}

/// Natural logarithm of the estimate, `π√(2n/3) − ln(4n√3)`.
///
/// Finite for every positive `n`, including those where [`asymptotic`]
/// overflows. Returns `None` for `n <= 0`, where the estimate is zero.
pub fn log_asymptotic(n: i64) -> Option<f64> {
    if n <= 0 {
        return None;
    }
    let n = n as f64;
    Some(PI * (2.0 * n / 3.0).sqrt() - (4.0 * n * 3f64.sqrt()).ln())
}

/// Snapshot of the counters kept by the shared cache behind [`exact`].
pub fn cache_statistics() -> Statistics {
    SHARED_TABLE.lock().statistics()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{ToPrimitive, Zero};

    #[test]
    fn test_exact_base_cases() {
        assert_eq!(exact(0), BigUint::from(1u32));
        assert_eq!(exact(1), BigUint::from(1u32));
        assert_eq!(exact(4), BigUint::from(5u32));
        assert!(exact(-1).is_zero());
        assert!(exact(-1000).is_zero());
    }

    #[test]
    fn test_exact_matches_private_table() {
        let mut table = PartitionTable::new();
        for n in [0, 7, 33, 64, 150] {
            assert_eq!(exact(n), table.exact(n), "p({})", n);
        }
    }

    #[test]
    fn test_asymptotic_non_positive() {
        assert_eq!(asymptotic(0), 0.0);
        assert_eq!(asymptotic(-5), 0.0);
        assert_eq!(asymptotic(i64::MIN), 0.0);
    }

    #[test]
    fn test_asymptotic_small_n_overshoots() {
        let approx = asymptotic(1);
        assert!(approx > 1.8 && approx < 1.9, "p~(1) = {}", approx);
    }

    #[test]
    fn test_asymptotic_relative_error() {
        let p = exact(50).to_f64().unwrap();
        assert_eq!(p, 204_226.0);
        let error = (asymptotic(50) - p) / p;
        assert!(error > 0.06 && error < 0.07, "relative error at 50: {}", error);

        let p = exact(100).to_f64().unwrap();
        let error = (asymptotic(100) - p).abs() / p;
        assert!(error < 0.05, "relative error at 100: {}", error);
    }

    #[test]
    fn test_asymptotic_matches_closed_form_to_two_decimals() {
        for n in 1..=400i64 {
            let x = n as f64;
            let direct = (1.0 / (4.0 * x * 3f64.sqrt())) * (PI * (2.0 * x / 3.0).sqrt()).exp();
            assert_eq!(
                format!("{:.2}", asymptotic(n)),
                format!("{:.2}", direct),
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn test_log_asymptotic_agrees() {
        assert_eq!(log_asymptotic(0), None);
        assert_eq!(log_asymptotic(-4), None);
        for n in [1, 50, 200, 1000] {
            let log = log_asymptotic(n).unwrap();
            let direct = asymptotic(n).ln();
            assert!((log - direct).abs() < 1e-9, "n = {}: {} vs {}", n, log, direct);
        }
    }

    #[test]
    fn test_asymptotic_overflows_to_infinity() {
        assert!(asymptotic(50_000).is_finite());
        assert!(asymptotic(80_000).is_infinite());
        assert!(asymptotic(1_000_000).is_infinite());
        assert!(log_asymptotic(1_000_000).unwrap().is_finite());
    }
}
