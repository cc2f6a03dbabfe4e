// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer partition statistics.
//!
//! For an integer `n` this crate computes:
//! - the exact number of partitions `p(n)` (arbitrary precision)
//! - the Hardy–Ramanujan asymptotic estimate of `p(n)`
//! - whether `n` is "forbidden", i.e. lies in a residue class covered by one of
//!   Ramanujan's congruences mod 5, 7 or 11
//!
//! [`info`] bundles all three into a [`PartitionSummary`].
//!
//! # Architecture
//!
//! ## Exact counts
//!
//! Exact counts come from Euler's pentagonal number recurrence, evaluated
//! bottom-up into a [`PartitionTable`]. [`exact`] consults a single table shared
//! by the whole process behind a lock. The table only grows, so cached and
//! freshly computed answers are identical. Callers that prefer a private cache
//! (e.g. one per worker thread) own a [`PartitionTable`] directly.
//!
//! ## Estimates and congruences
//!
//! [`asymptotic`] and [`forbidden`] are closed-form and keep no state.
//!
//! # Limits
//!
//! Every function is total over `i64`. Negative `n` gives `p(n) = 0` and an
//! estimate of `0.0`. Large `n` is bounded only by memory (the shared table
//! keeps every entry up to the largest `n` requested) and by the `f64` range
//! for the estimate.
//!
//! # Example
//!
//! ```
//! use partition_stats::info;
//!
//! let summary = info(5);
//! assert_eq!(summary.to_string(), "Q=5, exact=7, approx=8.94, forbidden=true");
//! ```
//!
//! # References
//!
//! - Hardy, G. H.; Ramanujan, S. (1918). "Asymptotic formulæ in combinatory analysis."
//!   Proceedings of the London Mathematical Society, 17, 75–115.
//! - Ramanujan, S. (1919). "Some properties of p(n), the number of partitions of n."
//!   Proceedings of the Cambridge Philosophical Society, 19, 207–210.

pub mod congruence;
pub mod constants;
pub mod error;
pub mod memo;
pub mod partition;
pub mod range;
pub mod statistics;
pub mod summary;

// Re-export commonly used types
pub use congruence::{forbidden, forbidden_congruences, Congruence, RAMANUJAN_CONGRUENCES};
pub use error::{Error, Result};
pub use memo::PartitionTable;
pub use partition::{asymptotic, cache_statistics, exact, log_asymptotic};
pub use range::SummaryRange;
pub use summary::{info, PartitionSummary};
