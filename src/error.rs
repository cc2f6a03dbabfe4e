// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! The partition functions themselves are total; only building a
//! [`SummaryRange`](crate::range::SummaryRange) can fail.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lower bound lies above the upper bound.
    #[error("Invalid range: from {from} is greater than to {to}")]
    InvalidRange { from: i64, to: i64 },
}
