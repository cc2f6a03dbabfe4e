// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use num_bigint::BigUint;

/// p(0), p(1), ..., p(20) (OEIS A000041).
pub const PARTITION_SEQUENCE: [u64; 21] = [
    1, 1, 2, 3, 5, 7, 11, 15, 22, 30, 42, 56, 77, 101, 135, 176, 231, 297, 385, 490, 627,
];

/// Known values beyond the start of the sequence.
pub const KNOWN_VALUES: [(i64, u64); 5] = [
    (50, 204_226),
    (100, 190_569_292),
    (150, 40_853_235_313),
    (200, 3_972_999_029_388),
    (250, 230_793_554_364_681),
];

pub fn big(value: u64) -> BigUint {
    BigUint::from(value)
}
