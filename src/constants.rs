// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the partition computations.
//!
//! # Ramanujan congruences
//!
//! | modulus | residue | consequence          |
//! |---------|---------|----------------------|
//! | 5       | 4       | p(5k+4) ≡ 0 (mod 5)  |
//! | 7       | 5       | p(7k+5) ≡ 0 (mod 7)  |
//! | 11      | 6       | p(11k+6) ≡ 0 (mod 11)|

/// Moduli of the three classical Ramanujan congruences, in ascending order.
pub const RAMANUJAN_MODULI: [u32; 3] = [5, 7, 11];

/// Residue class for each entry of [`RAMANUJAN_MODULI`].
///
/// For every modulus `m`, the residue is `24⁻¹ mod m`, i.e. the `r` with `24r ≡ 1 (mod m)`.
pub const RAMANUJAN_RESIDUES: [u32; 3] = [4, 5, 6];

/// First `n` printed by the demonstration driver.
pub const DEFAULT_FROM: i64 = 1;

/// Last `n` (inclusive) printed by the demonstration driver.
pub const DEFAULT_TO: i64 = 20;

/// The smaller generalized pentagonal number for step `k`: `k(3k-1)/2`.
pub const fn pentagonal(k: usize) -> usize {
    k * (3 * k - 1) / 2
}

/// The larger generalized pentagonal number for step `k`: `k(3k+1)/2`.
pub const fn pentagonal_conjugate(k: usize) -> usize {
    k * (3 * k + 1) / 2
}

/// Check that every residue is the inverse of 24 for its modulus.
const fn residues_are_inverse_of_24() -> bool {
    let mut i = 0;
    while i < RAMANUJAN_MODULI.len() {
        if (24 * RAMANUJAN_RESIDUES[i]) % RAMANUJAN_MODULI[i] != 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(residues_are_inverse_of_24());
const _: () = assert!(DEFAULT_FROM <= DEFAULT_TO);
