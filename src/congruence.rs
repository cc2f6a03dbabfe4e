// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ramanujan congruences and the "forbidden" classification.
//!
//! An `n` is forbidden when it falls in one of the residue classes
//! `5k+4`, `7k+5` or `11k+6`, for which Ramanujan proved that `p(n)` is
//! divisible by the modulus.
//!
//! # Negative input
//!
//! Residues use floored (Euclidean) modulo, so every `n` maps into
//! `0..modulus`. For example `-1 ≡ 4 (mod 5)` and is therefore forbidden.

use crate::constants::{RAMANUJAN_MODULI, RAMANUJAN_RESIDUES};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// A residue class `n ≡ residue (mod modulus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Congruence {
    modulus: u32,
    residue: u32,
}

impl Congruence {
    /// Create a new residue class, panicking if it is malformed.
    ///
    /// # Panics
    ///
    /// Panics if `modulus == 0` or `residue >= modulus`.
    pub const fn new(modulus: u32, residue: u32) -> Self {
        assert!(modulus > 0, "Congruence modulus must be positive");
        assert!(residue < modulus, "Congruence residue out of range");
        Self { modulus, residue }
    }

    pub fn modulus(self) -> u32 {
        self.modulus
    }

    pub fn residue(self) -> u32 {
        self.residue
    }

    /// Whether `n` lies in this residue class.
    #[inline]
    pub fn matches(self, n: i64) -> bool {
        n.rem_euclid(i64::from(self.modulus)) == i64::from(self.residue)
    }

    /// Whether `count` is divisible by the modulus.
    pub fn divides(self, count: &BigUint) -> bool {
        (count % self.modulus).is_zero()
    }
}

impl fmt::Display for Congruence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p({}k+{}) ≡ 0 (mod {})",
            self.modulus, self.residue, self.modulus
        )
    }
}

/// The three classical Ramanujan congruences, ordered by modulus.
pub const RAMANUJAN_CONGRUENCES: [Congruence; 3] = [
    Congruence::new(RAMANUJAN_MODULI[0], RAMANUJAN_RESIDUES[0]),
    Congruence::new(RAMANUJAN_MODULI[1], RAMANUJAN_RESIDUES[1]),
    Congruence::new(RAMANUJAN_MODULI[2], RAMANUJAN_RESIDUES[2]),
];

/// True if `n` falls in any Ramanujan residue class.
///
/// Depends only on `n mod 5`, `n mod 7` and `n mod 11`.
pub fn forbidden(n: i64) -> bool {
    RAMANUJAN_CONGRUENCES.iter().any(|c| c.matches(n))
}

/// The Ramanujan congruences that apply to `n`, ordered by modulus.
pub fn forbidden_congruences(n: i64) -> impl Iterator<Item = Congruence> {
    RAMANUJAN_CONGRUENCES
        .into_iter()
        .filter(move |c| c.matches(n))
}
