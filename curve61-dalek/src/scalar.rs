// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Scalars for the Montgomery ladder.
//!
//! A `Scalar` is an integer \\( n \\) with \\( 0 < n < p \\), i.e. the
//! nonzero canonical value of a field element.  The ladder scans its bits
//! from the most significant set bit downwards.
//!
//! The order of the base point is not computed by this crate, so a
//! `Scalar` is *not* reduced modulo the group order.  Protocols which
//! need \\( n \\) to be nonzero modulo that order must enforce it
//! themselves.

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConstantTimeEq;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRng;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::errors::CurveError;
use crate::field::FieldElement;

/// An integer \\( n \\) with \\( 0 < n < 2\^{61} - 1 \\), used as the
/// multiplier of the Montgomery ladder.
#[derive(Copy, Clone, Hash)]
pub struct Scalar(u64);

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tvalue: {:#018x}\n}}", self.0)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl TryFrom<u64> for Scalar {
    type Error = CurveError;

    fn try_from(n: u64) -> Result<Scalar, CurveError> {
        Scalar::from_u64(n)
    }
}

impl From<Scalar> for FieldElement {
    fn from(s: Scalar) -> FieldElement {
        FieldElement::from_u64(s.0)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Scalar {
    /// Construct a `Scalar` from an integer.
    ///
    /// # Return
    ///
    /// - `Ok(Scalar)` if \\( 0 < n < p \\);
    /// - `Err(CurveError::InvalidScalar)` otherwise.
    pub fn from_u64(n: u64) -> Result<Scalar, CurveError> {
        if n == 0 || n >= constants::P {
            return Err(CurveError::InvalidScalar);
        }
        Ok(Scalar(n))
    }

    /// Construct a `Scalar` from the canonical value of a field element.
    ///
    /// Fails with `CurveError::InvalidScalar` on the zero element.
    pub fn from_field(fe: &FieldElement) -> Result<Scalar, CurveError> {
        Scalar::from_u64(fe.to_u64())
    }

    /// Return a `Scalar` chosen uniformly at random from \\( [1, p) \\)
    /// using a user-provided RNG.
    ///
    /// # Inputs
    ///
    /// * `rng`: any RNG which implements `CryptoRng` interface.
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() {
    /// use curve61_dalek::scalar::Scalar;
    ///
    /// use rand_core::{OsRng, TryRngCore};
    ///
    /// let a: Scalar = Scalar::random(&mut OsRng.unwrap_err());
    /// assert!(a.to_u64() > 0);
    /// # }
    /// ```
    #[cfg(feature = "rand_core")]
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        loop {
            // Drop three bits so a draw is below 2^61 and rejected with
            // probability 2^-60.
            let candidate = rng.next_u64() >> 3;
            if let Ok(s) = Scalar::from_u64(candidate) {
                return s;
            }
        }
    }

    /// The integer value of this scalar.
    pub const fn to_u64(&self) -> u64 {
        self.0
    }

    /// Get the bits of the scalar, in little-endian order
    pub fn bits_le(&self) -> impl DoubleEndedIterator<Item = bool> + '_ {
        (0..64).map(|i| ((self.0 >> i) & 1) == 1)
    }

    /// The position of the most significant set bit, plus one.
    ///
    /// This is at least one since a `Scalar` is never zero.
    pub(crate) fn bit_length(&self) -> u32 {
        u64::BITS - self.0.leading_zeros()
    }

    /// Bit `i` of the scalar, as a `Choice`.
    pub(crate) fn bit(&self, i: u32) -> Choice {
        Choice::from(((self.0 >> i) & 1) as u8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Scalar::from_u64(0), Err(CurveError::InvalidScalar));
        assert_eq!(
            Scalar::from_field(&FieldElement::ZERO),
            Err(CurveError::InvalidScalar)
        );
    }

    #[test]
    fn modulus_and_above_are_rejected() {
        assert_eq!(Scalar::from_u64(constants::P), Err(CurveError::InvalidScalar));
        assert_eq!(Scalar::from_u64(u64::MAX), Err(CurveError::InvalidScalar));
        assert!(Scalar::from_u64(constants::P - 1).is_ok());
    }

    #[test]
    fn bit_length_and_bits() {
        let s = Scalar::from_u64(0b1011).unwrap();
        assert_eq!(s.bit_length(), 4);
        assert_eq!(s.bits_le().take(4).collect::<std::vec::Vec<bool>>(), [true, true, false, true]);
        assert!(bool::from(s.bit(3)));
        assert!(!bool::from(s.bit(2)));

        assert_eq!(Scalar::from_u64(1).unwrap().bit_length(), 1);
        assert_eq!(Scalar::from_u64(constants::P - 1).unwrap().bit_length(), 61);
    }

    #[test]
    fn field_round_trip() {
        let s = Scalar::try_from(12345u64).unwrap();
        let fe: FieldElement = s.into();
        assert_eq!(Scalar::from_field(&fe), Ok(s));
    }

    #[test]
    #[cfg(feature = "rand_core")]
    fn random_scalars_are_in_range() {
        use rand::SeedableRng;

        let mut rng = rand::rngs::StdRng::seed_from_u64(0x61);
        for _ in 0..1000 {
            let s = Scalar::random(&mut rng);
            assert!(s.to_u64() > 0 && s.to_u64() < constants::P);
        }
    }
}
