// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{61} - 1\\), using a single
//! \\(64\\)-bit limb with \\(128\\)-bit products.
//!
//! Because \\(p\\) is a Mersenne prime, \\(2\^{61} \equiv 1 \pmod p\\),
//! so reduction is a fold of the high bits onto the low bits followed by
//! one constant-time conditional subtraction.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The field modulus \\(2\^{61} - 1\\), which doubles as the low-61-bit mask.
const P: u64 = (1u64 << 61) - 1;

/// A `FieldElement61` represents an element of the field
/// \\( \mathbb Z / (2\^{61} - 1)\\).
///
/// The element is held in a single `u64` limb which is always fully
/// reduced, i.e. strictly less than \\(p\\).
///
/// # Note
///
/// The `curve61_dalek::field` module provides a type alias
/// `curve61_dalek::field::FieldElement` to either `FieldElement61`
/// or `FieldElement2x31`.
///
/// The backend-specific type `FieldElement61` should not be used
/// outside of the `curve61_dalek::field` module.
#[derive(Copy, Clone)]
pub struct FieldElement61(pub(crate) u64);

impl Debug for FieldElement61 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement61({})", self.0)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement61 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Reduce any `u64` modulo \\(p\\) without branching on its value.
#[inline(always)]
const fn reduce(t: u64) -> u64 {
    // t < 2^64, so the fold leaves at most p + 7.
    let folded = (t & P) + (t >> 61);
    let sub = folded.wrapping_sub(P);
    // All ones if folded < p, i.e. if the subtraction borrowed.
    let keep = 0u64.wrapping_sub(sub >> 63);
    (folded & keep) | (sub & !keep)
}

impl<'b> AddAssign<&'b FieldElement61> for FieldElement61 {
    fn add_assign(&mut self, rhs: &'b FieldElement61) {
        self.0 = reduce(self.0 + rhs.0);
    }
}

impl<'a, 'b> Add<&'b FieldElement61> for &'a FieldElement61 {
    type Output = FieldElement61;
    fn add(self, rhs: &'b FieldElement61) -> FieldElement61 {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement61> for FieldElement61 {
    fn sub_assign(&mut self, rhs: &'b FieldElement61) {
        // Add p first so the limb never underflows.
        self.0 = reduce((self.0 + P) - rhs.0);
    }
}

impl<'a, 'b> Sub<&'b FieldElement61> for &'a FieldElement61 {
    type Output = FieldElement61;
    fn sub(self, rhs: &'b FieldElement61) -> FieldElement61 {
        let mut output = *self;
        output -= rhs;
        output
    }
}

impl<'b> MulAssign<&'b FieldElement61> for FieldElement61 {
    fn mul_assign(&mut self, rhs: &'b FieldElement61) {
        let result = (self as &FieldElement61) * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement61> for &'a FieldElement61 {
    type Output = FieldElement61;

    #[rustfmt::skip] // keep alignment of explanatory comments
    fn mul(self, rhs: &'b FieldElement61) -> FieldElement61 {
        /// Helper function to multiply two 64-bit integers with 128
        /// bits of output.
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 { (x as u128) * (y as u128) }

        let c: u128 = m(self.0, rhs.0);  // < 2^122

        let lo = (c as u64) & P;          // c mod 2^61
        let hi = (c >> 61) as u64;        // < 2^61, weighted by 2^61 = 1

        FieldElement61(reduce(lo + hi))
    }
}

impl<'a> Neg for &'a FieldElement61 {
    type Output = FieldElement61;
    fn neg(self) -> FieldElement61 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl ConditionallySelectable for FieldElement61 {
    fn conditional_select(
        a: &FieldElement61,
        b: &FieldElement61,
        choice: Choice,
    ) -> FieldElement61 {
        FieldElement61(u64::conditional_select(&a.0, &b.0, choice))
    }

    fn conditional_swap(a: &mut FieldElement61, b: &mut FieldElement61, choice: Choice) {
        u64::conditional_swap(&mut a.0, &mut b.0, choice);
    }

    fn conditional_assign(&mut self, other: &FieldElement61, choice: Choice) {
        self.0.conditional_assign(&other.0, choice);
    }
}

impl FieldElement61 {
    pub(crate) const fn from_limb(limb: u64) -> FieldElement61 {
        FieldElement61(limb)
    }

    /// The scalar \\( 0 \\).
    pub const ZERO: FieldElement61 = FieldElement61::from_limb(0);
    /// The scalar \\( 1 \\).
    pub const ONE: FieldElement61 = FieldElement61::from_limb(1);

    /// Invert the sign of this field element
    pub fn negate(&mut self) {
        self.0 = reduce(P - self.0);
    }

    /// Construct the field element congruent to `n` modulo \\(p\\).
    pub const fn from_u64(n: u64) -> FieldElement61 {
        FieldElement61(reduce(n))
    }

    /// The canonical integer representative, in \\([0, p)\\).
    pub const fn to_u64(&self) -> u64 {
        self.0
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub fn pow2k(&self, mut k: u32) -> FieldElement61 {
        debug_assert!(k > 0);

        let mut output = *self;
        loop {
            output = output.square();
            k -= 1;
            if k == 0 {
                return output;
            }
        }
    }

    /// Returns the square of this field element.
    pub fn square(&self) -> FieldElement61 {
        self * self
    }
}
