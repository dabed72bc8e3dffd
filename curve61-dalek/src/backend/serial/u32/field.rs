// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{61} - 1\\), using \\(32\\)-bit
//! limbs with \\(64\\)-bit products.
//!
//! An element \\(x\\) is stored as
//! $$
//! x = x\_0 + x\_1 2\^{31},
//! $$
//! with \\(x\_0 < 2\^{31}\\) and \\(x\_1 < 2\^{30}\\), and is kept fully
//! reduced after every operation.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The field modulus \\(2\^{61} - 1\\).
const P: u64 = (1u64 << 61) - 1;
const LOW_31_BITS: u32 = (1u32 << 31) - 1;
const LOW_30_BITS: u64 = (1u64 << 30) - 1;

/// A `FieldElement2x31` represents an element of the field
/// \\( \mathbb Z / (2\^{61} - 1)\\).
///
/// # Note
///
/// The `curve61_dalek::field` module provides a type alias
/// `curve61_dalek::field::FieldElement` to either `FieldElement61`
/// or `FieldElement2x31`.
///
/// The backend-specific type `FieldElement2x31` should not be used
/// outside of the `curve61_dalek::field` module.
#[derive(Copy, Clone)]
pub struct FieldElement2x31(pub(crate) [u32; 2]);

impl Debug for FieldElement2x31 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement2x31({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement2x31 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// Reduce any `u64` modulo \\(p\\) without branching on its value.
#[inline(always)]
const fn reduce(t: u64) -> u64 {
    let folded = (t & P) + (t >> 61);
    let sub = folded.wrapping_sub(P);
    let keep = 0u64.wrapping_sub(sub >> 63);
    (folded & keep) | (sub & !keep)
}

/// Split a reduced value into its two limbs.
#[inline(always)]
const fn split(x: u64) -> [u32; 2] {
    [(x as u32) & LOW_31_BITS, (x >> 31) as u32]
}

impl FieldElement2x31 {
    #[inline(always)]
    const fn joined(&self) -> u64 {
        (self.0[0] as u64) | ((self.0[1] as u64) << 31)
    }
}

impl<'b> AddAssign<&'b FieldElement2x31> for FieldElement2x31 {
    fn add_assign(&mut self, rhs: &'b FieldElement2x31) {
        self.0 = split(reduce(self.joined() + rhs.joined()));
    }
}

impl<'a, 'b> Add<&'b FieldElement2x31> for &'a FieldElement2x31 {
    type Output = FieldElement2x31;
    fn add(self, rhs: &'b FieldElement2x31) -> FieldElement2x31 {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement2x31> for FieldElement2x31 {
    fn sub_assign(&mut self, rhs: &'b FieldElement2x31) {
        self.0 = split(reduce((self.joined() + P) - rhs.joined()));
    }
}

impl<'a, 'b> Sub<&'b FieldElement2x31> for &'a FieldElement2x31 {
    type Output = FieldElement2x31;
    fn sub(self, rhs: &'b FieldElement2x31) -> FieldElement2x31 {
        let mut output = *self;
        output -= rhs;
        output
    }
}

impl<'b> MulAssign<&'b FieldElement2x31> for FieldElement2x31 {
    fn mul_assign(&mut self, rhs: &'b FieldElement2x31) {
        let result = (self as &FieldElement2x31) * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement2x31> for &'a FieldElement2x31 {
    type Output = FieldElement2x31;

    #[rustfmt::skip] // keep alignment of explanatory comments
    fn mul(self, rhs: &'b FieldElement2x31) -> FieldElement2x31 {
        /// Helper function to multiply two 32-bit integers with 64 bits
        /// of output.
        #[inline(always)]
        fn m(x: u32, y: u32) -> u64 { (x as u64) * (y as u64) }

        let a = &self.0;
        let b = &rhs.0;

        // a*b = z0 + z1 2^31 + z2 2^62
        let z0 = m(a[0], b[0]);                  // < 2^62
        let z1 = m(a[0], b[1]) + m(a[1], b[0]);  // < 2^62
        let z2 = m(a[1], b[1]);                  // < 2^60

        // z1 2^31 = (z1 mod 2^30) 2^31 + (z1 >> 30) 2^61, and 2^61 = 1.
        // z2 2^62 = 2 z2 since 2^62 = 2.
        let t = z0
              + ((z1 & LOW_30_BITS) << 31)
              + (z1 >> 30)
              + (z2 << 1);                       // < 2^64

        FieldElement2x31(split(reduce(t)))
    }
}

impl<'a> Neg for &'a FieldElement2x31 {
    type Output = FieldElement2x31;
    fn neg(self) -> FieldElement2x31 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl ConditionallySelectable for FieldElement2x31 {
    fn conditional_select(
        a: &FieldElement2x31,
        b: &FieldElement2x31,
        choice: Choice,
    ) -> FieldElement2x31 {
        FieldElement2x31([
            u32::conditional_select(&a.0[0], &b.0[0], choice),
            u32::conditional_select(&a.0[1], &b.0[1], choice),
        ])
    }

    fn conditional_swap(a: &mut FieldElement2x31, b: &mut FieldElement2x31, choice: Choice) {
        u32::conditional_swap(&mut a.0[0], &mut b.0[0], choice);
        u32::conditional_swap(&mut a.0[1], &mut b.0[1], choice);
    }

    fn conditional_assign(&mut self, other: &FieldElement2x31, choice: Choice) {
        self.0[0].conditional_assign(&other.0[0], choice);
        self.0[1].conditional_assign(&other.0[1], choice);
    }
}

impl FieldElement2x31 {
    pub(crate) const fn from_limbs(limbs: [u32; 2]) -> FieldElement2x31 {
        FieldElement2x31(limbs)
    }

    /// The scalar \\( 0 \\).
    pub const ZERO: FieldElement2x31 = FieldElement2x31::from_limbs([0, 0]);
    /// The scalar \\( 1 \\).
    pub const ONE: FieldElement2x31 = FieldElement2x31::from_limbs([1, 0]);

    /// Invert the sign of this field element
    pub fn negate(&mut self) {
        self.0 = split(reduce(P - self.joined()));
    }

    /// Construct the field element congruent to `n` modulo \\(p\\).
    pub const fn from_u64(n: u64) -> FieldElement2x31 {
        FieldElement2x31(split(reduce(n)))
    }

    /// The canonical integer representative, in \\([0, p)\\).
    pub const fn to_u64(&self) -> u64 {
        self.joined()
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub fn pow2k(&self, mut k: u32) -> FieldElement2x31 {
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
    pub fn square(&self) -> FieldElement2x31 {
        self * self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::serial::u64::field::FieldElement61;

    const A_LIMB: u64 = 1926659863286666872;
    const B_LIMB: u64 = 0x0fedcba987654321;

    /// The curve coefficient split into its two limbs.
    #[test]
    fn curve_coefficient_limbs() {
        let a = FieldElement2x31::from_u64(798026816538591017);
        assert_eq!(a.0, [1493483305, 371610194]);
    }

    #[test]
    fn mul_matches_known_product() {
        let a = FieldElement2x31::from_u64(A_LIMB);
        let b = FieldElement2x31::from_u64(B_LIMB);
        assert_eq!((&a * &b).to_u64(), 1623495631738087864);
        assert_eq!(a.square().to_u64(), 2304977572524052834);
    }

    #[test]
    fn reduction_is_canonical() {
        assert_eq!(FieldElement2x31::from_u64(P).to_u64(), 0);
        assert_eq!(FieldElement2x31::from_u64(u64::MAX).to_u64(), 7);

        let minus_one = FieldElement2x31::from_u64(P - 1);
        assert_eq!(minus_one.0, [LOW_31_BITS - 1, (1 << 30) - 1]);
        assert_eq!((&minus_one * &minus_one).to_u64(), 1);
        assert_eq!((&minus_one + &FieldElement2x31::ONE).0, [0, 0]);
        assert_eq!((&FieldElement2x31::ZERO - &FieldElement2x31::ONE).to_u64(), P - 1);
    }

    /// Walk a multiplicative chain in both backends and compare every step.
    #[test]
    fn agrees_with_u64_backend() {
        let mut x32 = FieldElement2x31::from_u64(A_LIMB);
        let mut x64 = FieldElement61::from_u64(A_LIMB);
        let y32 = FieldElement2x31::from_u64(B_LIMB);
        let y64 = FieldElement61::from_u64(B_LIMB);

        for _ in 0..1000 {
            x32 = &(&x32 * &y32) + &x32.square();
            x64 = &(&x64 * &y64) + &x64.square();
            assert_eq!(x32.to_u64(), x64.to_u64());

            x32 = &x32 - &y32;
            x64 = &x64 - &y64;
            assert_eq!(x32.to_u64(), x64.to_u64());
        }
    }

    #[test]
    fn negation_and_pow2k_agree_with_u64_backend() {
        for n in [0, 1, 9, A_LIMB, B_LIMB, P - 1] {
            let x32 = FieldElement2x31::from_u64(n);
            let x64 = FieldElement61::from_u64(n);
            assert_eq!((-&x32).to_u64(), (-&x64).to_u64());
            assert_eq!((&x32 + &(-&x32)).to_u64(), 0);
            assert_eq!(x32.pow2k(59).to_u64(), x64.pow2k(59).to_u64());
            assert_eq!(x32.pow2k(1).to_u64(), x32.square().to_u64());
        }
    }

    #[test]
    fn conditional_swap_swaps_on_true() {
        let mut a = FieldElement2x31::from_u64(A_LIMB);
        let mut b = FieldElement2x31::from_u64(B_LIMB);
        FieldElement2x31::conditional_swap(&mut a, &mut b, Choice::from(0));
        assert_eq!((a.to_u64(), b.to_u64()), (A_LIMB, B_LIMB));
        FieldElement2x31::conditional_swap(&mut a, &mut b, Choice::from(1));
        assert_eq!((a.to_u64(), b.to_u64()), (B_LIMB, A_LIMB));

        let mut c = FieldElement2x31::ZERO;
        c.conditional_assign(&a, Choice::from(1));
        assert_eq!(c.to_u64(), B_LIMB);
    }

    type Point = (FieldElement2x31, FieldElement2x31);

    fn double((x, z): &Point) -> Point {
        let aplus2 = FieldElement2x31::from_u64(798026816538591019);
        let four = FieldElement2x31::from_u64(4);
        let u = (x + z).square();
        let v = (x - z).square();
        let w = x * z;
        let s = &v + &(&aplus2 * &w);
        (&u * &v, &(&four * &w) * &s)
    }

    fn differential_add(p: &Point, q: &Point, d: &Point) -> Point {
        let e = &(&q.0 - &q.1) * &(&p.0 + &p.1);
        let f = &(&q.0 + &q.1) * &(&p.0 - &p.1);
        (&d.1 * &(&e + &f).square(), &d.0 * &(&e - &f).square())
    }

    fn ladder(base: &Point, n: u64) -> Point {
        let mut r = *base;
        let mut s = double(base);
        for i in (0..63 - n.leading_zeros()).rev() {
            let mut sum = differential_add(&r, &s, base);
            let bit = Choice::from(((n >> i) & 1) as u8);
            // bit 0: (2r, r + s), bit 1: (r + s, 2s)
            let (mut r2, mut s2) = (double(&r), double(&s));
            FieldElement2x31::conditional_swap(&mut r2.0, &mut sum.0, bit);
            FieldElement2x31::conditional_swap(&mut r2.1, &mut sum.1, bit);
            FieldElement2x31::conditional_swap(&mut sum.0, &mut s2.0, bit);
            FieldElement2x31::conditional_swap(&mut sum.1, &mut s2.1, bit);
            r = r2;
            s = sum;
        }
        r
    }

    fn invert(x: &FieldElement2x31) -> FieldElement2x31 {
        let exp = P - 2;
        let mut acc = FieldElement2x31::ONE;
        for i in (0..64).rev() {
            acc = acc.square();
            if (exp >> i) & 1 == 1 {
                acc = &acc * x;
            }
        }
        acc
    }

    /// Run the Montgomery ladder entirely on two-limb elements.
    #[test]
    fn ladder_on_two_limb_elements() {
        let base = (FieldElement2x31::from_u64(9), FieldElement2x31::ONE);

        let (x2, z2) = double(&base);
        assert_eq!((x2.to_u64(), z2.to_u64()), (6400, 306271526569769948));

        let (x5, z5) = ladder(&base, 5);
        assert_eq!((x5.to_u64(), z5.to_u64()), (1040707896369287410, 145825378450265924));
        assert_eq!((&x5 * &invert(&z5)).to_u64(), 520311510848589905);

        let (x, z) = ladder(&base, 0x0123_4567_89ab_cdef);
        assert_eq!((&x * &invert(&z)).to_u64(), 1516952665327974574);
    }
}
