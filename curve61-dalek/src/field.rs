// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{61} - 1\\).
//!
//! The `curve61_dalek::field` module provides a type alias
//! `curve61_dalek::field::FieldElement` to a field element type
//! defined in the `backend` module; either `FieldElement61` or
//! `FieldElement2x31`.
//!
//! Field operations defined in terms of machine
//! operations, such as field multiplication or squaring, are defined in
//! the backend implementation.
//!
//! Field operations defined in terms of other field operations, such as
//! field inversion or square roots, are defined here.

use core::fmt;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use cfg_if::cfg_if;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

use crate::backend;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// A `FieldElement` represents an element of the field
        /// \\( \mathbb Z / (2\^{61} - 1)\\).
        ///
        /// The `FieldElement` type is an alias for one of the platform-specific
        /// implementations.
        pub type FieldElement = backend::serial::u64::field::FieldElement61;
    } else {
        /// A `FieldElement` represents an element of the field
        /// \\( \mathbb Z / (2\^{61} - 1)\\).
        ///
        /// The `FieldElement` type is an alias for one of the platform-specific
        /// implementations.
        pub type FieldElement = backend::serial::u32::field::FieldElement2x31;
    }
}

define_add_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_add_assign_variants!(LHS = FieldElement, RHS = FieldElement);
define_sub_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_sub_assign_variants!(LHS = FieldElement, RHS = FieldElement);
define_mul_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_mul_assign_variants!(LHS = FieldElement, RHS = FieldElement);

/// The exponent \\(p - 2\\) used for Fermat inversion.
const P_MINUS_TWO: u64 = (1u64 << 61) - 3;

/// \\(\log_2\\) of the square-root exponent \\((p + 1) / 4 = 2\^{59}\\).
const SQRT_EXPONENT_LOG2: u32 = 59;

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Both backends keep
    /// their limbs fully reduced, so the canonical values are compared
    /// directly.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_u64().ct_eq(&other.to_u64())
    }
}

impl Default for FieldElement {
    fn default() -> FieldElement {
        FieldElement::ZERO
    }
}

/// Renders the canonical value in decimal.
impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u64())
    }
}

/// Renders the canonical value as 61 binary digits, most significant first.
impl fmt::Binary for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:061b}", self.to_u64())
    }
}

impl FieldElement {
    /// The element \\( 2 \\).
    pub const TWO: FieldElement = FieldElement::from_u64(2);
    /// The element \\( 4 \\).
    pub const FOUR: FieldElement = FieldElement::from_u64(4);

    /// Determine if this `FieldElement` is zero.
    ///
    /// # Return
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&FieldElement::ZERO)
    }

    /// Raise this element to the power `exp` by a fixed-length
    /// square-and-multiply over all 64 exponent bits.
    ///
    /// The sequence of field operations does not depend on `exp`; the
    /// multiplier is chosen with `conditional_select`.
    pub fn pow(&self, exp: u64) -> FieldElement {
        let mut acc = FieldElement::ONE;
        for i in (0..64).rev() {
            acc = acc.square();
            let product = &acc * self;
            let bit = Choice::from(((exp >> i) & 1) as u8);
            acc.conditional_assign(&product, bit);
        }
        acc
    }

    /// Given a nonzero field element, compute its inverse as
    /// \\( x\^{p-2} \\).
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// This function returns zero on input zero; callers which cannot
    /// tolerate that must check `is_zero` first.
    pub fn invert(&self) -> FieldElement {
        self.pow(P_MINUS_TWO)
    }

    /// Compute a square root of this element, if one exists.
    ///
    /// Since \\( p \equiv 3 \pmod 4 \\), a candidate root is
    /// \\( x\^{(p+1)/4} = x\^{2\^{59}} \\); it is returned when its square
    /// is `self`.  The root returned is whichever of \\( \pm r \\) the
    /// exponentiation produces.
    pub fn sqrt(&self) -> CtOption<FieldElement> {
        let candidate = self.pow2k(SQRT_EXPONENT_LOG2);
        let is_root = candidate.square().ct_eq(self);
        CtOption::new(candidate, is_root)
    }

    /// Determine if this `FieldElement` is odd, which is used as the
    /// sign of a \\(y\\)-coordinate.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_u64() & 1) as u8)
    }
}
