// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Scalar multiplication on the Montgomery curve
//! \\( y\^2 = x\^3 + A x\^2 + x \\) over \\( \mathbb F\_{2\^{61} - 1} \\).
//!
//! Montgomery arithmetic works on the \\(x\\)-line: a `ProjectivePoint`
//! \\( (X : Z) \\) stands for the affine coordinate \\( x = X / Z \\) and
//! carries no \\(y\\).  See [_Montgomery curves and their
//! arithmetic_][costello-smith] by Costello and Smith for background.
//!
//! # Scalar Multiplication
//!
//! [`ProjectivePoint::mul_ladder`] runs the Montgomery ladder and returns
//! the pair \\( (\[n\]P, \[n+1\]P) \\).  The `*` operator returns the
//! first component.
//!
//! The ladder only ever adds points whose difference is \\(P\\), so it
//! never needs a full addition law; the cost is that the identity is not
//! representable and \\( Z = 0 \\) is an error state.
//!
//! # \\(y\\)-coordinate recovery
//!
//! [`recover_y`] reconstructs the \\(y\\)-coordinate of \\( \[n\]P \\)
//! from the ladder pair and the affine base point, using the formula of
//! Okeya and Sakurai.  [`AffinePoint::scalar_mul`] runs both steps.
//!
//! [costello-smith]: https://eprint.iacr.org/2017/212.pdf

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.  Yeah, you heard me, rustc, I'm gonna have my
// affine and projective cakes and eat both of them too.
#![allow(non_snake_case)]

use core::fmt;
use core::ops::{Mul, MulAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants::{APLUS2, MONTGOMERY_A, MONTGOMERY_B};
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::ValidityCheck;

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// A point \\( (x, y) \\) on the curve in affine coordinates.
///
/// This is the form in which a base point with known \\(y\\) is supplied,
/// and the form produced by \\(y\\)-coordinate recovery.
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    /// The \\(x\\)-coordinate.
    pub x: FieldElement,
    /// The \\(y\\)-coordinate.
    pub y: FieldElement,
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl ValidityCheck for AffinePoint {
    fn is_valid(&self) -> bool {
        let lhs = &MONTGOMERY_B * &self.y.square();
        lhs == curve_rhs(&self.x)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for AffinePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
    }
}

/// Evaluate \\( x\^3 + A x\^2 + x \\).
fn curve_rhs(x: &FieldElement) -> FieldElement {
    let x2 = x.square();
    &(&(&x2 * x) + &(&MONTGOMERY_A * &x2)) + x
}

impl AffinePoint {
    /// Lift an \\(x\\)-coordinate to a curve point.
    ///
    /// The \\(y\\)-coordinate is chosen to be odd if `y_is_odd` is set,
    /// and even otherwise.
    ///
    /// # Return
    ///
    /// A `CtOption` which is none when \\(x\\) lies on the quadratic
    /// twist, i.e. when \\( x\^3 + A x\^2 + x \\) is not a square.
    pub fn from_x(x: &FieldElement, y_is_odd: Choice) -> CtOption<AffinePoint> {
        // B = 1, so y^2 is the right-hand side itself.
        curve_rhs(x).sqrt().map(|mut y| {
            let flip = y.is_odd() ^ y_is_odd;
            y.conditional_negate(flip);
            AffinePoint { x: *x, y }
        })
    }

    /// Embed this point in projective \\(x\\)-only form as \\( (x : 1) \\).
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from_affine_x(&self.x)
    }

    /// Compute \\( \[n\]P \\) with both coordinates.
    ///
    /// This runs the Montgomery ladder from \\( (x : 1) \\) and then
    /// recovers \\(y\\) with [`recover_y`].
    ///
    /// # Return
    ///
    /// - `Err(CurveError::UnrepresentedInfinity)` if \\( \[n\]P \\) is the
    ///   identity;
    /// - `Err(CurveError::UndefinedInverse)` if \\(y\\) cannot be recovered,
    ///   see [`recover_y`];
    /// - the affine point \\( \[n\]P \\) otherwise.
    pub fn scalar_mul(&self, scalar: &Scalar) -> Result<AffinePoint, CurveError> {
        let pair = self.to_projective().mul_ladder(scalar);
        let x = pair.R.to_affine_x()?;
        let y = recover_y(self, &pair)?;
        Ok(AffinePoint { x, y })
    }
}

// ------------------------------------------------------------------------
// Projective x-only points
// ------------------------------------------------------------------------

/// A `ProjectivePoint` holds a point on the projective line
/// \\( \mathbb P(\mathbb F\_p) \\), which we identify with the Kummer
/// line of the Montgomery curve: \\( (X : Z) \\) represents the affine
/// \\(x\\)-coordinate \\( X / Z \\).
///
/// Values are immutable: every operation returns a fresh point.
#[derive(Copy, Clone, Debug)]
pub struct ProjectivePoint {
    /// The numerator \\(X\\).
    pub X: FieldElement,
    /// The denominator \\(Z\\).
    pub Z: FieldElement,
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(
        a: &ProjectivePoint,
        b: &ProjectivePoint,
        choice: Choice,
    ) -> ProjectivePoint {
        ProjectivePoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

/// Projective equivalence: \\( (X\_1 : Z\_1) = (X\_2 : Z\_2) \\) iff
/// \\( X\_1 Z\_2 = X\_2 Z\_1 \\).
impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &ProjectivePoint) -> Choice {
        let lhs = &self.X * &other.Z;
        let rhs = &other.X * &self.Z;
        lhs.ct_eq(&rhs)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl fmt::Display for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {})", self.X, self.Z)
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Z.zeroize();
    }
}

impl ProjectivePoint {
    /// The point \\( (x : 1) \\).
    pub fn from_affine_x(x: &FieldElement) -> ProjectivePoint {
        ProjectivePoint {
            X: *x,
            Z: FieldElement::ONE,
        }
    }

    /// Dehomogenize this point to its affine \\(x\\)-coordinate.
    ///
    /// # Return
    ///
    /// * \\( x = X / Z \\) if \\( Z \neq 0 \\);
    /// * `Err(CurveError::UnrepresentedInfinity)` if \\( Z = 0 \\).
    pub fn to_affine_x(&self) -> Result<FieldElement, CurveError> {
        if bool::from(self.Z.is_zero()) {
            return Err(CurveError::UnrepresentedInfinity);
        }
        Ok(&self.X * &self.Z.invert())
    }

    /// Compute \\( \[2\]P \\).
    ///
    /// $$
    /// \begin{aligned}
    ///   X\_{2P} &= (X + Z)\^2 (X - Z)\^2 \\\\
    ///   Z\_{2P} &= 4XZ \left( (X - Z)\^2 + (A + 2) XZ \right)
    /// \end{aligned}
    /// $$
    ///
    /// Well defined for every \\( Z \neq 0 \\).
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn double(&self) -> ProjectivePoint {
        let u = (&self.X + &self.Z).square();  // (X + Z)^2
        let v = (&self.X - &self.Z).square();  // (X - Z)^2
        let w = &self.X * &self.Z;             // XZ

        let t = &APLUS2 * &w;                  // (A + 2) XZ = ((A + 2)/4) 4XZ
        let s = &v + &t;                       // (X - Z)^2 + (A + 2) XZ

        ProjectivePoint {
            X: &u * &v,
            Z: &(&FieldElement::FOUR * &w) * &s,
        }
    }

    /// Compute \\( P + Q \\) given \\( P = \\) `self`, \\( Q = \\) `other`,
    /// and their difference \\( D = P - Q \\) (or \\( Q - P \\)).
    ///
    /// $$
    /// \begin{aligned}
    ///   X\_{P+Q} &= Z\_D \left( (X\_Q - Z\_Q)(X\_P + Z\_P) + (X\_Q + Z\_Q)(X\_P - Z\_P) \right)\^2 \\\\
    ///   Z\_{P+Q} &= X\_D \left( (X\_Q - Z\_Q)(X\_P + Z\_P) - (X\_Q + Z\_Q)(X\_P - Z\_P) \right)\^2
    /// \end{aligned}
    /// $$
    ///
    /// # Warning
    ///
    /// This is *not* a general addition law.  The result is only
    /// meaningful when `difference` really is \\( \pm(P - Q) \\); nothing
    /// checks this.  In the ladder the difference is always the base
    /// point, usually given with \\( Z\_D = 1 \\).
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn differential_add(
        &self,
        other: &ProjectivePoint,
        difference: &ProjectivePoint,
    ) -> ProjectivePoint {
        let a = &other.X - &other.Z;  // X_Q - Z_Q
        let b = &self.X + &self.Z;    // X_P + Z_P
        let c = &other.X + &other.Z;  // X_Q + Z_Q
        let d = &self.X - &self.Z;    // X_P - Z_P

        let e = &a * &b;
        let f = &c * &d;

        let g = &e + &f;              // 2 (X_P X_Q - Z_P Z_Q)
        let h = &e - &f;              // 2 (X_Q Z_P - X_P Z_Q)

        ProjectivePoint {
            X: &difference.Z * &g.square(),
            Z: &difference.X * &h.square(),
        }
    }

    /// Run the Montgomery ladder on \\( P = \\) `self` with the scalar
    /// \\( n \\).
    ///
    /// The state \\( (R, S) = (\[k\]P, \[k+1\]P) \\) starts at
    /// \\( (P, \[2\]P) \\), which accounts for the most significant set
    /// bit of \\(n\\).  Each remaining bit, from high to low, computes
    /// both successor states and selects one in constant time:
    ///
    /// * bit 0: \\( (R, S) \gets (\[2\]R, R + S) \\);
    /// * bit 1: \\( (R, S) \gets (R + S, \[2\]S) \\).
    ///
    /// Every step preserves \\( S - R = P \\), which is what makes the
    /// differential addition valid.
    ///
    /// The number of iterations is the bit length of \\(n\\) minus one,
    /// so the running time depends on the position of the top bit of the
    /// scalar, but not on any other bit.
    pub fn mul_ladder(&self, scalar: &Scalar) -> LadderPair {
        let mut R = *self;
        let mut S = self.double();

        for i in (0..scalar.bit_length() - 1).rev() {
            let bit = scalar.bit(i);

            let sum = R.differential_add(&S, self);
            let R2 = R.double();
            let S2 = S.double();

            R = ProjectivePoint::conditional_select(&R2, &sum, bit);
            S = ProjectivePoint::conditional_select(&sum, &S2, bit);
        }

        LadderPair { R, S }
    }
}

/// The output of the Montgomery ladder: \\( R = \[n\]P \\) and
/// \\( S = \[n+1\]P \\).
///
/// `S` is kept because \\(y\\)-coordinate recovery needs the
/// \\(x\\)-coordinate of \\( \[n+1\]P \\).
#[derive(Copy, Clone, Debug)]
pub struct LadderPair {
    /// \\( \[n\]P \\).
    pub R: ProjectivePoint,
    /// \\( \[n+1\]P \\).
    pub S: ProjectivePoint,
}

#[cfg(feature = "zeroize")]
impl Zeroize for LadderPair {
    fn zeroize(&mut self) {
        self.R.zeroize();
        self.S.zeroize();
    }
}

/// Recover the affine \\(y\\)-coordinate of \\( \[n\]P \\).
///
/// Given the affine base point \\( P = (x\_P, y\_P) \\) and the ladder
/// output \\( (\[n\]P, \[n+1\]P) \\) with affine \\(x\\)-coordinates
/// \\( x\_n, x\_{n+1} \\), this computes
/// $$
///   y\_n = \frac{(x\_P x\_n + 1)(x\_P + x\_n + 2A) - 2A - (x\_P - x\_n)\^2 x\_{n+1}}{2 B y\_P}.
/// $$
///
/// # Return
///
/// `Err(CurveError::UndefinedInverse)` if \\( y\_P = 0 \\) (so \\(P\\)
/// has order two) or if either ladder output has \\( Z = 0 \\).  These
/// are checked up front: the field inversion would silently return zero.
#[rustfmt::skip] // keep alignment of explanatory comments
pub fn recover_y(base: &AffinePoint, pair: &LadderPair) -> Result<FieldElement, CurveError> {
    let undefined = base.y.is_zero() | pair.R.Z.is_zero() | pair.S.Z.is_zero();
    if bool::from(undefined) {
        return Err(CurveError::UndefinedInverse);
    }

    let x_P = &base.x;
    let x_n = &pair.R.X * &pair.R.Z.invert();
    let x_n1 = &pair.S.X * &pair.S.Z.invert();

    let two_A = &MONTGOMERY_A + &MONTGOMERY_A;

    let t0 = &(x_P * &x_n) + &FieldElement::ONE;  // x_P x_n + 1
    let t1 = &(x_P + &x_n) + &two_A;              // x_P + x_n + 2A
    let t2 = &(&t0 * &t1) - &two_A;
    let t3 = &(x_P - &x_n).square() * &x_n1;      // (x_P - x_n)^2 x_{n+1}
    let numerator = &t2 - &t3;

    let denominator = &(&FieldElement::TWO * &MONTGOMERY_B) * &base.y;

    Ok(&numerator * &denominator.invert())
}

// ------------------------------------------------------------------------
// Scalar multiplication operators
// ------------------------------------------------------------------------

define_mul_assign_variants!(LHS = ProjectivePoint, RHS = Scalar);

define_mul_variants!(
    LHS = ProjectivePoint,
    RHS = Scalar,
    Output = ProjectivePoint
);
define_mul_variants!(
    LHS = Scalar,
    RHS = ProjectivePoint,
    Output = ProjectivePoint
);

/// Multiply this `ProjectivePoint` by a `Scalar`.
impl<'a, 'b> Mul<&'b Scalar> for &'a ProjectivePoint {
    type Output = ProjectivePoint;

    /// Given `self` \\( = x(P) \\), and a `Scalar` \\(n\\), return
    /// \\( x(\[n\]P) \\).
    fn mul(self, scalar: &'b Scalar) -> ProjectivePoint {
        self.mul_ladder(scalar).R
    }
}

impl<'b> MulAssign<&'b Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        *self = (self as &ProjectivePoint) * scalar;
    }
}

impl<'a, 'b> Mul<&'b ProjectivePoint> for &'a Scalar {
    type Output = ProjectivePoint;

    fn mul(self, point: &'b ProjectivePoint) -> ProjectivePoint {
        point * self
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
