// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Various constants, such as the curve coefficients and the base point.
//!
//! The curve is the Montgomery curve
//! $$
//!     B y\^2 = x\^3 + A x\^2 + x
//! $$
//! over \\( \mathbb F\_p \\) with \\( p = 2\^{61} - 1 \\) and \\( B = 1 \\).

use crate::field::FieldElement;
use crate::montgomery::AffinePoint;

/// The field modulus \\( p = 2\^{61} - 1 \\) as an integer.
pub const P: u64 = 2305843009213693951;

/// The Montgomery curve coefficient \\( A \\).
pub const MONTGOMERY_A: FieldElement = FieldElement::from_u64(798026816538591017);

/// \\( A + 2 \\), the coefficient used by point doubling.
pub const APLUS2: FieldElement = FieldElement::from_u64(798026816538591019);

/// The Montgomery curve coefficient \\( B \\).
pub const MONTGOMERY_B: FieldElement = FieldElement::ONE;

/// The base point \\( (9, y) \\), where \\( y \\) is the root of
/// \\( 9\^3 + 81 A + 9 \\) returned by `FieldElement::sqrt`.
pub const BASEPOINT: AffinePoint = AffinePoint {
    x: FieldElement::from_u64(9),
    y: FieldElement::from_u64(111676493797517676),
};
