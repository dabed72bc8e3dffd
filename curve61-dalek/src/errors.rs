// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Errors which may occur when constructing scalars, dehomogenizing
//! ladder output, or recovering \\(y\\)-coordinates.
//!
//! Every operation in this crate is total over well-formed inputs; these
//! errors only report violated preconditions, and are always returned to
//! the caller rather than recovered from internally.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while running the Montgomery ladder or
/// recovering a point from its output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum CurveError {
    /// The scalar was zero, or did not fit below the field modulus.
    ///
    /// The upper bound actually required is the order of the base point,
    /// which is the caller's responsibility to enforce.
    InvalidScalar,
    /// An inversion target was zero: the base point has \\(y = 0\\)
    /// (a point of order two), or a ladder output has \\(Z = 0\\).
    UndefinedInverse,
    /// A projective point with \\(Z = 0\\), i.e. the point at infinity,
    /// was converted to affine form.
    UnrepresentedInfinity,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::InvalidScalar
                => write!(f, "Scalar must satisfy 0 < n < 2^61 - 1"),
            CurveError::UndefinedInverse
                => write!(f, "Cannot invert zero during y-coordinate recovery"),
            CurveError::UnrepresentedInfinity
                => write!(f, "Point at infinity has no affine coordinates"),
        }
    }
}

impl core::error::Error for CurveError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_violated_precondition() {
        assert_eq!(
            format!("{}", CurveError::InvalidScalar),
            "Scalar must satisfy 0 < n < 2^61 - 1"
        );
        assert!(format!("{}", CurveError::UnrepresentedInfinity).contains("infinity"));
    }
}
