// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Module for common traits.

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for checking whether a point is on the curve.
///
/// Projective \\(x\\)-only points cannot be checked this way, since every
/// \\(x\\) lies on either the curve or its quadratic twist; only points
/// carrying a \\(y\\)-coordinate implement it.
pub trait ValidityCheck {
    /// Checks whether the point is on the curve. Not CT.
    fn is_valid(&self) -> bool;
}
