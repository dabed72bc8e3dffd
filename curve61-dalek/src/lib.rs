// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
//------------------------------------------------------------------------
// Documentation:
//------------------------------------------------------------------------
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
//------------------------------------------------------------------------
// Linting:
//------------------------------------------------------------------------
#![warn(
    clippy::unwrap_used,
    missing_debug_implementations,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]
#![forbid(unsafe_code)]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(test)]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// curve61-dalek public modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^61 - 1
pub mod field;

// Scalars driving the Montgomery ladder
pub mod scalar;

// Point operations on the Montgomery curve y^2 = x^3 + A x^2 + x
pub mod montgomery;

// Useful constants, like the curve coefficient and the base point
pub mod constants;

// Errors reported by the ladder and by y-coordinate recovery
pub mod errors;

// External (and internal) traits.
pub mod traits;

//------------------------------------------------------------------------
// curve61-dalek internal modules
//------------------------------------------------------------------------

// Arithmetic backends (using u32, u64, etc) live here
pub(crate) mod backend;

pub use crate::errors::CurveError;
pub use crate::field::FieldElement;
pub use crate::montgomery::{AffinePoint, LadderPair, ProjectivePoint};
pub use crate::scalar::Scalar;
