// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! The `u32` backend uses `u32`s and a `(u32, u32) -> u64` multiplier.
//!
//! On 64-bit targets this backend is only compiled for tests.

pub mod field;
