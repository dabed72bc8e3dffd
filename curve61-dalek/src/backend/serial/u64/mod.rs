// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! The `u64` backend uses `u64`s and a `(u64, u64) -> u128` multiplier.

pub mod field;
