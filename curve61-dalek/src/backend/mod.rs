// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Pluggable implementations for different architectures.
//!
//! The naming of the `u32` and `u64` modules is somewhat unfortunate,
//! since these are also the names of primitive types.  Since types have
//! a different namespace than modules, this isn't a problem to the
//! compiler, but it could cause confusion.
//!
//! Only serial backends exist: a field element is at most two machine
//! words, so there is nothing for a vector backend to parallelize.

pub mod serial;
