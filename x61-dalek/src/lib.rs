// -*- mode: rust; -*-
//
// This file is part of x61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//------------------------------------------------------------------------
// x61-dalek public API
//------------------------------------------------------------------------

mod x61;

pub use crate::x61::*;

pub use curve61_dalek::Scalar;
