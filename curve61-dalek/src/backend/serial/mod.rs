// -*- mode: rust; -*-
//
// This file is part of curve61-dalek.
// Copyright (c) 2022-2026 curve61-dalek contributors
// See LICENSE for licensing information.

//! Serial implementations of field arithmetic mod \\(2\^{61} - 1\\).
//!
//! The `u64` backend stores a field element in a single 61-bit limb and
//! multiplies with 128-bit products; the `u32` backend stores it as two
//! 31-bit limbs and multiplies with 64-bit products.  Both keep their
//! limbs fully reduced, so equality is limb equality.
//!
//! Test builds compile both backends so that each is exercised on every
//! target.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        #[cfg_attr(docsrs, doc(cfg(target_pointer_width = "64")))]
        pub mod u64;

        #[cfg(test)]
        pub mod u32;
    } else {
        #[cfg_attr(docsrs, doc(cfg(not(target_pointer_width = "64"))))]
        pub mod u32;

        #[cfg(test)]
        pub mod u64;
    }
}
