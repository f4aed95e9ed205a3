// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `Wipe`/`WipeProbe` implementations for slices, `Vec<u8>` and `String`.

use alloc::string::String;
use alloc::vec::Vec;

use core::sync::atomic::{Ordering, compiler_fence};

use crate::traits::{Wipe, WipeProbe};
use crate::{is_slice_wiped, is_vec_fully_wiped, wipe_slice, wipe_vec};

impl Wipe for [u8] {
    fn wipe(&mut self) {
        wipe_slice(self);
        compiler_fence(Ordering::SeqCst);
    }
}

impl WipeProbe for [u8] {
    fn is_wiped(&self) -> bool {
        is_slice_wiped(self)
    }
}

impl Wipe for Vec<u8> {
    fn wipe(&mut self) {
        wipe_vec(self);
        compiler_fence(Ordering::SeqCst);
    }
}

impl WipeProbe for Vec<u8> {
    fn is_wiped(&self) -> bool {
        is_vec_fully_wiped(self)
    }
}

impl Wipe for String {
    fn wipe(&mut self) {
        // All-zero bytes are valid UTF-8, so the invariant holds
        unsafe { self.as_mut_vec() }.wipe();
    }
}

impl WipeProbe for String {
    fn is_wiped(&self) -> bool {
        let base = self.as_ptr();

        (0..self.capacity()).all(|i| unsafe { *base.add(i) == crate::WIPE_PATTERN })
    }
}
