// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod wipe_impls_tests {
    use palisade_zero::{Wipe, WipeProbe};

    #[test]
    fn test_slice_wipe_impl() {
        let mut data = [0xCDu8; 32];
        let slice: &mut [u8] = &mut data;

        assert!(!slice.is_wiped());
        slice.wipe();
        assert!(slice.is_wiped());
    }

    #[test]
    fn test_vec_wipe_impl_covers_allocation() {
        let mut vec = vec![0xEEu8; 40];
        vec.truncate(8);

        vec.wipe();
        assert!(vec.is_wiped());
    }

    #[test]
    fn test_string_wipe_impl() {
        let mut s = String::from("hunter2");

        assert!(!s.is_wiped());
        s.wipe();
        assert!(s.is_wiped());
        assert_eq!(s.len(), 7);
    }

    #[test]
    fn test_empty_string_is_wiped() {
        let s = String::new();
        assert!(s.is_wiped());
    }

    #[test]
    fn test_dyn_wipe() {
        let mut vec = vec![9u8; 8];
        let z: &mut dyn Wipe = &mut vec;
        z.wipe();
        assert!(vec.is_wiped());
    }
}
