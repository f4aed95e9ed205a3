// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory wiping primitives that the optimizer cannot elide.
//!
//! Every erase path in the workspace funnels into one store primitive:
//! a bulk memset whose target is then read through a volatile load.
//! The load gives the memset an observable reader, so it cannot be
//! discarded as a dead store even though normal control flow never
//! looks at the buffer again.
//!
//! The crate also provides verification probes ([`is_slice_wiped`],
//! [`is_vec_fully_wiped`]) used by tests and assertions to check that a
//! wipe actually happened, including in the spare capacity of a `Vec`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;

mod collections;
mod traits;

pub use traits::{Wipe, WipeProbe};

/// The pattern every wiped byte is overwritten with.
pub const WIPE_PATTERN: u8 = 0x00;

/// The one non-eliminable store in the workspace.
///
/// Safety: callers pass a pointer valid for `byte_len` writes.
#[inline(always)]
fn wipe_bytes(ptr: *mut u8, byte_len: usize) {
    if byte_len == 0 {
        return;
    }

    unsafe {
        core::ptr::write_bytes(ptr, WIPE_PATTERN, byte_len);
        // Give the memset an observable reader so it cannot be dropped
        // as a dead store
        core::ptr::read_volatile(ptr as *const u8);
    }
}

/// Fills a byte slice with a repeating pattern byte.
///
/// Tests seed buffers with sentinel patterns (e.g. `0xAB`) before wiping
/// so that a missed wipe is detectable.
///
/// # Example
///
/// ```
/// use palisade_zero::fill_pattern;
///
/// let mut buffer = [0u8; 8];
/// fill_pattern(&mut buffer, 0xAB);
/// assert!(buffer.iter().all(|&b| b == 0xAB));
/// ```
#[inline]
pub fn fill_pattern(slice: &mut [u8], pattern: u8) {
    slice.fill(pattern);
}

/// Overwrites a slice with the wipe pattern, non-eliminably.
///
/// Works for any element type by treating the slice as raw bytes.
///
/// # Example
///
/// ```
/// use palisade_zero::wipe_slice;
///
/// let mut data = vec![1u8, 2, 3, 4, 5];
/// wipe_slice(&mut data);
/// assert!(data.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub fn wipe_slice<T>(slice: &mut [T]) {
    wipe_bytes(slice.as_mut_ptr() as *mut u8, core::mem::size_of_val(slice));
}

/// Wipes a `Vec` across its whole allocation.
///
/// Covers index 0 to `capacity`, not just the active elements.
/// `truncate()` and shrinking reassignments leave old bytes between
/// `len` and `capacity`; those go too.
///
/// # Example
///
/// ```
/// use palisade_zero::{is_vec_fully_wiped, wipe_vec};
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10); // len = 10, capacity = 100, spare still holds 0xFF
///
/// wipe_vec(&mut vec);
/// assert!(is_vec_fully_wiped(&vec));
/// ```
#[inline(always)]
pub fn wipe_vec<T>(vec: &mut Vec<T>) {
    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    wipe_bytes(vec.as_mut_ptr() as *mut u8, byte_len);
}

/// Wipes only the `len..capacity` region of a `Vec<u8>`.
///
/// The active elements stay intact. Needed after any operation that can
/// hand the vector a fresh, never-initialized allocation (growth) or
/// strand old bytes past `len` (shrink), when the caller still wants
/// the content itself readable.
pub fn wipe_spare_capacity(vec: &mut Vec<u8>) {
    let spare = vec.spare_capacity_mut();
    wipe_bytes(spare.as_mut_ptr() as *mut u8, spare.len());
}

/// Returns `true` if every byte of the slice equals the wipe pattern.
///
/// # Example
///
/// ```
/// use palisade_zero::is_slice_wiped;
///
/// assert!(is_slice_wiped(&[0u8; 10]));
/// assert!(!is_slice_wiped(&[0u8, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_wiped(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == WIPE_PATTERN)
}

/// Verifies that a `Vec<u8>` is wiped across its whole allocation.
///
/// Probes from index 0 to `capacity`; a probe that stopped at `len`
/// would miss stale plaintext stranded in spare capacity.
///
/// The spare region (`len..capacity`) is read through raw pointers.
/// Sound because `Vec` keeps the allocation valid for `capacity` bytes
/// and the region is only read, never written.
#[inline(never)]
pub fn is_vec_fully_wiped(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    (0..vec.capacity()).all(|i| unsafe { *base.add(i) == WIPE_PATTERN })
}
