// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SecretBuffer - heap buffer whose content is erased before reuse or release.

use alloc::vec::Vec;

use palisade_zero::{Wipe, WipeProbe, is_vec_fully_wiped, wipe_slice, wipe_spare_capacity, wipe_vec};

/// A byte container that can be written, read, and explicitly erased.
///
/// Invariants:
/// - After [`erase()`](SecretBuffer::erase) returns, every byte of the
///   backing allocation (including spare capacity) is zero. The wipe is
///   a non-eliminable store and cannot be removed by the optimizer.
/// - [`assign()`](SecretBuffer::assign) erases the previous content
///   before accepting new bytes, so at most one plaintext copy lives in
///   the buffer at any time.
/// - `Drop` erases unconditionally.
pub struct SecretBuffer {
    inner: Vec<u8>,
    erased: bool,
}

impl SecretBuffer {
    /// Creates an empty buffer. An empty buffer counts as erased.
    pub const fn new() -> Self {
        Self {
            inner: Vec::new(),
            erased: true,
        }
    }

    /// Creates a buffer holding a copy of `bytes`, wiping the source.
    ///
    /// The source slice is zeroized after the copy so no second plaintext
    /// copy survives the call.
    pub fn from_bytes(bytes: &mut [u8]) -> Self {
        let mut buffer = Self::new();
        buffer.assign(bytes);
        buffer
    }

    /// Replaces the content, erasing the previous bytes first.
    ///
    /// Ordering matters: the old allocation is fully wiped *before* the
    /// new bytes land, so a growth reallocation only ever frees memory
    /// that already reads as zeros. When the copy does grow the vector,
    /// the fresh allocation arrives with uninitialized bytes past `len`;
    /// those are wiped too so the whole-allocation invariant holds. The
    /// source slice is wiped after the copy. A zero-length slice is a
    /// valid (empty) secret, not an error.
    pub fn assign(&mut self, bytes: &mut [u8]) {
        self.erase();
        self.inner.clear();
        self.inner.extend_from_slice(bytes);
        wipe_spare_capacity(&mut self.inner);
        wipe_slice(bytes);
        self.erased = self.inner.is_empty();
    }

    /// Overwrites every byte of the allocation with zeros.
    ///
    /// Covers the full capacity, not just `len`, and keeps the length
    /// intact: an erased 8-byte buffer reads as 8 zero bytes. Idempotent;
    /// erasing an empty or already-erased buffer is a no-op that still
    /// succeeds.
    pub fn erase(&mut self) {
        wipe_vec(&mut self.inner);
        self.erased = true;
    }

    /// Returns the current byte length. No side effects.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the content has been erased (or was never set).
    #[inline]
    pub fn is_erased(&self) -> bool {
        self.erased
    }

    /// Exposes the content for reading.
    ///
    /// The owning store is the privilege boundary; do not hold the
    /// returned slice beyond the immediate read.
    #[inline]
    pub fn expose(&self) -> &[u8] {
        &self.inner
    }

    /// Returns `true` if the `len..capacity` region holds only zeros.
    ///
    /// Verification probe: after a shrinking reassignment, the bytes of
    /// the previous secret must not survive in spare capacity.
    pub fn spare_is_wiped(&self) -> bool {
        let base = self.inner.as_ptr();

        // Sound: Vec keeps the allocation valid for `capacity` bytes
        // and the region is only read
        (self.inner.len()..self.inner.capacity()).all(|i| unsafe { *base.add(i) == 0 })
    }
}

impl Default for SecretBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.erase();
    }
}

impl Wipe for SecretBuffer {
    fn wipe(&mut self) {
        self.erase();
    }
}

impl WipeProbe for SecretBuffer {
    fn is_wiped(&self) -> bool {
        is_vec_fully_wiped(&self.inner)
    }
}

impl core::fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("len", &self.len())
            .field("erased", &self.erased)
            .finish_non_exhaustive()
    }
}
