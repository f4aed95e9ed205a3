// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait seam for wipeable containers.

/// Trait for values whose sensitive content can be wiped in place.
///
/// After `wipe()` returns, every byte of the value's backing storage is
/// overwritten with [`WIPE_PATTERN`](crate::WIPE_PATTERN). Implementations
/// must route through the crate's non-eliminable store primitives so the
/// overwrite survives optimization.
///
/// Dyn-compatible: usable as `&mut dyn Wipe`.
pub trait Wipe {
    /// Overwrites the value's bytes in place.
    fn wipe(&mut self);
}

/// Trait for verifying that a wipe actually happened.
///
/// Used by tests and assertions. For heap containers the probe must cover
/// the whole allocation, not just the active length.
///
/// # Example
///
/// ```
/// use palisade_zero::{Wipe, WipeProbe};
///
/// let mut secret = vec![0xABu8; 16];
/// assert!(!secret.is_wiped());
///
/// secret.wipe();
/// assert!(secret.is_wiped());
/// ```
pub trait WipeProbe {
    /// Returns `true` if all bytes of the backing storage are zero.
    fn is_wiped(&self) -> bool;
}
