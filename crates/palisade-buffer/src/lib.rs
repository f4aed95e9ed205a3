// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secret byte buffer with guaranteed erasure.
//!
//! [`SecretBuffer`] holds one secret byte sequence and guarantees its
//! plaintext is overwritten with zeros before the backing memory is
//! reused (reassignment) or released (drop). Erasure routes through
//! `palisade-zero`'s non-eliminable store primitives, so it survives
//! optimization.
//!
//! # Example
//!
//! ```rust
//! use palisade_buffer::SecretBuffer;
//! use palisade_zero::WipeProbe;
//!
//! let mut passphrase = *b"{s3cr3t}";
//! let mut buffer = SecretBuffer::from_bytes(&mut passphrase);
//!
//! // The source has been wiped during the move
//! assert!(passphrase.iter().all(|&b| b == 0));
//! assert_eq!(buffer.len(), 8);
//!
//! buffer.erase();
//! assert!(buffer.is_wiped());
//! // Length is preserved: an erased 8-byte buffer reads as 8 zero bytes
//! assert_eq!(buffer.len(), 8);
//! ```
//!
//! # Failure model
//!
//! No operation returns a recoverable error. Allocation failure aborts
//! the process; continuing with a half-initialized secret would risk
//! leaking plaintext.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod secret_buffer;

pub use secret_buffer::SecretBuffer;
