// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-memory credential store with guaranteed secret erasure.
//!
//! [`CredentialStore`] owns one username and one secret. All access to
//! the secret is mediated through a [`SecretBuffer`], which erases prior
//! plaintext on every reassignment and on drop. No getter returns the
//! raw secret; callers get length/presence queries and a constant-time
//! [`verify_secret`](CredentialStore::verify_secret) check.
//!
//! # Example
//!
//! ```rust
//! use palisade_store::{ANONYMOUS_USER, CredentialStore};
//!
//! let mut store = CredentialStore::new();
//! assert_eq!(store.username(), ANONYMOUS_USER);
//! assert!(!store.has_secret());
//!
//! let mut secret = *b"{s3cr3t}";
//! store.set_user("alice", &mut secret);
//!
//! // The caller's copy has been wiped during the handoff
//! assert!(secret.iter().all(|&b| b == 0));
//!
//! assert_eq!(store.username(), "alice");
//! assert_eq!(store.secret_len(), 8);
//! assert!(store.verify_secret(b"{s3cr3t}"));
//!
//! store.erase();
//! assert!(!store.has_secret());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

use alloc::string::String;

use subtle::ConstantTimeEq;

use palisade_buffer::SecretBuffer;
use palisade_zero::{Wipe, WipeProbe};

/// Username sentinel used before any registration has happened.
pub const ANONYMOUS_USER: &str = "Anonymous";

/// Owns one username and one secret for the lifetime of the component.
///
/// Invariant: old secret plaintext never persists after a reassignment
/// or destruction. The secret buffer is constructed before anything can
/// attempt an erase, and every erase works from the buffer's tracked
/// length, never a recomputation over possibly-wiped content.
pub struct CredentialStore {
    username: String,
    secret: SecretBuffer,
}

impl CredentialStore {
    /// Creates a store with the anonymous sentinel and an empty secret.
    pub fn new() -> Self {
        Self {
            username: String::from(ANONYMOUS_USER),
            secret: SecretBuffer::new(),
        }
    }

    /// Stores a username and secret, replacing any previous credential.
    ///
    /// The username is stored as given. The previous secret is erased
    /// before the new bytes are accepted, and the caller's `secret` slice
    /// is wiped after the copy, so at most one live plaintext copy exists
    /// at any point. An empty slice is a valid zero-length secret.
    pub fn set_user(&mut self, username: &str, secret: &mut [u8]) {
        self.username.clear();
        self.username.push_str(username);
        self.secret.assign(secret);
    }

    /// Returns the stored username.
    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the secret's byte length (also valid after erasure).
    #[inline]
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Returns `true` if a non-empty, non-erased secret is present.
    #[inline]
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty() && !self.secret.is_erased()
    }

    /// Compares `candidate` against the stored secret in constant time.
    ///
    /// Not a getter: the secret never leaves the store. Returns `false`
    /// when no live secret is present. Only the length is observable
    /// through timing, and the length is already a public query.
    pub fn verify_secret(&self, candidate: &[u8]) -> bool {
        if !self.has_secret() {
            return false;
        }

        self.secret.expose().ct_eq(candidate).into()
    }

    /// Erases the secret and resets the username to the sentinel.
    ///
    /// Runs the buffer erase unconditionally, even when the secret is
    /// already empty or erased. Idempotent.
    pub fn erase(&mut self) {
        self.secret.erase();
        self.username.clear();
        self.username.push_str(ANONYMOUS_USER);
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CredentialStore {
    fn drop(&mut self) {
        // SecretBuffer::drop would erase too; doing it here keeps the
        // store's own destroy contract explicit on every exit path
        self.secret.erase();
    }
}

impl WipeProbe for CredentialStore {
    fn is_wiped(&self) -> bool {
        self.secret.is_wiped()
    }
}

impl Wipe for CredentialStore {
    fn wipe(&mut self) {
        self.erase();
    }
}

impl core::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("username", &self.username)
            .field("secret_len", &self.secret.len())
            .finish_non_exhaustive()
    }
}
