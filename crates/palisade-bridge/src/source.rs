// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The host collaborator that supplies credentials, and the opaque
//! handles the host runtime passes through the hooks.

use palisade_zero::{Wipe, WipeProbe};

use crate::error::BridgeError;

/// Opaque handle identifying the host runtime instance.
///
/// Stand-in for whatever pointer or token the embedding environment
/// hands to the load hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostHandle(pub u64);

/// Opaque handle identifying one host session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(pub u64);

/// A username/secret pair in transit from the host to the store.
///
/// The bridge wipes the secret (and the username buffer) as soon as the
/// store has taken its copy; a `Credentials` value also wipes itself on
/// drop so an early-return path cannot leak it.
pub struct Credentials {
    /// The username, stored as given.
    pub username: String,
    /// The secret bytes. May be empty.
    pub secret: Vec<u8>,
}

impl Credentials {
    /// Builds a credentials pair.
    pub fn new(username: impl Into<String>, secret: Vec<u8>) -> Self {
        Self {
            username: username.into(),
            secret,
        }
    }
}

impl Wipe for Credentials {
    fn wipe(&mut self) {
        self.secret.wipe();
        self.username.wipe();
    }
}

impl WipeProbe for Credentials {
    fn is_wiped(&self) -> bool {
        self.secret.is_wiped() && self.username.is_wiped()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret_len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

/// The host-side collaborator that supplies credentials per session.
///
/// Models the input layer (UI, IPC, token cache) living on the host side
/// of the boundary. Implementations report failures through
/// [`BridgeError::source_error`]. `Send + Sync` because the host may
/// drive registration from any of its threads; a source is free to
/// query the bridge it is registered with (the bridge never holds its
/// own lock while the source runs).
pub trait CredentialSource: Send + Sync {
    /// Produces the credentials to register for `session`.
    fn credentials_for(&self, session: SessionHandle) -> Result<Credentials, BridgeError>;
}
