// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host-runtime lifecycle bridge for the credential store.
//!
//! The host runtime attaches the component, registers credentials for
//! sessions, and detaches it again. [`HostBridge`] gates those three
//! hooks behind an explicit `Unloaded -> Loaded -> Unloaded` state
//! machine, so no entry point ever reaches an unconstructed store and
//! unloading always erases the secret.
//!
//! All errors cross the hook boundary as [`BridgeError`] values; nothing
//! panics toward the host.
//!
//! # Example
//!
//! ```rust
//! use palisade_bridge::{
//!     Credentials, CredentialSource, BridgeError, HostBridge, HostHandle, SessionHandle,
//!     VersionRange,
//! };
//!
//! struct FixedSource;
//!
//! impl CredentialSource for FixedSource {
//!     fn credentials_for(&self, _session: SessionHandle) -> Result<Credentials, BridgeError> {
//!         Ok(Credentials::new("alice", b"{s3cr3t}".to_vec()))
//!     }
//! }
//!
//! let bridge = HostBridge::new();
//!
//! let version = bridge
//!     .on_load(HostHandle(1), VersionRange::new(1, 3), Box::new(FixedSource))
//!     .unwrap();
//! assert_eq!(version.0, 3);
//!
//! bridge.register(SessionHandle(7)).unwrap();
//! assert_eq!(bridge.secret_len(), Some(8));
//!
//! bridge.on_unload();
//! assert!(!bridge.is_loaded());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod bridge;
mod error;
pub mod process;
mod source;
mod version;

pub use bridge::HostBridge;
pub use error::BridgeError;
pub use source::{CredentialSource, Credentials, HostHandle, SessionHandle};
pub use version::{InterfaceVersion, SUPPORTED_MAX, SUPPORTED_MIN, VersionRange};
