// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Secure in-memory credential holding for host-embedded components.</em></p>
//!
//! ---
//!
//! Palisade stores one username and one secret per process and
//! guarantees the secret's bytes are overwritten with zeros before the
//! memory is reused or released - wiped with stores the optimizer
//! cannot elide, so the plaintext is unrecoverable from freed memory.
//!
//! # Features
//!
//! - 🧹 **Guaranteed erasure** - every erase routes through a
//!   non-eliminable store primitive, covering spare capacity too
//! - 🔒 **One plaintext copy** - reassignment wipes the old secret before
//!   the new one lands, and source buffers are wiped on handoff
//! - 🚪 **Gated lifecycle** - an explicit `Unloaded -> Loaded -> Unloaded`
//!   state machine makes use-before-init unrepresentable
//! - 🛡️ **Crash-dump hardening** - `prctl`/`rlimit` mitigations applied
//!   when the component loads
//! - 🔍 **Verifiable** - wipe probes check the whole allocation, so tests
//!   prove erasure instead of assuming it
//!
//! # Quick Start
//!
//! ```rust
//! use palisade::bridge::{
//!     BridgeError, CredentialSource, Credentials, HostBridge, HostHandle, SessionHandle,
//!     VersionRange,
//! };
//!
//! // The host-side input layer that supplies credentials per session
//! struct InputLayer;
//!
//! impl CredentialSource for InputLayer {
//!     fn credentials_for(&self, _session: SessionHandle) -> Result<Credentials, BridgeError> {
//!         Ok(Credentials::new("alice", b"{s3cr3t}".to_vec()))
//!     }
//! }
//!
//! let bridge = HostBridge::new();
//!
//! // Host attaches the component, offering interface versions [1,3]
//! let version = bridge
//!     .on_load(HostHandle(1), VersionRange::new(1, 3), Box::new(InputLayer))
//!     .unwrap();
//! assert_eq!(version.0, 3);
//!
//! // Host registers a session; the store takes the one plaintext copy
//! bridge.register(SessionHandle(7)).unwrap();
//! assert_eq!(bridge.secret_len(), Some(8));
//! assert!(bridge.verify_secret(b"{s3cr3t}").unwrap());
//!
//! // Host detaches; the secret is erased before the store goes away
//! bridge.on_unload();
//! assert!(!bridge.is_loaded());
//! ```
//!
//! # Crates
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`zero`] | Non-eliminable wipe primitives and verification probes |
//! | [`buffer`] | [`SecretBuffer`](buffer::SecretBuffer): erased before reuse or release |
//! | [`store`] | [`CredentialStore`](store::CredentialStore): one username, one secret |
//! | [`guard`] | One-time core-dump/ptrace hardening |
//! | [`bridge`] | [`HostBridge`](bridge::HostBridge) lifecycle state machine and process hooks |
//!
//! # License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

pub use palisade_bridge as bridge;
pub use palisade_buffer as buffer;
pub use palisade_guard as guard;
pub use palisade_store as store;
pub use palisade_zero as zero;
