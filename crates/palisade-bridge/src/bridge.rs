// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The bridge state machine: Unloaded -> Loaded -> Unloaded.

use std::sync::{Arc, Mutex};

use palisade_store::CredentialStore;
use palisade_zero::Wipe;

use crate::error::BridgeError;
use crate::source::{CredentialSource, HostHandle, SessionHandle};
use crate::version::{InterfaceVersion, VersionRange};

enum BridgeState {
    Unloaded,
    Loaded {
        host: HostHandle,
        version: InterfaceVersion,
        store: CredentialStore,
        source: Arc<dyn CredentialSource>,
    },
}

/// Lifecycle wrapper between the host runtime and the credential store.
///
/// All mutation runs under one mutex: concurrent `register` calls are
/// serialized, and `on_unload` acquires the same lock, so the erase is
/// sequenced after every in-flight operation completes (drain-then-erase).
///
/// The store only exists in the `Loaded` state, which makes
/// use-before-init unrepresentable: there is no store to dereference
/// until `on_load` has succeeded.
pub struct HostBridge {
    state: Mutex<BridgeState>,
}

impl HostBridge {
    /// Creates a bridge in the `Unloaded` state.
    ///
    /// Const so a process-wide bridge can live in a `static`.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(BridgeState::Unloaded),
        }
    }

    /// Load hook: negotiates the interface version and constructs the store.
    ///
    /// On success the process hardening is applied (first load only),
    /// the store is constructed, and the negotiated version is returned.
    /// On any failure the bridge stays `Unloaded` and no state survives.
    /// Loading an already-loaded bridge is rejected.
    pub fn on_load(
        &self,
        host: HostHandle,
        offered: VersionRange,
        source: Box<dyn CredentialSource>,
    ) -> Result<InterfaceVersion, BridgeError> {
        let mut state = self.state.lock().map_err(|_| BridgeError::MutexPoisoned)?;

        if matches!(*state, BridgeState::Loaded { .. }) {
            return Err(BridgeError::AlreadyLoaded);
        }

        let version = offered
            .negotiate()
            .ok_or(BridgeError::UnsupportedVersion {
                offered_min: offered.min.0,
                offered_max: offered.max.0,
            })?;

        // A loaded component must never leave its secret in a core dump
        let _ = palisade_guard::hardening_status();

        *state = BridgeState::Loaded {
            host,
            version,
            store: CredentialStore::new(),
            source: Arc::from(source),
        };

        Ok(version)
    }

    /// Registration hook: populates the store for one session.
    ///
    /// Obtains credentials from the source, hands them to the store, and
    /// wipes the transit copy. Rejected with [`BridgeError::NotLoaded`]
    /// before a successful load; may be called any number of times while
    /// loaded, from any thread.
    ///
    /// The state lock is not held while the source runs: the source is
    /// host code and may itself query this bridge. The lock is taken
    /// once to snapshot the source and again around `set_user`, with
    /// the `Loaded` state re-checked in between in case an unload won
    /// the race (the fetched credentials wipe themselves on drop).
    pub fn register(&self, session: SessionHandle) -> Result<(), BridgeError> {
        let source = {
            let state = self.state.lock().map_err(|_| BridgeError::MutexPoisoned)?;

            match &*state {
                BridgeState::Unloaded => return Err(BridgeError::NotLoaded),
                BridgeState::Loaded { source, .. } => Arc::clone(source),
            }
        };

        let mut credentials = source.credentials_for(session)?;

        let mut state = self.state.lock().map_err(|_| BridgeError::MutexPoisoned)?;

        match &mut *state {
            BridgeState::Unloaded => Err(BridgeError::NotLoaded),
            BridgeState::Loaded { store, .. } => {
                store.set_user(&credentials.username, &mut credentials.secret);
                credentials.wipe();
                Ok(())
            }
        }
    }

    /// Unload hook: erases the store and returns to `Unloaded`.
    ///
    /// Idempotent and safe without a prior successful load. Acquiring
    /// the state lock drains in-flight register/query calls before the
    /// erase; a poisoned lock is recovered rather than skipped, because
    /// unload must wipe even after another thread panicked.
    pub fn on_unload(&self) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let BridgeState::Loaded { store, .. } = &mut *state {
            store.erase();
        }

        *state = BridgeState::Unloaded;
    }

    /// Returns `true` once `on_load` has succeeded and before unload.
    pub fn is_loaded(&self) -> bool {
        match self.state.lock() {
            Ok(state) => matches!(*state, BridgeState::Loaded { .. }),
            Err(_) => false,
        }
    }

    /// Returns the negotiated version while loaded.
    pub fn negotiated_version(&self) -> Option<InterfaceVersion> {
        match &*self.state.lock().ok()? {
            BridgeState::Loaded { version, .. } => Some(*version),
            BridgeState::Unloaded => None,
        }
    }

    /// Returns the host handle received at load time.
    pub fn host(&self) -> Option<HostHandle> {
        match &*self.state.lock().ok()? {
            BridgeState::Loaded { host, .. } => Some(*host),
            BridgeState::Unloaded => None,
        }
    }

    /// Returns the stored secret's length while loaded.
    pub fn secret_len(&self) -> Option<usize> {
        match &*self.state.lock().ok()? {
            BridgeState::Loaded { store, .. } => Some(store.secret_len()),
            BridgeState::Unloaded => None,
        }
    }

    /// Returns the stored username while loaded.
    pub fn username(&self) -> Option<String> {
        match &*self.state.lock().ok()? {
            BridgeState::Loaded { store, .. } => Some(store.username().to_owned()),
            BridgeState::Unloaded => None,
        }
    }

    /// Compares a candidate against the stored secret in constant time.
    ///
    /// The secret itself never crosses the bridge boundary.
    pub fn verify_secret(&self, candidate: &[u8]) -> Result<bool, BridgeError> {
        let state = self.state.lock().map_err(|_| BridgeError::MutexPoisoned)?;

        match &*state {
            BridgeState::Unloaded => Err(BridgeError::NotLoaded),
            BridgeState::Loaded { store, .. } => Ok(store.verify_secret(candidate)),
        }
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HostBridge")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}
