// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for the host bridge.

use thiserror::Error;

/// Errors reported to the host runtime as status values.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The host's offered interface versions do not overlap the
    /// supported range. Load fails and no state is initialized.
    #[error("host interface versions {offered_min}..={offered_max} are unsupported")]
    UnsupportedVersion {
        /// Lowest version the host offered.
        offered_min: u32,
        /// Highest version the host offered.
        offered_max: u32,
    },

    /// `on_load` was called while the component is already loaded.
    #[error("component is already loaded")]
    AlreadyLoaded,

    /// `register` (or a query) was called before a successful load.
    #[error("component is not loaded")]
    NotLoaded,

    /// The credential source failed to supply credentials for a session.
    #[error("credential source error: {0:?}")]
    Source(Box<dyn core::fmt::Debug + Send + Sync + 'static>),

    /// The bridge mutex was poisoned by a panicking thread.
    #[error("bridge mutex poisoned")]
    MutexPoisoned,
}

impl BridgeError {
    /// Wraps any `Debug` error from a credential source.
    pub fn source_error<E: core::fmt::Debug + Send + Sync + 'static>(e: E) -> Self {
        Self::Source(Box::new(e))
    }
}
