// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The process-wide hook surface.
//!
//! An embedding host invokes free functions, not methods, so the single
//! bridge for the process lives in a `static` here. The bridge itself
//! carries the whole state machine; this module only pins down "exactly
//! one instance for the process lifetime".

use crate::bridge::HostBridge;
use crate::error::BridgeError;
use crate::source::{CredentialSource, HostHandle, SessionHandle};
use crate::version::{InterfaceVersion, VersionRange};

static BRIDGE: HostBridge = HostBridge::new();

/// Returns the process-wide bridge.
pub fn bridge() -> &'static HostBridge {
    &BRIDGE
}

/// Process-wide load hook. See [`HostBridge::on_load`].
pub fn on_load(
    host: HostHandle,
    offered: VersionRange,
    source: Box<dyn CredentialSource>,
) -> Result<InterfaceVersion, BridgeError> {
    BRIDGE.on_load(host, offered, source)
}

/// Process-wide registration hook. See [`HostBridge::register`].
pub fn register(session: SessionHandle) -> Result<(), BridgeError> {
    BRIDGE.register(session)
}

/// Process-wide unload hook. Idempotent. See [`HostBridge::on_unload`].
pub fn on_unload() {
    BRIDGE.on_unload();
}

/// Returns `true` while the process-wide bridge is loaded.
pub fn is_loaded() -> bool {
    BRIDGE.is_loaded()
}
