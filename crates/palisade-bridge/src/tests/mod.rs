// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod bridge;

use crate::{BridgeError, CredentialSource, Credentials, SessionHandle};

/// Source that derives a distinguishable credential from the session id.
pub(crate) struct SessionDerivedSource;

impl CredentialSource for SessionDerivedSource {
    fn credentials_for(&self, session: SessionHandle) -> Result<Credentials, BridgeError> {
        let byte = (session.0 % 251) as u8;
        Ok(Credentials::new(
            format!("user-{}", session.0),
            vec![byte; 32],
        ))
    }
}

/// Source that always fails.
pub(crate) struct FailingSource;

impl CredentialSource for FailingSource {
    fn credentials_for(&self, _session: SessionHandle) -> Result<Credentials, BridgeError> {
        Err(BridgeError::source_error("input layer unavailable"))
    }
}
