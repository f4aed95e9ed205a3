// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::tests::{FailingSource, SessionDerivedSource};
use crate::{
    BridgeError, CredentialSource, Credentials, HostBridge, HostHandle, SessionHandle,
    VersionRange,
};

struct AliceSource;

impl CredentialSource for AliceSource {
    fn credentials_for(&self, _session: SessionHandle) -> Result<Credentials, BridgeError> {
        Ok(Credentials::new("alice", b"{s3cr3t}".to_vec()))
    }
}

#[test]
fn test_load_register_unload_scenario() {
    let bridge = HostBridge::new();

    // Host offers [1,3], supported range is [1,3] -> negotiate 3
    let version = bridge
        .on_load(HostHandle(1), VersionRange::new(1, 3), Box::new(AliceSource))
        .unwrap();
    assert_eq!(version.0, 3);
    assert!(bridge.is_loaded());

    bridge.register(SessionHandle(7)).unwrap();
    assert_eq!(bridge.username().as_deref(), Some("alice"));
    assert_eq!(bridge.secret_len(), Some(8));
    assert!(bridge.verify_secret(b"{s3cr3t}").unwrap());

    bridge.on_unload();
    assert!(!bridge.is_loaded());
    assert_eq!(bridge.secret_len(), None);
}

#[test]
fn test_register_before_load_is_rejected_not_a_fault() {
    let bridge = HostBridge::new();

    let result = bridge.register(SessionHandle(1));
    assert!(matches!(result, Err(BridgeError::NotLoaded)));
}

#[test]
fn test_failed_load_leaves_no_state() {
    let bridge = HostBridge::new();

    // Offered range [4,9] does not overlap supported [1,3]
    let result = bridge.on_load(
        HostHandle(1),
        VersionRange::new(4, 9),
        Box::new(AliceSource),
    );
    assert!(matches!(
        result,
        Err(BridgeError::UnsupportedVersion {
            offered_min: 4,
            offered_max: 9,
        })
    ));
    assert!(!bridge.is_loaded());

    // Subsequent register is rejected, never dereferences a store
    assert!(matches!(
        bridge.register(SessionHandle(1)),
        Err(BridgeError::NotLoaded)
    ));
}

#[test]
fn test_double_load_is_rejected() {
    let bridge = HostBridge::new();

    bridge
        .on_load(HostHandle(1), VersionRange::new(1, 3), Box::new(AliceSource))
        .unwrap();

    let second = bridge.on_load(
        HostHandle(2),
        VersionRange::new(1, 3),
        Box::new(AliceSource),
    );
    assert!(matches!(second, Err(BridgeError::AlreadyLoaded)));

    // The first load is untouched
    assert_eq!(bridge.host(), Some(HostHandle(1)));
}

#[test]
fn test_unload_is_idempotent_and_safe_without_load() {
    let bridge = HostBridge::new();

    bridge.on_unload();
    bridge.on_unload();
    assert!(!bridge.is_loaded());

    bridge
        .on_load(HostHandle(1), VersionRange::new(1, 3), Box::new(AliceSource))
        .unwrap();
    bridge.register(SessionHandle(1)).unwrap();

    bridge.on_unload();
    bridge.on_unload();
    assert!(!bridge.is_loaded());
}

#[test]
fn test_reload_after_unload() {
    let bridge = HostBridge::new();

    bridge
        .on_load(HostHandle(1), VersionRange::new(1, 3), Box::new(AliceSource))
        .unwrap();
    bridge.on_unload();

    let version = bridge
        .on_load(
            HostHandle(2),
            VersionRange::new(2, 2),
            Box::new(SessionDerivedSource),
        )
        .unwrap();
    assert_eq!(version.0, 2);
    assert_eq!(bridge.host(), Some(HostHandle(2)));
}

#[test]
fn test_source_failure_is_reported_and_store_unchanged() {
    let bridge = HostBridge::new();

    bridge
        .on_load(
            HostHandle(1),
            VersionRange::new(1, 3),
            Box::new(FailingSource),
        )
        .unwrap();

    let result = bridge.register(SessionHandle(1));
    assert!(matches!(result, Err(BridgeError::Source(_))));

    // Still loaded, store still at the sentinel state
    assert!(bridge.is_loaded());
    assert_eq!(bridge.username().as_deref(), Some("Anonymous"));
    assert_eq!(bridge.secret_len(), Some(0));
}

#[test]
fn test_repeated_register_replaces_credential() {
    let bridge = HostBridge::new();

    bridge
        .on_load(
            HostHandle(1),
            VersionRange::new(1, 3),
            Box::new(SessionDerivedSource),
        )
        .unwrap();

    bridge.register(SessionHandle(3)).unwrap();
    bridge.register(SessionHandle(11)).unwrap();

    assert_eq!(bridge.username().as_deref(), Some("user-11"));
    assert!(bridge.verify_secret(&[11u8; 32]).unwrap());
    assert!(!bridge.verify_secret(&[3u8; 32]).unwrap());
}

// The source is host code: it may consult the component it feeds, e.g.
// to skip work when a secret is already present. Such a reentrant query
// must answer, not deadlock on the bridge's own lock.
#[test]
fn test_source_may_query_bridge_reentrantly() {
    struct ReentrantSource {
        bridge: std::sync::Arc<HostBridge>,
    }

    impl CredentialSource for ReentrantSource {
        fn credentials_for(&self, _session: SessionHandle) -> Result<Credentials, BridgeError> {
            assert!(self.bridge.is_loaded());
            assert_eq!(self.bridge.secret_len(), Some(0));
            let _ = format!("{:?}", self.bridge);

            Ok(Credentials::new("carol", vec![7u8; 16]))
        }
    }

    let bridge = std::sync::Arc::new(HostBridge::new());
    bridge
        .on_load(
            HostHandle(1),
            VersionRange::new(1, 3),
            Box::new(ReentrantSource {
                bridge: std::sync::Arc::clone(&bridge),
            }),
        )
        .unwrap();

    bridge.register(SessionHandle(1)).unwrap();

    assert_eq!(bridge.username().as_deref(), Some("carol"));
    assert!(bridge.verify_secret(&[7u8; 16]).unwrap());
}

// An unload can win the race between the credential fetch and the store
// update; the late register must then report NotLoaded instead of
// writing into a store that was already erased.
#[test]
fn test_register_after_racing_unload_is_rejected() {
    struct UnloadingSource {
        bridge: std::sync::Arc<HostBridge>,
    }

    impl CredentialSource for UnloadingSource {
        fn credentials_for(&self, _session: SessionHandle) -> Result<Credentials, BridgeError> {
            // Host detaches the component mid-fetch
            self.bridge.on_unload();
            Ok(Credentials::new("late", vec![1u8; 8]))
        }
    }

    let bridge = std::sync::Arc::new(HostBridge::new());
    bridge
        .on_load(
            HostHandle(1),
            VersionRange::new(1, 3),
            Box::new(UnloadingSource {
                bridge: std::sync::Arc::clone(&bridge),
            }),
        )
        .unwrap();

    assert!(matches!(
        bridge.register(SessionHandle(1)),
        Err(BridgeError::NotLoaded)
    ));
    assert!(!bridge.is_loaded());
}

#[test]
fn test_queries_on_unloaded_bridge() {
    let bridge = HostBridge::new();

    assert_eq!(bridge.negotiated_version(), None);
    assert_eq!(bridge.host(), None);
    assert_eq!(bridge.secret_len(), None);
    assert_eq!(bridge.username(), None);
    assert!(matches!(
        bridge.verify_secret(b"x"),
        Err(BridgeError::NotLoaded)
    ));
}

#[test]
fn test_debug_shows_only_lifecycle_state() {
    let bridge = HostBridge::new();
    let rendered = format!("{bridge:?}");
    assert!(rendered.contains("loaded: false"));
}
