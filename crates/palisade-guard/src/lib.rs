// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process hardening for components that hold secrets in memory.
//!
//! A secret that is wiped on every normal exit path can still leak
//! through a crash dump. This crate applies two one-time mitigations on
//! Linux and reports what took effect:
//!
//! - `prctl(PR_SET_DUMPABLE, 0)` - blocks core dumps and ptrace attach
//! - `setrlimit(RLIMIT_CORE, 0)` - limits core dump size to 0 bytes
//!
//! On non-Linux targets both are reported as inactive. The first call
//! performs the syscalls; later calls return the cached result. A spin
//! state machine keeps concurrent first calls agreeing on one result.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use core::sync::atomic::{AtomicU8, Ordering};

/// Outcome of the one-time hardening attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardeningStatus {
    /// Whether `prctl(PR_SET_DUMPABLE, 0)` succeeded.
    ///
    /// Blocks both core dumps and ptrace attachment. Reversible by other
    /// code in the process calling `prctl(PR_SET_DUMPABLE, 1)`.
    pub dumpable_cleared: bool,

    /// Whether `setrlimit(RLIMIT_CORE, 0)` succeeded.
    ///
    /// Redundant core-dump prevention; does not block ptrace, but is
    /// harder to revert than the prctl flag.
    pub core_limit_zeroed: bool,
}

impl HardeningStatus {
    /// Returns `true` if at least one mitigation is active.
    pub fn any_active(&self) -> bool {
        self.dumpable_cleared || self.core_limit_zeroed
    }
}

// State machine packed into one atomic: low two bits are the phase,
// high bits cache the syscall outcomes.
const PHASE_MASK: u8 = 0b0000_0011;
const PHASE_UNINIT: u8 = 0;
const PHASE_IN_PROGRESS: u8 = 1;
const PHASE_DONE: u8 = 2;

const FLAG_DUMPABLE: u8 = 0b0000_0100;
const FLAG_CORE_LIMIT: u8 = 0b0000_1000;

static HARDEN_STATE: AtomicU8 = AtomicU8::new(PHASE_UNINIT);

/// Returns the hardening status, applying the mitigations on first call.
///
/// Thread-safe: when several threads race on the first call, one thread
/// performs the syscalls while the others spin until the cached result
/// is published; every caller sees the same status.
///
/// # Example
///
/// ```
/// use palisade_guard::hardening_status;
///
/// let status = hardening_status();
/// let again = hardening_status();
/// assert_eq!(status, again);
/// ```
#[inline]
pub fn hardening_status() -> HardeningStatus {
    // Fast path: already initialized
    let state = HARDEN_STATE.load(Ordering::Acquire);
    if state & PHASE_MASK == PHASE_DONE {
        return HardeningStatus {
            dumpable_cleared: state & FLAG_DUMPABLE != 0,
            core_limit_zeroed: state & FLAG_CORE_LIMIT != 0,
        };
    }

    harden_slow();
    hardening_status()
}

#[cold]
#[inline(never)]
fn harden_slow() {
    match HARDEN_STATE.compare_exchange(
        PHASE_UNINIT,
        PHASE_IN_PROGRESS,
        Ordering::Acquire,
        Ordering::Relaxed,
    ) {
        Ok(_) => {
            let mut state = PHASE_DONE;
            if clear_dumpable() {
                state |= FLAG_DUMPABLE;
            }
            if zero_core_limit() {
                state |= FLAG_CORE_LIMIT;
            }

            HARDEN_STATE.store(state, Ordering::Release);
        }
        Err(_) => {
            // Another thread is hardening or already done
            while HARDEN_STATE.load(Ordering::Acquire) & PHASE_MASK != PHASE_DONE {
                core::hint::spin_loop();
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn clear_dumpable() -> bool {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0, 0, 0, 0) == 0 }
}

#[cfg(not(target_os = "linux"))]
fn clear_dumpable() -> bool {
    // prctl is Linux-only
    false
}

#[cfg(target_os = "linux")]
fn zero_core_limit() -> bool {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) == 0 }
}

#[cfg(not(target_os = "linux"))]
fn zero_core_limit() -> bool {
    // RLIMIT_CORE handling is Linux-specific here
    false
}
