// Copyright (c) 2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Interface-version negotiation with the host runtime.

/// A host-runtime interface version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceVersion(pub u32);

/// Lowest interface version this component speaks.
pub const SUPPORTED_MIN: InterfaceVersion = InterfaceVersion(1);

/// Highest interface version this component speaks.
pub const SUPPORTED_MAX: InterfaceVersion = InterfaceVersion(3);

/// The min/max interface-version pair a host offers at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    /// Lowest version the host supports.
    pub min: InterfaceVersion,
    /// Highest version the host supports.
    pub max: InterfaceVersion,
}

impl VersionRange {
    /// Builds a range from raw version numbers.
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min: InterfaceVersion(min),
            max: InterfaceVersion(max),
        }
    }

    /// Negotiates the contract version with this component.
    ///
    /// Succeeds when the offered range overlaps
    /// [`SUPPORTED_MIN`]..=[`SUPPORTED_MAX`], answering the highest
    /// version both sides speak. An inverted range never matches.
    pub fn negotiate(&self) -> Option<InterfaceVersion> {
        if self.min > self.max {
            return None;
        }

        if self.max < SUPPORTED_MIN || self.min > SUPPORTED_MAX {
            return None;
        }

        Some(self.max.min(SUPPORTED_MAX))
    }
}
