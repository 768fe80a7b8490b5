// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration-time configuration errors.

use alloc::string::String;
use core::fmt;

/// Error raised while registering modules, before the registry is frozen.
///
/// These are startup-time configuration errors: a host that hits one should
/// fail to start rather than present a partial gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A module with this title is already registered.
    ///
    /// The registry's duplicate policy is to reject at registration; the
    /// first registration under a title wins and the conflicting module is
    /// refused deterministically.
    DuplicateTitle(String),
    /// A module title must be non-empty.
    EmptyTitle,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTitle(title) => {
                write!(f, "module '{title}' is already registered")
            }
            Self::EmptyTitle => f.write_str("module title must be non-empty"),
        }
    }
}

impl core::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_duplicate() {
        let err = RegistryError::DuplicateTitle("Modal".to_string());
        assert_eq!(format!("{err}"), "module 'Modal' is already registered");
    }
}
