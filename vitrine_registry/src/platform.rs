// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host platform identification and visibility filtering.

use core::fmt;

/// The platform the gallery host is running on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Apple iOS.
    Ios,
    /// Android.
    Android,
}

impl Platform {
    /// Returns `true` if an item carrying `tag` is visible on this platform.
    ///
    /// Untagged items (`None`) are visible everywhere; tagged items are
    /// visible only on the tagged platform.
    #[must_use]
    #[inline]
    pub fn admits(self, tag: Option<Self>) -> bool {
        tag.is_none_or(|tag| tag == self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => f.write_str("ios"),
            Self::Android => f.write_str("android"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_is_visible_everywhere() {
        assert!(Platform::Ios.admits(None));
        assert!(Platform::Android.admits(None));
    }

    #[test]
    fn tagged_is_visible_only_on_its_platform() {
        assert!(Platform::Ios.admits(Some(Platform::Ios)));
        assert!(!Platform::Android.admits(Some(Platform::Ios)));
        assert!(!Platform::Ios.admits(Some(Platform::Android)));
    }
}
