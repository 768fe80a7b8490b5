// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A named group of demonstration entries for one UI capability.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{ExampleEntry, Platform};

/// A named, titled group of demonstration entries for one UI capability.
///
/// Modules are immutable after construction. A module with no entries is
/// valid and simply shows nothing. The title must be unique across the
/// registry; uniqueness is enforced at registration, not here.
pub struct ExampleModule {
    title: String,
    description: Option<String>,
    platform: Option<Platform>,
    entries: Vec<ExampleEntry>,
}

impl ExampleModule {
    /// Creates an empty module with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            platform: None,
            entries: Vec::new(),
        }
    }

    /// Attaches a display-only description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restricts the whole module to one platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Appends an entry. Entries keep their insertion order.
    #[must_use]
    pub fn with_entry(mut self, entry: ExampleEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Returns the module title.
    #[must_use]
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the platform restriction, if any.
    #[must_use]
    #[inline]
    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Returns every entry, unfiltered, in insertion order.
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[ExampleEntry] {
        &self.entries
    }

    /// Returns `true` if the module should be listed on `host`.
    #[must_use]
    pub fn visible_on(&self, host: Platform) -> bool {
        host.admits(self.platform)
    }

    /// Returns the entries visible on `host`, in insertion order.
    ///
    /// Entries tagged for the other platform are filtered out before display
    /// and are never rendered there.
    pub fn entries_for(&self, host: Platform) -> impl Iterator<Item = &ExampleEntry> {
        self.entries
            .iter()
            .filter(move |entry| host.admits(entry.platform()))
    }
}

impl fmt::Debug for ExampleModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleModule")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("platform", &self.platform)
            .field("entries", &self.entries.len())
            .finish()
    }
}
