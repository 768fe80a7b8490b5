// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide gallery registry.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::{ExampleModule, Platform, RegistryError};

/// Accumulates modules at startup, before the registry is frozen.
///
/// The registry follows an arena-style lifecycle: build a list, freeze,
/// publish. All registration happens through this builder; once
/// [`build`](Self::build) runs, the resulting [`GalleryRegistry`] is
/// read-only for the life of the process.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modules: Vec<ExampleModule>,
    by_title: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module.
    ///
    /// Titles must be non-empty and unique; a duplicate is rejected with
    /// [`RegistryError::DuplicateTitle`], leaving the earlier registration
    /// in place. Modules keep their registration order.
    pub fn register(&mut self, module: ExampleModule) -> Result<(), RegistryError> {
        if module.title().is_empty() {
            return Err(RegistryError::EmptyTitle);
        }
        if self.by_title.contains_key(module.title()) {
            return Err(RegistryError::DuplicateTitle(module.title().into()));
        }
        self.by_title
            .insert(module.title().into(), self.modules.len());
        self.modules.push(module);
        Ok(())
    }

    /// Freezes the accumulated modules into a read-only registry.
    #[must_use]
    pub fn build(self) -> GalleryRegistry {
        GalleryRegistry {
            modules: self.modules,
            by_title: self.by_title,
        }
    }
}

/// The frozen, process-wide table of all example modules.
///
/// Populated exactly once at startup via [`RegistryBuilder`] and read-only
/// thereafter: every method takes `&self`, so no post-initialization writer
/// exists and concurrent readers need no synchronization.
pub struct GalleryRegistry {
    modules: Vec<ExampleModule>,
    by_title: HashMap<String, usize>,
}

impl GalleryRegistry {
    /// Returns the number of registered modules.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no modules are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Looks up a module by title.
    ///
    /// A miss means the navigator asked for a title it never listed; that is
    /// a caller programming error, not a recoverable runtime condition.
    #[must_use]
    pub fn module(&self, title: &str) -> Option<&ExampleModule> {
        self.by_title.get(title).map(|&i| &self.modules[i])
    }

    /// Returns every module, unfiltered, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ExampleModule> {
        self.modules.iter()
    }

    /// Returns the modules visible on `host`, in registration order.
    pub fn modules_for(&self, host: Platform) -> impl Iterator<Item = &ExampleModule> {
        self.modules
            .iter()
            .filter(move |module| module.visible_on(host))
    }
}

impl fmt::Debug for GalleryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryRegistry")
            .field("count", &self.modules.len())
            .field(
                "modules",
                &self
                    .modules
                    .iter()
                    .map(ExampleModule::title)
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExampleEntry;
    use alloc::format;
    use alloc::vec::Vec;
    use vitrine_element::Element;

    fn module(title: &str) -> ExampleModule {
        ExampleModule::new(title)
            .with_entry(ExampleEntry::new("Basic", || Element::label("stub")))
    }

    #[test]
    fn lookup_after_freeze() {
        let mut builder = RegistryBuilder::new();
        builder.register(module("ActionSheet")).unwrap();
        builder.register(module("Modal")).unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.module("Modal").unwrap().title(), "Modal");
        assert!(registry.module("Slider").is_none());
    }

    #[test]
    fn duplicate_title_is_rejected_deterministically() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(module("Modal").with_description("first"))
            .unwrap();
        let err = builder
            .register(module("Modal").with_description("second"))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTitle("Modal".into()));

        // The earlier registration stays in place.
        let registry = builder.build();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.module("Modal").unwrap().description(),
            Some("first")
        );
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut builder = RegistryBuilder::new();
        let err = builder.register(ExampleModule::new("")).unwrap_err();
        assert_eq!(err, RegistryError::EmptyTitle);
    }

    #[test]
    fn modules_keep_registration_order() {
        let mut builder = RegistryBuilder::new();
        for title in ["C", "A", "B"] {
            builder.register(module(title)).unwrap();
        }
        let registry = builder.build();
        let titles: Vec<_> = registry.iter().map(ExampleModule::title).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[test]
    fn platform_filtering_hides_tagged_modules() {
        let mut builder = RegistryBuilder::new();
        builder.register(module("Both")).unwrap();
        builder
            .register(module("AppleOnly").with_platform(crate::Platform::Ios))
            .unwrap();
        let registry = builder.build();

        let android: Vec<_> = registry
            .modules_for(crate::Platform::Android)
            .map(ExampleModule::title)
            .collect();
        assert_eq!(android, ["Both"]);

        let ios: Vec<_> = registry
            .modules_for(crate::Platform::Ios)
            .map(ExampleModule::title)
            .collect();
        assert_eq!(ios, ["Both", "AppleOnly"]);
    }

    #[test]
    fn debug_lists_titles() {
        let mut builder = RegistryBuilder::new();
        builder.register(module("Picker")).unwrap();
        let registry = builder.build();
        let debug = format!("{registry:?}");
        assert!(debug.contains("Picker"), "{debug}");
    }
}
