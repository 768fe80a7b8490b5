// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One selectable demonstration within a module.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use vitrine_element::Element;

use crate::Platform;

/// A render factory: pure, zero arguments, returns a subtree descriptor.
pub type RenderFn = Box<dyn Fn() -> Element>;

/// One selectable demonstration within an [`ExampleModule`](crate::ExampleModule).
///
/// An entry is immutable once constructed and owned exclusively by its
/// parent module. Its render factory is invoked synchronously by the
/// navigator on selection and must not perform blocking I/O; mounting the
/// returned descriptor is the navigator's responsibility.
pub struct ExampleEntry {
    title: String,
    description: Option<String>,
    platform: Option<Platform>,
    render: RenderFn,
}

impl ExampleEntry {
    /// Creates an entry with a title and render factory.
    #[must_use]
    pub fn new(title: impl Into<String>, render: impl Fn() -> Element + 'static) -> Self {
        Self {
            title: title.into(),
            description: None,
            platform: None,
            render: Box::new(render),
        }
    }

    /// Attaches a display-only description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restricts the entry to one platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Returns the entry title.
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

    /// Invokes the render factory, producing a fresh subtree descriptor.
    #[must_use]
    pub fn render(&self) -> Element {
        (self.render)()
    }
}

impl fmt::Debug for ExampleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleEntry")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn render_is_a_fresh_descriptor_each_time() {
        let entry = ExampleEntry::new("Basic", || Element::label("hello"));
        assert_eq!(entry.render(), entry.render());
    }

    #[test]
    fn debug_omits_the_factory() {
        let entry = ExampleEntry::new("Basic", || Element::label("hello"))
            .with_platform(Platform::Ios);
        let debug = format!("{entry:?}");
        assert!(debug.contains("Basic"), "{debug}");
        assert!(debug.contains("Ios"), "{debug}");
    }
}
