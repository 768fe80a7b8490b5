// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Registry: the example-module registry and selection contract.
//!
//! The gallery is a catalog of [`ExampleModule`]s, each a named group of
//! [`ExampleEntry`]s demonstrating one UI capability. An external navigator
//! lists module titles, then entry titles within a chosen module, then
//! invokes the selected entry's render factory and mounts the result.
//!
//! ## Core concepts
//!
//! - **Render factory**: a pure, zero-argument function producing an
//!   [`Element`](vitrine_element::Element) descriptor. It performs no
//!   blocking I/O and never returns a mounted instance.
//! - **Platform filtering**: entries and whole modules can be tagged with a
//!   [`Platform`]; tagged items are filtered out before display on the other
//!   platform and are never rendered there. Untagged items appear on both.
//! - **Freeze and publish**: [`RegistryBuilder`] accumulates modules at
//!   startup; [`RegistryBuilder::build`] freezes them into a
//!   [`GalleryRegistry`] that exposes only `&self` methods, so there is no
//!   post-initialization writer and concurrent readers need no
//!   synchronization.
//!
//! Duplicate module titles are a startup-time configuration error: the
//! builder rejects them at registration with
//! [`RegistryError::DuplicateTitle`], before the gallery becomes
//! interactive.
//!
//! ## Example
//!
//! ```rust
//! use vitrine_element::Element;
//! use vitrine_registry::{ExampleEntry, ExampleModule, Platform, RegistryBuilder};
//!
//! let module = ExampleModule::new("Buttons")
//!     .with_description("Pressable things")
//!     .with_entry(ExampleEntry::new("Basic", || Element::button("Press me")));
//!
//! let mut builder = RegistryBuilder::new();
//! builder.register(module)?;
//! let registry = builder.build();
//!
//! let module = registry.module("Buttons").unwrap();
//! let entry = module.entries_for(Platform::Ios).next().unwrap();
//! assert_eq!(entry.title(), "Basic");
//! # Ok::<(), vitrine_registry::RegistryError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod entry;
mod error;
mod module;
mod platform;
mod registry;

pub use entry::{ExampleEntry, RenderFn};
pub use error::RegistryError;
pub use module::ExampleModule;
pub use platform::Platform;
pub use registry::{GalleryRegistry, RegistryBuilder};
