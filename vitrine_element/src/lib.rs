// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Element: renderer-agnostic UI subtree descriptors.
//!
//! A render factory in the gallery produces an [`Element`] tree: a plain-data
//! description of what should be on screen, not a live mounted instance.
//! Mounting, layout, and drawing are the host framework's job; this crate
//! only describes structure.
//!
//! The vocabulary is deliberately small. Containers ([`Element::Column`],
//! [`Element::Row`]) hold children in order; leaves are labels, buttons, and
//! the native view configurations from `vitrine_native`. A modal wraps its
//! own subtree plus a visibility flag.
//!
//! ```rust
//! use vitrine_element::Element;
//!
//! let tree = Element::column([
//!     Element::button("Read More"),
//!     Element::label("Clicked button: none"),
//! ]);
//!
//! assert!(tree.contains_label("Clicked button: none"));
//! assert_eq!(tree.labels().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use vitrine_native::{ModalConfig, PickerConfig, SliderConfig};

/// A static piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    /// The text to display.
    pub text: String,
}

/// A pressable control with a label.
///
/// Descriptors carry no callbacks; the navigator maps a press on a mounted
/// button back to a named transition on the owning sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    /// The button label.
    pub label: String,
}

/// A modal presentation wrapping its own subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    /// Native presentation configuration.
    pub config: ModalConfig,
    /// Whether the modal is currently shown.
    pub visible: bool,
    /// The subtree presented inside the modal.
    pub children: Vec<Element>,
}

/// A UI subtree descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Children stacked vertically, in order.
    Column(Vec<Element>),
    /// Children laid out horizontally, in order.
    Row(Vec<Element>),
    /// A static text label.
    Label(Label),
    /// A pressable control.
    Button(Button),
    /// The native slider view.
    Slider(SliderConfig),
    /// The native picker view, with the currently selected key.
    Picker {
        /// View configuration.
        config: PickerConfig,
        /// Key of the selected item.
        selected: String,
    },
    /// A native modal presentation.
    Modal(ModalView),
}

impl Element {
    /// Creates a vertical container.
    #[must_use]
    pub fn column(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Column(children.into_iter().collect())
    }

    /// Creates a horizontal container.
    #[must_use]
    pub fn row(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Row(children.into_iter().collect())
    }

    /// Creates a text label.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(Label { text: text.into() })
    }

    /// Creates a button.
    #[must_use]
    pub fn button(label: impl Into<String>) -> Self {
        Self::Button(Button {
            label: label.into(),
        })
    }

    /// Creates a modal wrapping the given subtree.
    #[must_use]
    pub fn modal(
        config: ModalConfig,
        visible: bool,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self::Modal(ModalView {
            config,
            visible,
            children: children.into_iter().collect(),
        })
    }

    /// Returns the text of every [`Label`] in the tree, depth first.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.visit(&mut |element| {
            if let Self::Label(label) = element {
                out.push(label.text.as_str());
            }
        });
        out
    }

    /// Returns `true` if any label in the tree has exactly this text.
    #[must_use]
    pub fn contains_label(&self, text: &str) -> bool {
        self.labels().contains(&text)
    }

    /// Walks the tree depth first, visiting every element including `self`.
    ///
    /// Modal children are visited regardless of the modal's visibility; the
    /// descriptor describes structure, not what is currently mounted.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        f(self);
        match self {
            Self::Column(children) | Self::Row(children) => {
                for child in children {
                    child.visit(f);
                }
            }
            Self::Modal(modal) => {
                for child in &modal.children {
                    child.visit(f);
                }
            }
            Self::Label(_) | Self::Button(_) | Self::Slider(_) | Self::Picker { .. } => {}
        }
    }

    /// Writes an indented plain-text outline of the tree, for demos and
    /// debugging.
    pub fn write_outline(&self, out: &mut String, depth: usize) {
        use core::fmt::Write;

        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            Self::Column(children) => {
                let _ = writeln!(out, "column");
                for child in children {
                    child.write_outline(out, depth + 1);
                }
            }
            Self::Row(children) => {
                let _ = writeln!(out, "row");
                for child in children {
                    child.write_outline(out, depth + 1);
                }
            }
            Self::Label(label) => {
                let _ = writeln!(out, "label {:?}", label.text);
            }
            Self::Button(button) => {
                let _ = writeln!(out, "button {:?}", button.label);
            }
            Self::Slider(config) => {
                let _ = writeln!(
                    out,
                    "slider value={} range={}..={}",
                    config.value, config.minimum_value, config.maximum_value
                );
            }
            Self::Picker { config, selected } => {
                let _ = writeln!(
                    out,
                    "picker selected={:?} items={}",
                    selected,
                    config.items.len()
                );
            }
            Self::Modal(modal) => {
                let _ = writeln!(out, "modal visible={}", modal.visible);
                for child in &modal.children {
                    child.write_outline(out, depth + 1);
                }
            }
        }
    }
}
