// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker sample: single-choice selection state.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;
use vitrine_element::Element;
use vitrine_native::{PickerConfig, PickerItem, PickerMode};

/// The two-item hello/world picker shared by most picker entries.
#[must_use]
pub fn hello_world_items() -> Vec<PickerItem> {
    vec![
        PickerItem::new("hello", "key0"),
        PickerItem::new("world", "key1"),
    ]
}

/// Color-named items with per-item label colors.
#[must_use]
pub fn color_items() -> Vec<PickerItem> {
    vec![
        PickerItem::new("red", "red").with_color(Color::from_rgb8(255, 0, 0)),
        PickerItem::new("green", "green").with_color(Color::from_rgb8(0, 128, 0)),
        PickerItem::new("blue", "blue").with_color(Color::from_rgb8(0, 0, 255)),
    ]
}

/// Hour-count items for the accessibility-label picker.
#[must_use]
pub fn hours_items() -> Vec<PickerItem> {
    vec![
        PickerItem::new("1", "1"),
        PickerItem::new("2", "2"),
        PickerItem::new("3", "3"),
    ]
}

/// Holds the selected key of a single-choice picker.
///
/// Selection updates synchronously on each native change event; there is no
/// debouncing, validation, or persistence. A disabled picker's native view
/// emits no change events, and the sample additionally ignores any that
/// arrive.
#[derive(Debug)]
pub struct PickerSample {
    config: PickerConfig,
    value: String,
    listening: bool,
    accessibility_suffix: Option<String>,
}

impl PickerSample {
    /// Creates a sample with the given configuration and initially selected
    /// key.
    #[must_use]
    pub fn new(config: PickerConfig, value: impl Into<String>) -> Self {
        Self {
            config,
            value: value.into(),
            listening: true,
            accessibility_suffix: None,
        }
    }

    /// The basic hello/world picker with `"key1"` selected.
    #[must_use]
    pub fn basic() -> Self {
        Self::new(PickerConfig::new(hello_world_items()), "key1")
    }

    /// The hello/world picker in dropdown mode.
    #[must_use]
    pub fn dropdown() -> Self {
        Self::new(
            PickerConfig::new(hello_world_items()).with_mode(PickerMode::Dropdown),
            "key1",
        )
    }

    /// The hello/world picker with a dialog prompt.
    #[must_use]
    pub fn prompted() -> Self {
        Self::new(
            PickerConfig::new(hello_world_items()).with_prompt("Pick one, just one"),
            "key1",
        )
    }

    /// The hello/world picker with input disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(PickerConfig::new(hello_world_items()).disabled(), "key1")
    }

    /// The dropdown picker of colored items with `"red"` selected.
    #[must_use]
    pub fn colors() -> Self {
        Self::new(
            PickerConfig::new(color_items()).with_mode(PickerMode::Dropdown),
            "red",
        )
    }

    /// The hour-count picker whose accessibility label follows the selected
    /// key, announced as `"{key}Hours"`.
    #[must_use]
    pub fn hours() -> Self {
        let mut sample = Self::new(
            PickerConfig::new(hours_items()).with_accessibility_label("3Hours"),
            "3",
        );
        sample.accessibility_suffix = Some("Hours".to_string());
        sample
    }

    /// A picker with no change listener: the selection is static and change
    /// events are dropped, even though the native view is enabled.
    #[must_use]
    pub fn no_listener() -> Self {
        let mut sample = Self::new(PickerConfig::new(hello_world_items()), "key0");
        sample.listening = false;
        sample
    }

    /// The native picker reported a new selection.
    pub fn on_value_change(&mut self, key: &str) {
        if self.config.enabled && self.listening {
            self.value = key.to_string();
            if let Some(suffix) = &self.accessibility_suffix {
                self.config.accessibility_label = Some(format!("{key}{suffix}"));
            }
        }
    }

    /// Returns the selected key.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the label of the selected item, if the key names one.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.config.label_for(&self.value)
    }

    /// Returns the picker configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Produces the sample's subtree descriptor.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::Picker {
            config: self.config.clone(),
            selected: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_updates_synchronously() {
        let mut sample = PickerSample::basic();
        assert_eq!(sample.value(), "key1");
        assert_eq!(sample.selected_label(), Some("world"));

        sample.on_value_change("key0");
        assert_eq!(sample.value(), "key0");
        assert_eq!(sample.selected_label(), Some("hello"));
    }

    #[test]
    fn disabled_picker_ignores_changes() {
        let mut sample = PickerSample::disabled();
        sample.on_value_change("key0");
        assert_eq!(sample.value(), "key1");
    }

    #[test]
    fn unlistened_picker_keeps_its_static_selection() {
        let mut sample = PickerSample::no_listener();
        assert!(sample.config().enabled);

        sample.on_value_change("key1");
        assert_eq!(sample.value(), "key0");
    }

    #[test]
    fn accessibility_label_follows_the_selection() {
        let mut sample = PickerSample::hours();
        assert_eq!(sample.value(), "3");
        assert_eq!(sample.config().accessibility_label.as_deref(), Some("3Hours"));

        sample.on_value_change("1");
        assert_eq!(sample.config().accessibility_label.as_deref(), Some("1Hours"));
    }

    #[test]
    fn render_carries_the_selection() {
        let sample = PickerSample::colors();
        match sample.render() {
            Element::Picker { config, selected } => {
                assert_eq!(selected, "red");
                assert_eq!(config.items.len(), 3);
                assert_eq!(config.mode, PickerMode::Dropdown);
            }
            other => panic!("expected a picker, got {other:?}"),
        }
    }

    #[test]
    fn prompt_variant_carries_the_prompt() {
        let sample = PickerSample::prompted();
        match sample.render() {
            Element::Picker { config, .. } => {
                assert_eq!(config.prompt.as_deref(), Some("Pick one, just one"));
            }
            other => panic!("expected a picker, got {other:?}"),
        }
    }
}
