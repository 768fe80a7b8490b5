// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native view configurations: slider, picker, and modal.
//!
//! These are the plain-data contracts for the platform's native view
//! components. Every recognized option is an explicit field with a
//! documented default; unset options fall back to those defaults. Change
//! events from the live native views arrive as named transitions on the
//! sample state holders in `vitrine_exhibits`, not as callbacks stored here.

use alloc::string::String;
use alloc::vec::Vec;
use peniko::Color;

/// Configuration for the native continuous-value slider view.
///
/// Defaults mirror the native component: range `0.0..=1.0`, initial value
/// `0.0`, continuous movement (`step == 0.0`), platform-default colors, and
/// no custom images.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Initial value. Default `0.0`.
    pub value: f64,
    /// Lower bound of the range. Default `0.0`.
    pub minimum_value: f64,
    /// Upper bound of the range. Default `1.0`.
    pub maximum_value: f64,
    /// Step granularity; `0.0` means continuous. Default `0.0`.
    pub step: f64,
    /// Tint of the track below the thumb. `None` uses the platform default.
    pub minimum_track_tint: Option<Color>,
    /// Tint of the track above the thumb. `None` uses the platform default.
    pub maximum_track_tint: Option<Color>,
    /// Tint of the thumb itself. `None` uses the platform default.
    pub thumb_tint: Option<Color>,
    /// Custom thumb image asset name.
    pub thumb_image: Option<String>,
    /// Custom image for the whole track.
    pub track_image: Option<String>,
    /// Custom image for the track below the thumb.
    pub minimum_track_image: Option<String>,
    /// Custom image for the track above the thumb.
    pub maximum_track_image: Option<String>,
    /// Whether the slider accepts input. Default `true`.
    pub enabled: bool,
    /// Accessibility label announced by screen readers.
    pub accessibility_label: Option<String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            minimum_track_tint: None,
            maximum_track_tint: None,
            thumb_tint: None,
            thumb_image: None,
            track_image: None,
            minimum_track_image: None,
            maximum_track_image: None,
            enabled: true,
            accessibility_label: None,
        }
    }
}

impl SliderConfig {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Sets the value range.
    #[must_use]
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        self
    }

    /// Sets the step granularity.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }
}

/// One selectable item in a picker.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerItem {
    /// The label shown to the user.
    pub label: String,
    /// The key reported on selection.
    pub key: String,
    /// Optional label color. `None` uses the platform default.
    pub color: Option<Color>,
}

impl PickerItem {
    /// Creates an item with a label and selection key.
    #[must_use]
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            color: None,
        }
    }

    /// Colors the item label.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Presentation mode of the native picker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PickerMode {
    /// A modal dialog listing the items. The default.
    #[default]
    Dialog,
    /// A dropdown anchored to the picker view.
    Dropdown,
}

/// Configuration for the native single-choice picker view.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    /// The selectable items, in presentation order.
    pub items: Vec<PickerItem>,
    /// Whether the picker accepts input. Default `true`.
    pub enabled: bool,
    /// Presentation mode. Default [`PickerMode::Dialog`].
    pub mode: PickerMode,
    /// Dialog prompt shown above the items (dialog mode only).
    pub prompt: Option<String>,
    /// Accessibility label announced by screen readers.
    pub accessibility_label: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::new(core::iter::empty())
    }
}

impl PickerConfig {
    /// Creates an enabled dialog-mode picker with the given items.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = PickerItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            enabled: true,
            mode: PickerMode::Dialog,
            prompt: None,
            accessibility_label: None,
        }
    }

    /// Disables input.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Sets the presentation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PickerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the dialog prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Sets the accessibility label.
    #[must_use]
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    /// Returns the label for a selection key, if the key names an item.
    #[must_use]
    pub fn label_for(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.label.as_str())
    }
}

/// How a modal appears, mostly relevant on larger devices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PresentationStyle {
    /// Covers the whole screen. The default.
    #[default]
    FullScreen,
    /// A sheet partially covering the underlying content.
    PageSheet,
    /// A centered form sheet.
    FormSheet,
    /// Full screen over a transparent backdrop.
    OverFullScreen,
}

/// Transition used when a modal appears and disappears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnimationType {
    /// Appears without animation. The default.
    #[default]
    None,
    /// Slides in from the bottom.
    Slide,
    /// Fades into view.
    Fade,
}

/// Configuration for the native modal presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ModalConfig {
    /// Presentation style. Default [`PresentationStyle::FullScreen`].
    pub presentation_style: PresentationStyle,
    /// Appearance transition. Default [`AnimationType::None`].
    pub animation: AnimationType,
    /// Render the status bar as translucent with modal content underneath
    /// (Android). Default `false`.
    pub status_bar_translucent: bool,
}

impl ModalConfig {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the presentation style.
    #[must_use]
    pub fn with_presentation_style(mut self, style: PresentationStyle) -> Self {
        self.presentation_style = style;
        self
    }

    /// Sets the appearance transition.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationType) -> Self {
        self.animation = animation;
        self
    }

    /// Renders the status bar as translucent.
    #[must_use]
    pub fn with_status_bar_translucent(mut self, translucent: bool) -> Self {
        self.status_bar_translucent = translucent;
        self
    }
}
