// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action sheet samples: present a finite option list, display the choice.

use alloc::format;
use alloc::string::{String, ToString};

use peniko::Color;
use vitrine_element::Element;
use vitrine_native::{ActionSheetConfig, Alert, NativeHost, ViewHandle};

/// The five standard options shared by every action sheet sample.
pub const STANDARD_OPTIONS: [&str; 5] = ["Option 0", "Option 1", "Option 2", "Delete", "Cancel"];

/// Index of the destructive option in [`STANDARD_OPTIONS`].
pub const DESTRUCTIVE_INDEX: usize = 3;

/// Index of the cancel option in [`STANDARD_OPTIONS`].
pub const CANCEL_INDEX: usize = 4;

/// The standard five-option sheet configuration.
#[must_use]
pub fn standard_sheet() -> ActionSheetConfig {
    ActionSheetConfig::new(STANDARD_OPTIONS)
        .with_destructive_index(DESTRUCTIVE_INDEX)
        .with_cancel_index(CANCEL_INDEX)
}

/// The standard sheet with green-tinted option labels.
#[must_use]
pub fn tinted_sheet() -> ActionSheetConfig {
    standard_sheet().with_tint(Color::from_rgb8(0, 128, 0))
}

/// The standard sheet anchored to a view for popover presentation.
#[must_use]
pub fn anchored_sheet(anchor: ViewHandle) -> ActionSheetConfig {
    standard_sheet().with_anchor(anchor)
}

/// Presents an action sheet on demand and displays the clicked option.
///
/// The displayed state starts as `"none"`. Selecting option `i` sets it to
/// the label at index `i`; cancelling leaves it unchanged.
#[derive(Debug)]
pub struct ActionSheetSample {
    config: ActionSheetConfig,
    clicked: String,
    alert: Option<Alert>,
}

impl ActionSheetSample {
    /// Creates a sample presenting the given sheet.
    #[must_use]
    pub fn new(config: ActionSheetConfig) -> Self {
        Self {
            config,
            clicked: "none".to_string(),
            alert: None,
        }
    }

    /// Creates the sample with the standard five-option sheet.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(standard_sheet())
    }

    /// The user pressed the show-sheet control.
    ///
    /// Presents the sheet through `host` and records the selected option
    /// label. Cancellation leaves the clicked state unchanged; a native
    /// failure raises an alert and changes nothing else.
    pub fn on_press(&mut self, host: &mut dyn NativeHost) {
        match host.present_action_sheet(&self.config) {
            Ok(Some(index)) => {
                if let Some(label) = self.config.option(index) {
                    self.clicked = label.to_string();
                }
            }
            Ok(None) => {}
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user dismissed the current alert.
    pub fn on_dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Returns the label of the last clicked option, or `"none"`.
    #[must_use]
    #[inline]
    pub fn clicked(&self) -> &str {
        &self.clicked
    }

    /// Returns the currently displayed alert, if any.
    #[must_use]
    #[inline]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Produces the sample's subtree descriptor.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::column([
            Element::button("Click to show the ActionSheet"),
            Element::label(format!("Clicked button: {}", self.clicked)),
        ])
    }
}
