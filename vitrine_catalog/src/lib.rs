// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Catalog: the standard example catalog.
//!
//! This crate assembles the gallery shipped with Vitrine: one
//! [`ExampleModule`] per exhibit (action sheet, modal, picker, slider,
//! bridge), each with its entry list, descriptions, and platform tags, plus
//! [`standard_catalog`] which registers them all into a frozen
//! [`GalleryRegistry`].
//!
//! Every entry's render factory builds a fresh sample in its initial state
//! and returns its descriptor; interactive flows are driven by the navigator
//! through the samples in `vitrine_exhibits`.
//!
//! ```rust
//! use vitrine_catalog::standard_catalog;
//! use vitrine_registry::Platform;
//!
//! let registry = standard_catalog().unwrap();
//! let modal = registry.module("Modal").unwrap();
//! assert!(modal.entries_for(Platform::Ios).count() > 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use peniko::Color;
use vitrine_element::Element;
use vitrine_exhibits::action_sheet::{ActionSheetSample, anchored_sheet, tinted_sheet};
use vitrine_exhibits::bridge::BridgeSample;
use vitrine_exhibits::modal::{ModalBuilderSample, ModalHooks, ModalSample};
use vitrine_exhibits::picker::PickerSample;
use vitrine_exhibits::share::{ShareSample, ShareScreenshotSample};
use vitrine_exhibits::slider::{SliderSample, SlidingCompleteSample};
use vitrine_native::{ModalConfig, PresentationStyle, SliderConfig, ViewHandle};
use vitrine_registry::{
    ExampleEntry, ExampleModule, GalleryRegistry, Platform, RegistryBuilder, RegistryError,
};

/// Anchor handle used by the anchored demonstration entries.
///
/// A real navigator resolves the anchor from the mounted control at press
/// time; the catalog pins a fixed handle so the entries stay zero-argument.
const DEMO_ANCHOR: ViewHandle = ViewHandle::new(1);

/// The action sheet module (iOS-only, like the native API it demonstrates).
#[must_use]
pub fn action_sheet_module() -> ExampleModule {
    ExampleModule::new("ActionSheet")
        .with_description("Interface to show the platform's action sheets")
        .with_platform(Platform::Ios)
        .with_entry(ExampleEntry::new("Show Standard Action Sheet", || {
            ActionSheetSample::standard().render()
        }))
        .with_entry(ExampleEntry::new(
            "Show Action Sheet with tinted buttons",
            || ActionSheetSample::new(tinted_sheet()).render(),
        ))
        .with_entry(ExampleEntry::new("Show Action Sheet with anchor", || {
            ActionSheetSample::new(anchored_sheet(DEMO_ANCHOR)).render()
        }))
        .with_entry(ExampleEntry::new("Show Share Action Sheet", || {
            ShareSample::new("https://code.facebook.com").render()
        }))
        .with_entry(ExampleEntry::new("Share Local Image", || {
            ShareSample::new("bunny.png").render()
        }))
        .with_entry(ExampleEntry::new("Share Screenshot", || {
            ShareScreenshotSample::new().render()
        }))
        .with_entry(ExampleEntry::new("Share from Anchor", || {
            ShareScreenshotSample::new()
                .with_anchor(DEMO_ANCHOR)
                .render()
        }))
}

/// The modal module.
#[must_use]
pub fn modal_module() -> ExampleModule {
    ExampleModule::new("Modal")
        .with_description("Component for presenting modal views")
        .with_entry(
            ExampleEntry::new("Basic Modal", || {
                ModalSample::basic()
                    .with_button_titles("Read More", "Proceed")
                    .render()
            })
            .with_description(
                "A simple modal triggered by a button press; visibility is \
                 controlled by a single flag",
            ),
        )
        .with_entry(
            ExampleEntry::new("Status Bar Behavior with Modal", || {
                ModalSample::new(ModalConfig::new().with_status_bar_translucent(true))
                    .with_button_titles("Open in Full Screen View", "Proceed")
                    .render()
            })
            .with_platform(Platform::Android)
            .with_description(
                "With a translucent status bar the underlying modal content \
                 is shown beneath it",
            ),
        )
        .with_entry(
            ExampleEntry::new("Binding Events to Dismiss Action", || {
                ModalSample::basic()
                    .with_hooks(ModalHooks::ON_DISMISS)
                    .with_button_titles("Read Terms and Conditions", "Proceed")
                    .render()
            })
            .with_platform(Platform::Ios)
            .with_description("Runs a function when the modal has been dismissed"),
        )
        .with_entry(
            ExampleEntry::new("Binding Events to Orientation Change", || {
                ModalSample::basic()
                    .with_hooks(ModalHooks::ON_ORIENTATION_CHANGE)
                    .with_button_titles("Open Modal", "Proceed")
                    .render()
            })
            .with_platform(Platform::Ios)
            .with_description("Shows an alert when the orientation changes while open"),
        )
        .with_entry(
            ExampleEntry::new("Actions on physical back button", || {
                ModalSample::basic()
                    .with_hooks(ModalHooks::ON_REQUEST_CLOSE)
                    .with_button_titles("Listen for Close Action", "Proceed")
                    .render()
            })
            .with_platform(Platform::Android)
            .with_description("Launches an alert when the back button requests a close"),
        )
        .with_entry(
            ExampleEntry::new("Modal OnShow Actions", || {
                ModalSample::basic()
                    .with_hooks(ModalHooks::ON_SHOW)
                    .with_button_titles("Open Modal", "Proceed")
                    .render()
            })
            .with_description("Triggers a function as soon as the modal is opened"),
        )
        .with_entry(
            ExampleEntry::new("Varying presentation style", || {
                ModalSample::new(
                    ModalConfig::new().with_presentation_style(PresentationStyle::FormSheet),
                )
                .with_button_titles("Open modal as formSheet", "Proceed")
                .render()
            })
            .with_platform(Platform::Ios)
            .with_description(
                "The presentation style controls how the modal appears on \
                 larger devices",
            ),
        )
        .with_entry(
            ExampleEntry::new("Modal Builder", || {
                ModalBuilderSample::new().preview().render()
            })
            .with_description("Quickly generate modals with custom props"),
        )
}

/// The picker module.
#[must_use]
pub fn picker_module() -> ExampleModule {
    ExampleModule::new("Picker")
        .with_description("Select a single option from a list of values")
        .with_entry(ExampleEntry::new("Basic Picker", || {
            PickerSample::basic().render()
        }))
        .with_entry(ExampleEntry::new("Disabled Picker", || {
            PickerSample::disabled().render()
        }))
        .with_entry(ExampleEntry::new("Dropdown Picker", || {
            PickerSample::dropdown().render()
        }))
        .with_entry(ExampleEntry::new("Picker with prompt message", || {
            PickerSample::prompted().render()
        }))
        .with_entry(ExampleEntry::new("Accessibility Label pickers", || {
            PickerSample::hours().render()
        }))
        .with_entry(ExampleEntry::new("Picker with no listener", || {
            Element::column([
                PickerSample::no_listener().render(),
                Element::label(
                    "Cannot change the value of this picker because it \
                     doesn't update selectedValue.",
                ),
            ])
        }))
        .with_entry(ExampleEntry::new("Colorful pickers", || {
            PickerSample::colors().render()
        }))
        .with_entry(ExampleEntry::new("AccessibilityLabel pickers", || {
            PickerSample::hours().render()
        }))
}

/// The slider module.
#[must_use]
pub fn slider_module() -> ExampleModule {
    ExampleModule::new("Slider")
        .with_description("Slider input for numeric values")
        .with_entry(ExampleEntry::new("Default settings", || {
            SliderSample::default_settings().render()
        }))
        .with_entry(ExampleEntry::new("Initial value: 0.5", || {
            SliderSample::new(SliderConfig::new().with_value(0.5)).render()
        }))
        .with_entry(ExampleEntry::new("minimumValue: -1, maximumValue: 2", || {
            SliderSample::new(SliderConfig::new().with_range(-1.0, 2.0)).render()
        }))
        .with_entry(ExampleEntry::new("step: 0.25", || {
            SliderSample::new(SliderConfig::new().with_step(0.25)).render()
        }))
        .with_entry(ExampleEntry::new("onSlidingComplete", || {
            SlidingCompleteSample::new(SliderConfig::new()).render()
        }))
        .with_entry(ExampleEntry::new("Custom min/max track tint color", || {
            SliderSample::new(SliderConfig {
                minimum_track_tint: Some(Color::from_rgb8(0, 0, 255)),
                maximum_track_tint: Some(Color::from_rgb8(255, 0, 0)),
                ..SliderConfig::new().with_value(0.5)
            })
            .render()
        }))
        .with_entry(ExampleEntry::new("Custom thumb tint color", || {
            SliderSample::new(SliderConfig {
                thumb_tint: Some(Color::from_rgb8(0, 0, 255)),
                ..SliderConfig::new()
            })
            .render()
        }))
        .with_entry(
            ExampleEntry::new("Custom thumb image", || {
                SliderSample::new(SliderConfig {
                    thumb_image: Some("uie_thumb_big.png".into()),
                    ..SliderConfig::new()
                })
                .render()
            })
            .with_platform(Platform::Ios),
        )
        .with_entry(
            ExampleEntry::new("Custom track image", || {
                SliderSample::new(SliderConfig {
                    track_image: Some("slider.png".into()),
                    ..SliderConfig::new()
                })
                .render()
            })
            .with_platform(Platform::Ios),
        )
        .with_entry(
            ExampleEntry::new("Custom min/max track image", || {
                SliderSample::new(SliderConfig {
                    minimum_track_image: Some("slider-left.png".into()),
                    maximum_track_image: Some("slider-right.png".into()),
                    ..SliderConfig::new()
                })
                .render()
            })
            .with_platform(Platform::Ios),
        )
}

/// The native bridge module.
#[must_use]
pub fn bridge_module() -> ExampleModule {
    ExampleModule::new("Bridge")
        .with_description("Usage of the sample native module")
        .with_entry(ExampleEntry::new("SampleBridgeModule", || {
            BridgeSample::new().render()
        }))
}

/// Builds the frozen registry of all standard modules.
///
/// Registration happens once at startup; an error here is a configuration
/// error and the host should fail to start.
pub fn standard_catalog() -> Result<GalleryRegistry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    builder.register(action_sheet_module())?;
    builder.register(modal_module())?;
    builder.register(picker_module())?;
    builder.register(slider_module())?;
    builder.register(bridge_module())?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn catalog_registers_every_module_once() {
        let registry = standard_catalog().unwrap();
        assert_eq!(registry.len(), 5);
        let titles: Vec<_> = registry.iter().map(ExampleModule::title).collect();
        assert_eq!(titles, ["ActionSheet", "Modal", "Picker", "Slider", "Bridge"]);
    }

    #[test]
    fn action_sheet_module_is_ios_only() {
        let registry = standard_catalog().unwrap();
        let ios: Vec<_> = registry
            .modules_for(Platform::Ios)
            .map(ExampleModule::title)
            .collect();
        assert!(ios.contains(&"ActionSheet"));

        let android: Vec<_> = registry
            .modules_for(Platform::Android)
            .map(ExampleModule::title)
            .collect();
        assert!(!android.contains(&"ActionSheet"));
    }

    #[test]
    fn modal_entries_split_by_platform() {
        let registry = standard_catalog().unwrap();
        let modal = registry.module("Modal").unwrap();

        let ios: Vec<_> = modal
            .entries_for(Platform::Ios)
            .map(ExampleEntry::title)
            .collect();
        assert!(ios.contains(&"Binding Events to Dismiss Action"));
        assert!(!ios.contains(&"Status Bar Behavior with Modal"));

        let android: Vec<_> = modal
            .entries_for(Platform::Android)
            .map(ExampleEntry::title)
            .collect();
        assert!(android.contains(&"Status Bar Behavior with Modal"));
        assert!(!android.contains(&"Varying presentation style"));
    }

    #[test]
    fn picker_module_lists_every_variant() {
        let registry = standard_catalog().unwrap();
        let picker = registry.module("Picker").unwrap();
        let titles: Vec<_> = picker.entries().iter().map(ExampleEntry::title).collect();
        assert_eq!(
            titles,
            [
                "Basic Picker",
                "Disabled Picker",
                "Dropdown Picker",
                "Picker with prompt message",
                "Accessibility Label pickers",
                "Picker with no listener",
                "Colorful pickers",
                "AccessibilityLabel pickers",
            ]
        );

        let unlistened = picker.entries()[5].render();
        assert!(unlistened.contains_label(
            "Cannot change the value of this picker because it doesn't update selectedValue."
        ));
    }

    #[test]
    fn slider_image_entries_are_ios_only() {
        let registry = standard_catalog().unwrap();
        let slider = registry.module("Slider").unwrap();
        assert_eq!(slider.entries().len(), 10);
        assert_eq!(slider.entries_for(Platform::Ios).count(), 10);
        assert_eq!(slider.entries_for(Platform::Android).count(), 7);
    }

    #[test]
    fn every_entry_renders_a_descriptor() {
        let registry = standard_catalog().unwrap();
        for module in registry.iter() {
            for entry in module.entries() {
                // Descriptors are cheap plain data; rendering twice yields
                // the same tree because factories are pure.
                assert_eq!(entry.render(), entry.render(), "{}", entry.title());
            }
        }
    }

    #[test]
    fn slider_default_readout_is_three_decimals() {
        let registry = standard_catalog().unwrap();
        let slider = registry.module("Slider").unwrap();
        let tree = slider.entries()[0].render();
        assert!(tree.contains_label("0.000"));
    }
}
