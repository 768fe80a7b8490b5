// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal sample: a local visibility flag plus demonstration lifecycle hooks.

use alloc::string::String;

use bitflags::bitflags;
use vitrine_element::Element;
use vitrine_native::{Alert, AnimationType, ModalConfig, PresentationStyle};

bitflags! {
    /// Which modal lifecycle hooks the sample demonstrates.
    ///
    /// Firing an enabled hook raises the matching demonstration alert;
    /// disabled hooks are inert.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ModalHooks: u8 {
        /// Alert when the modal is shown.
        const ON_SHOW = 1 << 0;
        /// Alert when the modal is dismissed (iOS).
        const ON_DISMISS = 1 << 1;
        /// Alert when the device orientation changes while shown (iOS).
        const ON_ORIENTATION_CHANGE = 1 << 2;
        /// Alert when the physical back button requests a close (Android).
        const ON_REQUEST_CLOSE = 1 << 3;
    }
}

/// Presents a modal with a single visibility flag.
///
/// Visibility is one boolean: opened by [`on_press_open`](Self::on_press_open),
/// closed by [`on_press_close`](Self::on_press_close). Repeated toggling
/// always reflects the last action, and one flag means two conflicting
/// visibility states cannot coexist.
#[derive(Debug)]
pub struct ModalSample {
    config: ModalConfig,
    hooks: ModalHooks,
    open_title: String,
    close_title: String,
    visible: bool,
    alert: Option<Alert>,
}

impl ModalSample {
    /// Creates a sample with the given configuration and no hooks.
    #[must_use]
    pub fn new(config: ModalConfig) -> Self {
        Self {
            config,
            hooks: ModalHooks::empty(),
            open_title: "Read More".into(),
            close_title: "Proceed".into(),
            visible: false,
            alert: None,
        }
    }

    /// Creates the basic modal sample with default configuration.
    #[must_use]
    pub fn basic() -> Self {
        Self::new(ModalConfig::new())
    }

    /// Enables the given lifecycle hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: ModalHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the open/close button titles.
    #[must_use]
    pub fn with_button_titles(
        mut self,
        open_title: impl Into<String>,
        close_title: impl Into<String>,
    ) -> Self {
        self.open_title = open_title.into();
        self.close_title = close_title.into();
        self
    }

    /// The user pressed the open control.
    ///
    /// Shows the modal; with [`ModalHooks::ON_SHOW`] enabled, raises the
    /// welcome alert as the show event fires.
    pub fn on_press_open(&mut self) {
        self.visible = true;
        if self.hooks.contains(ModalHooks::ON_SHOW) {
            self.alert = Some(Alert::new(
                "Welcome User",
                "You can not move back from here. Proceed only when you're sure of it",
            ));
        }
    }

    /// The user pressed the close control.
    ///
    /// Hides the modal; with [`ModalHooks::ON_DISMISS`] enabled, raises the
    /// dismissal alert as the dismiss event fires.
    pub fn on_press_close(&mut self) {
        self.visible = false;
        if self.hooks.contains(ModalHooks::ON_DISMISS) {
            self.alert = Some(Alert::new("Welcome on board", "Thanks for Accepting"));
        }
    }

    /// The device orientation changed while the modal is shown.
    ///
    /// Inert unless the modal is visible and
    /// [`ModalHooks::ON_ORIENTATION_CHANGE`] is enabled.
    pub fn on_orientation_change(&mut self) {
        if self.visible && self.hooks.contains(ModalHooks::ON_ORIENTATION_CHANGE) {
            self.alert = Some(Alert::new(
                "Orientation Changed",
                "See content in a different prospective",
            ));
        }
    }

    /// The platform requested a close (physical back button).
    ///
    /// Demonstration only: raises the confirmation alert with
    /// [`ModalHooks::ON_REQUEST_CLOSE`] enabled and leaves visibility
    /// untouched.
    pub fn on_request_close(&mut self) {
        if self.visible && self.hooks.contains(ModalHooks::ON_REQUEST_CLOSE) {
            self.alert = Some(Alert::new(
                "Are you sure",
                "going back from this step is not recommended",
            ));
        }
    }

    /// The user dismissed the current alert.
    pub fn on_dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Returns whether the modal is currently shown.
    #[must_use]
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the currently displayed alert, if any.
    #[must_use]
    #[inline]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Returns the native modal configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Produces the sample's subtree descriptor.
    #[must_use]
    pub fn render(&self) -> Element {
        Element::column([
            Element::button(self.open_title.clone()),
            Element::modal(
                self.config.clone(),
                self.visible,
                [
                    Element::label("This modal was presented"),
                    Element::button(self.close_title.clone()),
                ],
            ),
        ])
    }
}

/// Interactively assembles a [`ModalConfig`], previewing the result.
///
/// This mirrors the gallery's builder entry: each recognized prop has a
/// named setter, and the preview modal always reflects the configuration
/// built so far.
#[derive(Debug, Default)]
pub struct ModalBuilderSample {
    config: ModalConfig,
}

impl ModalBuilderSample {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The user picked a presentation style.
    pub fn on_pick_presentation_style(&mut self, style: PresentationStyle) {
        self.config.presentation_style = style;
    }

    /// The user picked an animation type.
    pub fn on_pick_animation(&mut self, animation: AnimationType) {
        self.config.animation = animation;
    }

    /// The user toggled status-bar translucency.
    pub fn on_toggle_status_bar_translucent(&mut self) {
        self.config.status_bar_translucent = !self.config.status_bar_translucent;
    }

    /// Returns the configuration built so far.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Produces a preview sample using the built configuration.
    #[must_use]
    pub fn preview(&self) -> ModalSample {
        ModalSample::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_reflects_the_last_action() {
        let mut sample = ModalSample::basic();
        assert!(!sample.is_visible());

        sample.on_press_open();
        assert!(sample.is_visible());
        sample.on_press_close();
        assert!(!sample.is_visible());
        sample.on_press_open();
        assert!(sample.is_visible());
    }

    #[test]
    fn show_hook_raises_the_welcome_alert() {
        let mut sample = ModalSample::basic().with_hooks(ModalHooks::ON_SHOW);
        sample.on_press_open();
        assert_eq!(sample.alert().unwrap().title(), "Welcome User");

        sample.on_dismiss_alert();
        assert!(sample.alert().is_none());
    }

    #[test]
    fn dismiss_hook_fires_on_close_only() {
        let mut sample = ModalSample::basic().with_hooks(ModalHooks::ON_DISMISS);
        sample.on_press_open();
        assert!(sample.alert().is_none());

        sample.on_press_close();
        assert_eq!(sample.alert().unwrap().title(), "Welcome on board");
    }

    #[test]
    fn disabled_hooks_are_inert() {
        let mut sample = ModalSample::basic();
        sample.on_press_open();
        sample.on_orientation_change();
        sample.on_request_close();
        sample.on_press_close();
        assert!(sample.alert().is_none());
    }

    #[test]
    fn orientation_hook_requires_a_visible_modal() {
        let mut sample = ModalSample::basic().with_hooks(ModalHooks::ON_ORIENTATION_CHANGE);
        sample.on_orientation_change();
        assert!(sample.alert().is_none());

        sample.on_press_open();
        sample.on_orientation_change();
        assert_eq!(sample.alert().unwrap().title(), "Orientation Changed");
    }

    #[test]
    fn request_close_leaves_visibility_untouched() {
        let mut sample = ModalSample::basic().with_hooks(ModalHooks::ON_REQUEST_CLOSE);
        sample.on_press_open();
        sample.on_request_close();
        assert!(sample.is_visible());
        assert_eq!(sample.alert().unwrap().title(), "Are you sure");
    }

    #[test]
    fn render_tracks_visibility() {
        let mut sample = ModalSample::basic();
        let hidden = sample.render();
        sample.on_press_open();
        let shown = sample.render();

        let visible_of = |tree: &Element| {
            let mut visible = None;
            tree.visit(&mut |element| {
                if let Element::Modal(modal) = element {
                    visible = Some(modal.visible);
                }
            });
            visible
        };
        assert_eq!(visible_of(&hidden), Some(false));
        assert_eq!(visible_of(&shown), Some(true));
    }

    #[test]
    fn builder_assembles_a_config() {
        let mut builder = ModalBuilderSample::new();
        builder.on_pick_presentation_style(PresentationStyle::FormSheet);
        builder.on_pick_animation(AnimationType::Fade);
        builder.on_toggle_status_bar_translucent();

        let config = builder.config();
        assert_eq!(config.presentation_style, PresentationStyle::FormSheet);
        assert_eq!(config.animation, AnimationType::Fade);
        assert!(config.status_bar_translucent);

        let preview = builder.preview();
        assert_eq!(preview.config(), builder.config());
        assert!(!preview.is_visible());
    }
}
