// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share sheet samples, including the capture-then-share screenshot chain.

use alloc::format;
use alloc::string::String;

use vitrine_element::Element;
use vitrine_native::{Alert, CaptureTarget, NativeHost, ShareConfig, ShareOutcome, ViewHandle};

/// The activity type every share sample excludes.
pub const EXCLUDED_ACTIVITY: &str = "com.apple.UIKit.activity.PostToTwitter";

fn outcome_text(outcome: &ShareOutcome) -> String {
    match outcome.method() {
        Some(method) if outcome.is_completed() => format!("Shared via {method}"),
        _ => "You didn't share".into(),
    }
}

/// Shares a fixed URL through the native share sheet.
///
/// The status line reports `"Shared via {method}"` on completion and
/// `"You didn't share"` on dismissal. A native failure raises an alert with
/// the error message and leaves the status unchanged.
#[derive(Debug)]
pub struct ShareSample {
    config: ShareConfig,
    status: String,
    alert: Option<Alert>,
}

impl ShareSample {
    /// Creates a sample sharing the given URL, with the standard message,
    /// subject, and excluded activity type.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let config = ShareConfig::new(url)
            .with_message("message to go with the shared url")
            .with_subject("a subject to go in the email heading")
            .with_excluded_activity_type(EXCLUDED_ACTIVITY);
        Self {
            config,
            status: String::new(),
            alert: None,
        }
    }

    /// The user pressed the share control.
    pub fn on_press(&mut self, host: &mut dyn NativeHost) {
        match host.present_share_sheet(&self.config) {
            Ok(outcome) => self.status = outcome_text(&outcome),
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user dismissed the current alert.
    pub fn on_dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Returns the status line (empty before the first share).
    #[must_use]
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
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
            Element::button("Click to show the Share ActionSheet"),
            Element::label(self.status.clone()),
        ])
    }
}

/// Captures a screenshot, then shares the captured file.
///
/// The share call is issued strictly after the capture resolves
/// successfully. A capture failure raises an alert carrying the native
/// error message and short-circuits the flow: the share sheet is never
/// presented.
#[derive(Debug)]
pub struct ShareScreenshotSample {
    anchor: Option<ViewHandle>,
    status: String,
    alert: Option<Alert>,
}

impl ShareScreenshotSample {
    /// Creates the capture-then-share sample.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor: None,
            status: String::new(),
            alert: None,
        }
    }

    /// Anchors the share sheet to a view for popover presentation.
    #[must_use]
    pub fn with_anchor(mut self, anchor: ViewHandle) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// The user pressed the share control.
    ///
    /// Runs the two-step chain: capture, then share the returned file URI.
    pub fn on_press(&mut self, host: &mut dyn NativeHost) {
        let uri = match host.capture_screenshot(CaptureTarget::Window) {
            Ok(uri) => uri,
            Err(err) => {
                self.alert = Some(Alert::error(&err));
                return;
            }
        };

        let mut config = ShareConfig::new(uri).with_excluded_activity_type(EXCLUDED_ACTIVITY);
        if let Some(anchor) = self.anchor {
            config = config.with_anchor(anchor);
        }

        match host.present_share_sheet(&config) {
            Ok(outcome) => self.status = outcome_text(&outcome),
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user dismissed the current alert.
    pub fn on_dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Returns the status line (empty before the first share).
    #[must_use]
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
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
            Element::button("Click to show the Share ActionSheet"),
            Element::label(self.status.clone()),
        ])
    }
}

impl Default for ShareScreenshotSample {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_native::{IssuedCall, NativeError, ScriptedHost};

    #[test]
    fn completed_share_reports_the_method() {
        let mut host = ScriptedHost::new();
        host.push_share_reply(Ok(ShareOutcome::completed("com.apple.UIKit.activity.Mail")));

        let mut sample = ShareSample::new("https://code.facebook.com");
        sample.on_press(&mut host);
        assert_eq!(sample.status(), "Shared via com.apple.UIKit.activity.Mail");
    }

    #[test]
    fn dismissed_share_reports_nothing_shared() {
        let mut host = ScriptedHost::new();
        host.push_share_reply(Ok(ShareOutcome::dismissed()));

        let mut sample = ShareSample::new("bunny.png");
        sample.on_press(&mut host);
        assert_eq!(sample.status(), "You didn't share");
    }

    #[test]
    fn share_failure_raises_alert_and_keeps_status() {
        let mut host = ScriptedHost::new();
        host.push_share_reply(Err(NativeError::new("no share targets")));

        let mut sample = ShareSample::new("https://example.com");
        sample.on_press(&mut host);
        assert_eq!(sample.status(), "");
        assert_eq!(sample.alert().unwrap().message(), "no share targets");
    }

    #[test]
    fn screenshot_chain_shares_the_captured_uri() {
        let mut host = ScriptedHost::new();
        host.push_capture_reply(Ok("file:///tmp/shot.png".into()));
        host.push_share_reply(Ok(ShareOutcome::completed("com.apple.UIKit.activity.Mail")));

        let mut sample = ShareScreenshotSample::new();
        sample.on_press(&mut host);

        assert_eq!(sample.status(), "Shared via com.apple.UIKit.activity.Mail");
        let shared = host.issued_calls().iter().find_map(|call| match call {
            IssuedCall::ShareSheet(config) => Some(config.url()),
            _ => None,
        });
        assert_eq!(shared, Some("file:///tmp/shot.png"));
    }

    #[test]
    fn capture_failure_short_circuits_the_share() {
        let mut host = ScriptedHost::new();
        host.push_capture_reply(Err(NativeError::new("disk full")));

        let mut sample = ShareScreenshotSample::new();
        sample.on_press(&mut host);

        assert_eq!(sample.alert().unwrap().message(), "disk full");
        assert!(!host.issued_share_sheet());
        assert_eq!(sample.status(), "");
    }

    #[test]
    fn anchored_chain_passes_the_anchor_through() {
        let mut host = ScriptedHost::new();
        host.push_capture_reply(Ok("file:///tmp/shot.png".into()));
        host.push_share_reply(Ok(ShareOutcome::dismissed()));

        let mut sample = ShareScreenshotSample::new().with_anchor(ViewHandle::new(42));
        sample.on_press(&mut host);

        let anchor = host.issued_calls().iter().find_map(|call| match call {
            IssuedCall::ShareSheet(config) => config.anchor(),
            _ => None,
        });
        assert_eq!(anchor, Some(ViewHandle::new(42)));
    }
}
