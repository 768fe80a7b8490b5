// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action sheet and share sheet configurations.

use alloc::string::String;
use peniko::Color;
use smallvec::SmallVec;

use crate::ViewHandle;

/// Configuration for presenting a native action sheet.
///
/// The sheet shows a finite list of labeled options. At most one option may
/// be marked destructive and at most one as the cancel option; both indices
/// refer into [`options`](Self::options). Presentation resolves once, with
/// the selected index, or with `None` when the user cancels.
///
/// # Example
///
/// ```rust
/// use vitrine_native::ActionSheetConfig;
///
/// let config = ActionSheetConfig::new(["Keep", "Delete", "Cancel"])
///     .with_destructive_index(1)
///     .with_cancel_index(2);
/// assert_eq!(config.options().len(), 3);
/// assert_eq!(config.destructive_index(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ActionSheetConfig {
    options: SmallVec<[String; 8]>,
    destructive_index: Option<usize>,
    cancel_index: Option<usize>,
    tint: Option<Color>,
    anchor: Option<ViewHandle>,
}

impl ActionSheetConfig {
    /// Creates a sheet configuration with the given option labels.
    #[must_use]
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            destructive_index: None,
            cancel_index: None,
            tint: None,
            anchor: None,
        }
    }

    /// Marks the option at `index` as destructive.
    #[must_use]
    pub fn with_destructive_index(mut self, index: usize) -> Self {
        self.destructive_index = Some(index);
        self
    }

    /// Marks the option at `index` as the cancel option.
    #[must_use]
    pub fn with_cancel_index(mut self, index: usize) -> Self {
        self.cancel_index = Some(index);
        self
    }

    /// Tints the option labels.
    #[must_use]
    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Anchors the sheet to a view (popover presentation on large screens).
    #[must_use]
    pub fn with_anchor(mut self, anchor: ViewHandle) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Returns the option labels, in presentation order.
    #[must_use]
    #[inline]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the label of the option at `index`, if any.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Returns the destructive option index.
    #[must_use]
    #[inline]
    pub fn destructive_index(&self) -> Option<usize> {
        self.destructive_index
    }

    /// Returns the cancel option index.
    #[must_use]
    #[inline]
    pub fn cancel_index(&self) -> Option<usize> {
        self.cancel_index
    }

    /// Returns the label tint, if any.
    #[must_use]
    #[inline]
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Returns the anchor view, if any.
    #[must_use]
    #[inline]
    pub fn anchor(&self) -> Option<ViewHandle> {
        self.anchor
    }
}

/// Configuration for presenting a native share sheet.
///
/// Only the URL is required. The share resolves once with a
/// [`ShareOutcome`], or fails with a
/// [`NativeError`](crate::NativeError) message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareConfig {
    url: String,
    message: Option<String>,
    subject: Option<String>,
    excluded_activity_types: SmallVec<[String; 2]>,
    anchor: Option<ViewHandle>,
}

impl ShareConfig {
    /// Creates a share configuration for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: None,
            subject: None,
            excluded_activity_types: SmallVec::new(),
            anchor: None,
        }
    }

    /// Attaches a message to go with the shared URL.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the subject used by mail-style share targets.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Excludes a platform activity type from the sheet.
    #[must_use]
    pub fn with_excluded_activity_type(mut self, activity: impl Into<String>) -> Self {
        self.excluded_activity_types.push(activity.into());
        self
    }

    /// Anchors the sheet to a view.
    #[must_use]
    pub fn with_anchor(mut self, anchor: ViewHandle) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Returns the URL being shared.
    #[must_use]
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the attached message, if any.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the mail subject, if any.
    #[must_use]
    #[inline]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns the excluded activity types.
    #[must_use]
    #[inline]
    pub fn excluded_activity_types(&self) -> &[String] {
        &self.excluded_activity_types
    }

    /// Returns the anchor view, if any.
    #[must_use]
    #[inline]
    pub fn anchor(&self) -> Option<ViewHandle> {
        self.anchor
    }
}

/// Resolution of a share sheet presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareOutcome {
    completed: bool,
    method: Option<String>,
}

impl ShareOutcome {
    /// The user completed the share through the given activity method.
    #[must_use]
    pub fn completed(method: impl Into<String>) -> Self {
        Self {
            completed: true,
            method: Some(method.into()),
        }
    }

    /// The user dismissed the sheet without sharing.
    #[must_use]
    pub fn dismissed() -> Self {
        Self {
            completed: false,
            method: None,
        }
    }

    /// Returns `true` if the share was completed.
    #[must_use]
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the activity method used, if the share completed.
    #[must_use]
    #[inline]
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn sheet_indices_refer_into_options() {
        let config = ActionSheetConfig::new(["Option 0", "Delete", "Cancel"])
            .with_destructive_index(1)
            .with_cancel_index(2);

        assert_eq!(config.option(1), Some("Delete"));
        assert_eq!(config.option(config.cancel_index().unwrap()), Some("Cancel"));
        assert_eq!(config.option(3), None);
    }

    #[test]
    fn share_config_defaults_are_empty() {
        let config = ShareConfig::new("https://example.com");
        assert_eq!(config.url(), "https://example.com");
        assert_eq!(config.message(), None);
        assert_eq!(config.subject(), None);
        assert!(config.excluded_activity_types().is_empty());
        assert_eq!(config.anchor(), None);
    }

    #[test]
    fn share_config_accumulates_exclusions() {
        let config = ShareConfig::new("bunny.png")
            .with_excluded_activity_type("com.apple.UIKit.activity.PostToTwitter")
            .with_excluded_activity_type("com.apple.UIKit.activity.Print");
        assert_eq!(
            config.excluded_activity_types(),
            vec![
                "com.apple.UIKit.activity.PostToTwitter",
                "com.apple.UIKit.activity.Print"
            ]
            .as_slice()
        );
    }

    #[test]
    fn outcome_constructors() {
        let done = ShareOutcome::completed("com.apple.UIKit.activity.Mail");
        assert!(done.is_completed());
        assert_eq!(done.method(), Some("com.apple.UIKit.activity.Mail"));

        let dismissed = ShareOutcome::dismissed();
        assert!(!dismissed.is_completed());
        assert_eq!(dismissed.method(), None);
    }
}
