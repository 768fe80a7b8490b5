// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blocking user alerts.

use alloc::string::String;

use crate::NativeError;

/// A blocking alert dialog presented to the user.
///
/// Alerts are the only failure surface in the gallery: a failed native call
/// produces one alert carrying the error message, the user dismisses it, and
/// local state is otherwise left unchanged. Samples hold their most recent
/// alert as plain state; presenting it is the navigator's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    /// Creates an alert with a title and message.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates the standard error alert for a failed native call.
    ///
    /// The message is the native error's message, verbatim.
    #[must_use]
    pub fn error(err: &NativeError) -> Self {
        Self::new("Error", err.message())
    }

    /// Returns the alert title.
    #[must_use]
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the alert message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
