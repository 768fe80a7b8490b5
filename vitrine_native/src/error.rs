// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native call failure.

use alloc::string::String;
use core::fmt;

/// Error delivered when a native-module call fails.
///
/// A native call resolves exactly once; failure carries a human-readable
/// message supplied by the native side. The message is surfaced verbatim to
/// the user through a blocking [`Alert`](crate::Alert) and the call is never
/// retried automatically.
#[derive(Clone, PartialEq, Eq)]
pub struct NativeError {
    message: String,
}

impl NativeError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message supplied by the native side.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeError").field(&self.message).finish()
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native call failed: {}", self.message)
    }
}

impl core::error::Error for NativeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn message_round_trips() {
        let err = NativeError::new("disk full");
        assert_eq!(err.message(), "disk full");
        assert_eq!(format!("{err}"), "native call failed: disk full");
    }
}
