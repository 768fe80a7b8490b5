// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host trait a platform integration implements.

use alloc::string::String;
use core::fmt;

use crate::{ActionSheetConfig, NativeError, ShareConfig, ShareOutcome};

/// Opaque handle to a mounted native view, used to anchor popover-style
/// presentations.
///
/// Handles are minted by the host framework; this crate only carries them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewHandle(u64);

impl ViewHandle {
    /// Wraps a raw handle value.
    #[must_use]
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewHandle").field(&self.0).finish()
    }
}

/// What to capture when taking a screenshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CaptureTarget {
    /// The whole application window.
    #[default]
    Window,
}

/// The native runtime surface consumed by gallery samples.
///
/// Each method is a single-resolution native call: it returns exactly once,
/// with one success or one failure outcome, and exposes no cancellation. The
/// host is expected to block the calling flow until the user (or the
/// platform) resolves the presentation; samples never issue overlapping
/// calls within one flow.
///
/// Production integrations implement this on top of the real platform
/// runtime. [`ScriptedHost`](crate::ScriptedHost) is the reference
/// implementation for demos and tests.
pub trait NativeHost {
    /// Presents an action sheet and resolves with the selected option index,
    /// or `None` when the user cancels.
    fn present_action_sheet(
        &mut self,
        config: &ActionSheetConfig,
    ) -> Result<Option<usize>, NativeError>;

    /// Presents a share sheet and resolves with the share outcome.
    fn present_share_sheet(&mut self, config: &ShareConfig) -> Result<ShareOutcome, NativeError>;

    /// Captures a screenshot and resolves with a temporary file URI.
    fn capture_screenshot(&mut self, target: CaptureTarget) -> Result<String, NativeError>;
}
