// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted reference host for demos and tests.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{
    ActionSheetConfig, BridgeConstants, BridgeHost, CaptureTarget, NativeError, NativeHost,
    ShareConfig, ShareOutcome,
};

/// A record of one native call issued to a [`ScriptedHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum IssuedCall {
    /// An action sheet was presented.
    ActionSheet(ActionSheetConfig),
    /// A share sheet was presented.
    ShareSheet(ShareConfig),
    /// A screenshot was captured.
    Screenshot(CaptureTarget),
}

/// A [`NativeHost`] that replays queued replies and records every call.
///
/// Replies are consumed front to back, per call kind. A call with no queued
/// reply fails with a `NativeError` rather than panicking, so a missing
/// script line shows up as an alert in whatever flow is being exercised.
///
/// # Example
///
/// ```rust
/// use vitrine_native::{CaptureTarget, NativeError, NativeHost, ScriptedHost};
///
/// let mut host = ScriptedHost::new();
/// host.push_capture_reply(Err(NativeError::new("disk full")));
///
/// let result = host.capture_screenshot(CaptureTarget::Window);
/// assert_eq!(result.unwrap_err().message(), "disk full");
/// assert_eq!(host.issued_calls().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedHost {
    sheet_replies: VecDeque<Result<Option<usize>, NativeError>>,
    share_replies: VecDeque<Result<ShareOutcome, NativeError>>,
    capture_replies: VecDeque<Result<String, NativeError>>,
    issued: Vec<IssuedCall>,
}

impl ScriptedHost {
    /// Creates a host with no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a reply for the next action sheet presentation.
    pub fn push_sheet_reply(&mut self, reply: Result<Option<usize>, NativeError>) {
        self.sheet_replies.push_back(reply);
    }

    /// Queues a reply for the next share sheet presentation.
    pub fn push_share_reply(&mut self, reply: Result<ShareOutcome, NativeError>) {
        self.share_replies.push_back(reply);
    }

    /// Queues a reply for the next screenshot capture.
    pub fn push_capture_reply(&mut self, reply: Result<String, NativeError>) {
        self.capture_replies.push_back(reply);
    }

    /// Returns every call issued so far, in order.
    #[must_use]
    pub fn issued_calls(&self) -> &[IssuedCall] {
        &self.issued
    }

    /// Returns `true` if a call of the given shape was issued.
    #[must_use]
    pub fn issued_share_sheet(&self) -> bool {
        self.issued
            .iter()
            .any(|call| matches!(call, IssuedCall::ShareSheet(_)))
    }

    fn unscripted(kind: &str) -> NativeError {
        NativeError::new(alloc::format!("no scripted reply for {kind}"))
    }
}

impl NativeHost for ScriptedHost {
    fn present_action_sheet(
        &mut self,
        config: &ActionSheetConfig,
    ) -> Result<Option<usize>, NativeError> {
        self.issued.push(IssuedCall::ActionSheet(config.clone()));
        self.sheet_replies
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("action sheet")))
    }

    fn present_share_sheet(&mut self, config: &ShareConfig) -> Result<ShareOutcome, NativeError> {
        self.issued.push(IssuedCall::ShareSheet(config.clone()));
        self.share_replies
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("share sheet")))
    }

    fn capture_screenshot(&mut self, target: CaptureTarget) -> Result<String, NativeError> {
        self.issued.push(IssuedCall::Screenshot(target));
        self.capture_replies
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("screenshot")))
    }
}

/// The scripted host doubles as the sample bridge module, echoing arguments
/// back and exposing fixed constants.
impl BridgeHost for ScriptedHost {
    fn constants(&mut self) -> Result<BridgeConstants, NativeError> {
        Ok(BridgeConstants {
            const_bool: true,
            const_number: 5.4,
            const_string: "scripted".to_string(),
        })
    }

    fn void_func(&mut self) -> Result<(), NativeError> {
        Ok(())
    }

    fn get_number(&mut self, arg: f64) -> Result<f64, NativeError> {
        Ok(arg)
    }

    fn get_string(&mut self, arg: &str) -> Result<String, NativeError> {
        Ok(arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn replies_are_consumed_in_order() {
        let mut host = ScriptedHost::new();
        host.push_sheet_reply(Ok(Some(1)));
        host.push_sheet_reply(Ok(None));

        let config = ActionSheetConfig::new(["a", "b"]);
        assert_eq!(host.present_action_sheet(&config), Ok(Some(1)));
        assert_eq!(host.present_action_sheet(&config), Ok(None));
    }

    #[test]
    fn unscripted_call_fails_instead_of_panicking() {
        let mut host = ScriptedHost::new();
        let err = host
            .capture_screenshot(CaptureTarget::Window)
            .unwrap_err();
        assert!(err.message().contains("no scripted reply"), "{err}");
    }

    #[test]
    fn issued_calls_record_configs() {
        let mut host = ScriptedHost::new();
        host.push_share_reply(Ok(ShareOutcome::dismissed()));

        let config = ShareConfig::new("https://example.com");
        host.present_share_sheet(&config).unwrap();

        assert_eq!(
            host.issued_calls(),
            vec![IssuedCall::ShareSheet(config)].as_slice()
        );
        assert!(host.issued_share_sheet());
    }

    #[test]
    fn bridge_echoes_arguments() {
        let mut host = ScriptedHost::new();
        assert_eq!(host.get_number(0.25), Ok(0.25));
        assert_eq!(host.get_string("hi"), Ok("hi".to_string()));
        assert_eq!(host.void_func(), Ok(()));
        assert!(host.constants().unwrap().const_bool);
    }
}
