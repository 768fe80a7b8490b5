// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge sample: exercise the sample native-module surface.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use vitrine_element::Element;
use vitrine_native::{Alert, BridgeHost};

/// Invokes the sample bridge module and displays each result.
///
/// Every call appends one result line; a failed call raises the standard
/// error alert instead and appends nothing.
#[derive(Debug, Default)]
pub struct BridgeSample {
    results: Vec<String>,
    alert: Option<Alert>,
}

impl BridgeSample {
    /// Creates the sample with no results yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The user pressed the constants control.
    pub fn on_press_constants(&mut self, host: &mut dyn BridgeHost) {
        match host.constants() {
            Ok(constants) => self.results.push(format!(
                "constants: {} {} {:?}",
                constants.const_bool, constants.const_number, constants.const_string
            )),
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user pressed the void-call control.
    pub fn on_press_void(&mut self, host: &mut dyn BridgeHost) {
        match host.void_func() {
            Ok(()) => self.results.push("voidFunc: ok".into()),
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user pressed the number-echo control.
    pub fn on_press_number(&mut self, host: &mut dyn BridgeHost, arg: f64) {
        match host.get_number(arg) {
            Ok(value) => self.results.push(format!("getNumber: {value}")),
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user pressed the string-echo control.
    pub fn on_press_string(&mut self, host: &mut dyn BridgeHost, arg: &str) {
        match host.get_string(arg) {
            Ok(value) => self.results.push(format!("getString: {value}")),
            Err(err) => self.alert = Some(Alert::error(&err)),
        }
    }

    /// The user dismissed the current alert.
    pub fn on_dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Returns every result line, in call order.
    #[must_use]
    #[inline]
    pub fn results(&self) -> &[String] {
        &self.results
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
        let mut children = alloc::vec![
            Element::button("getConstants"),
            Element::button("voidFunc"),
            Element::button("getNumber"),
            Element::button("getString"),
        ];
        children.extend(self.results.iter().cloned().map(Element::label));
        Element::Column(children)
    }
}
