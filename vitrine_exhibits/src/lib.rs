// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Exhibits: the interactive sample state machines.
//!
//! Each module here handles one demonstration pattern, as an explicit
//! state-holder value plus a pure `render` keyed by that state:
//!
//! - [`action_sheet`]: present a native action sheet and display the choice
//! - [`share`]: share a URL, and the capture-then-share screenshot chain
//! - [`modal`]: local visibility flag with demonstration lifecycle hooks
//! - [`picker`]: single-choice selection state
//! - [`slider`]: numeric value with a three-decimal readout
//! - [`bridge`]: exercise the sample native-module bridge
//!
//! ## Design
//!
//! Samples never store callbacks or inherit lifecycle hooks. State
//! transitions are named operations (`on_press`, `on_value_change`) invoked
//! by the navigator when the corresponding native event arrives, and
//! `render(&self)` produces a fresh
//! [`Element`](vitrine_element::Element) descriptor from current state.
//!
//! Native calls go through the [`NativeHost`](vitrine_native::NativeHost)
//! seam. Within one flow the next call is issued strictly after the previous
//! one resolves successfully; a failure surfaces a blocking
//! [`Alert`](vitrine_native::Alert) carrying the error message, leaves the
//! rest of the local state unchanged, and is never retried automatically.
//!
//! ```rust
//! use vitrine_exhibits::action_sheet::ActionSheetSample;
//! use vitrine_native::ScriptedHost;
//!
//! let mut host = ScriptedHost::new();
//! host.push_sheet_reply(Ok(Some(3)));
//!
//! let mut sample = ActionSheetSample::standard();
//! sample.on_press(&mut host);
//! assert_eq!(sample.clicked(), "Delete");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod action_sheet;
pub mod bridge;
pub mod modal;
pub mod picker;
pub mod share;
pub mod slider;
