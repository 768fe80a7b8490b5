// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Native: native-module contracts for the gallery.
//!
//! This crate defines the call/return contracts through which gallery samples
//! talk to the host platform's native runtime. The native side (action sheet
//! presentation, share sheet, screenshot capture, native views) is externally
//! implemented and externally maintained; everything here is the stable
//! boundary: plain-data configuration structs, outcome types, and the
//! [`NativeHost`] trait that a platform integration implements.
//!
//! ## Core concepts
//!
//! - **Configurations**: every recognized option of a native call is an
//!   explicit struct field with a documented default. There are no dynamic
//!   prop bags; [`ActionSheetConfig`], [`ShareConfig`], [`SliderConfig`],
//!   [`PickerConfig`], and [`ModalConfig`] enumerate the full surface.
//! - **Single resolution**: each native call resolves exactly once, with one
//!   success or one failure outcome and no cancellation hook. The suspension
//!   point is a [`NativeHost`] method, so a call yields exactly one
//!   `Result`.
//! - **Failure surface**: a failed call carries a [`NativeError`] message and
//!   is shown to the user as a blocking [`Alert`]. No call is ever retried
//!   automatically.
//!
//! ## Hosts
//!
//! Production integrations implement [`NativeHost`] (and [`BridgeHost`] for
//! the bridge sample) on top of the real platform runtime. For demos and
//! tests, [`ScriptedHost`] replays queued replies and records every call it
//! receives.
//!
//! ```rust
//! use vitrine_native::{ActionSheetConfig, NativeHost, ScriptedHost};
//!
//! let mut host = ScriptedHost::new();
//! host.push_sheet_reply(Ok(Some(3)));
//!
//! let config = ActionSheetConfig::new(["Stay", "Delete", "Cancel"]);
//! let selected = host.present_action_sheet(&config).unwrap();
//! assert_eq!(selected, Some(3));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod alert;
mod bridge;
mod error;
mod host;
mod scripted;
mod sheet;
mod views;

pub use alert::Alert;
pub use bridge::{BridgeConstants, BridgeHost};
pub use error::NativeError;
pub use host::{CaptureTarget, NativeHost, ViewHandle};
pub use scripted::{IssuedCall, ScriptedHost};
pub use sheet::{ActionSheetConfig, ShareConfig, ShareOutcome};
pub use views::{
    AnimationType, ModalConfig, PickerConfig, PickerItem, PickerMode, PresentationStyle,
    SliderConfig,
};
