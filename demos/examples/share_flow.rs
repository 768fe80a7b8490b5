// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive the capture-then-share screenshot flow against a scripted host,
//! once succeeding and once failing at the capture step.
//!
//! Run with: `cargo run -p demos --example share_flow`

use vitrine_exhibits::share::ShareScreenshotSample;
use vitrine_native::{NativeError, ScriptedHost, ShareOutcome};

fn main() {
    // Happy path: capture resolves, then the share sheet completes.
    let mut host = ScriptedHost::new();
    host.push_capture_reply(Ok("file:///tmp/screenshot-0.png".into()));
    host.push_share_reply(Ok(ShareOutcome::completed("com.apple.UIKit.activity.Mail")));

    let mut sample = ShareScreenshotSample::new();
    sample.on_press(&mut host);
    println!("status: {:?}", sample.status());

    // Failure path: the capture rejects, the share sheet is never presented
    // and the error message surfaces as a blocking alert.
    let mut host = ScriptedHost::new();
    host.push_capture_reply(Err(NativeError::new("disk full")));

    let mut sample = ShareScreenshotSample::new();
    sample.on_press(&mut host);
    println!(
        "alert: {:?}, share issued: {}",
        sample.alert().map(|alert| alert.message()),
        host.issued_share_sheet()
    );
}
