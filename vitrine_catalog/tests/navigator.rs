// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigator flow over the standard catalog: list modules,
//! select an entry, render it, then drive the matching sample through a
//! scripted native host the way a mounted screen would.

use vitrine_catalog::standard_catalog;
use vitrine_exhibits::action_sheet::ActionSheetSample;
use vitrine_exhibits::modal::ModalSample;
use vitrine_native::ScriptedHost;
use vitrine_registry::Platform;

#[test]
fn listing_and_selection_round_trip() {
    let registry = standard_catalog().unwrap();

    // The navigator lists visible module titles first.
    let titles: Vec<_> = registry
        .modules_for(Platform::Ios)
        .map(|module| module.title())
        .collect();
    assert_eq!(titles, ["ActionSheet", "Modal", "Picker", "Slider", "Bridge"]);

    // Then entry titles within the chosen module.
    let module = registry.module("ActionSheet").unwrap();
    let entry = module
        .entries_for(Platform::Ios)
        .find(|entry| entry.title() == "Show Standard Action Sheet")
        .unwrap();

    // Selection invokes the render factory synchronously; the descriptor
    // starts in the sample's initial state.
    let tree = entry.render();
    assert!(tree.contains_label("Clicked button: none"));
}

#[test]
fn mounted_action_sheet_screen_reflects_the_selection() {
    // The navigator owns a live sample for the mounted screen and routes
    // the native resolution back into it.
    let mut host = ScriptedHost::new();
    host.push_sheet_reply(Ok(Some(3)));

    let mut sample = ActionSheetSample::standard();
    sample.on_press(&mut host);

    assert!(sample.render().contains_label("Clicked button: Delete"));
}

#[test]
fn modal_screen_toggles_cleanly_across_renders() {
    let mut sample = ModalSample::basic();
    for _ in 0..3 {
        sample.on_press_open();
        assert!(sample.is_visible());
        sample.on_press_close();
        assert!(!sample.is_visible());
    }
}
