// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Vitrine demos.

use vitrine_element::Element;
use vitrine_registry::{GalleryRegistry, Platform};

/// Prints the modules and entries visible on `platform`, with each entry's
/// rendered outline, the way a navigator would walk the gallery.
pub fn print_gallery(registry: &GalleryRegistry, platform: Platform) {
    println!("== gallery on {platform} ==");
    for module in registry.modules_for(platform) {
        match module.description() {
            Some(description) => println!("{} - {}", module.title(), description),
            None => println!("{}", module.title()),
        }
        for entry in module.entries_for(platform) {
            println!("  * {}", entry.title());
            print_tree(&entry.render());
        }
    }
}

/// Prints an element tree indented beneath its entry line.
pub fn print_tree(tree: &Element) {
    let mut out = String::new();
    tree.write_outline(&mut out, 2);
    print!("{out}");
}
