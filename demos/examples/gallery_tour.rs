// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk the standard catalog on both platforms and print every entry's
//! rendered descriptor.
//!
//! Run with: `cargo run -p demos --example gallery_tour`

use demos::print_gallery;
use vitrine_catalog::standard_catalog;
use vitrine_registry::Platform;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = standard_catalog()?;

    print_gallery(&registry, Platform::Ios);
    println!();
    print_gallery(&registry, Platform::Android);

    Ok(())
}
