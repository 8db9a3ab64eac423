/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Shared Settings Example
//!
//! Demonstrates holding a structured value in an atom and updating single
//! fields in place.

use prism3_atom::{
    Atom,
    AtomConfig,
};

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    name: String,
    timeout_ms: u64,
    max_retries: u32,
}

fn main() {
    println!("=== Shared Settings Example ===\n");

    let config = AtomConfig::new()
        .validator(|s: &Settings| s.timeout_ms > 0 && s.max_retries <= 10)
        .name("settings");
    let settings = Atom::with_config(
        Settings {
            name: "default".to_string(),
            timeout_ms: 1_000,
            max_retries: 3,
        },
        config,
    );

    // Example 1: Reading a single field
    println!("1. Reading a Field:");
    let mut timeout = 0;
    settings.with(|s| timeout = s.timeout_ms);
    println!("   Timeout: {} ms", timeout);

    // Example 2: In-place updates
    println!("\n2. In-place Updates:");
    let updated = settings.modify(|s| s.timeout_ms = 2_000);
    println!("   After raising timeout: {:?}", updated);
    let updated = settings.modify(|s| s.max_retries = 50);
    println!("   After invalid retries (rolled back): {:?}", updated);

    // Example 3: Compare-and-set on the whole value
    println!("\n3. Compare-and-Set:");
    let current = settings.value();
    let renamed = Settings {
        name: "tuned".to_string(),
        ..current.clone()
    };
    println!("   First CAS: {}", settings.compare_and_set(&current, renamed.clone()));
    println!("   Stale CAS: {}", settings.compare_and_set(&current, renamed));
    println!("   Final: {}", settings.value().name);

    println!("\n=== Example completed ===");
}
