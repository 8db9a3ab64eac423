/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atom Counter Example
//!
//! Demonstrates using an atom as a thread-safe counter, with both the
//! optimistic and the pessimistic update strategies.

use prism3_atom::Atom;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atom Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = Atom::new(0);
    println!("   Initial value: {}", counter.value());

    counter.swap(|v| v + 1);
    println!("   After swap(+1): {}", counter.value());

    counter.reset_with(|v| v + 5);
    println!("   After reset_with(+5): {}", counter.value());

    counter.set(100);
    println!("   After set(100): {}", counter.value());

    // Example 2: Multi-threaded counter with optimistic updates
    println!("\n2. Multi-threaded Counter (swap):");
    let counter = Arc::new(Atom::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.swap(|v| v + 1);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.value(),
        num_threads * increments_per_thread
    );

    // Example 3: Range checks without copying the value out
    println!("\n3. Compare:");
    let in_range = counter.compare(|v| (5_000..20_000).contains(v));
    println!("   Count within 5000..20000: {}", in_range);

    println!("\n=== Example completed ===");
}
