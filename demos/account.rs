/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Validated Account Example
//!
//! Demonstrates a validator that keeps a balance from going negative, and
//! the explicit outcomes of checked writes and bounded swaps.

use prism3_atom::{
    Atom,
    SwapOutcome,
    UpdateError,
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Validated Account Example ===\n");

    // Example 1: Silent rejection
    println!("1. Silent Rejection:");
    let balance = Atom::with_validator(100i64, |v: &i64| *v >= 0);
    println!("   Withdraw 30 -> {}", balance.reset_with(|v| v - 30));
    println!("   Withdraw 500 -> {} (rejected)", balance.reset_with(|v| v - 500));

    // Example 2: Explicit rejection
    println!("\n2. Explicit Rejection:");
    match balance.try_reset(-1) {
        Ok(value) => println!("   Stored {}", value),
        Err(UpdateError::Rejected(value)) => println!("   Validator refused {}", value),
        Err(err) => println!("   Failed: {}", err),
    }

    // Example 3: Bounded swap that cannot commit
    println!("\n3. Bounded Swap:");
    let attempts = NonZeroUsize::new(3).unwrap();
    match balance.swap_bounded(|v| v - 1_000, attempts) {
        SwapOutcome::Committed(value) => println!("   Committed {}", value),
        SwapOutcome::Exhausted {
            candidate,
            attempts,
        } => println!(
            "   Gave up after {} attempts; {} was never stored",
            attempts, candidate
        ),
    }

    // Example 4: Concurrent withdrawals never overdraw
    println!("\n4. Concurrent Withdrawals:");
    let balance = Arc::new(Atom::with_validator(1_000i64, |v: &i64| *v >= 0));
    let mut handles = vec![];
    for _ in 0..8 {
        let balance = balance.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                balance.reset_with(|v| v - 3);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    println!("   Remaining balance: {}", balance.value());

    println!("\n=== Example completed ===");
}
