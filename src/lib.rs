/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atom
//!
//! Clojure-style atoms: shared, synchronous, independent state with optional
//! validation of every new value.
//!
//! An [`Atom`] holds one value behind a reader/writer lock. Callers never
//! touch the lock themselves; they pick an update strategy instead.
//!
//! ## Design Goals
//!
//! - **Consistency**: Readers never observe a value mid-write, and writes to
//!   one atom are totally ordered
//! - **Validation**: Every checked mutation passes through the validator
//! - **Choice of Locking**: Pessimistic updates run once under the write
//!   lock; optimistic updates compute outside it and retry on conflict
//! - **Explicit Outcomes**: Bounded swaps and `try_*` writes say whether
//!   they committed
//!
//! ## Example
//!
//! ```rust
//! use prism3_atom::Atom;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Basic usage
//! let balance = Atom::with_validator(100i64, |v: &i64| *v >= 0);
//! assert_eq!(balance.reset_with(|v| v - 30), 70);
//! assert_eq!(balance.reset_with(|v| v - 500), 70);
//!
//! // Concurrent usage
//! let counter = Arc::new(Atom::new(0usize));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.swap(|v| v + 1);
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.value(), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod atom;

// Re-export all atom types and traits
pub use atom::{
    Atom,
    AtomConfig,
    Atomic,
    SwapOutcome,
    UpdatableAtomic,
    UpdateError,
    Validator,
};
