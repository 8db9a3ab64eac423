/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atoms
//!
//! Shared, synchronous, independent state in the style of Clojure atoms. An
//! atom wraps one value in a reader/writer lock and gates every checked
//! mutation through an optional validator.
//!
//! # Features
//!
//! - Concurrent readers, exclusive writers
//! - Direct, compare-and-set, pessimistic and optimistic updates
//! - Optional validation of every new value
//! - Explicit outcomes for bounded swaps and checked writes
//!
//! # Author
//!
//! Haixing Hu

mod cell;
mod config;
mod outcome;
mod traits;

pub use cell::Atom;
pub use config::{
    AtomConfig,
    Validator,
};
pub use outcome::{
    SwapOutcome,
    UpdateError,
};
pub use traits::{
    Atomic,
    UpdatableAtomic,
};
