/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atom Traits
//!
//! Defines common traits for shared-state cells, so code can be written
//! against the operations rather than a concrete type.
//!
//! # Author
//!
//! Haixing Hu

use std::num::NonZeroUsize;

use crate::atom::cell::Atom;
use crate::atom::outcome::SwapOutcome;

/// Common trait for validated shared-state cells.
///
/// Provides the basic operations: read, unconditional write, checked write
/// and compare-and-set.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the cell.
    type Value;

    /// Gets a copy of the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn value(&self) -> Self::Value;

    /// Sets a new value without validation.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to set.
    fn set(&self, value: Self::Value);

    /// Sets a new value if it passes validation.
    ///
    /// # Parameters
    ///
    /// * `value` - The proposed value.
    ///
    /// # Returns
    ///
    /// The value held after the attempt.
    fn reset(&self, value: Self::Value) -> Self::Value;

    /// Sets the value to `new` if the current value equals `expected` and
    /// `new` passes validation.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// `true` if the value was changed.
    fn compare_and_set(&self, expected: &Self::Value, new: Self::Value) -> bool;
}

/// Trait for cells that support functional updates.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Updates the value while holding the write lock. The function runs
    /// exactly once.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The value held after the update.
    fn reset_with<F>(&self, f: F) -> Self::Value
    where
        F: FnOnce(&Self::Value) -> Self::Value;

    /// Updates the value with a compare-and-set loop until it commits.
    ///
    /// # Parameters
    ///
    /// * `f` - A side-effect free function that takes the current value and
    ///   returns the new value.
    ///
    /// # Returns
    ///
    /// The committed value.
    fn swap<F>(&self, f: F) -> Self::Value
    where
        F: Fn(&Self::Value) -> Self::Value;

    /// Updates the value with a compare-and-set loop of at most
    /// `max_attempts` attempts.
    ///
    /// # Returns
    ///
    /// Whether the update committed, with the resulting value.
    fn swap_bounded<F>(&self, f: F, max_attempts: NonZeroUsize) -> SwapOutcome<Self::Value>
    where
        F: Fn(&Self::Value) -> Self::Value;
}

impl<T: Clone + PartialEq> Atomic for Atom<T> {
    type Value = T;

    #[inline]
    fn value(&self) -> T {
        Atom::value(self)
    }

    #[inline]
    fn set(&self, value: T) {
        Atom::set(self, value);
    }

    #[inline]
    fn reset(&self, value: T) -> T {
        Atom::reset(self, value)
    }

    #[inline]
    fn compare_and_set(&self, expected: &T, new: T) -> bool {
        Atom::compare_and_set(self, expected, new)
    }
}

impl<T: Clone + PartialEq> UpdatableAtomic for Atom<T> {
    #[inline]
    fn reset_with<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        Atom::reset_with(self, f)
    }

    #[inline]
    fn swap<F>(&self, f: F) -> T
    where
        F: Fn(&T) -> T,
    {
        Atom::swap(self, f)
    }

    #[inline]
    fn swap_bounded<F>(&self, f: F, max_attempts: NonZeroUsize) -> SwapOutcome<T>
    where
        F: Fn(&T) -> T,
    {
        Atom::swap_bounded(self, f, max_attempts)
    }
}
