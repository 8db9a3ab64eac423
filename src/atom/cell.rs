/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atom
//!
//! A synchronized cell holding one value behind a reader/writer lock, with
//! an optional validator gating every checked mutation.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::num::NonZeroUsize;

use parking_lot::RwLock;
use tracing::{
    debug,
    trace,
};

use crate::atom::config::AtomConfig;
use crate::atom::outcome::{
    SwapOutcome,
    UpdateError,
};

/// Shared, synchronous, independent state.
///
/// An atom owns one value. At any time a copy of the current value can be
/// obtained; writing a new value blocks simultaneous reads and writes.
/// Readers never observe a value mid-write.
///
/// # Update Strategies
///
/// - **Direct set** (`set`): unconditional overwrite, no validation.
/// - **Compare-and-set** (`compare_and_set`): stores the new value only if
///   the current value equals the expected one and the validator accepts.
/// - **Pessimistic update** (`reset_with`, `modify`): holds the write lock
///   while the update function runs. The function runs exactly once, but
///   readers are blocked for its whole duration.
/// - **Optimistic update** (`swap`, `swap_bounded`): computes the new value
///   outside any lock and commits it with `compare_and_set`, retrying on
///   conflict. The write lock is only held for the commit, but the update
///   function may run many times and must be free of side effects.
///
/// # Validation
///
/// Every mutation except `set` passes the proposed value through the
/// validator. The initial value is not validated. A rejected value leaves
/// the atom unchanged; most operations report this only through their
/// return value. Use `try_reset` or `try_compare_and_set` for an explicit
/// error.
///
/// # Reentrancy
///
/// Callbacks run while a lock is held. A callback that calls back into the
/// same atom deadlocks.
///
/// # Example
///
/// ```rust
/// use prism3_atom::Atom;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(Atom::new(0u64));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let counter = counter.clone();
///         thread::spawn(move || {
///             for _ in 0..100 {
///                 counter.swap(|v| v + 1);
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(counter.value(), 400);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct Atom<T> {
    value: RwLock<T>,
    config: AtomConfig<T>,
}

impl<T> Atom<T> {
    /// Creates a new atom that accepts every value.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::with_config(value, AtomConfig::new())
    }

    /// Creates a new atom with a validator.
    ///
    /// The initial value is stored as is, without being validated.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    /// * `validator` - Predicate every later checked mutation must satisfy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::with_validator(5, |v: &i32| *v < 10);
    /// assert_eq!(atom.reset(20), 5);
    /// ```
    pub fn with_validator<F>(value: T, validator: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::with_config(value, AtomConfig::new().validator(validator))
    }

    /// Creates a new atom from a configuration.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value. Not validated.
    /// * `config` - Validator and name of the atom.
    #[inline]
    pub fn with_config(value: T, config: AtomConfig<T>) -> Self {
        Self {
            value: RwLock::new(value),
            config,
        }
    }

    /// Returns the configuration of this atom.
    #[inline]
    pub fn config(&self) -> &AtomConfig<T> {
        &self.config
    }

    /// Checks a value against this atom's validator without touching the
    /// stored value.
    #[inline]
    pub fn is_valid(&self, value: &T) -> bool {
        self.config.validate(value)
    }

    /// Overwrites the current value without validation.
    ///
    /// Takes the write lock. Once this returns, every reader on every
    /// thread observes `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set(&self, value: T) {
        *self.value.write() = value;
    }

    /// Evaluates a predicate against the current value under the read lock.
    ///
    /// Useful for conditions that are not a plain equality check, such as
    /// ranges or membership tests.
    ///
    /// # Parameters
    ///
    /// * `predicate` - Receives the current value.
    ///
    /// # Returns
    ///
    /// The predicate's result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::new(42);
    /// assert!(atom.compare(|v| (40..50).contains(v)));
    /// ```
    #[inline]
    pub fn compare<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        predicate(&*self.value.read())
    }

    /// Passes the current value to an observer under the read lock.
    ///
    /// # Parameters
    ///
    /// * `observer` - Receives the current value, e.g. to copy a field out.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::new(("foo".to_string(), 7));
    /// let mut count = 0;
    /// atom.with(|(_, n)| count = *n);
    /// assert_eq!(count, 7);
    /// ```
    #[inline]
    pub fn with<F>(&self, observer: F)
    where
        F: FnOnce(&T),
    {
        observer(&*self.value.read());
    }

    /// Consumes the atom, returning the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    fn log_rejected(&self, operation: &'static str) {
        debug!(
            atom = ?self.config.get_name(),
            operation,
            "new value rejected by validator"
        );
    }
}

impl<T: Clone> Atom<T> {
    /// Returns a copy of the current value.
    ///
    /// Takes the read lock only; never fails.
    #[inline]
    pub fn value(&self) -> T {
        self.value.read().clone()
    }

    /// Stores a new value if it passes validation.
    ///
    /// Rejection is silent: the returned value differs from `value`. Use
    /// [`try_reset`](Self::try_reset) for an explicit result.
    ///
    /// # Parameters
    ///
    /// * `value` - The proposed value.
    ///
    /// # Returns
    ///
    /// The value held after the attempt: `value` if accepted, the previous
    /// value otherwise.
    pub fn reset(&self, value: T) -> T {
        let mut current = self.value.write();
        if self.config.validate(&value) {
            *current = value;
        } else {
            self.log_rejected("reset");
        }
        current.clone()
    }

    /// Stores a new value if it passes validation, reporting rejection.
    ///
    /// # Returns
    ///
    /// `Ok(value)` with the stored value, or `Err(UpdateError::Rejected)`
    /// handing the proposed value back.
    pub fn try_reset(&self, value: T) -> Result<T, UpdateError<T>> {
        let mut current = self.value.write();
        if !self.config.validate(&value) {
            self.log_rejected("try_reset");
            return Err(UpdateError::Rejected(value));
        }
        *current = value;
        Ok(current.clone())
    }

    /// Pessimistic functional update.
    ///
    /// Takes the write lock, computes `update(current)` exactly once while
    /// holding it, validates the result and stores it if valid. Readers are
    /// blocked for as long as `update` runs, so keep it short. Use
    /// [`swap`](Self::swap) to minimize time spent in the write lock.
    ///
    /// # Parameters
    ///
    /// * `update` - Computes the new value from the current one.
    ///
    /// # Returns
    ///
    /// The value held after the update, or the unchanged value if the
    /// result was rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::new(0);
    /// assert_eq!(atom.reset_with(|v| v + 200), 200);
    /// ```
    pub fn reset_with<F>(&self, update: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut current = self.value.write();
        let new_value = update(&*current);
        if self.config.validate(&new_value) {
            *current = new_value;
        } else {
            self.log_rejected("reset_with");
        }
        current.clone()
    }

    /// Pessimistic in-place update.
    ///
    /// Takes the write lock and lets `mutator` change the value. Without a
    /// validator the stored value is mutated directly. With a validator the
    /// mutator works on a copy, which replaces the stored value only if it
    /// passes validation.
    ///
    /// If `mutator` panics the lock is released. With a validator the
    /// stored value is left untouched; without one, whatever the mutator
    /// already changed stays in place.
    ///
    /// # Parameters
    ///
    /// * `mutator` - Mutates the stored value.
    ///
    /// # Returns
    ///
    /// A copy of the value held afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::new(("foo", 0));
    /// assert_eq!(atom.modify(|pair| pair.1 = 42), ("foo", 42));
    /// ```
    pub fn modify<F>(&self, mutator: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let mut current = self.value.write();
        if !self.config.has_validator() {
            mutator(&mut *current);
            return current.clone();
        }

        let mut next = current.clone();
        mutator(&mut next);
        if self.config.validate(&next) {
            *current = next;
        } else {
            self.log_rejected("modify");
        }
        current.clone()
    }
}

impl<T: Clone + PartialEq> Atom<T> {
    /// Stores `new` if the current value equals `expected` and `new` passes
    /// validation.
    ///
    /// Equality is `T`'s `PartialEq`, not identity. If that relation ignores
    /// some fields, values differing only in those fields count as equal.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the atom is expected to hold.
    /// * `new` - The proposed value.
    ///
    /// # Returns
    ///
    /// `true` if the value was changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::new(0);
    /// assert!(atom.compare_and_set(&0, 100));
    /// assert!(!atom.compare_and_set(&101, 100));
    /// ```
    pub fn compare_and_set(&self, expected: &T, new: T) -> bool {
        let mut current = self.value.write();
        if *current != *expected {
            return false;
        }
        if !self.config.validate(&new) {
            self.log_rejected("compare_and_set");
            return false;
        }
        *current = new;
        true
    }

    /// Like [`compare_and_set`](Self::compare_and_set), but reports why the
    /// value was not stored.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, `Err(UpdateError::Mismatch(actual))` if the
    /// current value differs from `expected`, or
    /// `Err(UpdateError::Rejected(new))` if the validator refused `new`.
    pub fn try_compare_and_set(&self, expected: &T, new: T) -> Result<(), UpdateError<T>> {
        let mut current = self.value.write();
        if *current != *expected {
            return Err(UpdateError::Mismatch(current.clone()));
        }
        if !self.config.validate(&new) {
            self.log_rejected("try_compare_and_set");
            return Err(UpdateError::Rejected(new));
        }
        *current = new;
        Ok(())
    }

    /// Optimistic functional update, retried until it commits.
    ///
    /// Reads the current value, computes `update(current)` outside any lock
    /// and commits it with `compare_and_set`. If another writer got in
    /// between, or the validator refused the candidate, it starts over.
    ///
    /// `update` may run more than once and must therefore be free of side
    /// effects. A validator that always refuses `update`'s result makes this
    /// loop spin forever; use [`swap_bounded`](Self::swap_bounded) when that
    /// is possible.
    ///
    /// # Parameters
    ///
    /// * `update` - Computes the new value from the current one.
    ///
    /// # Returns
    ///
    /// The committed value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::Atom;
    ///
    /// let atom = Atom::new(0);
    /// assert_eq!(atom.swap(|v| v + 200), 200);
    /// assert_eq!(atom.value(), 200);
    /// ```
    pub fn swap<F>(&self, update: F) -> T
    where
        F: Fn(&T) -> T,
    {
        self.swap_attempts(update, None).into_value()
    }

    /// Optimistic functional update with a bounded number of attempts.
    ///
    /// Same as [`swap`](Self::swap), but gives up after `max_attempts`
    /// failed commits.
    ///
    /// # Parameters
    ///
    /// * `update` - Computes the new value from the current one.
    /// * `max_attempts` - Maximum number of commit attempts.
    ///
    /// # Returns
    ///
    /// `SwapOutcome::Committed` with the stored value, or
    /// `SwapOutcome::Exhausted` with the last computed candidate, which was
    /// not stored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::{Atom, SwapOutcome};
    /// use std::num::NonZeroUsize;
    ///
    /// let atom = Atom::with_validator(0, |v: &i32| *v < 0);
    /// let attempts = NonZeroUsize::new(3).unwrap();
    /// let outcome = atom.swap_bounded(|v| v + 1, attempts);
    /// assert_eq!(outcome, SwapOutcome::Exhausted { candidate: 1, attempts: 3 });
    /// assert_eq!(atom.value(), 0);
    /// ```
    pub fn swap_bounded<F>(&self, update: F, max_attempts: NonZeroUsize) -> SwapOutcome<T>
    where
        F: Fn(&T) -> T,
    {
        self.swap_attempts(update, Some(max_attempts))
    }

    fn swap_attempts<F>(&self, update: F, max_attempts: Option<NonZeroUsize>) -> SwapOutcome<T>
    where
        F: Fn(&T) -> T,
    {
        let mut attempts = 0usize;
        loop {
            let current = self.value();
            let candidate = update(&current);
            attempts += 1;

            if self.compare_and_set(&current, candidate.clone()) {
                return SwapOutcome::Committed(candidate);
            }

            if let Some(max) = max_attempts {
                if attempts >= max.get() {
                    debug!(
                        atom = ?self.config.get_name(),
                        attempts,
                        "swap gave up without committing"
                    );
                    return SwapOutcome::Exhausted {
                        candidate,
                        attempts,
                    };
                }
            }

            trace!(atom = ?self.config.get_name(), attempts, "swap conflict, retrying");
        }
    }
}

impl<T: PartialEq> PartialEq<T> for Atom<T> {
    /// Compares the current value with `other` under the read lock.
    #[inline]
    fn eq(&self, other: &T) -> bool {
        *self.value.read() == *other
    }
}

impl<T: Clone> Clone for Atom<T> {
    /// Creates an independent atom holding a copy of the current value and
    /// sharing the same validator.
    fn clone(&self) -> Self {
        Self::with_config(self.value(), self.config.clone())
    }
}

impl<T: Default> Default for Atom<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Atom<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atom")
            .field("value", &*self.value.read())
            .field("config", &self.config)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Atom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.value.read())
    }
}
