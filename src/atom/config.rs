/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atom Configuration
//!
//! Construction options for [`Atom`](crate::atom::Atom): the validator that
//! gates every checked mutation, and an optional name attached to log
//! records.
//!
//! # Author
//!
//! Haixing Hu

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared validation predicate.
///
/// Returns `true` if the proposed value may be stored.
pub type Validator<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Configuration of an atom.
///
/// The default configuration has no validator, which means every proposed
/// value is accepted, and no name.
///
/// # Example
///
/// ```rust
/// use prism3_atom::{Atom, AtomConfig};
///
/// let config = AtomConfig::new()
///     .validator(|v: &i32| *v >= 0)
///     .name("balance");
/// let balance = Atom::with_config(100, config);
///
/// assert_eq!(balance.reset(-1), 100);
/// assert_eq!(balance.reset(50), 50);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomConfig<T> {
    validator: Option<Validator<T>>,
    name: Option<Cow<'static, str>>,
}

impl<T> AtomConfig<T> {
    /// Creates the default configuration: always valid, unnamed.
    #[inline]
    pub fn new() -> Self {
        Self {
            validator: None,
            name: None,
        }
    }

    /// Sets the validator.
    ///
    /// The validator must be a pure function. It runs while the atom's
    /// write lock is held, so it must not access the same atom.
    ///
    /// # Parameters
    ///
    /// * `validator` - Predicate deciding whether a new value is accepted.
    ///
    /// # Returns
    ///
    /// The updated configuration.
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Sets an already shared validator.
    ///
    /// Useful when several atoms enforce the same rule.
    pub fn shared_validator(mut self, validator: Validator<T>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Sets the name reported in log records.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the configured name, if any.
    #[inline]
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if a validator was configured.
    #[inline]
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Checks a value against the validator.
    ///
    /// # Returns
    ///
    /// `true` if the value is acceptable, or if no validator is configured.
    #[inline]
    pub fn validate(&self, value: &T) -> bool {
        match &self.validator {
            Some(validator) => validator(value),
            None => true,
        }
    }
}

impl<T> Default for AtomConfig<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AtomConfig<T> {
    /// Clones the configuration. The validator is shared, not copied.
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> fmt::Debug for AtomConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomConfig")
            .field("validator", &self.has_validator())
            .field("name", &self.name)
            .finish()
    }
}
