/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Update Outcomes
//!
//! Result types for mutations that can fail: the outcome of a bounded
//! optimistic swap, and the error returned by the `try_*` mutators.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Outcome of [`Atom::swap_bounded`](crate::atom::Atom::swap_bounded).
///
/// A bounded swap either commits a value or gives up. When it gives up, the
/// last computed candidate is still returned, but it was never stored.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome<T> {
    /// A candidate was stored; this is the value now in the atom (unless
    /// another writer has replaced it since).
    Committed(T),

    /// Every attempt lost a race or was rejected by the validator.
    Exhausted {
        /// The candidate computed by the last attempt. Not stored.
        candidate: T,
        /// Number of attempts made.
        attempts: usize,
    },
}

impl<T> SwapOutcome<T> {
    /// Returns `true` if the update was stored.
    #[inline]
    pub fn is_committed(&self) -> bool {
        matches!(self, SwapOutcome::Committed(_))
    }

    /// Returns the committed value, or the last candidate if exhausted.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            SwapOutcome::Committed(value) => value,
            SwapOutcome::Exhausted { candidate, .. } => candidate,
        }
    }

    /// Consumes the outcome, returning the committed value or the last
    /// candidate.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            SwapOutcome::Committed(value) => value,
            SwapOutcome::Exhausted { candidate, .. } => candidate,
        }
    }

    /// Returns the committed value, or `None` if the swap gave up.
    #[inline]
    pub fn committed(self) -> Option<T> {
        match self {
            SwapOutcome::Committed(value) => Some(value),
            SwapOutcome::Exhausted { .. } => None,
        }
    }
}

/// Reason a checked mutation did not take effect.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError<T> {
    /// The validator refused the proposed value, which is handed back.
    #[error("new value rejected by validator")]
    Rejected(T),

    /// The current value was not equal to the expected one. Carries the
    /// actual current value.
    #[error("current value does not match the expected value")]
    Mismatch(T),
}

impl<T> UpdateError<T> {
    /// Returns `true` if the validator refused the value.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, UpdateError::Rejected(_))
    }

    /// Consumes the error, returning the value it carries.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            UpdateError::Rejected(value) | UpdateError::Mismatch(value) => value,
        }
    }
}
