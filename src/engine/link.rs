//! Links returned by successful checks.
//!
//! A check that passes hands back a link so the chain can keep going:
//! - `CheckLink` - continue on the same value via `and()`
//! - `OptionCheckLink` - same, plus `which()` to pivot into the contained value

use super::chain::{check_that, Check};
use super::error::{raise, CheckError};

/// Link produced by a successful check.
///
/// # Example
///
/// ```rust
/// use veracity::prelude::*;
///
/// check_that(4).is_less_than(10).and().is_not_zero();
/// ```
#[derive(Debug)]
pub struct CheckLink<T> {
    check: Check<T>,
}

impl<T> CheckLink<T> {
    pub(crate) fn new(check: Check<T>) -> Self {
        Self { check }
    }

    /// Continue the chain with another check on the same value.
    pub fn and(self) -> Check<T> {
        self.check
    }
}

/// Link produced by a successful check on an optional value.
///
/// Besides chaining on the optional itself, this link can pivot into the
/// contained value with [`which`](OptionCheckLink::which).
#[derive(Debug)]
pub struct OptionCheckLink<T> {
    check: Check<Option<T>>,
}

impl<T> OptionCheckLink<T> {
    pub(crate) fn new(check: Check<Option<T>>) -> Self {
        Self { check }
    }

    /// Continue the chain with another check on the optional itself.
    pub fn and(self) -> Check<Option<T>> {
        self.check
    }

    /// Pivot the chain onto the contained value.
    ///
    /// The pivot starts a fresh chain on the unwrapped value, so every check
    /// matching the inner type becomes available.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that(Some(7u8)).has_a_value().which().is_strictly_positive();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with "There is no value to be checked." when the optional is
    /// empty. Reaching that state is a usage error: it takes negating
    /// `has_a_value` on an empty optional and pivoting anyway.
    pub fn which(self) -> Check<T> {
        match self.check.into_value() {
            Some(inner) => check_that(inner),
            None => raise(CheckError::NoValueToCheck),
        }
    }
}
