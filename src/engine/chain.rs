//! Chain context and check runner.
//!
//! This module provides the heart of the fluent API:
//! - `check_that()` - Entry point for starting an assertion chain on a value
//! - `Check<T>` - Holds the checked value and the pending negation flag
//! - `Check::execute_check()` - The single runner every check goes through

use super::error::{raise, CheckError};
use super::link::CheckLink;

/// Start an assertion chain on a value.
///
/// This is the entry point for the fluent assertion API. The returned
/// [`Check`] exposes the checks matching the value's type; each successful
/// check hands back a link whose `and()` continues the chain.
///
/// # Example
///
/// ```rust
/// use veracity::prelude::*;
///
/// check_that(5).is_less_than(10).and().is_not_zero();
/// check_that("hello").contains("ell");
/// ```
pub fn check_that<T>(value: T) -> Check<T> {
    Check {
        value,
        negated: false,
    }
}

/// An assertion chain in progress: the checked value plus the negation flag.
///
/// A `Check` is consumed by the next check called on it; the chain moves the
/// value along rather than borrowing it, which is what lets `and()` keep the
/// fluency without lifetimes surfacing in user code.
#[derive(Debug, Clone)]
pub struct Check<T> {
    value: T,
    negated: bool,
}

impl<T> Check<T> {
    // =========================================================================
    // Builder methods (chainable)
    // =========================================================================

    /// Invert the verdict of the next check, and only the next one.
    ///
    /// A failing check under negation passes silently; a passing check under
    /// negation raises. The flag is consumed by the next check, so chains
    /// like `.not().is_zero().and().is_less_than(10)` negate only `is_zero`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that(5).not().is_zero();
    /// check_that("abc").not().contains("xyz");
    /// ```
    pub fn not(mut self) -> Self {
        self.negated = true;
        self
    }

    // =========================================================================
    // Check runner
    // =========================================================================

    /// Run a check predicate against the held value.
    ///
    /// Every check in the catalogue funnels through here, and custom checks
    /// use it the same way. The predicate reports the plain verdict by
    /// returning `Ok(())` or a failure carrying its rendered message; the
    /// runner owns the negation logic:
    ///
    /// - predicate passes, not negated: the chain continues
    /// - predicate fails, not negated: the predicate's failure is raised
    /// - predicate fails, negated: the failure was expected, the chain continues
    /// - predicate passes, negated: `negated_failure_message` is raised
    ///
    /// Both messages exist before the predicate runs: the failure message is
    /// built into the predicate's `Err`, and the negated message is handed in
    /// alongside it. The negation flag is cleared before the predicate runs,
    /// whatever the outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::{check_that, CheckError};
    ///
    /// check_that(21).execute_check(
    ///     |value| {
    ///         if value % 7 == 0 {
    ///             Ok(())
    ///         } else {
    ///             Err(CheckError::AssertionFailed(
    ///                 "\nThe checked value is not a multiple of seven.".to_string(),
    ///             ))
    ///         }
    ///     },
    ///     "\nThe checked value is a multiple of seven whereas it must not.",
    /// );
    /// ```
    ///
    /// # Panics
    ///
    /// Panics with the relevant message when the verdict, after negation, is
    /// a failure.
    pub fn execute_check<F>(
        mut self,
        predicate: F,
        negated_failure_message: impl Into<String>,
    ) -> CheckLink<T>
    where
        F: FnOnce(&T) -> Result<(), CheckError>,
    {
        let negated = self.negated;
        self.negated = false;

        match predicate(&self.value) {
            Err(_) if negated => CheckLink::new(self),
            Err(failure) => raise(failure),
            Ok(()) if negated => raise(CheckError::AssertionFailed(negated_failure_message.into())),
            Ok(()) => CheckLink::new(self),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The value under check.
    ///
    /// Checks use this to quote the value in their failure messages before
    /// handing `self` to [`execute_check`](Check::execute_check).
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the chain and hand the value back.
    pub(crate) fn into_value(self) -> T {
        self.value
    }
}
