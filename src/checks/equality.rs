//! Equality checks.
//!
//! `is_equal_to` and `is_not_equal_to` are both first-class entry points
//! with their own wording, rather than one being the negation of the other;
//! `.not()` composes with either.

use crate::engine::{Check, CheckError, CheckLink, FluentMessage};
use std::fmt;

/// Equality checks, available on any `PartialEq + Debug` value.
pub trait EqualityChecks<T>: Sized {
    /// Check that the value equals the expected one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that("ready").is_equal_to("ready");
    /// ```
    fn is_equal_to(self, expected: T) -> CheckLink<T>;

    /// Check that the value differs from the given one.
    fn is_not_equal_to(self, given: T) -> CheckLink<T>;
}

impl<T: PartialEq + fmt::Debug> EqualityChecks<T> for Check<T> {
    fn is_equal_to(self, expected: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is different from the expected one.")
            .on(self.value())
            .expected(&expected)
            .render();
        let negated = FluentMessage::new("The {0} is equal to the expected one whereas it must not.")
            .expected(&expected)
            .comparison("different from")
            .render();

        self.execute_check(
            move |value| {
                if *value == expected {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_not_equal_to(self, given: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is equal to the given one whereas it must not.")
            .expected(&given)
            .comparison("different from")
            .render();
        let negated = FluentMessage::new("The {0} is different from the given one whereas it must be.")
            .on(self.value())
            .expected(&given)
            .render();

        self.execute_check(
            move |value| {
                if *value != given {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
