//! Presence checks for optional values.

use crate::engine::{Check, CheckError, CheckLink, FluentMessage, OptionCheckLink};
use std::fmt;

/// Presence checks for `Option<T>` values.
pub trait OptionChecks<T>: Sized {
    /// Check that the optional holds a value.
    ///
    /// The returned link can pivot into the contained value with `which()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that(Some("inner")).has_a_value().which().starts_with("in");
    /// ```
    fn has_a_value(self) -> OptionCheckLink<T>;

    /// Check that the optional is empty.
    fn has_no_value(self) -> CheckLink<Option<T>>;
}

impl<T: fmt::Debug> OptionChecks<T> for Check<Option<T>> {
    fn has_a_value(self) -> OptionCheckLink<T> {
        let failure = FluentMessage::new("The {0} has no value, which is unexpected.")
            .for_entity("optional")
            .render();
        let negated = FluentMessage::new("The {0} has a value, whereas it must not.")
            .for_entity("optional")
            .on(self.value())
            .render();

        let link = self.execute_check(
            move |value| {
                if value.is_some() {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        );

        OptionCheckLink::new(link.and())
    }

    fn has_no_value(self) -> CheckLink<Option<T>> {
        let failure = FluentMessage::new("The {0} has a value, whereas it must not.")
            .for_entity("optional")
            .on(self.value())
            .render();
        let negated = FluentMessage::new("The {0} has no value, which is unexpected.")
            .for_entity("optional")
            .render();

        self.execute_check(
            move |value| {
                if value.is_none() {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
