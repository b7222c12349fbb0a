//! String content checks.
//!
//! Available on any `AsRef<str>` value, so `&str` and `String` share one
//! implementation. Patterns come in two dialects: `matches` takes a regex,
//! `matches_wildcards` takes a glob. A pattern that does not compile is a
//! usage error and is raised immediately, negated or not.

use crate::engine::{raise, Check, CheckError, CheckLink, FluentMessage};
use glob::Pattern;
use regex::Regex;
use std::fmt;

/// Content checks for string-like values.
pub trait StringChecks<S>: Sized {
    /// Check that the string contains the expected substring.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that("fluent checks").contains("ent");
    /// check_that(String::from("fluent checks")).not().contains("rigid");
    /// ```
    fn contains(self, expected: &str) -> CheckLink<S>;

    /// Check that the string starts with the expected prefix.
    fn starts_with(self, expected: &str) -> CheckLink<S>;

    /// Check that the string ends with the expected suffix.
    fn ends_with(self, expected: &str) -> CheckLink<S>;

    /// Check that the string matches the given regex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that("release-1.4.2").matches(r"^release-\d+\.\d+\.\d+$");
    /// ```
    fn matches(self, pattern: &str) -> CheckLink<S>;

    /// Check that the string matches the given glob pattern.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that("logs/app.log").matches_wildcards("*/*.log");
    /// ```
    fn matches_wildcards(self, pattern: &str) -> CheckLink<S>;

    /// Check that the string is empty.
    fn is_empty(self) -> CheckLink<S>;
}

impl<S: AsRef<str> + fmt::Debug> StringChecks<S> for Check<S> {
    fn contains(self, expected: &str) -> CheckLink<S> {
        let failure = FluentMessage::new("The {0} does not contain the expected substring.")
            .for_entity("string")
            .on(self.value())
            .expected(&expected)
            .render();
        let negated = FluentMessage::new("The {0} contains the given substring whereas it must not.")
            .for_entity("string")
            .on(self.value())
            .expected(&expected)
            .render();

        self.execute_check(
            move |value| {
                if value.as_ref().contains(expected) {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn starts_with(self, expected: &str) -> CheckLink<S> {
        let failure = FluentMessage::new("The {0} does not start with the expected prefix.")
            .for_entity("string")
            .on(self.value())
            .expected(&expected)
            .render();
        let negated = FluentMessage::new("The {0} starts with the given prefix whereas it must not.")
            .for_entity("string")
            .on(self.value())
            .expected(&expected)
            .render();

        self.execute_check(
            move |value| {
                if value.as_ref().starts_with(expected) {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn ends_with(self, expected: &str) -> CheckLink<S> {
        let failure = FluentMessage::new("The {0} does not end with the expected suffix.")
            .for_entity("string")
            .on(self.value())
            .expected(&expected)
            .render();
        let negated = FluentMessage::new("The {0} ends with the given suffix whereas it must not.")
            .for_entity("string")
            .on(self.value())
            .expected(&expected)
            .render();

        self.execute_check(
            move |value| {
                if value.as_ref().ends_with(expected) {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn matches(self, pattern: &str) -> CheckLink<S> {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(error) => raise(CheckError::BadPattern {
                kind: "regex",
                pattern: pattern.to_string(),
                reason: error.to_string(),
            }),
        };

        let failure = FluentMessage::new("The {0} does not match the expected pattern.")
            .for_entity("string")
            .on(self.value())
            .expected(&pattern)
            .render();
        let negated = FluentMessage::new("The {0} matches the given pattern whereas it must not.")
            .for_entity("string")
            .on(self.value())
            .expected(&pattern)
            .render();

        self.execute_check(
            move |value| {
                if regex.is_match(value.as_ref()) {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn matches_wildcards(self, pattern: &str) -> CheckLink<S> {
        let glob = match Pattern::new(pattern) {
            Ok(glob) => glob,
            Err(error) => raise(CheckError::BadPattern {
                kind: "wildcard",
                pattern: pattern.to_string(),
                reason: error.to_string(),
            }),
        };

        let failure = FluentMessage::new("The {0} does not match the expected wildcard pattern.")
            .for_entity("string")
            .on(self.value())
            .expected(&pattern)
            .render();
        let negated =
            FluentMessage::new("The {0} matches the given wildcard pattern whereas it must not.")
                .for_entity("string")
                .on(self.value())
                .expected(&pattern)
                .render();

        self.execute_check(
            move |value| {
                if glob.matches(value.as_ref()) {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_empty(self) -> CheckLink<S> {
        let failure = FluentMessage::new("The {0} is not empty.")
            .for_entity("string")
            .on(self.value())
            .render();
        let negated = FluentMessage::new("The {0} is empty whereas it must not.")
            .for_entity("string")
            .render();

        self.execute_check(
            move |value| {
                if value.as_ref().is_empty() {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
