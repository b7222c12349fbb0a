//! Checks over the outcome of running code.
//!
//! `check_that_code` runs a closure, captures whether it panicked, with
//! which message, and how long it took, then starts an ordinary chain on
//! the captured [`CodeOutcome`]. Negation and `and()` work unchanged, which
//! also makes these checks the natural way for the library to check itself.

use super::durations::{discover_unit, DurationView};
use crate::engine::{check_that, Check, CheckError, CheckLink, FluentMessage};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Captured outcome of a checked closure: failure state and timing.
#[derive(Debug)]
pub struct CodeOutcome {
    panic_message: Option<String>,
    elapsed: Duration,
}

impl CodeOutcome {
    /// Whether the code panicked.
    pub fn failed(&self) -> bool {
        self.panic_message.is_some()
    }

    /// The panic message, when the code failed.
    pub fn panic_message(&self) -> Option<&str> {
        self.panic_message.as_deref()
    }

    /// Wall-clock time the code took to run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Run a closure and start a chain on its captured outcome.
///
/// # Example
///
/// ```rust
/// use veracity::prelude::*;
///
/// check_that_code(|| {
///     check_that(0u8).is_zero();
/// })
/// .does_not_fail();
///
/// check_that_code(|| {
///     check_that(0u8).is_not_zero();
/// })
/// .fails()
/// .and()
/// .fails_with_message_containing("equal to zero");
/// ```
pub fn check_that_code<F: FnOnce()>(code: F) -> Check<CodeOutcome> {
    let started = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(code));
    let elapsed = started.elapsed();

    let panic_message = match outcome {
        Ok(()) => None,
        Err(payload) => Some(describe_panic(payload)),
    };

    check_that(CodeOutcome {
        panic_message,
        elapsed,
    })
}

fn describe_panic(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else {
        "non-string panic payload".to_string()
    }
}

fn ran_cleanly_message() -> String {
    FluentMessage::new("The {0} ran without raising a failure, which is unexpected.")
        .for_entity("code")
        .render()
}

fn raised_message(outcome: &CodeOutcome) -> String {
    match outcome.panic_message() {
        Some(message) => FluentMessage::new(format!(
            "The {{0}} raised a failure whereas it must not:\n\t[{message}]"
        ))
        .for_entity("code")
        .render(),
        None => FluentMessage::new("The {0} raised a failure whereas it must not.")
            .for_entity("code")
            .render(),
    }
}

/// Checks on a captured [`CodeOutcome`].
pub trait CodeChecks: Sized {
    /// Check that the code ran without raising a failure.
    fn does_not_fail(self) -> CheckLink<CodeOutcome>;

    /// Check that the code raised a failure.
    fn fails(self) -> CheckLink<CodeOutcome>;

    /// Check that the code raised a failure whose message contains the
    /// given fragment.
    fn fails_with_message_containing(self, fragment: &str) -> CheckLink<CodeOutcome>;

    /// Check that the code ran within the given time limit.
    fn lasts_less_than(self, limit: Duration) -> CheckLink<CodeOutcome>;
}

impl CodeChecks for Check<CodeOutcome> {
    fn does_not_fail(self) -> CheckLink<CodeOutcome> {
        let failure = raised_message(self.value());
        let negated = ran_cleanly_message();

        self.execute_check(
            move |outcome| {
                if outcome.failed() {
                    Err(CheckError::AssertionFailed(failure))
                } else {
                    Ok(())
                }
            },
            negated,
        )
    }

    fn fails(self) -> CheckLink<CodeOutcome> {
        let failure = ran_cleanly_message();
        let negated = raised_message(self.value());

        self.execute_check(
            move |outcome| {
                if outcome.failed() {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn fails_with_message_containing(self, fragment: &str) -> CheckLink<CodeOutcome> {
        let failure = match self.value().panic_message() {
            None => ran_cleanly_message(),
            Some(message) => FluentMessage::new(format!(
                "The {{0}} raised a failure whose message does not contain the expected fragment:\n\t[{fragment:?}]\nThe raised message:\n\t[{message:?}]"
            ))
            .for_entity("code")
            .render(),
        };
        let negated = FluentMessage::new(
            "The {0} raised a failure with the given message fragment whereas it must not.",
        )
        .for_entity("code")
        .render();

        self.execute_check(
            move |outcome| match outcome.panic_message() {
                Some(message) if message.contains(fragment) => Ok(()),
                _ => Err(CheckError::AssertionFailed(failure)),
            },
            negated,
        )
    }

    fn lasts_less_than(self, limit: Duration) -> CheckLink<CodeOutcome> {
        let unit = discover_unit(limit);
        let elapsed = self.value().elapsed();
        let failure = FluentMessage::new(format!(
            "The {{0}} took too much time to run.\nExecuted in:\n\t[{:?}]\nThe expected duration: less than\n\t[{:?}]",
            DurationView::new(elapsed, unit),
            DurationView::new(limit, unit)
        ))
        .for_entity("code")
        .render();
        let negated = FluentMessage::new(format!(
            "The {{0}} took less time to run than the given limit whereas it must not.\nExecuted in:\n\t[{:?}]",
            DurationView::new(elapsed, unit)
        ))
        .for_entity("code")
        .render();

        self.execute_check(
            move |outcome| {
                if outcome.elapsed() <= limit {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
