//! Duration checks with unit-aware messages.
//!
//! Comparison always happens on the raw `Duration`, at nanosecond precision;
//! units only drive the failure text. The display unit is discovered from
//! the comparand, so checking against two seconds quotes both sides in
//! seconds even when the checked duration was built from milliseconds.

use crate::engine::{Check, CheckError, CheckLink, FluentMessage};
use std::fmt;
use std::time::Duration;

/// Display units for durations, nanoseconds up to days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Label used when quoting a duration in a message.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "Nanoseconds",
            TimeUnit::Microseconds => "Microseconds",
            TimeUnit::Milliseconds => "Milliseconds",
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
            TimeUnit::Days => "Days",
        }
    }

    fn nanos(self) -> u128 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 3_600 * 1_000_000_000,
            TimeUnit::Days => 86_400 * 1_000_000_000,
        }
    }
}

/// Pick the display unit for a duration: the largest unit in which it
/// amounts to at least one. Zero durations report in milliseconds.
pub fn discover_unit(duration: Duration) -> TimeUnit {
    const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
        TimeUnit::Microseconds,
        TimeUnit::Nanoseconds,
    ];

    let nanos = duration.as_nanos();
    if nanos == 0 {
        return TimeUnit::Milliseconds;
    }

    for unit in DESCENDING {
        if nanos >= unit.nanos() {
            return unit;
        }
    }

    TimeUnit::Nanoseconds
}

/// A duration quoted in a fixed unit, for messages.
pub(crate) struct DurationView {
    count: f64,
    unit: TimeUnit,
}

impl DurationView {
    pub(crate) fn new(duration: Duration, unit: TimeUnit) -> Self {
        Self {
            count: duration.as_nanos() as f64 / unit.nanos() as f64,
            unit,
        }
    }
}

impl fmt::Debug for DurationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.unit.label())
    }
}

/// Ordering checks for `std::time::Duration`.
///
/// Same tolerance for equality as the generic `is_less_than` and
/// `is_greater_than`.
pub trait DurationChecks: Sized {
    /// Check that the duration is less than or equal to the given limit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use veracity::prelude::*;
    ///
    /// check_that(Duration::from_millis(1000)).is_less_than(Duration::from_secs(2));
    /// ```
    fn is_less_than(self, comparand: Duration) -> CheckLink<Duration>;

    /// Check that the duration is greater than or equal to the given limit.
    fn is_greater_than(self, comparand: Duration) -> CheckLink<Duration>;
}

impl DurationChecks for Check<Duration> {
    fn is_less_than(self, comparand: Duration) -> CheckLink<Duration> {
        let unit = discover_unit(comparand);
        let failure = FluentMessage::new("The {0} is more than the limit.")
            .for_entity("duration")
            .on(&DurationView::new(*self.value(), unit))
            .expected(&DurationView::new(comparand, unit))
            .comparison("less than")
            .render();
        let negated = FluentMessage::new("The {0} is less than the limit whereas it must not.")
            .for_entity("duration")
            .on(&DurationView::new(*self.value(), unit))
            .expected(&DurationView::new(comparand, unit))
            .comparison("more than")
            .render();

        self.execute_check(
            move |value| {
                if *value <= comparand {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_greater_than(self, comparand: Duration) -> CheckLink<Duration> {
        let unit = discover_unit(comparand);
        let failure = FluentMessage::new("The {0} is less than the limit.")
            .for_entity("duration")
            .on(&DurationView::new(*self.value(), unit))
            .expected(&DurationView::new(comparand, unit))
            .comparison("more than")
            .render();
        let negated = FluentMessage::new("The {0} is greater than the limit whereas it must not.")
            .for_entity("duration")
            .on(&DurationView::new(*self.value(), unit))
            .expected(&DurationView::new(comparand, unit))
            .comparison("less than")
            .render();

        self.execute_check(
            move |value| {
                if *value >= comparand {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
