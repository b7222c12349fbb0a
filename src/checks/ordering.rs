//! Ordering checks.
//!
//! One generic implementation covers every ordered type through the
//! [`Comparable`] capability marker: numbers, characters, strings, and
//! (with the `chrono` feature) dates and times. `std::time::Duration`
//! deliberately stays out of this capability; it has its own unit-aware
//! checks behind [`DurationChecks`](crate::checks::DurationChecks).

use crate::engine::{Check, CheckError, CheckLink, FluentMessage};
use std::fmt;

/// Capability marker for values the ordering checks apply to.
///
/// Any `PartialOrd + Debug` type can opt in:
///
/// ```rust
/// use veracity::prelude::*;
///
/// #[derive(Debug, PartialEq, PartialOrd)]
/// struct Celsius(f64);
///
/// impl veracity::Comparable for Celsius {}
///
/// check_that(Celsius(21.5)).is_less_than(Celsius(30.0));
/// ```
pub trait Comparable: PartialOrd + fmt::Debug {}

macro_rules! impl_comparable {
    ($($ty:ty),* $(,)?) => {
        $(impl Comparable for $ty {})*
    };
}

impl_comparable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, char, &str, String,
);

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::Comparable;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    impl<Tz: TimeZone> Comparable for DateTime<Tz> {}
    impl Comparable for NaiveDate {}
    impl Comparable for NaiveDateTime {}
    impl Comparable for NaiveTime {}
}

/// Ordering checks, available on any [`Comparable`] value.
///
/// The plain variants tolerate equality; the strict ones exclude it. The
/// `is_before`/`is_after` pair shares the strict semantics with wording
/// suited to points in time.
pub trait ComparableChecks<T>: Sized {
    /// Check that the value is less than or equal to the given limit.
    fn is_less_than(self, comparand: T) -> CheckLink<T>;

    /// Check that the value is strictly less than the given comparand.
    fn is_strictly_less_than(self, comparand: T) -> CheckLink<T>;

    /// Check that the value is greater than or equal to the given limit.
    fn is_greater_than(self, comparand: T) -> CheckLink<T>;

    /// Check that the value is strictly greater than the given comparand.
    fn is_strictly_greater_than(self, comparand: T) -> CheckLink<T>;

    /// Check that the value comes strictly before the reference value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that('a').is_before('b');
    /// ```
    fn is_before(self, reference: T) -> CheckLink<T>;

    /// Check that the value comes strictly after the reference value.
    fn is_after(self, reference: T) -> CheckLink<T>;
}

impl<T: Comparable> ComparableChecks<T> for Check<T> {
    fn is_less_than(self, comparand: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is more than the limit.")
            .on(self.value())
            .expected(&comparand)
            .comparison("less than")
            .render();
        let negated = FluentMessage::new("The {0} is less than the limit whereas it must not.")
            .on(self.value())
            .expected(&comparand)
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

    fn is_strictly_less_than(self, comparand: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is not strictly less than the comparand.")
            .on(self.value())
            .expected(&comparand)
            .comparison("strictly less than")
            .render();
        let negated =
            FluentMessage::new("The {0} is strictly less than the comparand whereas it must not.")
                .on(self.value())
                .expected(&comparand)
                .comparison("more than")
                .render();

        self.execute_check(
            move |value| {
                if *value < comparand {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_greater_than(self, comparand: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is less than the limit.")
            .on(self.value())
            .expected(&comparand)
            .comparison("more than")
            .render();
        let negated = FluentMessage::new("The {0} is greater than the limit whereas it must not.")
            .on(self.value())
            .expected(&comparand)
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

    fn is_strictly_greater_than(self, comparand: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is not strictly greater than the comparand.")
            .on(self.value())
            .expected(&comparand)
            .comparison("strictly greater than")
            .render();
        let negated = FluentMessage::new(
            "The {0} is strictly greater than the comparand whereas it must not.",
        )
        .on(self.value())
        .expected(&comparand)
        .comparison("less than")
        .render();

        self.execute_check(
            move |value| {
                if *value > comparand {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_before(self, reference: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is not before the reference value.")
            .on(self.value())
            .expected(&reference)
            .comparison("before")
            .render();
        let negated = FluentMessage::new("The {0} is before the reference value whereas it must not.")
            .on(self.value())
            .expected(&reference)
            .comparison("after")
            .render();

        self.execute_check(
            move |value| {
                if *value < reference {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_after(self, reference: T) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is not after the reference value.")
            .on(self.value())
            .expected(&reference)
            .comparison("after")
            .render();
        let negated = FluentMessage::new("The {0} is after the reference value whereas it must not.")
            .on(self.value())
            .expected(&reference)
            .comparison("before")
            .render();

        self.execute_check(
            move |value| {
                if *value > reference {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
