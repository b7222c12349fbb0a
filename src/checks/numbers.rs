//! Numeric checks built around the additive identity.

use super::ordering::Comparable;
use crate::engine::{Check, CheckError, CheckLink, FluentMessage};

/// Capability marker for numeric values: ordered, comparable to zero.
pub trait Number: Comparable + PartialEq + Sized {
    /// The zero of this type.
    const ZERO: Self;
}

macro_rules! impl_number {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(impl Number for $ty { const ZERO: Self = $zero; })*
    };
}

impl_number!(
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// Zero and sign checks, available on any [`Number`].
pub trait NumberChecks<T>: Sized {
    /// Check that the value is zero.
    fn is_zero(self) -> CheckLink<T>;

    /// Check that the value is not zero.
    fn is_not_zero(self) -> CheckLink<T>;

    /// Check that the value is strictly above zero.
    fn is_strictly_positive(self) -> CheckLink<T>;

    /// Check that the value is strictly below zero.
    fn is_strictly_negative(self) -> CheckLink<T>;
}

impl<T: Number> NumberChecks<T> for Check<T> {
    fn is_zero(self) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is different from zero.")
            .on(self.value())
            .render();
        let negated = FluentMessage::new("The {0} is equal to zero whereas it must not.").render();

        self.execute_check(
            move |value| {
                if *value == T::ZERO {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_not_zero(self) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is equal to zero, whereas it must not.")
            .on(self.value())
            .render();
        let negated = FluentMessage::new("The {0} is different from zero.")
            .on(self.value())
            .render();

        self.execute_check(
            move |value| {
                if *value != T::ZERO {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_strictly_positive(self) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is not strictly positive.")
            .on(self.value())
            .render();
        let negated = FluentMessage::new("The {0} is strictly positive whereas it must not.")
            .on(self.value())
            .render();

        self.execute_check(
            move |value| {
                if *value > T::ZERO {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_strictly_negative(self) -> CheckLink<T> {
        let failure = FluentMessage::new("The {0} is not strictly negative.")
            .on(self.value())
            .render();
        let negated = FluentMessage::new("The {0} is strictly negative whereas it must not.")
            .on(self.value())
            .render();

        self.execute_check(
            move |value| {
                if *value < T::ZERO {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
