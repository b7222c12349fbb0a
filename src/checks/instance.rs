//! Runtime type checks.
//!
//! With the chain generic over the value type, the runtime type of a checked
//! value is its static type; these checks compare `TypeId`s and earn their
//! keep through the message, which annotates the value with both types.
//! Note that `None::<u8>` is an `Option<u8>` here, not a missing `u8`.

use crate::engine::{short_type_name, Check, CheckError, CheckLink, FluentMessage};
use std::any::TypeId;
use std::fmt;

/// Whether `T` and `U` are the same runtime type.
pub fn same_type<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// Render the failure message for an instance check against type `U`.
///
/// `expecting_match` picks the direction: `true` renders the message for a
/// failed `is_instance_of`, `false` the one for a failed
/// `is_not_instance_of`.
pub fn build_instance_error<T, U>(value: &T, expecting_match: bool) -> String
where
    T: fmt::Debug + ?Sized + 'static,
    U: ?Sized + 'static,
{
    let target = short_type_name::<U>();

    if expecting_match {
        FluentMessage::new(format!("The {{0}} is not an instance of [{target}]."))
            .on_with_type(value)
            .expected_text(format!("an instance of type: [{target}]"))
            .render()
    } else {
        FluentMessage::new(format!(
            "The {{0}} is an instance of [{target}] whereas it must not."
        ))
        .on_with_type(value)
        .expected_text(format!("anything but an instance of type: [{target}]"))
        .render()
    }
}

/// Runtime type checks, available on any `Debug + 'static` value.
pub trait InstanceChecks<T>: Sized {
    /// Check that the value's type is exactly `U`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veracity::prelude::*;
    ///
    /// check_that(2u8).is_instance_of::<u8>();
    /// check_that(Some(2u8)).is_instance_of::<Option<u8>>();
    /// ```
    fn is_instance_of<U: 'static>(self) -> CheckLink<T>;

    /// Check that the value's type is anything but `U`.
    fn is_not_instance_of<U: 'static>(self) -> CheckLink<T>;
}

impl<T: fmt::Debug + 'static> InstanceChecks<T> for Check<T> {
    fn is_instance_of<U: 'static>(self) -> CheckLink<T> {
        let failure = build_instance_error::<T, U>(self.value(), true);
        let negated = build_instance_error::<T, U>(self.value(), false);

        self.execute_check(
            move |_| {
                if same_type::<T, U>() {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }

    fn is_not_instance_of<U: 'static>(self) -> CheckLink<T> {
        let failure = build_instance_error::<T, U>(self.value(), false);
        let negated = build_instance_error::<T, U>(self.value(), true);

        self.execute_check(
            move |_| {
                if !same_type::<T, U>() {
                    Ok(())
                } else {
                    Err(CheckError::AssertionFailed(failure))
                }
            },
            negated,
        )
    }
}
