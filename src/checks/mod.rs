//! The check catalogue.
//!
//! Each submodule contributes an extension trait implemented on `Check<T>`
//! for the types it applies to, so importing the prelude is what brings the
//! checks into scope:
//! - `ordering` - comparisons over the [`Comparable`] capability
//! - `equality` - `is_equal_to` / `is_not_equal_to`
//! - `numbers` - zero and sign checks over the [`Number`] capability
//! - `strings` - substring, prefix/suffix, regex, and wildcard checks
//! - `options` - presence checks, with a pivot into the contained value
//! - `instance` - runtime type checks
//! - `durations` - unit-aware duration comparisons
//! - `code` - checks over the captured outcome of running a closure

mod code;
mod durations;
mod equality;
mod instance;
mod numbers;
mod options;
mod ordering;
mod strings;

pub use code::{check_that_code, CodeChecks, CodeOutcome};
pub use durations::{discover_unit, DurationChecks, TimeUnit};
pub use equality::EqualityChecks;
pub use instance::{build_instance_error, same_type, InstanceChecks};
pub use numbers::{Number, NumberChecks};
pub use options::OptionChecks;
pub use ordering::{Comparable, ComparableChecks};
pub use strings::StringChecks;

#[cfg(test)]
mod tests;
