//! # veracity
//!
//! A fluent assertion library with chainable checks and readable failure
//! messages.
//!
//! Checks read like sentences and failures explain themselves. A chain
//! starts with [`check_that`], each check either passes silently or panics
//! with a message quoting both sides, and `and()` keeps going on the same
//! value.
//!
//! ## Quick Start
//!
//! ```rust
//! use veracity::prelude::*;
//!
//! check_that(2 + 2).is_equal_to(4).and().is_not_zero();
//! check_that("veracity").starts_with("vera");
//! check_that(Some(31u8)).has_a_value().which().is_less_than(99);
//! ```
//!
//! ## Negation
//!
//! `.not()` inverts the next check, and only that one:
//!
//! ```rust
//! use veracity::prelude::*;
//!
//! check_that(12u8).not().is_zero().and().is_less_than(20);
//! ```
//!
//! ## Failure text
//!
//! ```rust,ignore
//! check_that(5).is_less_than(3);
//!
//! // The checked value is more than the limit.
//! // The checked value:
//! //     [5]
//! // The expected value: less than
//! //     [3]
//! ```
//!
//! ## Custom checks
//!
//! The engine is open: implement an extension trait on [`Check`], build the
//! failure text with [`FluentMessage`], and hand the verdict to
//! [`Check::execute_check`]:
//!
//! ```rust
//! use veracity::{check_that, Check, CheckError, CheckLink, FluentMessage};
//!
//! trait DivisibilityChecks: Sized {
//!     fn is_even(self) -> CheckLink<i64>;
//! }
//!
//! impl DivisibilityChecks for Check<i64> {
//!     fn is_even(self) -> CheckLink<i64> {
//!         let failure = FluentMessage::new("The {0} is odd.")
//!             .on(self.value())
//!             .render();
//!         let negated = FluentMessage::new("The {0} is even whereas it must not.")
//!             .on(self.value())
//!             .render();
//!
//!         self.execute_check(
//!             move |value| {
//!                 if value % 2 == 0 {
//!                     Ok(())
//!                 } else {
//!                     Err(CheckError::AssertionFailed(failure))
//!                 }
//!             },
//!             negated,
//!         )
//!     }
//! }
//!
//! check_that(10i64).is_even();
//! check_that(11i64).not().is_even();
//! ```

pub mod checks;
pub mod engine;

// Entry points
pub use checks::check_that_code;
pub use engine::check_that;

// Engine types
pub use engine::{short_type_name, Check, CheckError, CheckLink, FluentMessage, OptionCheckLink};

// Check traits and capabilities
pub use checks::{
    build_instance_error, discover_unit, same_type, CodeChecks, CodeOutcome, Comparable,
    ComparableChecks, DurationChecks, EqualityChecks, InstanceChecks, Number, NumberChecks,
    OptionChecks, StringChecks, TimeUnit,
};

/// One import for tests: the entry points plus every check trait.
pub mod prelude {
    pub use crate::checks::{
        check_that_code, CodeChecks, ComparableChecks, DurationChecks, EqualityChecks,
        InstanceChecks, NumberChecks, OptionChecks, StringChecks,
    };
    pub use crate::engine::check_that;
}
