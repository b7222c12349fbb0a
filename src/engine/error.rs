//! Structured failures raised by the engine.

use thiserror::Error;

/// A failure produced while running a check.
///
/// The `Display` form of every variant is the complete text shown to the
/// user. The engine propagates a `CheckError` by panicking with that text,
/// which keeps the message intact for `#[should_panic(expected = ...)]`
/// and for `check_that_code` recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A check condition did not hold, or held while negated.
    #[error("{0}")]
    AssertionFailed(String),

    /// A pivot into a contained value was requested but the chain holds none.
    #[error("\nThere is no value to be checked.")]
    NoValueToCheck,

    /// A caller-supplied pattern did not compile. This is a usage error,
    /// never an assertion verdict, so negation does not absorb it.
    #[error("invalid {kind} pattern [{pattern}]: {reason}")]
    BadPattern {
        /// Pattern dialect, `regex` or `wildcard`.
        kind: &'static str,
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The compiler's own description of the problem.
        reason: String,
    },
}

/// Abort the current chain by panicking with the failure text.
pub(crate) fn raise(error: CheckError) -> ! {
    panic!("{error}")
}
