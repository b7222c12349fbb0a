//! The assertion engine.
//!
//! Everything checks are made of lives here: the chain context started by
//! `check_that()`, the runner that applies negation, the links that keep a
//! chain going, the failure message builder, and the error type raised when
//! a check fails. The check catalogue in [`crate::checks`] is built entirely
//! on this module, and custom checks layer on the same pieces.

mod chain;
mod error;
mod link;
mod message;

pub use chain::{check_that, Check};
pub use error::CheckError;
pub use link::{CheckLink, OptionCheckLink};
pub use message::{short_type_name, FluentMessage};

pub(crate) use error::raise;
