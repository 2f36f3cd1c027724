//! Error types for runtime type checks.
//!
//! Most misuse of a container is a compile error. The errors here cover the
//! boundary where that guarantee is given up on purpose: containers that
//! have been erased to `Box<dyn DynAlgebraic>` and must be recovered as a
//! concrete type before they can be used again.

use std::borrow::Cow;

use thiserror::Error;

/// The expectation a runtime type check found unmet.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::Expectation;
///
/// let expectation = Expectation::SameType {
///     expected: "Identity".into(),
///     found: "Pred".into(),
/// };
/// assert_eq!(expectation.to_string(), "Identity required, found Pred");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Expectation {
    /// The candidate carries a different type tag than the one required.
    #[error("{expected} required, found {found}")]
    SameType {
        /// Tag of the required algebraic type.
        expected: Cow<'static, str>,
        /// Tag carried by the candidate.
        found: Cow<'static, str>,
    },

    /// The tags agree but the candidate wraps a different payload type,
    /// e.g. an `Identity<String>` offered where an `Identity<i32>` is needed.
    #[error("{expected} with matching payload type required")]
    PayloadType {
        /// Tag shared by both containers.
        expected: Cow<'static, str>,
    },
}

/// An invalid-usage condition raised at the point of violation.
///
/// The message names the operation that rejected its argument and the
/// expectation that was not met.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Expectation, TypeError};
///
/// let error = TypeError::new(
///     "Identity.equals",
///     Expectation::SameType { expected: "Identity".into(), found: "Reader".into() },
/// );
/// assert_eq!(error.to_string(), "Identity.equals: Identity required, found Reader");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: {expectation}")]
pub struct TypeError {
    /// The operation that rejected its argument.
    pub operation: &'static str,
    /// What the operation required.
    pub expectation: Expectation,
}

impl TypeError {
    /// Creates a new `TypeError`.
    pub const fn new(operation: &'static str, expectation: Expectation) -> Self {
        Self {
            operation,
            expectation,
        }
    }
}

/// Result alias for operations that perform runtime type checks.
pub type TypeResult<T> = Result<T, TypeError>;
