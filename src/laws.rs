//! Runtime verification of algebraic laws.
//!
//! The compiler checks that a type *has* `combine`, `empty` and `equals`; it
//! cannot check that they behave. A `Writer` over a non-associative
//! "monoid" type-checks fine and then accumulates logs differently
//! depending on how its chains are nested. The functions here evaluate the
//! laws on concrete samples and report the first one that fails.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::laws::{Law, semigroup_associativity, verify_monoid};
//! use algebrars::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert!(verify_monoid(&[Sum::new(1), Sum::new(-2), Sum::new(7)]).is_ok());
//!
//! // Subtraction has no left identity and is not associative.
//! #[derive(Debug, Clone, PartialEq)]
//! struct Difference(i32);
//!
//! impl Semigroup for Difference {
//!     fn combine(self, other: Self) -> Self {
//!         Difference(self.0 - other.0)
//!     }
//! }
//!
//! impl Monoid for Difference {
//!     fn empty() -> Self {
//!         Difference(0)
//!     }
//! }
//!
//! let samples = [Difference(1), Difference(2), Difference(3)];
//! let violation = verify_monoid(&samples).unwrap_err();
//! assert_eq!(violation.law, Law::MonoidLeftIdentity);
//!
//! let violation = semigroup_associativity(&samples[0], &samples[1], &samples[2]).unwrap_err();
//! assert_eq!(violation.law, Law::SemigroupAssociativity);
//! ```

use std::any::type_name;
use std::fmt;

use thiserror::Error;

use crate::typeclass::{Monoid, Semigroup, Setoid};

/// An algebraic law checked by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `a.combine(b).combine(c) == a.combine(b.combine(c))`
    SemigroupAssociativity,
    /// `empty().combine(a) == a`
    MonoidLeftIdentity,
    /// `a.combine(empty()) == a`
    MonoidRightIdentity,
    /// `a.equals(a)`
    SetoidReflexivity,
    /// `a.equals(b) == b.equals(a)`
    SetoidSymmetry,
    /// `a.equals(b) && b.equals(c)` implies `a.equals(c)`
    SetoidTransitivity,
}

impl fmt::Display for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SemigroupAssociativity => "semigroup associativity",
            Self::MonoidLeftIdentity => "monoid left identity",
            Self::MonoidRightIdentity => "monoid right identity",
            Self::SetoidReflexivity => "setoid reflexivity",
            Self::SetoidSymmetry => "setoid symmetry",
            Self::SetoidTransitivity => "setoid transitivity",
        };
        formatter.write_str(name)
    }
}

/// A law that failed for some sample of `subject`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{subject} violates {law}")]
pub struct LawViolation {
    /// The law that failed.
    pub law: Law,
    /// The Rust type name of the value under test.
    pub subject: &'static str,
}

/// Result type for law checks.
pub type LawResult = Result<(), LawViolation>;

fn check<T>(law: Law, holds: bool) -> LawResult {
    if holds {
        return Ok(());
    }
    let subject = type_name::<T>();
    tracing::debug!(%law, subject, "algebraic law violated");
    Err(LawViolation { law, subject })
}

/// Checks associativity of `combine` for one triple.
pub fn semigroup_associativity<S>(a: &S, b: &S, c: &S) -> LawResult
where
    S: Semigroup + Clone + PartialEq,
{
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.clone().combine(b.clone().combine(c.clone()));
    check::<S>(Law::SemigroupAssociativity, left == right)
}

/// Checks that `empty()` is a left and right identity for `a`.
pub fn monoid_identity<M>(a: &M) -> LawResult
where
    M: Monoid + Clone + PartialEq,
{
    check::<M>(Law::MonoidLeftIdentity, M::empty().combine(a.clone()) == *a)?;
    check::<M>(Law::MonoidRightIdentity, a.clone().combine(M::empty()) == *a)
}

/// Checks reflexivity, symmetry and transitivity of `equals` for one triple.
///
/// # Examples
///
/// ```rust
/// use algebrars::laws::{Law, setoid};
/// use algebrars::typeclass::Identity;
///
/// let one = Identity::new(1.0);
/// assert!(setoid(&one, &one, &one).is_ok());
///
/// let nan = Identity::new(f64::NAN);
/// assert_eq!(setoid(&nan, &one, &one).unwrap_err().law, Law::SetoidReflexivity);
/// ```
pub fn setoid<S: Setoid>(a: &S, b: &S, c: &S) -> LawResult {
    for value in [a, b, c] {
        check::<S>(Law::SetoidReflexivity, value.equals(value))?;
    }
    check::<S>(Law::SetoidSymmetry, a.equals(b) == b.equals(a))?;
    check::<S>(
        Law::SetoidTransitivity,
        !(a.equals(b) && b.equals(c)) || a.equals(c),
    )
}

/// Runs [`monoid_identity`] on every sample and [`semigroup_associativity`]
/// on every ordered triple of samples.
pub fn verify_monoid<M>(samples: &[M]) -> LawResult
where
    M: Monoid + Clone + PartialEq,
{
    samples.iter().try_for_each(monoid_identity)?;
    for a in samples {
        for b in samples {
            for c in samples {
                semigroup_associativity(a, b, c)?;
            }
        }
    }
    Ok(())
}
