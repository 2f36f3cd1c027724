//! Setoid type class - law-abiding equality between values of one type.
//!
//! `equals` only accepts an operand of the receiver's own type, which is the
//! same-type check the containers need; `PartialEq` supplies the payload
//! comparison.
//!
//! # Laws
//!
//! ```text
//! a.equals(&a)                                   // reflexivity
//! a.equals(&b) == b.equals(&a)                   // symmetry
//! a.equals(&b) && b.equals(&c) => a.equals(&c)   // transitivity
//! ```
//!
//! A `PartialEq` that is not an equivalence relation (floating-point `NaN`)
//! breaks reflexivity; [`laws::setoid`](crate::laws::setoid) detects this at
//! run time.

/// A type class for values with a lawful equivalence relation.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Identity, Setoid};
///
/// assert!(Identity::new(3).equals(&Identity::new(3)));
/// assert!(!Identity::new(3).equals(&Identity::new(4)));
/// ```
pub trait Setoid {
    /// Returns `true` when both values are equivalent.
    fn equals(&self, other: &Self) -> bool;
}
