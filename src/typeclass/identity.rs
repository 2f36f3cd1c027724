//! Identity container - a value with no additional effect.
//!
//! `Identity` wraps exactly one value and implements every capability a
//! container can have without adding behavior of its own, which makes it the
//! reference model for the Functor, Applicative, Monad and Setoid laws.
//!
//! The operations are inherent methods named after the algebraic vocabulary
//! (`map`, `ap`, `of`, `chain`, `equals`, `concat`); the [`Functor`],
//! [`Applicative`] and [`Monad`] trait impls delegate to them so generic code
//! sees the same behavior.
//!
//! [`Functor`]: super::Functor
//! [`Applicative`]: super::Applicative
//! [`Monad`]: super::Monad
//!
//! # Misuse is a compile error
//!
//! `chain` only accepts functions returning an `Identity`:
//!
//! ```compile_fail
//! use algebrars::typeclass::{Identity, Sum};
//!
//! let _ = Identity::new(1).chain(|x| Sum::new(x));
//! ```
//!
//! `ap` requires the receiver to hold a function:
//!
//! ```compile_fail
//! use algebrars::typeclass::Identity;
//!
//! let _ = Identity::new(1).ap(Identity::new(2));
//! ```
//!
//! `map` requires a callable:
//!
//! ```compile_fail
//! use algebrars::typeclass::Identity;
//!
//! let _ = Identity::new(1).map(42);
//! ```

use std::borrow::Cow;
use std::fmt;

use super::algebraic::Algebraic;
use super::setoid::Setoid;
use super::{Semigroup, TypeConstructor};

/// The identity container - wraps a value without adding any behavior.
///
/// The payload is private and never reassigned; [`value`](Identity::value)
/// borrows it and [`into_value`](Identity::into_value) consumes the wrapper.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::Identity;
///
/// let result = Identity::new(42).map(|x| x + 1);
/// assert_eq!(result.into_value(), 43);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A> {
    value: A,
}

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self { value }
    }

    /// Lifts a value into `Identity`; the Applicative `of`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::Identity;
    ///
    /// assert_eq!(Identity::of("x"), Identity::new("x"));
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::new(value)
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Consumes the `Identity` and returns the wrapped value.
    #[inline]
    pub fn into_value(self) -> A {
        self.value
    }

    /// Applies `function` to the wrapped value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.value))
    }

    /// Applies the wrapped function to the value held by `argument`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::Identity;
    ///
    /// let add_one = Identity::new(|x: i32| x + 1);
    /// assert_eq!(add_one.ap(Identity::new(1)), Identity::new(2));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, argument: Identity<B>) -> Identity<C>
    where
        A: FnOnce(B) -> C,
    {
        Identity::new((self.value)(argument.value))
    }

    /// Passes the wrapped value to `function` and returns its result
    /// without re-wrapping.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.value)
    }

    /// Returns debug text of the form `Identity <payload>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::Identity;
    ///
    /// assert_eq!(Identity::new(0).inspect(), "Identity 0");
    /// assert_eq!(Identity::new("a").inspect(), "Identity \"a\"");
    /// ```
    pub fn inspect(&self) -> String
    where
        A: fmt::Debug,
    {
        format!("Identity {:?}", self.value)
    }
}

impl<A: PartialEq> Identity<A> {
    /// Returns `true` when both payloads are equal.
    ///
    /// The operand must be an `Identity` over the same payload type; the
    /// compiler rejects anything else.
    ///
    /// ```compile_fail
    /// use algebrars::typeclass::{Identity, Sum};
    ///
    /// let _ = Identity::new(1).equals(&Sum::new(1));
    /// ```
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<A: Semigroup> Identity<A> {
    /// Combines two semigroup payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::Identity;
    ///
    /// let joined = Identity::new(String::from("a")).concat(Identity::new(String::from("b")));
    /// assert_eq!(joined.value(), "ab");
    /// ```
    #[inline]
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        Self::new(self.value.combine(other.value))
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Algebraic for Identity<A> {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("Identity")
    }
}

impl<A: PartialEq> Setoid for Identity<A> {
    fn equals(&self, other: &Self) -> bool {
        Self::equals(self, other)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Debug> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}
