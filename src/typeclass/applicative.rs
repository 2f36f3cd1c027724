//! Applicative type class - applying functions within containers.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the container, and `apply`, which applies a wrapped function to a
//! wrapped value of the *same* container type. The `WithType<B>` parameter
//! makes the same-type requirement a compile-time one: an `Identity` holding
//! a function cannot be applied to a `Writer`.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition
//!
//! ```text
//! u.fmap(compose).apply(v).apply(w) == u.apply(v.apply(w))
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and apply wrapped functions.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Applicative, Identity};
///
/// let lifted: Identity<i32> = <Identity<()>>::pure(42);
/// assert_eq!(lifted, Identity::new(42));
///
/// let sum = Identity::new(1).map2(Identity::new(2), |a, b| a + b);
/// assert_eq!(sum, Identity::new(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the wrapped function to the value wrapped by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::{Applicative, Identity};
    ///
    /// let function = Identity::new(|x: i32| x + 1);
    /// assert_eq!(function.apply(Identity::new(5)), Identity::new(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::of(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_value(), other.into_value()))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}
