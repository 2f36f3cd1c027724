//! Monad type class - sequencing computations with dependency.
//!
//! `Monad` extends [`Applicative`] with `flat_map` (`chain`): the value in
//! one container decides which container comes next, and the result is
//! flattened rather than nested. Because the continuation must return
//! `Self::WithType<B>`, returning any other container type is rejected by
//! the compiler.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Identity, Monad};
///
/// let result = Identity::new(5).flat_map(|n| Identity::new(n * 2));
/// assert_eq!(result, Identity::new(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_flat_map_flattens() {
        assert_eq!(
            Identity::new(3).flat_map(|n| Identity::new(n + 1)),
            Identity::new(4)
        );
    }

    #[rstest]
    fn identity_then_discards_first() {
        assert_eq!(Identity::new(3).then(Identity::new("next")), Identity::new("next"));
    }

    #[rstest]
    fn identity_left_identity_law() {
        let function = |n: i32| Identity::new(n * 7);
        assert_eq!(<Identity<()>>::pure(6).flat_map(function), function(6));
    }
}
