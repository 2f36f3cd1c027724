//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative. Writer accumulates its log
//! through this operation and Pred composes predicates with it, so every
//! law the containers promise ultimately rests on this one.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Associativity cannot be checked by the compiler. Use
//! [`laws::semigroup_associativity`](crate::laws::semigroup_associativity)
//! to verify a caller-supplied instance at run time.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(String::from("a").combine(String::from("b")), "ab");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{All, Any, Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values using the associative operation.
    ///
    /// The receiver is the left operand; ordering matters for
    /// non-commutative instances such as `String` and `Vec`.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning both operands.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every element of a non-empty iterator from left to right.
    ///
    /// Returns `None` for an empty iterator, since a semigroup has no
    /// identity element to fall back to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::{Semigroup, Max};
    ///
    /// let maximum = Max::reduce_all(vec![Max::new(3), Max::new(9), Max::new(4)]);
    /// assert_eq!(maximum, Some(Max::new(9)));
    /// assert_eq!(Max::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

/// Identity forms a semigroup when its inner type is a semigroup.
impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.into_value().combine(other.into_value()))
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product forms a semigroup under multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Max forms a semigroup by taking the maximum value.
impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

/// Min forms a semigroup by taking the minimum value.
impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

/// All forms a semigroup under logical AND.
impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

/// Any forms a semigroup under logical OR.
impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}
