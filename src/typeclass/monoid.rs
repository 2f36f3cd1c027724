//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a [`Semigroup`] with an element `empty` that leaves every
//! other value unchanged under `combine`. Writer needs it to build a log for
//! `of`, and Pred's `empty` is the always-true predicate.
//!
//! # Laws
//!
//! In addition to associativity:
//!
//! ```text
//! Self::empty().combine(a) == a   // left identity
//! a.combine(Self::empty()) == a   // right identity
//! ```
//!
//! # Folding helpers
//!
//! [`mconcat`] folds any foldable (`IntoIterator`) of monoid values starting
//! from `empty`; [`mconcat_map`] lifts each element into the monoid first.
//!
//! ```rust
//! use algebrars::typeclass::{Sum, mconcat, mconcat_map};
//!
//! assert_eq!(mconcat(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
//! assert_eq!(mconcat_map(Sum::new, [4, 5, 6]), Sum::new(15));
//! ```

use std::ops::Add;

use super::Identity;
use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::typeclass::Monoid;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::combine_all(parts), "ab");
    /// assert_eq!(String::combine_all(Vec::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

/// Folds a foldable of monoid values, returning `M::empty()` when it is empty.
pub fn mconcat<M, I>(values: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    M::combine_all(values)
}

/// Maps every element into the monoid `M` and folds the results left to right.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{All, mconcat_map};
///
/// let all_positive = mconcat_map(|value: i32| All::new(value > 0), vec![3, 1, 2]);
/// assert_eq!(all_positive, All::new(true));
/// ```
pub fn mconcat_map<M, B, F, I>(function: F, values: I) -> M
where
    M: Monoid,
    F: FnMut(B) -> M,
    I: IntoIterator<Item = B>,
{
    M::combine_all(values.into_iter().map(function))
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

/// Identity forms a monoid when its inner type is a monoid.
impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self::new(T::empty())
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with `Default` (zero) as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_monoid {
    ($one:literal => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_monoid!(1.0 => f32, f64);

/// Max forms a monoid with the minimum bound as the identity.
impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Min forms a monoid with the maximum bound as the identity.
impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}
