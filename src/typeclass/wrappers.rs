//! Newtype wrappers that select a monoid for an underlying type.
//!
//! The same underlying type can combine in several lawful ways: integers
//! add (`Sum`) or multiply (`Product`), booleans AND (`All`) or OR (`Any`).
//! Each wrapper fixes one choice and carries its own type tag, which is what
//! tells a `Writer<Sum<i32>, _>` apart from a `Writer<Product<i32>, _>`.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: maximum (identity: type minimum)
//! - [`Min`]: minimum (identity: type maximum)
//! - [`All`]: logical AND (identity: `true`)
//! - [`Any`]: logical OR (identity: `false`)
//!
//! # Raw values
//!
//! [`Wrapped`] converts between a wrapper and the raw value it holds. A
//! Writer stores its log wrapped and only hands the raw form out through
//! `read()`.

use std::borrow::Cow;

use super::algebraic::Algebraic;

/// Conversion between a monoid value and its raw representation.
///
/// Types that are already their own monoid (`String`, `Vec<T>`, `()`) use
/// themselves as the raw form.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Sum, Wrapped};
///
/// let wrapped = Sum::from_raw(5);
/// assert_eq!(wrapped, Sum::new(5));
/// assert_eq!(wrapped.into_raw(), 5);
/// ```
pub trait Wrapped {
    /// The raw value held by the wrapper.
    type Raw;

    /// Wraps a raw value.
    fn from_raw(raw: Self::Raw) -> Self;

    /// Unwraps to the raw value.
    fn into_raw(self) -> Self::Raw;
}

macro_rules! impl_wrapper_traits {
    ($name:ident<$param:ident>) => {
        impl<$param> From<$param> for $name<$param> {
            fn from(value: $param) -> Self {
                Self(value)
            }
        }

        impl<$param> Wrapped for $name<$param> {
            type Raw = $param;

            fn from_raw(raw: $param) -> Self {
                Self(raw)
            }

            fn into_raw(self) -> $param {
                self.0
            }
        }

        impl<$param> Algebraic for $name<$param> {
            fn type_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($name))
            }
        }
    };
    ($name:ident($inner:ty)) => {
        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl Wrapped for $name {
            type Raw = $inner;

            fn from_raw(raw: $inner) -> Self {
                Self(raw)
            }

            fn into_raw(self) -> $inner {
                self.0
            }
        }

        impl Algebraic for $name {
            fn type_name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($name))
            }
        }
    };
}

// =============================================================================
// Numeric Wrappers
// =============================================================================

/// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

/// The multiplicative monoid: `Product(a).combine(Product(b)) == Product(a * b)`,
/// identity `Product(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

/// Keeps the larger value; identity is the type's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

/// Keeps the smaller value; identity is the type's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

// =============================================================================
// Boolean Wrappers
// =============================================================================

/// The conjunction monoid: combines with `&&`, identity `All(true)`.
///
/// This is the monoid a [`Pred`](crate::logic::Pred) evaluates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

/// The disjunction monoid: combines with `||`, identity `Any(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

macro_rules! impl_inherent {
    ($name:ident<$param:ident>) => {
        impl<$param> $name<$param> {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: $param) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $param {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &$param {
                &self.0
            }
        }
    };
    ($name:ident($inner:ty)) => {
        impl $name {
            /// Wraps the given value.
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns the inner value.
            #[inline]
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }
    };
}

impl_inherent!(Sum<A>);
impl_inherent!(Product<A>);
impl_inherent!(Max<A>);
impl_inherent!(Min<A>);
impl_inherent!(All(bool));
impl_inherent!(Any(bool));

impl_wrapper_traits!(Sum<A>);
impl_wrapper_traits!(Product<A>);
impl_wrapper_traits!(Max<A>);
impl_wrapper_traits!(Min<A>);
impl_wrapper_traits!(All(bool));
impl_wrapper_traits!(Any(bool));

// =============================================================================
// Self-wrapped Monoids
// =============================================================================

impl Wrapped for String {
    type Raw = Self;

    fn from_raw(raw: Self) -> Self {
        raw
    }

    fn into_raw(self) -> Self {
        self
    }
}

impl<T> Wrapped for Vec<T> {
    type Raw = Self;

    fn from_raw(raw: Self) -> Self {
        raw
    }

    fn into_raw(self) -> Self {
        self
    }
}

impl Wrapped for () {
    type Raw = Self;

    fn from_raw(raw: Self) -> Self {
        raw
    }

    fn into_raw(self) -> Self {
        self
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a minimum and maximum value.
///
/// Required for `Max` and `Min` to have monoid instances.
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
