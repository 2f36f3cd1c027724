//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Identity<_>` or
//! `Writer<Sum<i32>, _>` directly. [`TypeConstructor`] names the constructor
//! through a Generic Associated Type so that [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) can be
//! written once for every container that fits the shape.
//!
//! # Example
//!
//! ```rust
//! use algebrars::typeclass::{Identity, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabelled: Identity<String> = relabel(Identity::new(42));
//! assert_eq!(relabelled.into_value(), String::new());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// Containers whose other parameters are fixed (the log monoid of a
/// `Writer`, for example) keep those parameters in `WithType<B>`, so a
/// mapped container is always of the same algebraic type as its source.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
