//! Type class traits and the `Identity` container.
//!
//! This module provides the algebraic vocabulary the containers in this
//! crate are built from:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying wrapped functions
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Setoid`]: Lawful equality within one type
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Contravariant`]: Mapping over the input side
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior; `Self::WithType<B>` is how a trait says "the same container,
//! holding a `B`", which turns the "same algebraic type" rule into a type
//! equality the compiler checks.
//!
//! ## Runtime type identity
//!
//! - [`Algebraic`]: stable type tag per algebraic type
//! - [`DynAlgebraic`], [`Erased`]: object-safe view for type-erased values
//! - [`is_same_type`], [`is_same_type_as`], [`cast`], [`cast_ref`]:
//!   structural predicates and checked recovery, failing with [`TypeError`]
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity container
//! - [`Sum`], [`Product`], [`Max`], [`Min`], [`All`], [`Any`]: monoid wrappers
//! - [`Wrapped`]: conversion between a wrapper and its raw value
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use algebrars::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use algebrars::typeclass::{Monoid, Sum, mconcat};
//!
//! let numbers = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(mconcat(numbers), Sum::new(6));
//! assert_eq!(mconcat(Vec::<Sum<i32>>::new()), Sum::empty());
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use algebrars::typeclass::{Identity, Monad};
//!
//! let result = Identity::new(3)
//!     .flat_map(|x| Identity::new(x + 1))
//!     .and_then(|x| Identity::new(x * 2));
//! assert_eq!(result.into_value(), 8);
//! ```

mod algebraic;
mod applicative;
mod contravariant;
mod error;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod setoid;
mod wrappers;

pub use algebraic::{
    Algebraic, DynAlgebraic, Erased, cast, cast_ref, erase, is_same_type, is_same_type_as,
};
pub use applicative::Applicative;
pub use contravariant::Contravariant;
pub use error::{Expectation, TypeError, TypeResult};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::{Monoid, mconcat, mconcat_map};
pub use semigroup::Semigroup;
pub use setoid::Setoid;
pub use wrappers::{All, Any, Bounded, Max, Min, Product, Sum, Wrapped};
