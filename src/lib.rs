//! # algebrars
//!
//! Law-abiding algebraic containers for Rust: `Identity`, `Reader`,
//! `Writer` and `Pred`, together with the type classes, monoid wrappers and
//! primitive combinators they are built from.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Setoid, Semigroup,
//!   Monoid, Contravariant
//! - **Containers**: Identity, Reader (environment), Writer (monoid log),
//!   Pred (contravariant predicate)
//! - **Combinators**: identity, constant, `compose_b`, `reverse_apply`,
//!   pointfree helpers
//! - **Runtime type identity**: stable type tags and checked recovery of
//!   type-erased containers
//! - **Laws**: runtime verification for caller-supplied instances
//!
//! Operations that mix containers of different algebraic types do not
//! compile. The runtime checks in [`typeclass::cast`] and [`laws`] cover what
//! the type system cannot see.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits, monoid wrappers and `Identity`
//! - `compose`: Combinators and pointfree helpers
//! - `effect`: `Reader` and `Writer`
//! - `logic`: `Pred` and the `and`/`or`/`not` combinators
//! - `laws`: Runtime law verification
//! - `serde`: Serialization of `Identity`, wrappers and writer snapshots
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use algebrars::prelude::*;
//!
//! assert_eq!(Identity::new(42).map(|x| x + 1).into_value(), 43);
//!
//! let doubled = Reader::new(|environment: i32| environment * 2);
//! assert_eq!(doubled.run_with(10), 20);
//!
//! let in_range = Pred::new(|x: &i32| *x > 0).concat(&Pred::new(|x: &i32| *x < 10));
//! assert!(in_range.run_with(&5));
//! assert!(Pred::<i32>::empty().run_with(&-1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use algebrars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "logic")]
    pub use crate::logic::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "logic")]
pub mod logic;

#[cfg(feature = "laws")]
pub mod laws;
