//! Function composition utilities.
//!
//! # Combinators
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`compose_b`]: Composes two functions right to left
//! - [`reverse_apply`]: Applies a captured value to a function
//!
//! # Pointfree helpers
//!
//! [`pointfree`] exposes `map`, `chain`, `concat` and `contramap` with the
//! container as the last argument.
//!
//! # Examples
//!
//! ```
//! use algebrars::compose::{compose_b, constant, identity, reverse_apply};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose_b(f, g)(x) = f(g(x))
//! let composed = compose_b(add_one, double);
//! assert_eq!(composed(5), 11);
//!
//! assert_eq!(compose_b(identity, add_one)(5), add_one(5));
//! assert_eq!(constant::<_, i32>("k")(99), "k");
//! assert_eq!(reverse_apply(3)(double), 6);
//! ```
//!
//! # Mathematical Background
//!
//! Composition is associative and `identity` is its unit:
//!
//! ```text
//! compose_b(f, compose_b(g, h)) == compose_b(compose_b(f, g), h)
//! compose_b(identity, f) == f == compose_b(f, identity)
//! ```

pub mod pointfree;
mod utils;

pub use utils::{compose_b, constant, identity, reverse_apply};
