//! Predicates as algebraic values.
//!
//! - [`Pred`]: a contravariant, monoidal wrapper around `&A -> bool`
//! - [`and`], [`or`], [`not`]: combinators accepting a `Pred` or a plain
//!   predicate function through [`IntoPred`]

mod combinators;
mod pred;

pub use combinators::{IntoPred, and, not, or};
pub use pred::Pred;
