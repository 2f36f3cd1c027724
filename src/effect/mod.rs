//! Containers that thread context through a computation.
//!
//! - [`Reader`]: computations that read from a shared environment
//! - [`Writer`]: computations that accumulate a log in a chosen monoid
//!
//! Both are pure and synchronous; nothing here performs I/O.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::effect::{Reader, Writer};
//! use algebrars::typeclass::Sum;
//!
//! let scaled = Reader::asks(|factor: i32| factor * 10);
//! assert_eq!(scaled.run_with(3), 30);
//!
//! let counted: Writer<Sum<u32>, &str> = Writer::tell(1)
//!     .then(Writer::tell(1))
//!     .then(Writer::of("done"));
//! assert_eq!(counted.read().log, 2);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::{Read, Writer};
