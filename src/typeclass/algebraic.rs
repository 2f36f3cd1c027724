//! Runtime type identity for algebraic types.
//!
//! Every container and monoid in this crate carries a stable type tag. The
//! compiler already guarantees that `ap`, `chain`, `concat` and `equals`
//! only ever see operands of the receiver's own type, so the tag is not
//! needed for those. It matters once a value crosses a type-erased boundary:
//! a heterogeneous collection of `Box<dyn DynAlgebraic>`, a plugin registry,
//! or a log line. There the structural predicates in this module take over
//! the role of the compiler's type-equality check.
//!
//! # Structural predicates
//!
//! | Question                          | Answered by                          |
//! |-----------------------------------|--------------------------------------|
//! | is this callable?                 | `Fn`/`FnOnce` bounds (compile time)  |
//! | is this a monoid?                 | [`Monoid`](super::Monoid) bound      |
//! | is this foldable?                 | `IntoIterator` bound                 |
//! | is this the same algebraic type?  | [`is_same_type`], [`is_same_type_as`]|
//!
//! # Examples
//!
//! ```rust
//! use algebrars::typeclass::{Algebraic, DynAlgebraic, Identity, Sum, is_same_type};
//!
//! let erased: Vec<Box<dyn DynAlgebraic>> = vec![
//!     Box::new(Identity::new(1)),
//!     Box::new(Sum::new(2)),
//! ];
//!
//! assert!(is_same_type::<Identity<i32>>(erased[0].as_ref()));
//! assert!(!is_same_type::<Identity<i32>>(erased[1].as_ref()));
//! assert_eq!(erased[1].type_tag(), "Sum");
//! ```

use std::any::Any;
use std::borrow::Cow;

use super::error::{Expectation, TypeError, TypeResult};

/// A type with a stable algebraic type tag.
///
/// The tag identifies the *algebraic* type, not the full Rust type: every
/// `Identity<A>` reports `"Identity"` whatever `A` is, while a `Writer`
/// folds its log monoid into the tag (`"Writer(Sum)"`) because writers over
/// different monoids are never interchangeable.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Algebraic, Identity};
///
/// assert_eq!(Identity::<i32>::type_name(), "Identity");
/// ```
pub trait Algebraic {
    /// Returns the type tag shared by every value of this algebraic type.
    fn type_name() -> Cow<'static, str>
    where
        Self: Sized;
}

/// Object-safe view of an [`Algebraic`] value.
///
/// Implemented for every `'static` [`Algebraic`] type, so any container can
/// be boxed as `Box<dyn DynAlgebraic>` and recovered later with [`cast`].
pub trait DynAlgebraic: Any {
    /// Returns the type tag of this value's algebraic type.
    fn type_tag(&self) -> Cow<'static, str>;

    /// Upcasts to `&dyn Any` for payload-level downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts a boxed value to `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Algebraic + Any> DynAlgebraic for T {
    fn type_tag(&self) -> Cow<'static, str> {
        T::type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A type-erased algebraic value.
pub type Erased = Box<dyn DynAlgebraic>;

/// Boxes a value behind its type tag.
pub fn erase<T: Algebraic + Any>(value: T) -> Erased {
    Box::new(value)
}

/// Returns `true` when `candidate` belongs to the algebraic type `T`.
///
/// Only the tag is compared; payload types are not inspected. Never panics.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Identity, Sum, is_same_type};
///
/// assert!(is_same_type::<Identity<()>>(&Identity::new("payload ignored")));
/// assert!(!is_same_type::<Identity<()>>(&Sum::new(1)));
/// ```
pub fn is_same_type<T: Algebraic>(candidate: &dyn DynAlgebraic) -> bool {
    candidate.type_tag() == T::type_name()
}

/// Returns `true` when both values carry the same type tag.
pub fn is_same_type_as(left: &dyn DynAlgebraic, right: &dyn DynAlgebraic) -> bool {
    left.type_tag() == right.type_tag()
}

/// Recovers a concrete value from an erased one.
///
/// The tag is checked first through [`is_same_type`], so a wrong container
/// is reported as such even when the payload types happen to agree.
///
/// # Errors
///
/// - [`Expectation::SameType`] when the tags differ.
/// - [`Expectation::PayloadType`] when the tags agree but the Rust type does not.
///
/// # Examples
///
/// ```rust
/// use algebrars::typeclass::{Identity, Sum, cast, erase};
///
/// let recovered: Identity<i32> = cast("registry.get", erase(Identity::new(7))).unwrap();
/// assert_eq!(recovered.into_value(), 7);
///
/// let error = cast::<Identity<i32>>("registry.get", erase(Sum::new(7))).unwrap_err();
/// assert_eq!(error.to_string(), "registry.get: Identity required, found Sum");
/// ```
pub fn cast<T: Algebraic + Any>(operation: &'static str, candidate: Erased) -> TypeResult<T> {
    check_tag::<T>(operation, candidate.as_ref())?;
    candidate
        .into_any()
        .downcast::<T>()
        .map(|boxed| {
            tracing::trace!(operation, tag = %T::type_name(), "recovered erased value");
            *boxed
        })
        .map_err(|_| payload_mismatch::<T>(operation))
}

/// Borrowing variant of [`cast`].
///
/// # Errors
///
/// Same conditions as [`cast`].
pub fn cast_ref<'a, T: Algebraic + Any>(
    operation: &'static str,
    candidate: &'a dyn DynAlgebraic,
) -> TypeResult<&'a T> {
    check_tag::<T>(operation, candidate)?;
    candidate
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| payload_mismatch::<T>(operation))
}

fn check_tag<T: Algebraic>(operation: &'static str, candidate: &dyn DynAlgebraic) -> TypeResult<()> {
    if is_same_type::<T>(candidate) {
        return Ok(());
    }
    let expected = T::type_name();
    let found = candidate.type_tag();
    tracing::debug!(operation, %expected, %found, "type tag mismatch");
    Err(TypeError::new(
        operation,
        Expectation::SameType { expected, found },
    ))
}

fn payload_mismatch<T: Algebraic>(operation: &'static str) -> TypeError {
    let expected = T::type_name();
    tracing::debug!(operation, %expected, "payload type mismatch");
    TypeError::new(operation, Expectation::PayloadType { expected })
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Algebraic for String {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("String")
    }
}

impl<T> Algebraic for Vec<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("Vec")
    }
}

impl Algebraic for () {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("Unit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Identity, Product, Sum};
    use rstest::rstest;

    #[rstest]
    fn erased_values_report_their_tags() {
        let values: Vec<Erased> = vec![
            erase(Identity::new(1)),
            erase(String::from("log")),
            erase(Sum::new(3)),
        ];
        let tags: Vec<_> = values.iter().map(|value| value.type_tag()).collect();
        assert_eq!(tags, vec!["Identity", "String", "Sum"]);
    }

    #[rstest]
    fn is_same_type_ignores_payload() {
        let candidate = Identity::new(String::from("text"));
        assert!(is_same_type::<Identity<i32>>(&candidate));
    }

    #[rstest]
    fn is_same_type_as_compares_tags() {
        assert!(is_same_type_as(&Sum::new(1), &Sum::new(2)));
        assert!(!is_same_type_as(&Sum::new(1), &Product::new(2)));
    }

    #[rstest]
    fn cast_rejects_other_algebraic_type() {
        let result = cast::<Sum<i32>>("test", erase(Product::new(2)));
        assert_eq!(
            result,
            Err(TypeError::new(
                "test",
                Expectation::SameType {
                    expected: "Sum".into(),
                    found: "Product".into(),
                },
            ))
        );
    }

    #[rstest]
    fn cast_rejects_other_payload() {
        let result = cast::<Identity<i32>>("test", erase(Identity::new("text")));
        assert_eq!(
            result.map(Identity::into_value),
            Err(TypeError::new(
                "test",
                Expectation::PayloadType {
                    expected: "Identity".into(),
                },
            ))
        );
    }

    #[rstest]
    fn cast_ref_borrows_payload() {
        let erased = erase(Identity::new(5));
        let identity = cast_ref::<Identity<i32>>("test", erased.as_ref()).unwrap();
        assert_eq!(*identity.value(), 5);
    }
}
