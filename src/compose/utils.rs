//! Primitive combinators.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its argument and returns a fixed value (K combinator)
//! - [`compose_b`]: binary right-to-left composition (B combinator)
//! - [`reverse_apply`]: applies a stored value to a function (T combinator)
//!
//! All four are pure and total. `Reader::of` is built from `constant`, and
//! the functor composition laws are stated with `compose_b`.

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `compose_b(identity, f)` and `compose_b(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use algebrars::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// The returned function is `Fn`, so the value is cloned on every call.
///
/// # Examples
///
/// ```
/// use algebrars::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two unary functions right to left: `compose_b(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use algebrars::compose::compose_b;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose_b(add_one, double)(5), 11);
/// assert_eq!(compose_b(double, add_one)(5), 12);
/// ```
#[inline]
pub fn compose_b<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Captures a value and returns a function that applies any given function to it.
///
/// `reverse_apply(x)(f) == f(x)`. Mapping `reverse_apply(y)` over a wrapped
/// function is how the Applicative interchange law is stated.
///
/// # Examples
///
/// ```
/// use algebrars::compose::reverse_apply;
///
/// let apply_to_ten = reverse_apply(10);
/// assert_eq!(apply_to_ten(|x: i32| x + 1), 11);
/// ```
#[inline]
pub fn reverse_apply<A, B, F>(value: A) -> impl Fn(F) -> B
where
    A: Clone,
    F: FnOnce(A) -> B,
{
    move |function| function(value.clone())
}
