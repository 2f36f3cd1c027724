//! Pointfree forms of the container operations.
//!
//! Each helper takes the function (or the operand) first and the container
//! last, so it can be partially applied and passed around before a
//! container exists. Mapping over a plain function is composition, which is
//! [`compose_b`](super::compose_b).

use crate::typeclass::{Contravariant, Functor, Monad, Semigroup};

/// Maps `function` over any [`Functor`].
///
/// # Examples
///
/// ```
/// use algebrars::compose::pointfree;
/// use algebrars::typeclass::Identity;
///
/// assert_eq!(pointfree::map(|x: i32| x * 10, Identity::new(2)), Identity::new(20));
/// ```
#[inline]
pub fn map<T, B, F>(function: F, container: T) -> T::WithType<B>
where
    T: Functor,
    F: FnOnce(T::Inner) -> B,
{
    container.fmap(function)
}

/// Chains `function` over any [`Monad`].
#[inline]
pub fn chain<T, B, F>(function: F, container: T) -> T::WithType<B>
where
    T: Monad,
    F: FnOnce(T::Inner) -> T::WithType<B>,
{
    container.flat_map(function)
}

/// Appends `other` to `semigroup`: `concat(x, m) == m.combine(x)`.
///
/// # Examples
///
/// ```
/// use algebrars::compose::pointfree;
///
/// assert_eq!(pointfree::concat(String::from("!"), String::from("hey")), "hey!");
/// ```
#[inline]
pub fn concat<S: Semigroup>(other: S, semigroup: S) -> S {
    semigroup.combine(other)
}

/// Contramaps `function` over any [`Contravariant`].
#[inline]
pub fn contramap<T, B, F>(function: F, container: T) -> T::WithInput<B>
where
    T: Contravariant,
    B: 'static,
    F: Fn(&B) -> T::Input + 'static,
{
    container.contramap(function)
}
