//! Contravariant functor type class - mapping over the input side.
//!
//! A covariant functor transforms what a container produces; a
//! contravariant functor transforms what it consumes. `contramap(f)` pulls
//! the input backward through `f` before the container sees it, so
//! composition runs in the opposite order to `fmap`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! p.contramap(|x| x) == p
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! p.contramap(|x| f(g(x))) == p.contramap(f).contramap(g)
//! ```

/// A type class for input-consuming containers.
///
/// # Examples
///
/// ```rust
/// use algebrars::logic::Pred;
/// use algebrars::typeclass::Contravariant;
///
/// let is_long = Pred::new(|length: &usize| *length > 3);
/// let has_long_name = is_long.contramap(|name: &String| name.len());
/// assert!(has_long_name.run_with(&String::from("Alexandra")));
/// ```
pub trait Contravariant {
    /// The input type currently consumed.
    type Input;

    /// The same container consuming a different input type.
    type WithInput<B: 'static>;

    /// Adapts the container to consume `B` by converting it with `function`.
    #[must_use]
    fn contramap<B, F>(self, function: F) -> Self::WithInput<B>
    where
        B: 'static,
        F: Fn(&B) -> Self::Input + 'static;
}
