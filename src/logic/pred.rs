//! Pred container - a boolean predicate as an algebraic value.
//!
//! A `Pred<A>` wraps a function `&A -> bool`. It is a contravariant functor
//! (`contramap` adapts the input it accepts) and a monoid under logical AND
//! with the always-true predicate as identity.
//!
//! # Laws
//!
//! ## Contravariant Laws
//!
//! - Identity: `p.contramap(|x| x.clone()).run_with(x) == p.run_with(x)`
//! - Composition: `p.contramap(|x| f(&g(x))).run_with(x) == p.contramap(f).contramap(g).run_with(x)`
//!
//! ## Monoid Laws
//!
//! - Associativity: `a.concat(&b).concat(&c) == a.concat(&b.concat(&c))`
//! - Identity: `p.concat(&Pred::empty()) == p == Pred::empty().concat(&p)`
//!
//! Equality here means equal results from `run_with` for every input.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::logic::Pred;
//!
//! let in_range = Pred::new(|x: &i32| *x > 0).concat(&Pred::new(|x: &i32| *x < 10));
//!
//! assert!(in_range.run_with(&5));
//! assert!(!in_range.run_with(&-1));
//! assert!(!in_range.run_with(&10));
//! ```
//!
//! A Pred only wraps a predicate function:
//!
//! ```compile_fail
//! use algebrars::logic::Pred;
//!
//! let _: Pred<i32> = Pred::new(|x: &i32| *x + 1);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Algebraic, Contravariant, Monoid, Semigroup};

/// A predicate over values of type `A`.
pub struct Pred<A>
where
    A: 'static,
{
    predicate: Rc<dyn Fn(&A) -> bool>,
}

impl<A> Pred<A>
where
    A: 'static,
{
    /// Wraps a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Self {
            predicate: Rc::new(predicate),
        }
    }

    /// Creates the predicate that accepts every input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::logic::Pred;
    ///
    /// assert!(Pred::<String>::empty().run_with(&String::from("anything")));
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::new(|_| true)
    }

    /// Evaluates the predicate against `value`.
    pub fn run_with(&self, value: &A) -> bool {
        (self.predicate)(value)
    }

    /// Returns the wrapped predicate function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::logic::Pred;
    ///
    /// let is_even = Pred::new(|x: &u8| x % 2 == 0);
    /// let function = is_even.value();
    /// assert!(function(&4));
    /// ```
    pub fn value(&self) -> Rc<dyn Fn(&A) -> bool> {
        Rc::clone(&self.predicate)
    }

    /// Adapts the predicate to accept `B` by converting each input with
    /// `function` first. `function` runs on every `run_with`, never before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::logic::Pred;
    ///
    /// let is_short = Pred::new(|length: &usize| *length < 4);
    /// let short_word = is_short.contramap(|word: &&str| word.len());
    ///
    /// assert!(short_word.run_with(&"cat"));
    /// assert!(!short_word.run_with(&"giraffe"));
    /// ```
    #[must_use]
    pub fn contramap<B, F>(self, function: F) -> Pred<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        let predicate = self.predicate;
        Pred::new(move |value: &B| predicate(&function(value)))
    }

    /// Combines two predicates with logical AND; `other` is only evaluated
    /// when `self` passes.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let left = Rc::clone(&self.predicate);
        let right = Rc::clone(&other.predicate);
        Self::new(move |value| left(value) && right(value))
    }

    /// Returns the debug text `Pred Function`.
    #[must_use]
    pub const fn inspect(&self) -> &'static str {
        "Pred Function"
    }
}

impl<A: 'static> Clone for Pred<A> {
    fn clone(&self) -> Self {
        Self {
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<A: 'static> Algebraic for Pred<A> {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("Pred")
    }
}

impl<A: 'static> Semigroup for Pred<A> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<A: 'static> Monoid for Pred<A> {
    fn empty() -> Self {
        Self::empty()
    }
}

impl<A: 'static> Contravariant for Pred<A> {
    type Input = A;
    type WithInput<B: 'static> = Pred<B>;

    fn contramap<B, F>(self, function: F) -> Pred<B>
    where
        B: 'static,
        F: Fn(&B) -> A + 'static,
    {
        Self::contramap(self, function)
    }
}

impl<A: 'static> fmt::Display for Pred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.inspect())
    }
}

impl<A: 'static> fmt::Debug for Pred<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.inspect())
    }
}

static_assertions::assert_not_impl_any!(Pred<i32>: Send, Sync);
