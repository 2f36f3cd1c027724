//! Boolean combinators over predicates.
//!
//! `and`, `or` and `not` accept either a [`Pred`] or a plain predicate
//! function (anything implementing [`IntoPred`]) and return a plain
//! predicate function, so the result can be handed to `Iterator::filter`
//! or wrapped again with [`Pred::new`].

use super::pred::Pred;

/// Conversion into a [`Pred`].
///
/// Implemented for `Pred<A>` itself and for every `Fn(&A) -> bool`.
pub trait IntoPred<A: 'static> {
    /// Converts `self` into a predicate.
    fn into_pred(self) -> Pred<A>;
}

impl<A: 'static> IntoPred<A> for Pred<A> {
    fn into_pred(self) -> Pred<A> {
        self
    }
}

impl<A, F> IntoPred<A> for F
where
    A: 'static,
    F: Fn(&A) -> bool + 'static,
{
    fn into_pred(self) -> Pred<A> {
        Pred::new(self)
    }
}

/// Returns a predicate that holds when both `left` and `right` hold.
///
/// # Examples
///
/// ```rust
/// use algebrars::logic::{Pred, and};
///
/// let positive_even = and(Pred::new(|x: &i32| *x > 0), |x: &i32| x % 2 == 0);
///
/// assert!(positive_even(&4));
/// assert!(!positive_even(&-4));
/// assert!(!positive_even(&3));
/// ```
pub fn and<A, L, R>(left: L, right: R) -> impl Fn(&A) -> bool
where
    A: 'static,
    L: IntoPred<A>,
    R: IntoPred<A>,
{
    let left = left.into_pred();
    let right = right.into_pred();
    move |value: &A| left.run_with(value) && right.run_with(value)
}

/// Returns a predicate that holds when `left` or `right` holds.
///
/// # Examples
///
/// ```rust
/// use algebrars::logic::or;
///
/// let extreme = or(|x: &i32| *x < -100, |x: &i32| *x > 100);
///
/// assert!(extreme(&101));
/// assert!(!extreme(&0));
/// ```
pub fn or<A, L, R>(left: L, right: R) -> impl Fn(&A) -> bool
where
    A: 'static,
    L: IntoPred<A>,
    R: IntoPred<A>,
{
    let left = left.into_pred();
    let right = right.into_pred();
    move |value: &A| left.run_with(value) || right.run_with(value)
}

/// Returns the negation of `predicate`.
pub fn not<A, P>(predicate: P) -> impl Fn(&A) -> bool
where
    A: 'static,
    P: IntoPred<A>,
{
    let predicate = predicate.into_pred();
    move |value: &A| !predicate.run_with(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_positive(value: &i32) -> bool {
        *value > 0
    }

    #[rstest]
    #[case(2, true)]
    #[case(0, false)]
    #[case(-2, false)]
    fn and_mixes_functions_and_preds(#[case] input: i32, #[case] expected: bool) {
        let even = Pred::new(|x: &i32| x % 2 == 0);
        assert_eq!(and(is_positive, even)(&input), expected);
    }

    #[rstest]
    #[case(-1, true)]
    #[case(0, true)]
    #[case(1, false)]
    fn or_holds_when_either_holds(#[case] input: i32, #[case] expected: bool) {
        assert_eq!(or(|x: &i32| *x < 0, |x: &i32| *x == 0)(&input), expected);
    }

    #[rstest]
    fn not_negates_pred() {
        let not_positive = not(Pred::new(is_positive));
        assert!(not_positive(&0));
        assert!(!not_positive(&1));
    }

    #[rstest]
    fn combinators_feed_iterator_filter() {
        let picked: Vec<i32> = (-3..=3).filter(|x| and(is_positive, not(|y: &i32| *y == 2))(x)).collect();
        assert_eq!(picked, vec![1, 3]);
    }

    #[rstest]
    fn result_rewraps_as_pred() {
        let wrapped = Pred::new(or(is_positive, |x: &i32| *x == -7));
        assert!(wrapped.run_with(&-7));
        assert!(!wrapped.run_with(&-6));
    }
}
