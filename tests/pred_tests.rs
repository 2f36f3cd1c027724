//! Unit tests for Pred and the logic combinators.

use std::cell::Cell;
use std::rc::Rc;

use algebrars::logic::{IntoPred, Pred, and, not, or};
use algebrars::typeclass::{Algebraic, Contravariant, DynAlgebraic, Monoid, mconcat};
use rstest::rstest;

#[derive(Debug, Clone)]
struct User {
    name: String,
    age: u32,
}

fn user(name: &str, age: u32) -> User {
    User {
        name: name.to_string(),
        age,
    }
}

// =============================================================================
// Concat and Empty
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(-1, false)]
#[case(0, false)]
#[case(9, true)]
#[case(10, false)]
fn pred_concat_builds_range(#[case] input: i32, #[case] expected: bool) {
    let in_range = Pred::new(|x: &i32| *x > 0).concat(&Pred::new(|x: &i32| *x < 10));
    assert_eq!(in_range.run_with(&input), expected);
}

#[rstest]
#[case(String::new())]
#[case(String::from("anything"))]
fn pred_empty_accepts_anything(#[case] input: String) {
    assert!(Pred::<String>::empty().run_with(&input));
}

#[rstest]
fn pred_monoid_empty_matches_inherent_empty() {
    let via_trait: Pred<u8> = Monoid::empty();
    assert!(via_trait.run_with(&0));
}

#[rstest]
fn pred_mconcat_requires_every_rule() {
    let rules = vec![
        Pred::new(|user: &User| !user.name.is_empty()),
        Pred::new(|user: &User| user.age >= 18),
        Pred::new(|user: &User| user.age < 130),
    ];
    let valid = mconcat(rules);

    assert!(valid.run_with(&user("ada", 36)));
    assert!(!valid.run_with(&user("", 36)));
    assert!(!valid.run_with(&user("tim", 12)));
}

#[rstest]
fn pred_mconcat_of_nothing_accepts_everything() {
    let valid: Pred<User> = mconcat(Vec::new());
    assert!(valid.run_with(&user("", 0)));
}

// =============================================================================
// Contramap
// =============================================================================

#[rstest]
fn pred_contramap_reads_field() {
    let adult = Pred::new(|age: &u32| *age >= 18).contramap(|user: &User| user.age);
    assert!(adult.run_with(&user("ada", 36)));
    assert!(!adult.run_with(&user("tim", 12)));
}

#[rstest]
fn pred_contramap_runs_conversion_on_every_call() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let long_name = Pred::new(|length: &usize| *length > 3).contramap(move |user: &User| {
        counter.set(counter.get() + 1);
        user.name.len()
    });

    assert!(long_name.run_with(&user("grace", 85)));
    assert!(!long_name.run_with(&user("ada", 36)));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn pred_contramap_through_trait() {
    let even = Pred::new(|x: &i64| x % 2 == 0);
    let even_length = Contravariant::contramap(even, |text: &String| text.len() as i64);
    assert!(even_length.run_with(&String::from("ab")));
}

// =============================================================================
// Value, Inspect and Type Identity
// =============================================================================

#[rstest]
fn pred_value_is_the_wrapped_function() {
    let pred = Pred::new(|x: &i32| *x == 3);
    let function = pred.value();
    assert!(function(&3));
    assert!(!function(&4));
}

#[rstest]
fn pred_inspect_display_and_debug() {
    let pred = Pred::new(|_: &()| true);
    assert_eq!(pred.inspect(), "Pred Function");
    assert_eq!(format!("{pred}"), "Pred Function");
    assert_eq!(format!("{pred:?}"), "Pred Function");
}

#[rstest]
fn pred_tag_ignores_input_type() {
    let pred = Pred::new(|_: &User| true);
    assert_eq!(pred.type_tag(), "Pred");
    assert_eq!(Pred::<i32>::type_name(), "Pred");
}

// =============================================================================
// Logic Combinators
// =============================================================================

#[rstest]
#[case(4, true)]
#[case(3, false)]
#[case(-4, false)]
fn and_accepts_pred_and_function(#[case] input: i32, #[case] expected: bool) {
    let positive = Pred::new(|x: &i32| *x > 0);
    let both = and(positive, |x: &i32| x % 2 == 0);
    assert_eq!(both(&input), expected);
}

#[rstest]
#[case(-150, true)]
#[case(0, false)]
#[case(150, true)]
fn or_accepts_two_preds(#[case] input: i32, #[case] expected: bool) {
    let low = Pred::new(|x: &i32| *x < -100);
    let high = Pred::new(|x: &i32| *x > 100);
    assert_eq!(or(low, high)(&input), expected);
}

#[rstest]
fn not_negates_function() {
    let blank = not(|text: &String| text.is_empty());
    assert!(blank(&String::from("x")));
    assert!(!blank(&String::new()));
}

#[rstest]
fn combinator_results_filter_iterators() {
    let is_teen = and(|age: &u32| *age >= 13, |age: &u32| *age <= 19);
    let teens: Vec<u32> = [9, 13, 17, 20].into_iter().filter(|age| is_teen(age)).collect();
    assert_eq!(teens, vec![13, 17]);
}

#[rstest]
fn combinator_results_wrap_back_into_pred() {
    let digit = Pred::new(and(|c: &char| c.is_ascii(), |c: &char| c.is_numeric()));
    let not_digit = Pred::new(not(digit.clone()));
    assert!(digit.run_with(&'7'));
    assert!(not_digit.run_with(&'x'));
}

#[rstest]
fn into_pred_is_identity_on_pred() {
    let pred = Pred::new(|x: &i32| *x > 1);
    let converted = pred.clone().into_pred();
    assert_eq!(converted.run_with(&2), pred.run_with(&2));
}
