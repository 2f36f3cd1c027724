//! Writer container - a value paired with an accumulated log.
//!
//! A `Writer<M, A>` holds a result of type `A` and a log of type `M`, where
//! `M` is the monoid that decides how logs combine. Each `chain` step
//! appends the next log to the current one with `M::combine`, left to
//! right, so a pipeline of writers accumulates its log in order.
//!
//! The monoid is a type parameter, so writers over different monoids are
//! different Rust types with different tags (`"Writer(Sum)"`,
//! `"Writer(Product)"`) and can never be mixed.
//!
//! # Raw entries and wrapped logs
//!
//! The log is always stored as `M`. Constructors and [`tell`](Writer::tell)
//! take the monoid's raw form (`M::Raw`, for example `i32` for `Sum<i32>`)
//! and wrap it through [`Wrapped::from_raw`]; [`read`](Writer::read) is the
//! one place the raw form comes back out.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `writer.map(|x| x) == writer`
//! - Composition: `writer.map(f).map(g) == writer.map(|x| g(f(x)))`
//!
//! ## Apply Composition
//!
//! `ap` is defined through `chain`, so its composition law rests on `chain`
//! associativity and on `M::combine` being associative. The law suite checks
//! it directly.
//!
//! ## Monad Laws
//!
//! - Left Identity: `Writer::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(Writer::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! # Examples
//!
//! ```rust
//! use algebrars::effect::Writer;
//! use algebrars::typeclass::Sum;
//!
//! type Logged<A> = Writer<Sum<i32>, A>;
//!
//! let total: Logged<&str> = Logged::new(2, "start")
//!     .chain(|_| Logged::new(3, "middle"))
//!     .chain(|_| Logged::new(5, "end"));
//!
//! let read = total.read();
//! assert_eq!(read.log, 10);
//! assert_eq!(read.value, "end");
//! ```
//!
//! The log type must be a monoid:
//!
//! ```compile_fail
//! use algebrars::effect::Writer;
//!
//! let _ = Writer::<i32, i32>::of(1);
//! ```
//!
//! and `chain` only accepts continuations returning a writer over the same
//! monoid:
//!
//! ```compile_fail
//! use algebrars::effect::Writer;
//! use algebrars::typeclass::{Product, Sum};
//!
//! let _ = Writer::<Sum<i32>, i32>::of(1).chain(|x| Writer::<Product<i32>, i32>::of(x));
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::typeclass::{
    Algebraic, Applicative, Functor, Monad, Monoid, Setoid, TypeConstructor, Wrapped,
};

/// A result value paired with a log accumulated in the monoid `M`.
///
/// # Examples
///
/// ```rust
/// use algebrars::effect::Writer;
///
/// let writer: Writer<String, i32> = Writer::new("a".to_string(), 1)
///     .chain(|value| Writer::new("b".to_string(), value + 1));
///
/// let read = writer.read();
/// assert_eq!(read.log, "ab");
/// assert_eq!(read.value, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    log: M,
    value: A,
}

/// A snapshot of a writer with its log in raw form, returned by
/// [`Writer::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Read<L, A> {
    /// The accumulated log, unwrapped.
    pub log: L,
    /// The result value.
    pub value: A,
}

impl<M, A> Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    /// Creates a writer from a raw log entry and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Writer;
    /// use algebrars::typeclass::Sum;
    ///
    /// let writer: Writer<Sum<i32>, &str> = Writer::new(3, "value");
    /// assert_eq!(writer.log(), &Sum::new(3));
    /// ```
    pub fn new(entry: M::Raw, value: A) -> Self {
        Self {
            log: M::from_raw(entry),
            value,
        }
    }

    /// Creates a writer with an empty log.
    pub fn of(value: A) -> Self {
        Self {
            log: M::empty(),
            value,
        }
    }

    /// Borrows the wrapped log.
    pub const fn log(&self) -> &M {
        &self.log
    }

    /// Borrows the result value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Returns the log (unwrapped) and the value.
    pub fn read(&self) -> Read<M::Raw, A>
    where
        M: Clone,
        A: Clone,
    {
        self.clone().into_read()
    }

    /// Consumes the writer, returning the log (unwrapped) and the value.
    pub fn into_read(self) -> Read<M::Raw, A> {
        Read {
            log: self.log.into_raw(),
            value: self.value,
        }
    }

    /// Maps `function` over the value; the log is untouched.
    pub fn map<B, F>(self, function: F) -> Writer<M, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer {
            log: self.log,
            value: function(self.value),
        }
    }

    /// Applies the wrapped function to the value of `argument`, appending
    /// the argument's log to this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Writer;
    /// use algebrars::typeclass::Sum;
    ///
    /// let function: Writer<Sum<i32>, fn(i32) -> i32> = Writer::new(1, |x| x * 10);
    /// let applied = function.ap(Writer::new(2, 4));
    ///
    /// assert_eq!(applied.value(), &40);
    /// assert_eq!(applied.log(), &Sum::new(3));
    /// ```
    pub fn ap<B, C>(self, argument: Writer<M, B>) -> Writer<M, C>
    where
        A: FnOnce(B) -> C,
    {
        self.chain(|function| argument.map(function))
    }

    /// Passes the value to `function` and appends the returned writer's log
    /// to this one.
    pub fn chain<B, F>(self, function: F) -> Writer<M, B>
    where
        F: FnOnce(A) -> Writer<M, B>,
    {
        let next = function(self.value);
        Writer {
            log: self.log.combine(next.log),
            value: next.value,
        }
    }

    /// Sequences two writers, keeping the second value and both logs.
    #[must_use]
    pub fn then<B>(self, next: Writer<M, B>) -> Writer<M, B> {
        self.chain(|_| next)
    }

    /// Combines the values of two writers with `function`, appending their logs.
    pub fn map2<B, C, F>(self, other: Writer<M, B>, function: F) -> Writer<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Writer {
            log: self.log.combine(other.log),
            value: function(self.value, other.value),
        }
    }

    /// Returns `true` when both values are equal. Logs are not compared;
    /// use `==` to compare value and log together.
    pub fn equals(&self, other: &Self) -> bool
    where
        A: PartialEq,
    {
        self.value == other.value
    }

    /// Returns debug text of the form `Writer(<log> <value>)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Writer;
    /// use algebrars::typeclass::Sum;
    ///
    /// let writer: Writer<Sum<i32>, i32> = Writer::new(1, 5);
    /// assert_eq!(writer.inspect(), "Writer(Sum(1) 5)");
    /// ```
    pub fn inspect(&self) -> String
    where
        M: fmt::Debug,
        A: fmt::Debug,
    {
        format!("Writer({:?} {:?})", self.log, self.value)
    }
}

// =============================================================================
// MonadWriter Operations (as inherent methods)
// =============================================================================

impl<M> Writer<M, ()>
where
    M: Monoid + Wrapped + Algebraic,
{
    /// Creates a writer that only records `entry`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Writer;
    ///
    /// let logged = Writer::<Vec<&str>, ()>::tell(vec!["step 1"])
    ///     .then(Writer::tell(vec!["step 2"]))
    ///     .then(Writer::of(42));
    ///
    /// assert_eq!(logged.into_read().log, vec!["step 1", "step 2"]);
    /// ```
    pub fn tell(entry: M::Raw) -> Self {
        Self::new(entry, ())
    }
}

impl<M, A> Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    /// Pairs the value of `computation` with a copy of its raw log.
    pub fn listen(computation: Self) -> Writer<M, (A, M::Raw)>
    where
        M: Clone,
    {
        let captured = computation.log.clone().into_raw();
        computation.map(|value| (value, captured))
    }

    /// Rewrites the raw log of `computation` with `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Writer;
    ///
    /// let writer: Writer<String, i32> = Writer::new("hello".to_string(), 42);
    /// let censored = Writer::censor(|log: String| log.to_uppercase(), writer);
    /// assert_eq!(censored.into_read().log, "HELLO");
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(M::Raw) -> M::Raw,
    {
        Self {
            log: M::from_raw(modifier(computation.log.into_raw())),
            value: computation.value,
        }
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<M, A> Algebraic for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Writer({})", M::type_name()))
    }
}

impl<M, A> TypeConstructor for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    type Inner = A;
    type WithType<B> = Writer<M, B>;
}

impl<M, A> Functor for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    fn fmap<B, F>(self, function: F) -> Writer<M, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<M, A> Applicative for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    fn pure<B>(value: B) -> Writer<M, B> {
        Writer::of(value)
    }

    fn map2<B, C, F>(self, other: Writer<M, B>, function: F) -> Writer<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    fn apply<B, Output>(self, other: Writer<M, B>) -> Writer<M, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<M, A> Monad for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
{
    fn flat_map<B, F>(self, function: F) -> Writer<M, B>
    where
        F: FnOnce(A) -> Writer<M, B>,
    {
        self.chain(function)
    }
}

impl<M, A> Setoid for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic,
    A: PartialEq,
{
    fn equals(&self, other: &Self) -> bool {
        Self::equals(self, other)
    }
}

impl<M, A> fmt::Display for Writer<M, A>
where
    M: Monoid + Wrapped + Algebraic + fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.inspect())
    }
}

static_assertions::assert_type_ne_all!(
    Writer<crate::typeclass::Sum<i32>, i32>,
    Writer<crate::typeclass::Product<i32>, i32>,
    Writer<crate::typeclass::Max<i32>, i32>
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;

    type Logged<A> = Writer<Sum<i32>, A>;

    #[rstest]
    fn writer_new_wraps_entry() {
        let writer: Logged<&str> = Writer::new(4, "value");
        assert_eq!(writer.log(), &Sum::new(4));
        assert_eq!(writer.value(), &"value");
    }

    #[rstest]
    fn writer_of_has_empty_log() {
        let writer: Writer<Vec<String>, i32> = Writer::of(42);
        let read = writer.into_read();
        assert_eq!(read.value, 42);
        assert!(read.log.is_empty());
    }

    #[rstest]
    fn writer_string_chain_concatenates_logs() {
        let writer: Writer<String, i32> = Writer::new("a".to_string(), 1)
            .chain(|value| Writer::new("b".to_string(), value + 1));
        assert_eq!(
            writer.read(),
            Read {
                log: "ab".to_string(),
                value: 2
            }
        );
    }

    #[rstest]
    fn writer_map_leaves_log_untouched() {
        let writer: Logged<i32> = Writer::new(7, 21);
        let mapped = writer.map(|value| value * 2);
        assert_eq!(mapped.into_read(), Read { log: 7, value: 42 });
    }

    #[rstest]
    fn writer_ap_appends_argument_log() {
        let function: Writer<String, fn(i32) -> i32> = Writer::new("f".to_string(), |x| x + 1);
        let applied = function.ap(Writer::new("x".to_string(), 1));
        assert_eq!(applied.into_read().log, "fx");
    }

    #[rstest]
    fn writer_map2_combines_logs() {
        let first: Writer<Vec<&str>, i32> = Writer::new(vec!["first"], 10);
        let second: Writer<Vec<&str>, i32> = Writer::new(vec!["second"], 20);
        let combined = first.map2(second, |a, b| a + b);
        assert_eq!(combined.into_read(), Read { log: vec!["first", "second"], value: 30 });
    }

    #[rstest]
    fn writer_tell_records_entry() {
        let writer: Logged<()> = Writer::tell(5);
        assert_eq!(writer.into_read(), Read { log: 5, value: () });
    }

    #[rstest]
    fn writer_listen_captures_raw_log() {
        let listened = Writer::listen(Logged::new(3, "v"));
        assert_eq!(listened.into_read(), Read { log: 3, value: ("v", 3) });
    }

    #[rstest]
    fn writer_censor_rewrites_log() {
        let censored = Writer::censor(|log: i32| log * 100, Logged::new(2, ()));
        assert_eq!(censored.log(), &Sum::new(200));
    }

    #[rstest]
    #[case(Writer::new(1, 5), Writer::new(2, 5), true)]
    #[case(Writer::new(1, 5), Writer::new(1, 6), false)]
    fn writer_equals_compares_values_only(
        #[case] left: Logged<i32>,
        #[case] right: Logged<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(left.equals(&right), expected);
    }

    #[rstest]
    fn writer_partial_eq_compares_log_too() {
        assert_ne!(Logged::new(1, 5), Logged::new(2, 5));
    }

    #[rstest]
    fn writer_tag_includes_monoid() {
        assert_eq!(Logged::<i32>::type_name(), "Writer(Sum)");
        assert_eq!(Writer::<Product<i32>, i32>::type_name(), "Writer(Product)");
        assert_eq!(Writer::<String, ()>::type_name(), "Writer(String)");
    }

    #[rstest]
    fn writer_inspect_and_display() {
        let writer: Writer<String, i32> = Writer::new("log".to_string(), 3);
        assert_eq!(writer.inspect(), "Writer(\"log\" 3)");
        assert_eq!(writer.to_string(), writer.inspect());
    }
}
