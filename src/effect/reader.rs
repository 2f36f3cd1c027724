//! Reader container - computations that read from an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Nothing runs until
//! [`run_with`](Reader::run_with) supplies the environment; every composed
//! step then sees the same environment.
//!
//! # Note on Type Classes
//!
//! Reader provides `map`, `ap`, `chain` and friends as inherent methods
//! rather than implementing the `Functor`/`Applicative`/`Monad` traits.
//! The wrapped function lives in an `Rc<dyn Fn>`, which needs `'static`
//! bounds and `Fn` (not `FnOnce`) continuations that the trait signatures
//! do not carry. The methods obey the same laws.
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `m.map(|x| x).run_with(e) == m.run_with(e)`
//! - Composition: `m.map(compose_b(f, g)).run_with(e) == m.map(g).map(f).run_with(e)`
//!
//! ## Applicative Laws
//!
//! - Identity: `Reader::of(identity).ap(v) == v`
//! - Homomorphism: `Reader::of(f).ap(Reader::of(x)) == Reader::of(f(x))`
//! - Interchange: `u.ap(Reader::of(y)) == Reader::of(reverse_apply(y)).ap(u)`
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::of(a).chain(f) == f(a)`
//! - Right Identity: `m.chain(Reader::of) == m`
//! - Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
//!
//! Equality here means equal results from `run_with` for every environment.
//!
//! # Examples
//!
//! ```rust
//! use algebrars::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//!         .map2(Reader::asks(|config: Config| config.port), |host, port| {
//!             format!("{host}:{port}")
//!         })
//! }
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address().run_with(config), "localhost:8080");
//! ```
//!
//! A Reader is built only from a one-argument function:
//!
//! ```compile_fail
//! use algebrars::effect::Reader;
//!
//! let _: Reader<i32, i32> = Reader::new(42);
//! ```
//!
//! and `chain` only accepts continuations returning a Reader:
//!
//! ```compile_fail
//! use algebrars::effect::Reader;
//! use algebrars::typeclass::Identity;
//!
//! let _ = Reader::new(|e: i32| e).chain(|x| Identity::new(x));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::compose::constant;
use crate::typeclass::Algebraic;

/// A computation that produces an `A` from an environment `R`.
///
/// # Examples
///
/// ```rust
/// use algebrars::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .chain(|environment| Reader::of(environment * 2));
///
/// assert_eq!(computation.run_with(21), 42);
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader.run_with(10), 20);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the wrapped function with `environment` and returns its result.
    ///
    /// A Reader can be run any number of times.
    pub fn run_with(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that returns `value` whatever the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::of("constant");
    /// assert_eq!(reader.run_with(0), "constant");
    /// assert_eq!(reader.run_with(100), "constant");
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(constant(value))
    }

    /// Maps `function` over the result of this Reader.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Applies the function produced by this Reader to the value produced
    /// by `argument`; both see the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// let adder: Reader<i32, Box<dyn Fn(i32) -> i32>> =
    ///     Reader::new(|environment| Box::new(move |x: i32| x + environment) as Box<dyn Fn(i32) -> i32>);
    /// let doubled = Reader::new(|environment: i32| environment * 2);
    ///
    /// assert_eq!(adder.ap(doubled).run_with(5), 15);
    /// ```
    #[must_use]
    pub fn ap<B, C>(self, argument: Reader<R, B>) -> Reader<R, C>
    where
        A: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Chains this Reader with a function producing the next Reader.
    ///
    /// `function` is not called until the result is run.
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let value = (original_function)(environment.clone());
            function(value).run_with(environment)
        })
    }

    /// Sequences two Readers, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.chain(move |_| next.clone())
    }

    /// Combines two Readers using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// let reader1: Reader<i32, i32> = Reader::ask();
    /// let reader2: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// assert_eq!(reader1.map2(reader2, |a, b| a + b).run_with(10), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: R| {
            let a = (self_function)(environment.clone());
            let b = (other_function)(environment);
            function(a, b)
        })
    }

    /// Creates a Reader that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// assert_eq!(Reader::asks(|x: i32| x + 1).run_with(5), 6);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let local_reader = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(local_reader.run_with(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }

    /// Returns the debug text `Reader Function`.
    #[must_use]
    pub const fn inspect(&self) -> &'static str {
        "Reader Function"
    }
}

impl<R> Reader<R, R>
where
    R: 'static,
{
    /// Creates a Reader that returns the environment unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebrars::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// assert_eq!(reader.run_with(42), 42);
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R: 'static, A: 'static> Algebraic for Reader<R, A> {
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed("Reader")
    }
}

impl<R: 'static, A: 'static> fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.inspect())
    }
}

impl<R: 'static, A: 'static> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.inspect())
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync);
