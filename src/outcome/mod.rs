//! Outcome - a value XOR an error, with composable operators.
//!
//! [`Outcome<T, E>`] is a read-only facade over one [`Either`] and is the
//! main surface of the crate. Its operators follow a single discipline:
//! functions for the populated channel run exactly once, functions for the
//! empty channel never run.
//!
//! - [`map`](Outcome::map) / [`map_error`](Outcome::map_error) transform one channel
//! - [`flat_map`](Outcome::flat_map) chains validations and stops at the first failure
//! - [`filter`](Outcome::filter) turns a value into an error when a predicate fails
//! - [`multiple`](Outcome::multiple) runs independent validations and keeps every failure
//! - [`fold`](Outcome::fold) eliminates the outcome
//! - [`swap`](Outcome::swap) exchanges the roles of the two channels
//!
//! # Examples
//!
//! ```rust
//! use outcome::outcome::Outcome;
//!
//! fn divide(left: i32, right: i32) -> Outcome<i32, String> {
//!     if right == 0 {
//!         Outcome::error(format!("Can not divide '{left}' with '{right}'."))
//!     } else {
//!         Outcome::value(left / right)
//!     }
//! }
//!
//! let result = divide(10, 2)
//!     .filter(|quotient| *quotient > 1, |_| "quotient too small".to_string())
//!     .map(|quotient| quotient * 100);
//! assert_eq!(result, Outcome::value(500));
//!
//! let failed = divide(10, 0).map(|quotient| quotient * 100);
//! assert_eq!(failed, Outcome::error("Can not divide '10' with '0'.".to_string()));
//! ```

mod bind;
mod multiple;

pub use bind::IntoOutcome;
pub use multiple::Validations;

use std::fmt;

use crate::either::Either;
use crate::maybe::Maybe;

/// A value that is exactly one of a success value or a failure error.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Outcome<T, E> {
    either: Either<T, E>,
}

// =============================================================================
// Construction and Queries
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Creates an outcome in the value state.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self {
            either: Either::Value(value),
        }
    }

    /// Creates an outcome in the error state.
    #[inline]
    pub const fn error(error: E) -> Self {
        Self {
            either: Either::Error(error),
        }
    }

    /// Returns `true` if the outcome holds a value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.either.has_value()
    }

    /// Returns `true` if the outcome holds an error.
    #[inline]
    pub const fn has_error(&self) -> bool {
        self.either.has_error()
    }

    /// Returns a reference to the value, or `None` in the error state.
    #[inline]
    pub const fn as_value(&self) -> Option<&T> {
        self.either.value()
    }

    /// Returns a reference to the error, or `None` in the value state.
    #[inline]
    pub const fn as_error(&self) -> Option<&E> {
        self.either.error()
    }

    /// Borrows the underlying either.
    #[inline]
    pub const fn either(&self) -> &Either<T, E> {
        &self.either
    }

    /// Consumes the outcome, returning the underlying either.
    #[inline]
    pub fn into_either(self) -> Either<T, E> {
        self.either
    }

    /// Consumes the outcome, returning a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.either.into()
    }
}

// =============================================================================
// Channel Transformations
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Transforms the value, leaving an error untouched.
    ///
    /// `function` is not invoked in the error state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let value: Outcome<i32, String> = Outcome::value(21);
    /// assert_eq!(value.map(|x| x * 2), Outcome::value(42));
    ///
    /// let error: Outcome<i32, String> = Outcome::error("e".to_string());
    /// assert_eq!(error.map(|x| x * 2), Outcome::error("e".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Outcome::from(self.either.map_value(function))
    }

    /// Transforms the error, leaving a value untouched.
    ///
    /// `function` is not invoked in the value state.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        Outcome::from(self.either.map_error(function))
    }

    /// Transforms whichever channel is populated.
    #[inline]
    pub fn bimap<U, E2, F, G>(self, value_function: F, error_function: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        Outcome::from(self.either.bimap(value_function, error_function))
    }

    /// Eliminates the outcome by running exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::error("missing".to_string());
    /// let status = outcome.fold(|_| 200, |_| 404);
    /// assert_eq!(status, 404);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_value: F, on_error: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        self.either.fold(on_value, on_error)
    }

    /// Exchanges which channel counts as success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::value(1);
    /// assert_eq!(outcome.swap(), Outcome::<String, i32>::error(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        Outcome::from(self.either.swap())
    }

    /// Runs a side effect on the value and returns the outcome unchanged.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Either::Value(value) = &self.either {
            function(value);
        }
        self
    }

    /// Runs a side effect on the error and returns the outcome unchanged.
    #[inline]
    #[must_use]
    pub fn inspect_error<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Either::Error(error) = &self.either {
            function(error);
        }
        self
    }
}

// =============================================================================
// Binding
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Chains a computation that may itself fail with the same error type.
    ///
    /// In the error state the original error is returned and `function` is
    /// never invoked, so a chain of `flat_map` calls stops at the first
    /// failure. `function` may return anything implementing [`IntoOutcome`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let positive = |x: i32| {
    ///     if x > 0 { Outcome::value(x) } else { Outcome::error("not positive".to_string()) }
    /// };
    ///
    /// assert_eq!(Outcome::value(3).flat_map(positive), Outcome::value(3));
    /// assert_eq!(
    ///     Outcome::value(-3).flat_map(positive),
    ///     Outcome::error("not positive".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, B, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> B,
        B: IntoOutcome<U, E>,
    {
        match self.either {
            Either::Value(value) => function(value).into_outcome(),
            Either::Error(error) => Outcome::error(error),
        }
    }

    /// Chains a computation whose error type differs from this one.
    ///
    /// A source error passes through untouched; a failure produced by
    /// `function` is converted with `reconcile`. At most one of the two error
    /// paths executes per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let parse = |text: String| match text.parse::<i32>() {
    ///     Ok(number) => Outcome::value(number),
    ///     Err(error) => Outcome::error(error),
    /// };
    ///
    /// let outcome: Outcome<String, String> = Outcome::value("x".to_string());
    /// let parsed = outcome.flat_map_with(parse, |error| error.to_string());
    /// assert_eq!(parsed, Outcome::error("invalid digit found in string".to_string()));
    /// ```
    #[inline]
    pub fn flat_map_with<U, E2, F, G>(self, function: F, reconcile: G) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E2>,
        G: FnOnce(E2) -> E,
    {
        match self.either {
            Either::Value(value) => function(value).map_error(reconcile),
            Either::Error(error) => Outcome::error(error),
        }
    }

    /// Chains a recovery computation on the error channel.
    ///
    /// A value passes through and `function` is never invoked.
    #[inline]
    pub fn flat_map_error<E2, B, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> B,
        B: IntoOutcome<T, E2>,
    {
        match self.either {
            Either::Value(value) => Outcome::value(value),
            Either::Error(error) => function(error).into_outcome(),
        }
    }

    /// Combines two value states into a pair; the first error wins.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        match (self.either, other.either) {
            (Either::Value(left), Either::Value(right)) => Outcome::value((left, right)),
            (Either::Error(error), _) | (_, Either::Error(error)) => Outcome::error(error),
        }
    }
}

impl<U, E> Outcome<Outcome<U, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<U, E> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Filtering and Validation
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Converts a value into an error when `predicate` fails.
    ///
    /// Neither `predicate` nor `error_selector` runs in the error state, and
    /// `error_selector` runs only when `predicate` returned `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let big: Outcome<i32, &str> = Outcome::value(10);
    /// assert_eq!(big.filter(|x| *x > 5, |_| "too small"), Outcome::value(10));
    ///
    /// let small: Outcome<i32, &str> = Outcome::value(3);
    /// assert_eq!(small.filter(|x| *x > 5, |_| "too small"), Outcome::error("too small"));
    /// ```
    #[inline]
    pub fn filter<P, F>(self, predicate: P, error_selector: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self.either {
            Either::Value(value) => {
                if predicate(&value) {
                    Self::value(value)
                } else {
                    Self::error(error_selector(&value))
                }
            }
            Either::Error(error) => Self::error(error),
        }
    }

    /// Converts a value into an error when `predicate` holds.
    ///
    /// The negation of [`filter`](Self::filter).
    #[inline]
    pub fn reject<P, F>(self, predicate: P, error_selector: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        self.filter(|value| !predicate(value), error_selector)
    }

    /// Runs several independent validations against the same value and keeps
    /// every failure.
    ///
    /// Unlike a `flat_map` chain, a failing validation does not stop the
    /// remaining ones. The result holds the original value when every
    /// validation succeeded, or the errors in declaration order otherwise.
    /// In the error state no validation runs and the error is returned as a
    /// one-element list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::value(7);
    /// let checked = outcome.multiple((
    ///     |x: &i32| Outcome::value(*x).filter(|x| x % 2 == 0, |_| "odd"),
    ///     |x: &i32| Outcome::value(*x).filter(|x| *x > 10, |_| "too small"),
    /// ));
    /// assert_eq!(checked, Outcome::error(vec!["odd", "too small"]));
    /// ```
    pub fn multiple<V, M>(self, validations: V) -> Outcome<T, Vec<E>>
    where
        V: Validations<T, E, M>,
    {
        match self.either {
            Either::Value(value) => {
                let errors = validations.collect_errors(&value);
                if errors.is_empty() {
                    Outcome::value(value)
                } else {
                    Outcome::error(errors)
                }
            }
            Either::Error(error) => Outcome::error(vec![error]),
        }
    }
}

// =============================================================================
// Extraction and Conversion
// =============================================================================

impl<T, E> Outcome<T, E> {
    /// Returns the value, or `default` in the error state.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.either.fold(|value| value, |_| default)
    }

    /// Returns the value, or computes one from the error.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.either.fold(|value| value, function)
    }

    /// Discards the error channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::maybe::Maybe;
    /// use outcome::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::error("e".to_string());
    /// assert_eq!(outcome.to_maybe(), Maybe::none());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        Maybe::from(self.either.into_value())
    }

    /// Returns an iterator over the error channel (zero or one item).
    #[inline]
    pub fn into_errors(self) -> std::option::IntoIter<E> {
        self.either.into_error().into_iter()
    }

    /// Returns an iterator over a borrowed value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.either.value().into_iter()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Iterates over the value channel (zero or one item).
    fn into_iter(self) -> Self::IntoIter {
        self.either.into_value().into_iter()
    }
}

// =============================================================================
// Formatting and Conversions
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Outcome").field(&self.either).finish()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Outcome::{}", self.either)
    }
}

impl<T, E> From<Either<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(either: Either<T, E>) -> Self {
        Self { either }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self {
            either: Either::from(result),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
