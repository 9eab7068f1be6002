//! Maybe - a value or nothing.
//!
//! [`Maybe<T>`] has the same short-circuit discipline as
//! [`Outcome`](crate::outcome::Outcome), with absence playing the role of the
//! error. It converts to an outcome by supplying an error only when absent.
//!
//! # Examples
//!
//! ```rust
//! use outcome::maybe::Maybe;
//! use outcome::outcome::Outcome;
//!
//! let name = Maybe::value("  ada ".to_string())
//!     .map(|name| name.trim().to_string())
//!     .filter(|name| !name.is_empty());
//!
//! assert_eq!(
//!     name.to_outcome(|| "name is required"),
//!     Outcome::value("ada".to_string())
//! );
//! ```

mod bind;

pub use bind::IntoMaybe;

use std::fmt;

use crate::outcome::Outcome;

/// A value that is either present or absent.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    /// Creates a present maybe.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an absent maybe.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn as_value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the maybe, returning the inner `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Transforms the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::value(2).map(|x| x * 2), Maybe::value(4));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            value: self.value.map(function),
        }
    }

    /// Chains a computation that may produce nothing.
    ///
    /// `function` may return a `Maybe` or a plain `Option`. It is never
    /// invoked when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::maybe::Maybe;
    ///
    /// let first_char = |text: String| text.chars().next();
    /// assert_eq!(Maybe::value("abc".to_string()).flat_map(first_char), Maybe::value('a'));
    /// assert_eq!(Maybe::value(String::new()).flat_map(first_char), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, B, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> B,
        B: IntoMaybe<U>,
    {
        match self.value {
            Some(value) => function(value).into_maybe(),
            None => Maybe::none(),
        }
    }

    /// Discards the value when `predicate` fails.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Eliminates the maybe by running exactly one of two functions.
    #[inline]
    pub fn fold<R, F, G>(self, on_value: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self.value {
            Some(value) => on_value(value),
            None => on_none(),
        }
    }

    /// Runs a side effect on the value and returns the maybe unchanged.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            function(value);
        }
        self
    }

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Converts into an outcome, producing the error only when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::maybe::Maybe;
    /// use outcome::outcome::Outcome;
    ///
    /// let missing: Maybe<i32> = Maybe::none();
    /// assert_eq!(missing.to_outcome(|| "missing"), Outcome::error("missing"));
    /// ```
    #[inline]
    pub fn to_outcome<E, F>(self, error_selector: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self.value {
            Some(value) => Outcome::value(value),
            None => Outcome::error(error_selector()),
        }
    }

    /// Returns an iterator over a borrowed value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value.as_ref().into_iter()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => formatter.debug_tuple("Value").field(value).finish(),
            None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn flat_map_skips_function_when_absent() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().flat_map(|x| {
            calls.set(calls.get() + 1);
            Maybe::value(x)
        });
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn flat_map_accepts_nullable_scalar() {
        let result = Maybe::value(4).flat_map(|x: i32| x.checked_div(2));
        assert_eq!(result, Maybe::value(2));
    }

    #[rstest]
    #[case(Maybe::value(10), Maybe::value(10))]
    #[case(Maybe::value(3), Maybe::none())]
    #[case(Maybe::none(), Maybe::none())]
    fn filter_drops_failing_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|x| *x > 5), expected);
    }

    #[rstest]
    fn to_outcome_only_builds_error_when_absent() {
        let built = Cell::new(false);
        let outcome = Maybe::value(1).to_outcome(|| {
            built.set(true);
            "absent"
        });
        assert_eq!(outcome, Outcome::value(1));
        assert!(!built.get());
    }

    #[rstest]
    fn fold_runs_none_branch() {
        assert_eq!(Maybe::<i32>::none().fold(|x| x, || -1), -1);
    }

    #[rstest]
    fn iterates_zero_or_one() {
        assert_eq!(Maybe::value(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(Maybe::<i32>::none().iter().count(), 0);
    }
}
