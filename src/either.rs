//! Either-core - the tagged union underneath every outcome.
//!
//! `Either<T, E>` holds exactly one of a value (`Value(T)`) or an error
//! (`Error(E)`). Mutual exclusivity is carried by the type itself, so the
//! "both flags set" and "no flag set" states cannot be built from the
//! variants. The only way to assemble an `Either` from loose parts is
//! [`Either::from_parts`], which rejects both malformed shapes with a
//! [`ContractViolation`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::either::Either;
//!
//! let value: Either<i32, String> = Either::Value(42);
//! let error: Either<i32, String> = Either::Error("boom".to_string());
//!
//! assert!(value.has_value());
//! assert_eq!(error.error(), Some(&"boom".to_string()));
//!
//! let described = value.fold(
//!     |number| format!("Number: {number}"),
//!     |message| format!("Failure: {message}"),
//! );
//! assert_eq!(described, "Number: 42");
//! ```

use std::fmt;

use crate::error::ContractViolation;

/// A value that is exactly one of a success value or a failure error.
///
/// # Type Parameters
///
/// * `T` - The type of the value channel
/// * `E` - The type of the error channel
///
/// # Examples
///
/// ```rust
/// use outcome::either::Either;
///
/// let success: Either<i32, String> = Either::Value(21);
/// assert_eq!(success.map_value(|x| x * 2), Either::Value(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<T, E> {
    /// The value channel is populated.
    Value(T),
    /// The error channel is populated.
    Error(E),
}

impl<T, E> Either<T, E> {
    // =========================================================================
    // Construction From Parts
    // =========================================================================

    /// Builds an `Either` from an optional value and an optional error.
    ///
    /// Exactly one of the two must be present.
    ///
    /// # Errors
    ///
    /// - [`ContractViolation::BothChannels`] when both are `Some`
    /// - [`ContractViolation::NoChannel`] when both are `None`; this also covers
    ///   an error state whose error is missing
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::either::Either;
    /// use outcome::error::ContractViolation;
    ///
    /// assert_eq!(Either::<i32, String>::from_parts(Some(1), None), Ok(Either::Value(1)));
    /// assert_eq!(
    ///     Either::from_parts(Some(1), Some("e".to_string())),
    ///     Err(ContractViolation::BothChannels)
    /// );
    /// ```
    pub fn from_parts(value: Option<T>, error: Option<E>) -> Result<Self, ContractViolation> {
        match (value, error) {
            (Some(value), None) => Ok(Self::Value(value)),
            (None, Some(error)) => Ok(Self::Error(error)),
            (Some(_), Some(_)) => Err(ContractViolation::BothChannels),
            (None, None) => Err(ContractViolation::NoChannel),
        }
    }

    /// Builds an `Either` from loose parts, failing fast on a malformed shape.
    ///
    /// # Panics
    ///
    /// Panics when both or neither of the parts are present.
    #[track_caller]
    pub fn expect_parts(value: Option<T>, error: Option<E>) -> Self {
        match Self::from_parts(value, error) {
            Ok(either) => either,
            Err(violation) => violation.raise(),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the value channel is populated.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the error channel is populated.
    #[inline]
    pub const fn has_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    // =========================================================================
    // Reference Extraction
    // =========================================================================

    /// Returns a reference to the value, or `None` in the error state.
    ///
    /// Always safe to call; the unused channel reads as absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.value(), Some(&42));
    ///
    /// let error: Either<i32, String> = Either::Error("e".to_string());
    /// assert_eq!(error.value(), None);
    /// ```
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns a reference to the error, or `None` in the value state.
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Value(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Converts from `&Either<T, E>` to `Either<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&T, &E> {
        match self {
            Self::Value(value) => Either::Value(value),
            Self::Error(error) => Either::Error(error),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Consumes the either, returning the value if present.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Consumes the either, returning the error if present.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Value(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::either::Either;
    ///
    /// let error: Either<i32, String> = Either::Error("e".to_string());
    /// assert_eq!(error.map_value(|x| x * 2), Either::Error("e".to_string()));
    /// ```
    #[inline]
    pub fn map_value<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Either::Value(function(value)),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Applies a function to the error if present.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Either<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Value(value) => Either::Value(value),
            Self::Error(error) => Either::Error(function(error)),
        }
    }

    /// Applies one of two functions depending on the populated channel.
    #[inline]
    pub fn bimap<U, E2, F, G>(self, value_function: F, error_function: G) -> Either<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Value(value) => Either::Value(value_function(value)),
            Self::Error(error) => Either::Error(error_function(error)),
        }
    }

    /// Eliminates the either by applying exactly one of two functions.
    #[inline]
    pub fn fold<R, F, G>(self, value_function: F, error_function: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Value(value) => value_function(value),
            Self::Error(error) => error_function(error),
        }
    }

    /// Exchanges the value and error channels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Value(42);
    /// assert_eq!(value.swap(), Either::Error(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<E, T> {
        match self {
            Self::Value(value) => Either::Error(value),
            Self::Error(error) => Either::Value(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Either<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Either<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "Value({value})"),
            Self::Error(error) => write!(formatter, "Error({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Either<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Either<T, E>> for Result<T, E> {
    #[inline]
    fn from(either: Either<T, E>) -> Self {
        match either {
            Either::Value(value) => Ok(value),
            Either::Error(error) => Err(error),
        }
    }
}
