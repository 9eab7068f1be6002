//! Capability trait for the targets of `flat_map`.

use super::Outcome;
use crate::either::Either;

/// Types that can be bound into an [`Outcome`] with the same error type.
///
/// `flat_map` is generic over this trait instead of offering one overload per
/// return shape, so a binding function may return an `Outcome`, a standard
/// `Result` or a bare [`Either`].
///
/// # Examples
///
/// ```rust
/// use outcome::outcome::Outcome;
///
/// fn halve(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
/// }
///
/// let outcome: Outcome<i32, String> = Outcome::value(8);
/// assert_eq!(outcome.flat_map(halve), Outcome::value(4));
/// ```
pub trait IntoOutcome<T, E> {
    /// Converts `self` into an outcome.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Either<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }
}
