//! Capability trait for the targets of `Maybe::flat_map`.

use super::Maybe;

/// Types that can be bound into a [`Maybe`].
///
/// Implemented for `Maybe<T>` itself and for `Option<T>`, which stands in for
/// a function returning a nullable scalar.
pub trait IntoMaybe<T> {
    /// Converts `self` into a maybe.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Maybe<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> IntoMaybe<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}
