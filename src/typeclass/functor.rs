//! Functor type class: mapping over the value channel.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::outcome::Outcome;
//! use outcome::typeclass::Functor;
//!
//! fn describe<F>(container: F) -> F::WithType<String>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Outcome::<i32, ()>::value(7)), Outcome::value("#7".to_string()));
//! assert_eq!(describe(Outcome::<i32, ()>::error(())), Outcome::error(()));
//! ```

use super::higher::TypeConstructor;
use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Types whose value channel can be transformed without changing their shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a borrowed value, leaving `self` intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Either<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Either<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map_value(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Value(value) => Either::Value(function(value)),
            Self::Error(error) => Either::Error(error.clone()),
        }
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        Outcome::from(self.either().fmap_ref(function))
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        Maybe::from(self.as_value().map(function))
    }
}
