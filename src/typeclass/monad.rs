//! Monad type class: sequencing computations that may stop early.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(M::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! The inherent `flat_map` of [`Outcome`] and [`Maybe`] accepts more
//! argument shapes and takes precedence in method-call syntax. The trait
//! method is what generic code sees.
//!
//! # Examples
//!
//! ```rust
//! use outcome::maybe::Maybe;
//! use outcome::outcome::Outcome;
//! use outcome::typeclass::Monad;
//!
//! fn halve_twice<M>(start: M, halve: fn(i32) -> M) -> M
//! where
//!     M: Monad<Inner = i32, WithType<i32> = M>,
//! {
//!     start.flat_map::<i32, _>(halve).flat_map::<i32, _>(halve)
//! }
//!
//! let even = |n: i32| if n % 2 == 0 { Maybe::value(n / 2) } else { Maybe::none() };
//! assert_eq!(halve_twice(Maybe::value(12), even), Maybe::value(3));
//! assert_eq!(halve_twice(Maybe::value(6), even), Maybe::none());
//!
//! let checked = |n: i32| if n % 2 == 0 { Outcome::value(n / 2) } else { Outcome::error(n) };
//! assert_eq!(halve_twice(Outcome::value(6), checked), Outcome::error(3));
//! ```

use super::functor::Functor;
use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Functors that can lift a plain value and chain dependent computations.
pub trait Monad: Functor {
    /// Lifts `value` into the value channel.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to the value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Returns `next` when `self` holds a value, otherwise propagates the failure.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<T, E: Clone> Monad for Either<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Either<B, E> {
        Either::Value(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<B, E>
    where
        F: FnOnce(T) -> Either<B, E>,
    {
        match self {
            Self::Value(value) => function(value),
            Self::Error(error) => Either::Error(error),
        }
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::value(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        match self.into_either() {
            Either::Value(value) => function(value),
            Either::Error(error) => Outcome::error(error),
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::value(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.into_option().map_or_else(Maybe::none, function)
    }
}
