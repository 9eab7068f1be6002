//! Bifunctor type class: mapping over both channels.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! # Parameter Order
//!
//! Following `Result`, the error channel comes first: `Outcome<T, E>` and
//! `Either<T, E>` implement `Bifunctor<E, T>`, so [`Bifunctor::first`]
//! transforms the error and [`Bifunctor::second`] transforms the value,
//! agreeing with [`Functor::fmap`](super::Functor::fmap).
//!
//! # Examples
//!
//! ```rust
//! use outcome::outcome::Outcome;
//! use outcome::typeclass::Bifunctor;
//!
//! let failed: Outcome<i32, String> = Outcome::error("boom".to_string());
//! assert_eq!(failed.first(|e| e.len()), Outcome::error(4));
//!
//! let succeeded: Outcome<i32, String> = Outcome::value(2);
//! assert_eq!(succeeded.second(|x| x * 10), Outcome::value(20));
//! ```

use crate::either::Either;
use crate::outcome::Outcome;

/// Types with two channels that can both be transformed.
pub trait Bifunctor<A, B> {
    /// The same type with its channels replaced by `C` and `D`.
    type Target<C, D>;

    /// Transforms whichever channel is populated.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Transforms the first channel only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        Bifunctor::bimap(self, function, |b| b)
    }

    /// Transforms the second channel only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        Bifunctor::bimap(self, |a| a, function)
    }
}

impl<T, E> Bifunctor<E, T> for Either<T, E> {
    type Target<C, D> = Either<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        Self::bimap(self, second_function, first_function)
    }
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        Self::bimap(self, second_function, first_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::value(1))]
    #[case(Outcome::error("e".to_string()))]
    fn identity_law(#[case] outcome: Outcome<i32, String>) {
        assert_eq!(Bifunctor::bimap(outcome.clone(), |e| e, |x| x), outcome);
    }

    #[rstest]
    #[case(Either::Value(3))]
    #[case(Either::Error(7))]
    fn composition_law(#[case] either: Either<i32, i32>) {
        let composed = Bifunctor::bimap(either, |e| (e + 1) * 2, |x| (x - 1) * 3);
        let sequenced = Bifunctor::bimap(
            Bifunctor::bimap(either, |e| e + 1, |x| x - 1),
            |e| e * 2,
            |x| x * 3,
        );
        assert_eq!(composed, sequenced);
    }

    #[rstest]
    fn first_targets_error_channel() {
        let either: Either<i32, &str> = Either::Error("abc");
        assert_eq!(either.first(str::len), Either::Error(3));
        assert_eq!(Either::<i32, &str>::Value(1).first(str::len), Either::Value(1));
    }

    #[rstest]
    fn second_agrees_with_map() {
        let outcome: Outcome<i32, ()> = Outcome::value(4);
        assert_eq!(outcome.second(|x| x + 1), outcome.map(|x| x + 1));
    }
}
