//! Searching sequences into outcomes.

use thiserror::Error;

use crate::outcome::Outcome;

/// Why a search over a sequence did not yield exactly the expected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ElementError {
    /// No element matched.
    #[error("the sequence contains no matching element")]
    NoElement,
    /// More than one element matched where exactly one was expected.
    #[error("the sequence contains more than one matching element")]
    ManyElements,
}

/// Outcome-returning searches over any iterable.
///
/// # Examples
///
/// ```rust
/// use outcome::adapters::{ElementError, SequenceExt};
/// use outcome::outcome::Outcome;
///
/// assert_eq!(vec![1, 2, 3].first_or_error_by(|x| *x > 1), Outcome::value(2));
/// assert_eq!(
///     vec![1, 2, 3].single_or_error_by(|x| *x > 1),
///     Outcome::error(ElementError::ManyElements)
/// );
/// assert_eq!(
///     Vec::<i32>::new().single_or_error(),
///     Outcome::error(ElementError::NoElement)
/// );
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// Returns the first element.
    fn first_or_error(self) -> Outcome<Self::Item, ElementError> {
        self.into_iter()
            .next()
            .map_or(Outcome::error(ElementError::NoElement), Outcome::value)
    }

    /// Returns the first element matching `predicate`.
    fn first_or_error_by<P>(self, predicate: P) -> Outcome<Self::Item, ElementError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter()
            .find(predicate)
            .map_or(Outcome::error(ElementError::NoElement), Outcome::value)
    }

    /// Returns the only element.
    fn single_or_error(self) -> Outcome<Self::Item, ElementError> {
        self.single_or_error_by(|_| true)
    }

    /// Returns the only element matching `predicate`.
    ///
    /// Stops at the second match.
    fn single_or_error_by<P>(self, mut predicate: P) -> Outcome<Self::Item, ElementError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matches = self.into_iter().filter(|item| predicate(item));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Outcome::value(item),
            (None, _) => Outcome::error(ElementError::NoElement),
            (Some(_), Some(_)) => Outcome::error(ElementError::ManyElements),
        }
    }
}

impl<I: IntoIterator> SequenceExt for I {}

/// Splitting sequences of outcomes by channel.
///
/// # Examples
///
/// ```rust
/// use outcome::adapters::OutcomesExt;
/// use outcome::outcome::Outcome;
///
/// let outcomes = vec![Outcome::value(1), Outcome::error("bad"), Outcome::value(3)];
/// let (values, errors) = outcomes.into_iter().partition_outcomes();
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(errors, vec!["bad"]);
/// ```
pub trait OutcomesExt<T, E>: Iterator<Item = Outcome<T, E>> + Sized {
    /// Yields the values, skipping errors.
    fn values(self) -> impl Iterator<Item = T> {
        self.flat_map(IntoIterator::into_iter)
    }

    /// Yields the errors, skipping values.
    fn errors(self) -> impl Iterator<Item = E> {
        self.flat_map(Outcome::into_errors)
    }

    /// Collects values and errors separately, keeping their order.
    fn partition_outcomes(self) -> (Vec<T>, Vec<E>) {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in self {
            outcome.fold(|value| values.push(value), |error| errors.push(error));
        }
        (values, errors)
    }
}

impl<T, E, I> OutcomesExt<T, E> for I where I: Iterator<Item = Outcome<T, E>> {}
