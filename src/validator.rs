//! Validator - a subject paired with a lazily produced list of errors.
//!
//! Each call to [`Validator::validate`] records a deferred check and returns
//! the extended validator. No predicate runs until the errors are consumed,
//! and consuming them borrows the validator, so the same validator can be
//! consumed any number of times with the same result.
//!
//! # Examples
//!
//! ```rust
//! use outcome::validator::Validator;
//!
//! let validator = Validator::new(1)
//!     .validate(|i| i % 2 == 0, "odd")
//!     .validate(|i| *i == 0, "nonzero");
//!
//! assert_eq!(validator.errors().collect::<Vec<_>>(), vec!["odd", "nonzero"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::outcome::Outcome;

type Check<T, E> = Arc<dyn Fn(&T) -> Option<E> + Send + Sync>;

/// Accumulates validation errors for a subject.
///
/// Cloning a validator is cheap; checks are shared, the subject is cloned.
/// A clone taken before further `validate` calls keeps only the checks it
/// already had.
pub struct Validator<T, E> {
    subject: T,
    checks: Vec<Check<T, E>>,
}

impl<T, E> Validator<T, E> {
    /// Creates a validator with no checks.
    pub const fn new(subject: T) -> Self {
        Self {
            subject,
            checks: Vec::new(),
        }
    }

    /// Returns the subject being validated.
    pub const fn subject(&self) -> &T {
        &self.subject
    }

    /// Consumes the validator, returning its subject.
    pub fn into_subject(self) -> T {
        self.subject
    }

    /// Returns the number of recorded checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no checks have been recorded.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Records a check that yields `error` when `predicate` fails.
    #[must_use]
    pub fn validate<P>(self, predicate: P, error: E) -> Self
    where
        T: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        self.validate_with(predicate, move |_| error.clone())
    }

    /// Records a check whose error is built from the subject when
    /// `predicate` fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::validator::Validator;
    ///
    /// let validator = Validator::new(-4)
    ///     .validate_with(|i| *i >= 0, |i| format!("{i} is negative"));
    /// assert_eq!(validator.errors().collect::<Vec<_>>(), vec!["-4 is negative"]);
    /// ```
    #[must_use]
    pub fn validate_with<P, F>(mut self, predicate: P, error_factory: F) -> Self
    where
        T: 'static,
        E: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> E + Send + Sync + 'static,
    {
        self.checks.push(Arc::new(move |subject: &T| {
            if predicate(subject) {
                None
            } else {
                Some(error_factory(subject))
            }
        }));
        self
    }

    /// Lazily evaluates every check in call order, yielding the errors of
    /// the failing ones.
    pub fn errors(&self) -> impl Iterator<Item = E> + '_ {
        self.checks.iter().filter_map(|check| check(&self.subject))
    }

    /// Returns `true` if every check passes.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Converts into an outcome holding the subject, or every error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::outcome::Outcome;
    /// use outcome::validator::Validator;
    ///
    /// let outcome = Validator::new(2).validate(|i| i % 2 == 0, "odd").into_outcome();
    /// assert_eq!(outcome, Outcome::value(2));
    /// ```
    pub fn into_outcome(self) -> Outcome<T, Vec<E>> {
        let errors: Vec<E> = self.errors().collect();
        if errors.is_empty() {
            Outcome::value(self.subject)
        } else {
            Outcome::error(errors)
        }
    }
}

impl<T: Clone, E> Clone for Validator<T, E> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            checks: self.checks.clone(),
        }
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Validator<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("subject", &self.subject)
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl<T, E> From<Validator<T, E>> for Outcome<T, Vec<E>> {
    fn from(validator: Validator<T, E>) -> Self {
        validator.into_outcome()
    }
}
