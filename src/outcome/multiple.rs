//! Independent validations for [`Outcome::multiple`](super::Outcome::multiple).
//!
//! A validation is any closure `FnOnce(&T) -> Outcome<U, E>`. Because each
//! closure has its own type, a set of validations is passed either as a tuple
//! (up to eight) or as a `Vec` of one closure type. The `Marker` parameter
//! records the success types of the closures so that the implementations for
//! different tuple shapes never overlap.

use super::Outcome;

/// A collection of validations run against the same subject.
///
/// Every validation runs; failures are collected in declaration order and
/// successes are discarded.
pub trait Validations<T, E, Marker> {
    /// Runs every validation against `subject` and returns the errors.
    fn collect_errors(self, subject: &T) -> Vec<E>;
}

impl<T, E, U, F> Validations<T, E, Vec<U>> for Vec<F>
where
    F: FnOnce(&T) -> Outcome<U, E>,
{
    fn collect_errors(self, subject: &T) -> Vec<E> {
        self.into_iter()
            .filter_map(|validation| validation(subject).into_either().into_error())
            .collect()
    }
}

macro_rules! impl_validations_for_tuple {
    ($(($validation:ident, $success:ident)),+) => {
        impl<T, E, $($validation, $success),+> Validations<T, E, ($($success,)+)>
            for ($($validation,)+)
        where
            $($validation: FnOnce(&T) -> Outcome<$success, E>,)+
        {
            #[allow(non_snake_case)]
            fn collect_errors(self, subject: &T) -> Vec<E> {
                let ($($validation,)+) = self;
                let mut errors = Vec::new();
                $(
                    if let Some(error) = $validation(subject).into_either().into_error() {
                        errors.push(error);
                    }
                )+
                errors
            }
        }
    };
}

impl_validations_for_tuple!((A, UA));
impl_validations_for_tuple!((A, UA), (B, UB));
impl_validations_for_tuple!((A, UA), (B, UB), (C, UC));
impl_validations_for_tuple!((A, UA), (B, UB), (C, UC), (D, UD));
impl_validations_for_tuple!((A, UA), (B, UB), (C, UC), (D, UD), (G, UG));
impl_validations_for_tuple!((A, UA), (B, UB), (C, UC), (D, UD), (G, UG), (H, UH));
impl_validations_for_tuple!(
    (A, UA),
    (B, UB),
    (C, UC),
    (D, UD),
    (G, UG),
    (H, UH),
    (I, UI)
);
impl_validations_for_tuple!(
    (A, UA),
    (B, UB),
    (C, UC),
    (D, UD),
    (G, UG),
    (H, UH),
    (I, UI),
    (J, UJ)
);
