#![cfg(feature = "typeclass")]
//! Property-based tests for Bifunctor laws.
//!
//! - **Identity Law**: `bf.bimap(|x| x, |y| y) == bf`
//! - **Composition Law**: `bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)`
//! - **first/second Consistency Law**: `bf.bimap(f, g) == bf.first(f).second(g)`
//!
//! The first channel is the error channel.

use outcome::either::Either;
use outcome::outcome::Outcome;
use outcome::typeclass::Bifunctor;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::<i32, String>::Value),
        any::<String>().prop_map(Either::<i32, String>::Error),
    ]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    either_strategy().prop_map(Outcome::from)
}

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        let result = Bifunctor::bimap(value.clone(), |e| e, |x| x);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let f1 = |s: String| s.len();
        let f2 = |n: usize| n.wrapping_add(10);
        let g1 = |x: i32| x.wrapping_add(1);
        let g2 = |x: i32| x.wrapping_mul(2);

        let left = Bifunctor::bimap(value.clone(), |s| f2(f1(s)), |x| g2(g1(x)));
        let right = Bifunctor::bimap(Bifunctor::bimap(value, f1, g1), f2, g2);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_first_second_consistency(value in outcome_strategy()) {
        let f = |s: String| s.len();
        let g = |x: i32| x.wrapping_mul(2);

        let by_bimap = Bifunctor::bimap(value.clone(), f, g);
        let by_first_second = value.clone().first(f).second(g);
        let by_second_first = value.second(g).first(f);

        prop_assert_eq!(by_bimap.clone(), by_first_second.clone());
        prop_assert_eq!(by_first_second, by_second_first);
    }

    #[test]
    fn prop_outcome_bimap_agrees_with_inherent(value in outcome_strategy()) {
        let by_trait =
            Bifunctor::bimap(value.clone(), |s: String| s.len(), |x: i32| x.wrapping_sub(1));
        let by_inherent = value.bimap(|x| x.wrapping_sub(1), |s| s.len());
        prop_assert_eq!(by_trait, by_inherent);
    }
}
