#![cfg(feature = "serde")]
//! JSON representation of the synchronous types.

use outcome::either::Either;
use outcome::maybe::Maybe;
use outcome::outcome::Outcome;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Outcome::value(4), json!({ "Value": 4 }))]
#[case(Outcome::error("bad".to_string()), json!({ "Error": "bad" }))]
fn outcome_serializes_as_tagged_channel(
    #[case] outcome: Outcome<i32, String>,
    #[case] expected: serde_json::Value,
) {
    assert_eq!(serde_json::to_value(&outcome).unwrap(), expected);
    let restored: Outcome<i32, String> = serde_json::from_value(expected).unwrap();
    assert_eq!(restored, outcome);
}

#[rstest]
fn either_matches_outcome_representation() {
    let either: Either<i32, String> = Either::Value(4);
    let outcome: Outcome<i32, String> = Outcome::from(either.clone());
    assert_eq!(
        serde_json::to_string(&either).unwrap(),
        serde_json::to_string(&outcome).unwrap()
    );
}

#[rstest]
fn either_with_both_channels_is_rejected() {
    let result = serde_json::from_value::<Either<i32, String>>(json!({ "Value": 1, "Error": "e" }));
    assert!(result.is_err());
}

#[rstest]
#[case(Maybe::value(3), json!(3))]
#[case(Maybe::none(), json!(null))]
fn maybe_serializes_like_option(#[case] maybe: Maybe<i32>, #[case] expected: serde_json::Value) {
    assert_eq!(serde_json::to_value(maybe).unwrap(), expected);
    let restored: Maybe<i32> = serde_json::from_value(expected).unwrap();
    assert_eq!(restored, maybe);
}
