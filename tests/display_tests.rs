//! Integration tests for `Display` and `Debug` formatting.

use outcome::either::Either;
use outcome::error::ContractViolation;
use outcome::maybe::Maybe;
use outcome::outcome::Outcome;
use rstest::rstest;

#[rstest]
#[case(Either::Value(42), "Value(42)")]
#[case(Either::Error("boom".to_string()), "Error(boom)")]
fn either_display(#[case] either: Either<i32, String>, #[case] expected: &str) {
    assert_eq!(either.to_string(), expected);
}

#[rstest]
fn outcome_display_names_the_channel() {
    assert_eq!(Outcome::<i32, String>::value(1).to_string(), "Outcome::Value(1)");
    assert_eq!(
        Outcome::<i32, String>::error("bad".to_string()).to_string(),
        "Outcome::Error(bad)"
    );
}

#[rstest]
fn debug_output_is_structural() {
    assert_eq!(format!("{:?}", Outcome::<i32, &str>::error("e")), "Outcome(Error(\"e\"))");
    assert_eq!(format!("{:?}", Maybe::value(3)), "Value(3)");
    assert_eq!(format!("{:?}", Maybe::<i32>::none()), "None");
}

#[rstest]
#[case(ContractViolation::BothChannels, "both were supplied")]
#[case(ContractViolation::NoChannel, "none was supplied")]
#[case(ContractViolation::Unresolved, "has not been resolved yet")]
fn contract_violation_messages(#[case] violation: ContractViolation, #[case] fragment: &str) {
    assert!(violation.to_string().contains(fragment));
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn async_debug_reports_state() {
    use outcome::asynchronous::AsyncOutcome;

    let pending = AsyncOutcome::new(async { Outcome::<i32, String>::value(5) });
    assert!(format!("{pending:?}").contains("Unresolved"));
    assert!(pending.has_value().await);
    assert!(format!("{pending:?}").contains("Resolved"));
}
