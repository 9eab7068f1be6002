#![cfg(feature = "adapters")]
//! Collaborator scenarios built from the adapters.

use outcome::adapters::{
    ElementError, OutcomesExt, SequenceExt, TextError, parse, parse_maybe, require_content,
};
use outcome::maybe::Maybe;
use outcome::outcome::Outcome;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    email: &'static str,
}

fn users() -> Vec<User> {
    vec![
        User { id: 1, email: "ada@example.com" },
        User { id: 2, email: "bob@example.com" },
        User { id: 3, email: "ada@example.com" },
    ]
}

#[derive(Debug, PartialEq)]
enum LookupError {
    InvalidId(String),
    Missing,
    Duplicate,
}

fn find_user(raw_id: &str) -> Outcome<User, LookupError> {
    parse::<u32>(raw_id)
        .map_error(LookupError::InvalidId)
        .flat_map_with(
            |id| users().into_iter().single_or_error_by(|user| user.id == id),
            |error| match error {
                ElementError::NoElement => LookupError::Missing,
                ElementError::ManyElements => LookupError::Duplicate,
            },
        )
}

#[rstest]
#[case("2", Outcome::value(User { id: 2, email: "bob@example.com" }))]
#[case("9", Outcome::error(LookupError::Missing))]
#[case(
    "two",
    Outcome::error(LookupError::InvalidId(
        "Could not parse type String(\"two\") into u32.".to_string()
    ))
)]
fn lookup_by_id(#[case] raw_id: &str, #[case] expected: Outcome<User, LookupError>) {
    assert_eq!(find_user(raw_id), expected);
}

#[rstest]
fn duplicate_emails_are_reported() {
    let by_email = users().single_or_error_by(|user| user.email == "ada@example.com");
    assert_eq!(by_email, Outcome::error(ElementError::ManyElements));

    let first = users().first_or_error_by(|user| user.email == "ada@example.com");
    assert_eq!(first.map(|user| user.id), Outcome::value(1));
}

#[rstest]
fn batch_parsing_partitions_results() {
    let (numbers, failures) = ["1", "x", "3"]
        .iter()
        .map(|raw| parse::<i64>(raw))
        .partition_outcomes();
    assert_eq!(numbers, vec![1, 3]);
    assert_eq!(failures, vec!["Could not parse type String(\"x\") into i64.".to_string()]);
}

#[rstest]
#[case(Some("Grace"), Outcome::value("Grace"))]
#[case(Some("   "), Outcome::error(TextError::WhiteSpace))]
#[case(Some(""), Outcome::error(TextError::Empty))]
#[case(None, Outcome::error(TextError::Null))]
fn form_field_requirements(
    #[case] field: Option<&'static str>,
    #[case] expected: Outcome<&'static str, TextError>,
) {
    assert_eq!(require_content(field), expected);
}

#[rstest]
fn text_errors_have_messages() {
    assert_eq!(TextError::WhiteSpace.to_string(), "text contains only whitespace");
    assert_eq!(
        ElementError::ManyElements.to_string(),
        "the sequence contains more than one matching element"
    );
}

#[rstest]
fn parse_maybe_feeds_maybe_chain() {
    let doubled = parse_maybe::<u8>("21").map(|x| x * 2);
    assert_eq!(doubled, Maybe::value(42));
    assert_eq!(parse_maybe::<u8>("300").map(|x| x * 2), Maybe::none());
}
