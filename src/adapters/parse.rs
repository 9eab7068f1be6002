//! Parsing text into outcomes.

use std::str::FromStr;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Parses `input` through [`FromStr`].
///
/// The error names the input and the target type and drops the parser's own
/// error.
///
/// # Examples
///
/// ```rust
/// use outcome::adapters::parse;
/// use outcome::outcome::Outcome;
///
/// assert_eq!(parse::<i32>("42"), Outcome::value(42));
/// assert_eq!(
///     parse::<i32>("forty-two"),
///     Outcome::error(r#"Could not parse type String("forty-two") into i32."#.to_string())
/// );
/// ```
pub fn parse<T: FromStr>(input: &str) -> Outcome<T, String> {
    input.parse::<T>().map_or_else(
        |_| {
            Outcome::error(format!(
                "Could not parse type String(\"{input}\") into {}.",
                short_type_name::<T>()
            ))
        },
        Outcome::value,
    )
}

/// Parses `input` through [`FromStr`], dropping the failure.
pub fn parse_maybe<T: FromStr>(input: &str) -> Maybe<T> {
    input.parse::<T>().ok().into()
}
