//! Contract violations.
//!
//! Errors in this module are never domain errors: they signal that a caller
//! used the algebra incorrectly (built an [`Either`](crate::either::Either)
//! from inconsistent parts, or read an asynchronous outcome before it was
//! resolved). Domain errors travel through the error channel of
//! [`Outcome`](crate::outcome::Outcome) instead and are never raised.

use thiserror::Error;

/// A programming mistake detected by the algebra.
///
/// # Examples
///
/// ```rust
/// use outcome::either::Either;
/// use outcome::error::ContractViolation;
///
/// let result = Either::<i32, String>::from_parts(None, None);
/// assert_eq!(result, Err(ContractViolation::NoChannel));
/// assert_eq!(
///     ContractViolation::NoChannel.to_string(),
///     "either requires exactly one populated channel, but none was supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ContractViolation {
    /// Both the value and the error channel were supplied.
    #[error("either requires exactly one populated channel, but both were supplied")]
    BothChannels,
    /// Neither channel was supplied, or an error state had no error.
    #[error("either requires exactly one populated channel, but none was supplied")]
    NoChannel,
    /// A synchronous read happened before the asynchronous computation settled.
    #[error(
        "the asynchronous computation has not been resolved yet; \
         await `resolve`, `has_value` or `has_error` before reading it"
    )]
    Unresolved,
}

impl ContractViolation {
    /// Panics with this violation's message.
    ///
    /// Used by the `expect_*` helpers that prefer failing fast over
    /// returning a `Result`.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("contract violation: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ContractViolation::BothChannels, "both were supplied")]
    #[case(ContractViolation::NoChannel, "none was supplied")]
    #[case(ContractViolation::Unresolved, "not been resolved yet")]
    fn display_identifies_the_condition(
        #[case] violation: ContractViolation,
        #[case] fragment: &str,
    ) {
        assert!(violation.to_string().contains(fragment));
    }

    #[rstest]
    #[should_panic(expected = "contract violation: the asynchronous computation")]
    fn raise_panics_with_message() {
        ContractViolation::Unresolved.raise();
    }
}
