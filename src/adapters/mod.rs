//! Small helpers that turn common fallible operations into outcomes.
//!
//! - [`SequenceExt`] / [`OutcomesExt`]: searching iterables and splitting
//!   sequences of outcomes
//! - [`stream_search`]: the same searches over asynchronous streams
//!   (feature `async`)
//! - [`require_content`] / [`require_non_empty`]: text requirements
//! - [`parse`] / [`parse_maybe`]: [`FromStr`](std::str::FromStr) parsing

mod parse;
mod sequence;
mod text;

#[cfg(feature = "async")]
pub mod stream_search;

pub use parse::{parse, parse_maybe};
pub use sequence::{ElementError, OutcomesExt, SequenceExt};
pub use text::{TextError, require_content, require_non_empty};
