//! Searching asynchronous sequences into outcomes.
//!
//! The asynchronous counterparts of [`SequenceExt`](super::SequenceExt) for
//! any [`Stream`], such as the rows of a database query. They return plain
//! futures; wrap them in [`AsyncOutcome::new`](crate::asynchronous::AsyncOutcome::new)
//! to memoize the search.
//!
//! # Examples
//!
//! ```rust
//! use futures::stream;
//! use outcome::adapters::{ElementError, stream_search};
//! use outcome::asynchronous::AsyncOutcome;
//! use outcome::outcome::Outcome;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let rows = stream::iter(vec![3, 8, 13]);
//! let found = AsyncOutcome::new(stream_search::first_or_error_by(rows, |row| *row > 5));
//! assert_eq!(found.await, Outcome::value(8));
//!
//! let rows = stream::iter(vec![3, 8, 13]);
//! assert_eq!(
//!     stream_search::single_or_error_by(rows, |row| *row > 5).await,
//!     Outcome::error(ElementError::ManyElements)
//! );
//! # });
//! ```

use std::pin::pin;

use futures::{Stream, StreamExt};

use super::ElementError;
use crate::outcome::Outcome;

/// Returns the first item of `stream`.
pub async fn first_or_error<S>(stream: S) -> Outcome<S::Item, ElementError>
where
    S: Stream,
{
    first_or_error_by(stream, |_| true).await
}

/// Returns the first item of `stream` matching `predicate`.
///
/// Stops polling once a match is found.
pub async fn first_or_error_by<S, P>(stream: S, mut predicate: P) -> Outcome<S::Item, ElementError>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    let mut stream = pin!(stream);
    while let Some(item) = stream.next().await {
        if predicate(&item) {
            return Outcome::value(item);
        }
    }
    Outcome::error(ElementError::NoElement)
}

/// Returns the only item of `stream`.
pub async fn single_or_error<S>(stream: S) -> Outcome<S::Item, ElementError>
where
    S: Stream,
{
    single_or_error_by(stream, |_| true).await
}

/// Returns the only item of `stream` matching `predicate`.
///
/// Stops polling at the second match.
pub async fn single_or_error_by<S, P>(stream: S, mut predicate: P) -> Outcome<S::Item, ElementError>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    let mut stream = pin!(stream);
    let mut found = None;
    while let Some(item) = stream.next().await {
        if predicate(&item) {
            if found.is_some() {
                return Outcome::error(ElementError::ManyElements);
            }
            found = Some(item);
        }
    }
    found.map_or(Outcome::error(ElementError::NoElement), Outcome::value)
}
