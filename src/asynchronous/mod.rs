//! Asynchronous, memoized variants of the algebra.
//!
//! - [`AsyncEither`]: a pending computation of an [`Either`](crate::either::Either),
//!   evaluated once and cached for every observer
//! - [`AsyncOutcome`]: the [`Outcome`](crate::outcome::Outcome) operators over an `AsyncEither`
//! - [`AsyncMaybe`]: the [`Maybe`](crate::maybe::Maybe) operators over an `AsyncEither`
//!
//! Operators never force their source. Each one returns a new instance whose
//! own computation awaits the source and applies the synchronous operator,
//! and each instance memoizes only its own result.
//!
//! This layer does not schedule, cancel or retry anything. A panic or a
//! cancellation inside the wrapped computation reaches every observer that
//! awaits it.

mod async_either;
mod async_maybe;
mod async_outcome;

pub use async_either::{AsyncEither, ResolutionState, Resolve};
pub use async_maybe::{AsyncMaybe, ResolveMaybe};
pub use async_outcome::{AsyncOutcome, ResolveOutcome};
