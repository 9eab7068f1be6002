//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Outcome<_, E>` or `Maybe<_>` as type
//! constructors directly. [`TypeConstructor`] names the inner type and the
//! same constructor applied to another type, which is enough to state
//! [`Functor`](super::Functor) and [`Monad`](super::Monad).
//!
//! # Examples
//!
//! ```rust
//! use outcome::maybe::Maybe;
//! use outcome::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Maybe<String> = emptied(Maybe::value(42));
//! assert!(empty.is_none());
//! ```

use crate::either::Either;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type built by applying a one-parameter constructor to [`Self::Inner`].
///
/// Two-parameter types fix their error channel and vary the value channel.
pub trait TypeConstructor {
    /// The type the constructor was applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T, E> TypeConstructor for Either<T, E> {
    type Inner = T;
    type WithType<B> = Either<B, E>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}
