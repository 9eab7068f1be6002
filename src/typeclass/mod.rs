//! Type classes over [`Either`](crate::either::Either),
//! [`Outcome`](crate::outcome::Outcome) and [`Maybe`](crate::maybe::Maybe).
//!
//! - [`TypeConstructor`]: higher-kinded type emulation via GAT
//! - [`Functor`]: mapping over the value channel
//! - [`Monad`]: lifting values and chaining dependent computations
//! - [`Bifunctor`]: mapping over both channels
//!
//! The concrete types carry inherent methods with the same names. These
//! traits exist for code that is generic over the container.

mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
