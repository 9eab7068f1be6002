//! # outcome
//!
//! A small algebra of results: values that hold either a success value or an
//! error, with combinators that propagate the error automatically.
//!
//! ## Overview
//!
//! - **Either**: the two-channel core, exactly one of value or error
//! - **Outcome**: transformation, chaining, filtering and multi-error
//!   validation over an `Either`
//! - **Maybe**: optional values with the same operator vocabulary
//! - **Validator**: accumulates independent checks and reports every failure
//! - **Asynchronous**: memoized pending variants of all of the above
//! - **Type Classes**: Functor, Monad and Bifunctor for generic code
//! - **Adapters**: sequence search, text requirements and parsing
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Bifunctor)
//! - `async`: `AsyncEither`, `AsyncOutcome` and `AsyncMaybe` on top of tokio
//! - `adapters`: Helpers producing outcomes from common operations
//! - `serde`: `Serialize`/`Deserialize` for the synchronous types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn divide(left: i32, right: i32) -> Outcome<i32, String> {
//!     if right == 0 {
//!         Outcome::error(format!("Can not divide '{left}' with '{right}'."))
//!     } else {
//!         Outcome::value(left / right)
//!     }
//! }
//!
//! let result = divide(10, 2)
//!     .flat_map(|x| divide(x, 0))
//!     .map(|x| x + 1);
//! assert_eq!(result, Outcome::error("Can not divide '5' with '0'.".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::ContractViolation;
    pub use crate::maybe::{IntoMaybe, Maybe};
    pub use crate::outcome::{IntoOutcome, Outcome, Validations};
    pub use crate::validator::Validator;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::asynchronous::*;

    #[cfg(feature = "adapters")]
    pub use crate::adapters::*;
}

pub mod either;
pub mod error;
pub mod maybe;
pub mod outcome;
pub mod validator;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod asynchronous;

#[cfg(feature = "adapters")]
pub mod adapters;
