//! Asynchronous maybe.
//!
//! [`AsyncMaybe<T>`] is an [`AsyncEither`] whose error channel carries `()`,
//! standing for absence. Its operators mirror [`Maybe`].

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::{AsyncEither, AsyncOutcome, ResolutionState, Resolve};
use crate::either::Either;
use crate::error::ContractViolation;
use crate::maybe::{IntoMaybe, Maybe};
use crate::outcome::Outcome;

fn into_either<T>(maybe: Maybe<T>) -> Either<T, ()> {
    maybe.into_option().map_or(Either::Error(()), Either::Value)
}

/// A memoized pending computation of a [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use outcome::asynchronous::AsyncMaybe;
/// use outcome::outcome::Outcome;
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let lookup = AsyncMaybe::from_option(async { None::<i32> });
/// let outcome = lookup.map(|x| x + 1).to_outcome(|| "not found");
/// assert_eq!(outcome.await, Outcome::error("not found"));
/// # });
/// ```
pub struct AsyncMaybe<T> {
    either: AsyncEither<T, ()>,
}

impl<T> AsyncMaybe<T>
where
    T: Send + Sync + 'static,
{
    /// Wraps a pending computation of a maybe without starting it.
    pub fn new<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Maybe<T>> + Send + 'static,
    {
        Self {
            either: AsyncEither::new(async move { into_either(computation.await) }),
        }
    }

    /// Wraps a pending computation of an `Option`.
    pub fn from_option<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self::new(async move { Maybe::from(computation.await) })
    }

    /// Creates a resolved, present instance.
    pub fn value(value: T) -> Self {
        Self::from(Maybe::value(value))
    }

    /// Creates a resolved, absent instance.
    pub fn none() -> Self {
        Self::from(Maybe::none())
    }

    pub(crate) const fn from_async_either(either: AsyncEither<T, ()>) -> Self {
        Self { either }
    }

    /// Returns the current resolution state.
    pub fn state(&self) -> ResolutionState {
        self.either.state()
    }

    /// Awaits the computation and reports whether a value is present.
    pub async fn has_value(&self) -> bool {
        self.either.has_value().await
    }

    /// Awaits the computation and reports whether the value is absent.
    pub async fn is_none(&self) -> bool {
        self.either.has_error().await
    }

    /// Reads the cached value without driving the computation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::Unresolved`] before resolution.
    pub fn as_value(&self) -> Result<Option<&T>, ContractViolation> {
        self.either.value()
    }
}

impl<T> AsyncMaybe<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn derive<U, F>(self, operator: F) -> AsyncMaybe<U>
    where
        U: Send + Sync + 'static,
        F: FnOnce(Maybe<T>) -> Maybe<U> + Send + 'static,
    {
        AsyncMaybe {
            either: self.either.map_either(move |either| {
                into_either(operator(Maybe::from(either.into_value())))
            }),
        }
    }

    /// Lazily transforms the value. See [`Maybe::map`].
    pub fn map<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        U: Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.derive(move |maybe| maybe.map(function))
    }

    /// Lazily transforms the value with an asynchronous function.
    pub fn map_async<U, F, Fut>(self, function: F) -> AsyncMaybe<U>
    where
        U: Send + Sync + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        AsyncMaybe {
            either: self.either.then(move |either| async move {
                match either {
                    Either::Value(value) => Either::Value(function(value).await),
                    Either::Error(()) => Either::Error(()),
                }
            }),
        }
    }

    /// Lazily chains a computation that may produce nothing.
    /// See [`Maybe::flat_map`].
    pub fn flat_map<U, B, F>(self, function: F) -> AsyncMaybe<U>
    where
        U: Send + Sync + 'static,
        B: IntoMaybe<U> + 'static,
        F: FnOnce(T) -> B + Send + 'static,
    {
        self.derive(move |maybe| maybe.flat_map(function))
    }

    /// Lazily chains another asynchronous maybe.
    pub fn flat_map_async<U, F>(self, function: F) -> AsyncMaybe<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> AsyncMaybe<U> + Send + 'static,
    {
        AsyncMaybe {
            either: self.either.then(move |either| async move {
                match either {
                    Either::Value(value) => into_either(function(value).await),
                    Either::Error(()) => Either::Error(()),
                }
            }),
        }
    }

    /// Lazily discards the value when `predicate` fails.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        self.derive(move |maybe| maybe.filter(predicate))
    }

    /// Lazily converts into an outcome; `error_selector` runs only when absent.
    pub fn to_outcome<E, F>(self, error_selector: F) -> AsyncOutcome<T, E>
    where
        E: Send + Sync + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        AsyncOutcome::from(
            self.either
                .map_either(move |either| either.map_error(|()| error_selector())),
        )
    }

    /// Awaits the computation and runs exactly one of two functions.
    pub async fn fold<R, F, G>(self, on_value: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        self.await.fold(on_value, on_none)
    }
}

impl<T> From<Maybe<T>> for AsyncMaybe<T>
where
    T: Send + Sync + 'static,
{
    fn from(maybe: Maybe<T>) -> Self {
        Self {
            either: AsyncEither::resolved(into_either(maybe)),
        }
    }
}

impl<T> Maybe<T>
where
    T: Send + Sync + 'static,
{
    /// Lifts the maybe into an already resolved [`AsyncMaybe`].
    pub fn into_async(self) -> AsyncMaybe<T> {
        AsyncMaybe::from(self)
    }
}

impl<T, E> From<AsyncOutcome<T, E>> for AsyncMaybe<T>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn from(outcome: AsyncOutcome<T, E>) -> Self {
        outcome.to_maybe()
    }
}

impl<T> fmt::Debug for AsyncMaybe<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("AsyncMaybe").field(&self.either).finish()
    }
}

pin_project! {
    /// Future resolving an [`AsyncMaybe`] into an owned [`Maybe`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ResolveMaybe<T> {
        #[pin]
        inner: Resolve<T, ()>,
    }
}

impl<T: Clone> Future for ResolveMaybe<T> {
    type Output = Maybe<T>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .inner
            .poll(context)
            .map(|either| Maybe::from(either.into_value()))
    }
}

impl<T: Clone> IntoFuture for AsyncMaybe<T> {
    type Output = Maybe<T>;
    type IntoFuture = ResolveMaybe<T>;

    fn into_future(self) -> Self::IntoFuture {
        ResolveMaybe {
            inner: self.either.into_future(),
        }
    }
}
