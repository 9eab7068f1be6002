//! Asynchronous outcome.
//!
//! [`AsyncOutcome<T, E>`] re-exposes the [`Outcome`] operator surface over an
//! [`AsyncEither`]. Every operator returns a new, lazily composed instance;
//! the combinator itself is the synchronous one, applied once the source has
//! resolved.
//!
//! # Examples
//!
//! ```rust
//! use outcome::asynchronous::AsyncOutcome;
//! use outcome::outcome::Outcome;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let lookup = AsyncOutcome::new(async { Outcome::<i32, String>::value(3) });
//!
//! let checked = lookup
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 5, |x| format!("{x} is too small"));
//!
//! assert_eq!(checked.await, Outcome::value(6));
//! # });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::{AsyncEither, AsyncMaybe, ResolutionState, Resolve};
use crate::either::Either;
use crate::error::ContractViolation;
use crate::outcome::{IntoOutcome, Outcome, Validations};

/// A memoized pending computation of an [`Outcome`].
pub struct AsyncOutcome<T, E> {
    either: AsyncEither<T, E>,
}

// =============================================================================
// Construction and Queries
// =============================================================================

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Wraps a pending computation of an outcome without starting it.
    pub fn new<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            either: AsyncEither::new(async move { computation.await.into_either() }),
        }
    }

    /// Wraps a pending computation of a standard `Result`.
    pub fn from_result<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            either: AsyncEither::new(async move { Either::from(computation.await) }),
        }
    }

    /// Starts the computation on the tokio runtime right away.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            either: AsyncEither::spawn(async move { computation.await.into_either() }),
        }
    }

    /// Creates a resolved instance in the value state.
    pub fn value(value: T) -> Self {
        Self::from(Outcome::value(value))
    }

    /// Creates a resolved instance in the error state.
    pub fn error(error: E) -> Self {
        Self::from(Outcome::error(error))
    }

    /// Returns the current resolution state.
    pub fn state(&self) -> ResolutionState {
        self.either.state()
    }

    /// Awaits the computation and reports whether it produced a value.
    pub async fn has_value(&self) -> bool {
        self.either.has_value().await
    }

    /// Awaits the computation and reports whether it produced an error.
    pub async fn has_error(&self) -> bool {
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

    /// Reads the cached error without driving the computation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::Unresolved`] before resolution.
    pub fn as_error(&self) -> Result<Option<&E>, ContractViolation> {
        self.either.error()
    }

    /// Borrows the underlying asynchronous either.
    pub const fn as_async_either(&self) -> &AsyncEither<T, E> {
        &self.either
    }

    /// Consumes the outcome, returning the underlying asynchronous either.
    pub fn into_async_either(self) -> AsyncEither<T, E> {
        self.either
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T, E> AsyncOutcome<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Applies a synchronous outcome operator once the source resolves.
    fn derive<U, E2, F>(self, operator: F) -> AsyncOutcome<U, E2>
    where
        U: Send + Sync + 'static,
        E2: Send + Sync + 'static,
        F: FnOnce(Outcome<T, E>) -> Outcome<U, E2> + Send + 'static,
    {
        AsyncOutcome {
            either: self
                .either
                .map_either(move |either| operator(Outcome::from(either)).into_either()),
        }
    }

    /// Lazily transforms the value. See [`Outcome::map`].
    pub fn map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + Sync + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        self.derive(move |outcome| outcome.map(function))
    }

    /// Lazily transforms the value with an asynchronous function.
    ///
    /// `function` is neither called nor awaited in the error state.
    pub fn map_async<U, F, Fut>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + Sync + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        AsyncOutcome {
            either: self.either.then(move |either| async move {
                match either {
                    Either::Value(value) => Either::Value(function(value).await),
                    Either::Error(error) => Either::Error(error),
                }
            }),
        }
    }

    /// Lazily transforms the error. See [`Outcome::map_error`].
    pub fn map_error<E2, F>(self, function: F) -> AsyncOutcome<T, E2>
    where
        E2: Send + Sync + 'static,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        self.derive(move |outcome| outcome.map_error(function))
    }

    /// Lazily chains a fallible computation. See [`Outcome::flat_map`].
    pub fn flat_map<U, B, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + Sync + 'static,
        B: IntoOutcome<U, E> + 'static,
        F: FnOnce(T) -> B + Send + 'static,
    {
        self.derive(move |outcome| outcome.flat_map(function))
    }

    /// Lazily chains another asynchronous outcome.
    ///
    /// The derived outcome is awaited only in the value state.
    pub fn flat_map_async<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> AsyncOutcome<U, E> + Send + 'static,
    {
        AsyncOutcome {
            either: self.either.then(move |either| async move {
                match either {
                    Either::Value(value) => function(value).await.into_either(),
                    Either::Error(error) => Either::Error(error),
                }
            }),
        }
    }

    /// Lazily chains a computation with a different error type.
    /// See [`Outcome::flat_map_with`].
    pub fn flat_map_with<U, E2, F, G>(self, function: F, reconcile: G) -> AsyncOutcome<U, E>
    where
        U: Send + Sync + 'static,
        E2: 'static,
        F: FnOnce(T) -> Outcome<U, E2> + Send + 'static,
        G: FnOnce(E2) -> E + Send + 'static,
    {
        self.derive(move |outcome| outcome.flat_map_with(function, reconcile))
    }

    /// Lazily filters the value. See [`Outcome::filter`].
    #[must_use]
    pub fn filter<P, F>(self, predicate: P, error_selector: F) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
        F: FnOnce(&T) -> E + Send + 'static,
    {
        self.derive(move |outcome| outcome.filter(predicate, error_selector))
    }

    /// Lazily runs independent validations. See [`Outcome::multiple`].
    pub fn multiple<V, M>(self, validations: V) -> AsyncOutcome<T, Vec<E>>
    where
        V: Validations<T, E, M> + Send + 'static,
        M: 'static,
    {
        self.derive(move |outcome| outcome.multiple(validations))
    }

    /// Lazily exchanges the two channels. See [`Outcome::swap`].
    pub fn swap(self) -> AsyncOutcome<E, T> {
        self.derive(Outcome::swap)
    }

    /// Lazily runs a side effect on the value. See [`Outcome::inspect`].
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
    {
        self.derive(move |outcome| outcome.inspect(function))
    }

    /// Lazily discards the error channel.
    pub fn to_maybe(self) -> AsyncMaybe<T> {
        AsyncMaybe::from_async_either(self.either.map_either(|either| either.map_error(|_| ())))
    }

    /// Awaits the computation and runs exactly one of two functions.
    pub async fn fold<R, F, G>(self, on_value: F, on_error: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        self.await.fold(on_value, on_error)
    }
}

impl<T, E> From<Outcome<T, E>> for AsyncOutcome<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        Self {
            either: AsyncEither::resolved(outcome.into_either()),
        }
    }
}

impl<T, E> From<AsyncEither<T, E>> for AsyncOutcome<T, E> {
    fn from(either: AsyncEither<T, E>) -> Self {
        Self { either }
    }
}

impl<T, E> Outcome<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Lifts the outcome into an already resolved [`AsyncOutcome`].
    pub fn into_async(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from(self)
    }
}

impl<T, E> fmt::Debug for AsyncOutcome<T, E>
where
    T: fmt::Debug + Send + Sync + 'static,
    E: fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("AsyncOutcome")
            .field(&self.either)
            .finish()
    }
}

// =============================================================================
// Owned Resolution
// =============================================================================

pin_project! {
    /// Future resolving an [`AsyncOutcome`] into an owned [`Outcome`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ResolveOutcome<T, E> {
        #[pin]
        inner: Resolve<T, E>,
    }
}

impl<T: Clone, E: Clone> Future for ResolveOutcome<T, E> {
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context).map(Outcome::from)
    }
}

impl<T: Clone, E: Clone> IntoFuture for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;
    type IntoFuture = ResolveOutcome<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        ResolveOutcome {
            inner: self.either.into_future(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::Maybe;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(
        counter: &Arc<AtomicUsize>,
        outcome: Outcome<i32, &'static str>,
    ) -> AsyncOutcome<i32, &'static str> {
        let counter = Arc::clone(counter);
        AsyncOutcome::new(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            outcome
        })
    }

    #[rstest]
    #[tokio::test]
    async fn operators_apply_in_declaration_order() {
        let outcome = AsyncOutcome::<i32, String>::value(2)
            .map(|x| x + 1)
            .flat_map(|x| Outcome::<i32, String>::value(x * 10));
        assert_eq!(outcome.await, Outcome::value(30));
    }

    #[rstest]
    #[tokio::test]
    async fn map_async_skips_error() {
        let outcome = AsyncOutcome::<i32, String>::error("e".to_string())
            .map_async(|x| async move { x + 1 });
        assert_eq!(outcome.await, Outcome::error("e".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn flat_map_async_chains() {
        let outcome = AsyncOutcome::<i32, String>::value(4)
            .flat_map_async(|x| AsyncOutcome::new(async move { Outcome::value(x / 2) }));
        assert_eq!(outcome.await, Outcome::value(2));
    }

    #[rstest]
    #[tokio::test]
    async fn fold_resolves_one_branch() {
        let status = AsyncOutcome::<i32, String>::error("missing".to_string())
            .fold(|_| 200, |_| 404)
            .await;
        assert_eq!(status, 404);
    }

    #[rstest]
    #[tokio::test]
    async fn from_result_maps_channels() {
        let outcome = AsyncOutcome::from_result(async { Err::<i32, &str>("boom") });
        assert!(outcome.has_error().await);
        assert_eq!(outcome.as_error(), Ok(Some(&"boom")));
    }

    #[rstest]
    fn into_async_is_resolved() {
        let outcome = Outcome::<i32, String>::value(1).into_async();
        assert_eq!(outcome.state(), ResolutionState::Resolved);
        assert_eq!(outcome.as_value(), Ok(Some(&1)));
    }

    #[rstest]
    #[tokio::test]
    async fn multiple_collects_errors_in_order() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let checked = counted(&evaluations, Outcome::value(3)).multiple((
            |x: &i32| Outcome::<(), &str>::value(()).filter(|_| x % 2 == 0, |_| "odd"),
            |x: &i32| Outcome::<(), &str>::value(()).filter(|_| *x > 10, |_| "small"),
            |x: &i32| Outcome::<(), &str>::value(()).filter(|_| *x > 0, |_| "negative"),
        ));
        assert_eq!(checked.state(), ResolutionState::Unresolved);
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);

        assert_eq!(checked.await, Outcome::error(vec!["odd", "small"]));
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[case(Outcome::value(4), Outcome::error(4))]
    #[case(Outcome::error("e"), Outcome::value("e"))]
    #[tokio::test]
    async fn swap_exchanges_channels(
        #[case] source: Outcome<i32, &'static str>,
        #[case] expected: Outcome<&'static str, i32>,
    ) {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let swapped = counted(&evaluations, source).swap();
        assert_eq!(swapped.state(), ResolutionState::Unresolved);
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);

        assert_eq!(swapped.await, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn flat_map_with_reconciles_inner_error() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let chained = counted(&evaluations, Outcome::value(0)).flat_map_with(
            |x| {
                if x == 0 {
                    Outcome::<i32, usize>::error(404)
                } else {
                    Outcome::value(100 / x)
                }
            },
            |code| if code == 404 { "missing" } else { "unknown" },
        );
        assert_eq!(chained.state(), ResolutionState::Unresolved);
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);

        assert_eq!(chained.await, Outcome::error("missing"));
    }

    #[rstest]
    #[tokio::test]
    async fn flat_map_with_skips_reconciler_on_source_error() {
        let reconciled = Arc::new(AtomicUsize::new(0));
        let recorder = Arc::clone(&reconciled);
        let chained = AsyncOutcome::<i32, &str>::error("source").flat_map_with(
            |x| Outcome::<i32, usize>::value(x + 1),
            move |_| {
                recorder.fetch_add(1, Ordering::SeqCst);
                "reconciled"
            },
        );
        assert_eq!(chained.state(), ResolutionState::Unresolved);

        assert_eq!(chained.await, Outcome::error("source"));
        assert_eq!(reconciled.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn map_error_transforms_error_only() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let mapped = counted(&evaluations, Outcome::error("bad")).map_error(str::len);
        assert_eq!(mapped.state(), ResolutionState::Unresolved);
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);
        assert_eq!(mapped.await, Outcome::error(3));

        let untouched = AsyncOutcome::<i32, &str>::value(7).map_error(str::len);
        assert_eq!(untouched.await, Outcome::value(7));
    }

    #[rstest]
    #[tokio::test]
    async fn inspect_runs_once_after_resolution() {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(AtomicUsize::new(0));
        let recorder = Arc::clone(&seen);
        let inspected = counted(&evaluations, Outcome::value(5)).inspect(move |x| {
            recorder.fetch_add(usize::try_from(*x).unwrap(), Ordering::SeqCst);
        });
        assert_eq!(inspected.state(), ResolutionState::Unresolved);
        assert_eq!(seen.load(Ordering::SeqCst), 0);

        assert!(inspected.has_value().await);
        assert_eq!(inspected.await, Outcome::value(5));
        assert_eq!(seen.load(Ordering::SeqCst), 5);
        assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[case(Outcome::value(9), Maybe::value(9))]
    #[case(Outcome::error("gone"), Maybe::none())]
    #[tokio::test]
    async fn to_maybe_drops_error(
        #[case] source: Outcome<i32, &'static str>,
        #[case] expected: Maybe<i32>,
    ) {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let maybe = counted(&evaluations, source).to_maybe();
        assert_eq!(maybe.state(), ResolutionState::Unresolved);
        assert_eq!(evaluations.load(Ordering::SeqCst), 0);

        assert_eq!(maybe.await, expected);
    }
}
