//! Memoized asynchronous either.
//!
//! [`AsyncEither<T, E>`] wraps one pending computation producing an
//! [`Either`]. The computation is driven by the first observer that awaits a
//! resolution query and its result is cached; every other observer, whether it
//! arrives later or at the same time, reads the cached result.
//!
//! # State Machine
//!
//! ```text
//! Unresolved --(first poll)--> Resolving --(computation settles)--> Resolved
//! ```
//!
//! The cache is a [`futures::future::Shared`] future: a single-assignment
//! primitive whose clones all observe one evaluation of the inner future. A
//! clone being dropped mid-evaluation hands the evaluation over to the
//! remaining observers instead of restarting it.
//!
//! # Synchronous Reads
//!
//! [`value`](AsyncEither::value), [`error`](AsyncEither::error) and
//! [`either`](AsyncEither::either) never drive the computation. Before
//! resolution they return [`ContractViolation::Unresolved`] so that "not yet
//! observed" is never confused with "resolved and empty".
//!
//! # Examples
//!
//! ```rust
//! use outcome::asynchronous::{AsyncEither, ResolutionState};
//! use outcome::either::Either;
//! use outcome::error::ContractViolation;
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let pending: AsyncEither<i32, String> = AsyncEither::new(async { Either::Value(42) });
//! assert_eq!(pending.state(), ResolutionState::Unresolved);
//! assert_eq!(pending.value(), Err(ContractViolation::Unresolved));
//!
//! assert!(pending.has_value().await);
//! assert_eq!(pending.value(), Ok(Some(&42)));
//! assert_eq!(pending.state(), ResolutionState::Resolved);
//! # });
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};
use pin_project_lite::pin_project;
use static_assertions::assert_impl_all;
use tracing::{debug, trace, warn};

use crate::either::Either;
use crate::error::ContractViolation;

/// Computation not polled yet.
const STATE_UNRESOLVED: u8 = 0;
/// Computation polled at least once.
const STATE_RESOLVING: u8 = 1;

type Memoized<T, E> = Shared<BoxFuture<'static, Arc<Either<T, E>>>>;

/// Observable progress of an [`AsyncEither`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionState {
    /// Nobody has awaited the computation yet.
    Unresolved,
    /// The computation is being driven.
    Resolving,
    /// The result is cached; synchronous reads succeed.
    Resolved,
}

/// A memoized pending computation of an [`Either`].
///
/// Each instance owns its own cache. Derived instances built with
/// [`then`](Self::then) get a fresh cache whose computation awaits this one,
/// so memoization never leaks across a chain.
///
/// `AsyncEither` is deliberately not `Clone`; share it by reference or
/// behind an `Arc` to observe it from several tasks.
pub struct AsyncEither<T, E> {
    memoized: Memoized<T, E>,
    driven: Arc<AtomicU8>,
}

assert_impl_all!(AsyncEither<i32, String>: Send, Sync, Unpin);

impl<T, E> AsyncEither<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a pending computation without starting it.
    ///
    /// The computation runs when the first resolution query is awaited.
    pub fn new<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Either<T, E>> + Send + 'static,
    {
        let driven = Arc::new(AtomicU8::new(STATE_UNRESOLVED));
        let marker = Arc::clone(&driven);
        let memoized = async move {
            marker.store(STATE_RESOLVING, Ordering::Release);
            trace!("driving asynchronous computation");
            let either = computation.await;
            trace!(
                has_value = either.has_value(),
                "asynchronous computation settled"
            );
            Arc::new(either)
        }
        .boxed()
        .shared();

        Self { memoized, driven }
    }

    /// Creates an instance that is already resolved.
    ///
    /// Synchronous reads succeed immediately.
    pub fn resolved(either: Either<T, E>) -> Self {
        let resolved = Self::new(std::future::ready(either));
        // A ready future settles on its first poll.
        let _ = resolved.memoized.clone().now_or_never();
        resolved
    }

    /// Starts the computation on the tokio runtime right away.
    ///
    /// The computation runs on a worker task; observers still see exactly one
    /// evaluation. A panic inside the task is re-raised to the observer that
    /// drives the result, and so is the cancellation of the task.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = Either<T, E>> + Send + 'static,
    {
        let handle = tokio::spawn(computation);
        Self::new(async move {
            match handle.await {
                Ok(either) => either,
                Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
                Err(error) => {
                    warn!(%error, "spawned asynchronous computation was cancelled");
                    panic!("spawned asynchronous computation was cancelled: {error}")
                }
            }
        })
    }

    // =========================================================================
    // Resolution Queries
    // =========================================================================

    /// Awaits the computation and returns the cached either.
    ///
    /// The first caller drives the computation; concurrent callers wait for
    /// the same evaluation.
    ///
    /// # Panics
    ///
    /// Propagates a panic raised by the wrapped computation.
    pub async fn resolve(&self) -> &Either<T, E> {
        if self.memoized.peek().is_none() {
            let _settled = self.memoized.clone().await;
        }
        self.memoized.peek().map(Arc::as_ref).expect(
            "AsyncEither internal error: the shared computation completed without caching its result",
        )
    }

    /// Awaits the computation and reports whether it produced a value.
    pub async fn has_value(&self) -> bool {
        self.resolve().await.has_value()
    }

    /// Awaits the computation and reports whether it produced an error.
    pub async fn has_error(&self) -> bool {
        self.resolve().await.has_error()
    }

    // =========================================================================
    // Synchronous Reads
    // =========================================================================

    /// Returns the current resolution state.
    pub fn state(&self) -> ResolutionState {
        if self.memoized.peek().is_some() {
            ResolutionState::Resolved
        } else if self.driven.load(Ordering::Acquire) == STATE_RESOLVING {
            ResolutionState::Resolving
        } else {
            ResolutionState::Unresolved
        }
    }

    /// Returns `true` once the result is cached.
    pub fn is_resolved(&self) -> bool {
        self.memoized.peek().is_some()
    }

    /// Reads the cached either without driving the computation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::Unresolved`] before resolution.
    pub fn either(&self) -> Result<&Either<T, E>, ContractViolation> {
        match self.memoized.peek() {
            Some(either) => Ok(either.as_ref()),
            None => {
                debug!(state = ?self.state(), "synchronous read of an unresolved AsyncEither");
                Err(ContractViolation::Unresolved)
            }
        }
    }

    /// Reads the cached value; `Ok(None)` when the result is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::Unresolved`] before resolution.
    pub fn value(&self) -> Result<Option<&T>, ContractViolation> {
        self.either().map(Either::value)
    }

    /// Reads the cached error; `Ok(None)` when the result is a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::Unresolved`] before resolution.
    pub fn error(&self) -> Result<Option<&E>, ContractViolation> {
        self.either().map(Either::error)
    }

    /// Reads the cached either, failing fast before resolution.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::Unresolved`] before resolution.
    #[track_caller]
    pub fn expect_resolved(&self) -> &Either<T, E> {
        match self.either() {
            Ok(either) => either,
            Err(violation) => violation.raise(),
        }
    }
}

// =============================================================================
// Derivation
// =============================================================================

impl<T, E> AsyncEither<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Builds a new, independently memoized instance whose computation awaits
    /// this one and continues with `function`.
    ///
    /// Nothing is driven until the new instance is observed.
    pub fn then<U, E2, F, Fut>(self, function: F) -> AsyncEither<U, E2>
    where
        U: Send + Sync + 'static,
        E2: Send + Sync + 'static,
        F: FnOnce(Either<T, E>) -> Fut + Send + 'static,
        Fut: Future<Output = Either<U, E2>> + Send + 'static,
    {
        AsyncEither::new(async move {
            let either = self.await;
            function(either).await
        })
    }

    /// Like [`then`](Self::then) with a synchronous continuation.
    pub fn map_either<U, E2, F>(self, function: F) -> AsyncEither<U, E2>
    where
        U: Send + Sync + 'static,
        E2: Send + Sync + 'static,
        F: FnOnce(Either<T, E>) -> Either<U, E2> + Send + 'static,
    {
        self.then(move |either| std::future::ready(function(either)))
    }
}

impl<T, E> fmt::Debug for AsyncEither<T, E>
where
    T: fmt::Debug + Send + Sync + 'static,
    E: fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AsyncEither")
            .field("state", &self.state())
            .field("either", &self.memoized.peek())
            .finish()
    }
}

impl<T, E> From<Either<T, E>> for AsyncEither<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn from(either: Either<T, E>) -> Self {
        Self::resolved(either)
    }
}

// =============================================================================
// Owned Resolution
// =============================================================================

pin_project! {
    /// Future resolving an [`AsyncEither`] into an owned [`Either`].
    ///
    /// The cached result is moved out when no other observer still shares it
    /// and cloned otherwise.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Resolve<T, E> {
        #[pin]
        memoized: Memoized<T, E>,
    }
}

impl<T: Clone, E: Clone> Future for Resolve<T, E> {
    type Output = Either<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .memoized
            .poll(context)
            .map(Arc::unwrap_or_clone)
    }
}

impl<T: Clone, E: Clone> IntoFuture for AsyncEither<T, E> {
    type Output = Either<T, E>;
    type IntoFuture = Resolve<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        Resolve {
            memoized: self.memoized,
        }
    }
}
