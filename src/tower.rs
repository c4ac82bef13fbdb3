//! Tower integration for outcome-rail.
//!
//! [`OutcomeLayer`] wraps a service so that its failures come back as failed
//! [`Outcome`]s instead of service errors. The wrapped service never fails at
//! the Tower level (`Error = Infallible`), which keeps expected failures on
//! the data path.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::tower::OutcomeLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(OutcomeLayer::new())
//!     .service(my_service);
//! ```

use core::convert::Infallible;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::types::{Error, Outcome};

/// A Tower [`Layer`] producing [`OutcomeService`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeLayer {
    _private: (),
}

impl OutcomeLayer {
    #[inline]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl<S> Layer<S> for OutcomeLayer {
    type Service = OutcomeService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        OutcomeService::new(inner)
    }
}

/// A Tower [`Service`] that turns `Result<Response, E>` into
/// `Outcome<Response>`.
///
/// A readiness error of the inner service is held back and returned as the
/// failed outcome of the next call; readiness is polled again afterwards.
#[derive(Clone, Debug)]
pub struct OutcomeService<S> {
    inner: S,
    not_ready: Option<Error>,
}

impl<S> OutcomeService<S> {
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner, not_ready: None }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the wrapper and returns the inner service.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for OutcomeService<S>
where
    S: Service<Request>,
    S::Error: Into<Error>,
{
    type Response = Outcome<S::Response>;
    type Error = Infallible;
    type Future = OutcomeFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        if self.not_ready.is_some() {
            return Poll::Ready(Ok(()));
        }

        match self.inner.poll_ready(cx) {
            Poll::Ready(Ok(())) => Poll::Ready(Ok(())),
            Poll::Ready(Err(error)) => {
                let error: Error = error.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %error, "inner service not ready, failing next call");
                self.not_ready = Some(error);
                Poll::Ready(Ok(()))
            },
            Poll::Pending => Poll::Pending,
        }
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        match self.not_ready.take() {
            Some(error) => OutcomeFuture { inner: None, failed: Some(error) },
            None => OutcomeFuture { inner: Some(self.inner.call(request)), failed: None },
        }
    }
}

pin_project! {
    /// Future returned by [`OutcomeService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<F> {
        #[pin]
        inner: Option<F>,
        failed: Option<Error>,
    }
}

impl<F, T, E> Future for OutcomeFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Error>,
{
    type Output = Result<Outcome<T>, Infallible>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let Some(inner) = this.inner.as_pin_mut() else {
            let error = this.failed.take().expect("polled after completion");
            return Poll::Ready(Ok(Outcome::error(error)));
        };

        match inner.poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(Ok(Outcome::success_with(response))),
            Poll::Ready(Err(error)) => {
                let error: Error = error.into();
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %error, "service call failed, returning failed outcome");
                Poll::Ready(Ok(Outcome::error(error)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Extension trait for wrapping services with [`OutcomeService`].
pub trait ServiceOutcomeExt<Request>: Service<Request> + Sized {
    /// Wraps this service so its errors become failed outcomes.
    fn into_outcome_service(self) -> OutcomeService<Self> {
        OutcomeService::new(self)
    }
}

impl<S, Request> ServiceOutcomeExt<Request> for S where S: Service<Request> {}
