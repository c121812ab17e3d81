//! Request identity middleware.
//!
//! # Responsibilities
//! - Assign a UUID v4 `X-Request-Id` to every incoming request that does
//!   not already carry one
//! - Echo the id on the response so clients and log lines correlate
//!
//! # Design Decisions
//! - Request ID added before any other processing so it is available to
//!   the trace layer and handlers
//! - A client-supplied id is preserved, never overwritten

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::http::{HeaderMap, HeaderValue, Request, Response};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Extension methods for reading the request id off a header map.
pub trait RequestIdExt {
    /// The request's correlation id, if one has been assigned.
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID).and_then(|v| v.to_str().ok())
    }
}

/// Layer installing [`RequestIdService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Middleware that stamps requests and responses with `X-Request-Id`.
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B, RB> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>, Response = Response<RB>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let id = match req.headers().get(X_REQUEST_ID) {
            Some(existing) => existing.clone(),
            None => {
                // A hyphenated UUID is always a valid header value.
                HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap()
            }
        };
        req.headers_mut().insert(X_REQUEST_ID, id.clone());

        let fut = self.inner.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            if !res.headers().contains_key(X_REQUEST_ID) {
                res.headers_mut().insert(X_REQUEST_ID, id);
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_ext_reads_the_header() {
        let mut headers = HeaderMap::new();
        assert!(headers.request_id().is_none());

        headers.insert(X_REQUEST_ID, HeaderValue::from_static("abc-123"));
        assert_eq!(headers.request_id(), Some("abc-123"));
    }
}
