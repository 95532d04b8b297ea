//! Correlation ids and per-route request accounting.
//!
//! A client may send its own `x-request-id`; otherwise the server mints a
//! UUID. The id is echoed on the response, available to handlers through the
//! [`RequestId`] extractor, and stamped on the access log lines. The same
//! layer counts requests per route template for Prometheus.

use axum::{
    extract::{FromRequestParts, MatchedPath, Request},
    http::{HeaderMap, HeaderValue, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::metrics;

/// Header carrying the correlation id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Label used for requests that matched no route
const UNMATCHED_ROUTE: &str = "unmatched";

/// Correlation id of the request being served
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Client-supplied id when present and non-empty, a fresh UUID otherwise
    fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.is_empty());

        match supplied {
            Some(id) => RequestId(id.to_string()),
            None => RequestId(Uuid::new_v4().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only missing when a handler is mounted outside the middleware
        parts.extensions.get::<RequestId>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Request ID not found in extensions",
        ))
    }
}

/// Tag the request with a [`RequestId`], echo it on the response, and count
/// the request under its route template.
///
/// Mounted with `axum::middleware::from_fn` on the whole router, see
/// [`create_router`](super::create_router).
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_ROUTE, |p| p.as_str())
        .to_string();

    tracing::info!(
        request_id = %request_id.as_str(),
        method = %method,
        uri = %request.uri(),
        "Request started"
    );
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    metrics::http_requests_total(method.as_str(), &route, status.as_u16());
    tracing::info!(
        request_id = %request_id.as_str(),
        route = %route,
        status = %status,
        "Request completed"
    );

    response
}
