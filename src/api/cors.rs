//! CORS headers attached to every response.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const MAX_AGE_SECS: &str = "86400";

/// Middleware echoing the caller's `Origin` (or `*` without one) and the
/// fixed method/header allowances, on success and error responses alike.
pub async fn cors_headers(request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE_SECS));
    response
}
