//! Security headers for pages, API responses and static assets

use axum::{
    body::Body,
    http::{HeaderValue, Request, header},
    middleware::Next,
    response::Response,
};

/// Pages load their own script and stylesheet, artwork from the provider's
/// image hosts and cries from `/sounds`.
const PAGE_CSP: &str = "default-src 'self'; \
     script-src 'self'; \
     style-src 'self'; \
     img-src 'self' https: data:; \
     media-src 'self'; \
     connect-src 'self'; \
     frame-ancestors 'none'";

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

/// Middleware to add security headers to all responses
pub async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    let csp = if is_api_path(&path) { API_CSP } else { PAGE_CSP };
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(csp),
    );

    // Records are fetched fresh on every navigation; only assets may be cached
    if !is_asset_path(&path) && !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    response
}

fn is_api_path(path: &str) -> bool {
    path.starts_with("/api/") || path == "/metrics"
}

fn is_asset_path(path: &str) -> bool {
    path.starts_with("/static/") || path.starts_with("/sounds/")
}
