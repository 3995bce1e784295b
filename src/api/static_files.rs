//! Guards for the static file fallback

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::{StatusCode, Uri};

/// Served when the site root is requested
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// A request path is clean when, after the leading slash, it is a
/// relative path that is already in normal form. `/` is always clean.
pub fn is_clean_path(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    !rest.contains('\\')
        && rest
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

/// Reject paths that could escape the static root and rewrite `/` to
/// the default document.
pub async fn guard_static_path(mut request: Request, next: Next) -> Response {
    let clean = match urlencoding::decode(request.uri().path()) {
        Ok(path) if is_clean_path(&path) => path.into_owned(),
        _ => {
            tracing::warn!("Rejected static path {}", request.uri().path());
            return (StatusCode::BAD_REQUEST, "Invalid path").into_response();
        }
    };

    if clean == "/" {
        *request.uri_mut() = Uri::from_static(DEFAULT_DOCUMENT);
    }

    next.run(request).await
}
