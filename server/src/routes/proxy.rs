//! Same-origin forwarding of `/api/*` to the upstream chat API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Every `/api/...` request is replayed
//! against `<upstream>/api/...` with the same method, query, headers and body,
//! and the upstream response is relayed unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Upstream status codes (including 401) pass through untouched. Only
//! transport failures are produced here, as a 502 with a `detail` body the
//! client can show directly.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::any;
use serde_json::json;

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

const UNAVAILABLE_DETAIL: &str = "Сервер недоступен. Попробуйте позже.";

/// Connection-scoped headers that must not be forwarded, plus the ones the
/// outgoing client recomputes.
const SKIPPED_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body rejected: {0}")]
    Body(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ProxyError::Body(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            ProxyError::Upstream(_) => (StatusCode::BAD_GATEWAY, UNAVAILABLE_DETAIL.to_owned()),
        };
        tracing::warn!(error = %self, %status, "api forwarding failed");
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Routes handled by the forwarder.
pub fn router(state: AppState) -> Router {
    Router::new().route("/api/{*path}", any(forward)).with_state(state)
}

/// Replay one request against the upstream API.
///
/// # Errors
///
/// Returns [`ProxyError`] if the body cannot be buffered or the upstream is
/// unreachable.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let url = format!("{}{path}", state.upstream());

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %path, %status, "forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Copy of `headers` without hop-by-hop and recomputed entries.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if SKIPPED_HEADERS.contains(&name.as_str()) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}
