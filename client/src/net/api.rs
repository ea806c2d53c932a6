//! REST API helpers for the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin under
//! `/api/`. Server-side (SSR): stubs returning a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 is kept distinct from other
//! rejections so screens can redirect to login; response bodies of failed
//! calls are carried along for inline display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ChatMessage, Credentials, LoginResponse, Member, ProfileUpdate};
use crate::state::session::AuthApi;

pub const REGISTER_ENDPOINT: &str = "/api/auth/register/";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login/";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout/";
pub const PROFILE_ENDPOINT: &str = "/api/auth/profile/";
pub const MESSAGES_ENDPOINT: &str = "/api/chat/messages/";

/// Scheme expected by the backend's token authentication.
#[cfg(any(test, feature = "hydrate"))]
const AUTH_SCHEME: &str = "Token";

#[cfg(any(test, feature = "hydrate"))]
fn authorization_header(token: &str) -> String {
    format!("{AUTH_SCHEME} {token}")
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, authorization_header};
    use crate::util::storage::stored_token;

    /// Attach the persisted token, if any.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match stored_token() {
            Some(token) => builder.header("Authorization", &authorization_header(&token)),
            None => builder,
        }
    }

    /// Send a built request and split 2xx from error statuses.
    pub(super) async fn dispatch(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let url = request.url();
        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("request to {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.json::<serde_json::Value>().await.ok();
        Err(ApiError::from_status(status, body))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Create an account via `POST /api/auth/register/`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with field errors when the username is taken
/// or the password is too short.
pub async fn register(credentials: &Credentials) -> Result<Member, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let request = transport::authorized(Request::post(REGISTER_ENDPOINT)).json(credentials);
        let resp = transport::dispatch(request).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// Exchange credentials for a token via `POST /api/auth/login/`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the credentials are wrong.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let request = transport::authorized(Request::post(LOGIN_ENDPOINT)).json(credentials);
        let resp = transport::dispatch(request).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// Revoke the current token via `POST /api/auth/logout/`.
///
/// # Errors
///
/// Returns an error when the server is unreachable or the token is already
/// invalid. Callers treat this as best-effort.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let request = transport::authorized(Request::post(LOGOUT_ENDPOINT)).build();
        transport::dispatch(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch the authenticated member via `GET /api/auth/profile/`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is missing or revoked.
pub async fn fetch_profile() -> Result<Member, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let request = transport::authorized(Request::get(PROFILE_ENDPOINT)).build();
        let resp = transport::dispatch(request).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Rename the authenticated member via `PUT /api/auth/profile/`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with field errors for a taken or invalid
/// username.
pub async fn update_profile(update: &ProfileUpdate) -> Result<Member, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let request = transport::authorized(Request::put(PROFILE_ENDPOINT)).json(update);
        let resp = transport::dispatch(request).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(unavailable())
    }
}

/// Fetch the full message list via `GET /api/chat/messages/`.
///
/// `query` pairs are appended as URL parameters; pass `&[]` for none.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the session has expired.
pub async fn fetch_messages(query: &[(&str, &str)]) -> Result<Vec<ChatMessage>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let request = transport::authorized(Request::get(MESSAGES_ENDPOINT))
            .query(query.iter().copied())
            .build();
        let resp = transport::dispatch(request).await?;
        let body: serde_json::Value = transport::decode(resp).await?;
        super::types::messages_from_value(body).map_err(ApiError::Decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(unavailable())
    }
}

/// Post a message via `POST /api/chat/messages/`, returning the server's copy.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with field errors for an invalid body.
pub async fn send_message(text: &str) -> Result<ChatMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let body = super::types::NewMessage { text: text.to_owned() };
        let request = transport::authorized(Request::post(MESSAGES_ENDPOINT)).json(&body);
        let resp = transport::dispatch(request).await?;
        transport::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(unavailable())
    }
}

/// Production [`AuthApi`] backed by the REST helpers above.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        login(credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        logout().await
    }
}
