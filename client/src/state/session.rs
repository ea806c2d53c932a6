//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is provided as an `RwSignal<Session>` context by the root
//! component. Route guards, the header, and every authenticated screen read
//! it; only [`SessionStore`] operations produce new values.
//!
//! DESIGN
//! ======
//! "Authenticated" is derived purely from token presence. The token and member
//! are mirrored into persisted storage on every login/logout so a reload
//! restores the session without a round trip.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse, Member};
use crate::util::storage::{MEMBER_KEY, SessionStorage, TOKEN_KEY};

/// Current session as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub member: Option<Member>,
    /// Set once persisted state has been read. Guards must not redirect
    /// before this, or a reload would bounce through `/login`.
    pub restored: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.member.as_ref().map(|m| m.username.as_str())
    }

    fn guest() -> Self {
        Self { token: None, member: None, restored: true }
    }
}

/// Server-side half of login/logout.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Login/logout orchestration over an API and a persistence backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<A, S> {
    api: A,
    storage: S,
}

impl<A: AuthApi, S: SessionStorage> SessionStore<A, S> {
    pub fn new(api: A, storage: S) -> Self {
        Self { api, storage }
    }

    /// Read the persisted session. A member entry that no longer parses is
    /// dropped from storage.
    pub fn restore(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let member = self.storage.get(MEMBER_KEY).and_then(|raw| {
            serde_json::from_str::<Member>(&raw)
                .inspect_err(|e| {
                    leptos::logging::warn!("discarding stored member: {e}");
                    self.storage.remove(MEMBER_KEY);
                })
                .ok()
        });
        Session { token, member, restored: true }
    }

    /// Authenticate and persist the issued token and member.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; storage is untouched on failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let LoginResponse { token, member } = self.api.login(credentials).await?;
        self.storage.set(TOKEN_KEY, &token);
        self.persist_member(&member);
        Ok(Session { token: Some(token), member: Some(member), restored: true })
    }

    /// Revoke the server session (best-effort) and always clear local state.
    pub async fn logout(&self) -> Session {
        if let Err(e) = self.api.logout().await {
            leptos::logging::warn!("logout request failed, clearing session anyway: {e}");
        }
        self.expire()
    }

    /// Clear local and persisted state without contacting the server.
    pub fn expire(&self) -> Session {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(MEMBER_KEY);
        Session::guest()
    }

    /// Replace the member of an existing session (after a profile save).
    pub fn update_member(&self, session: &Session, member: Member) -> Session {
        if !session.is_authenticated() {
            return session.clone();
        }
        self.persist_member(&member);
        Session { member: Some(member), ..session.clone() }
    }

    fn persist_member(&self, member: &Member) {
        match serde_json::to_string(member) {
            Ok(raw) => self.storage.set(MEMBER_KEY, &raw),
            Err(e) => leptos::logging::warn!("failed to serialize member: {e}"),
        }
    }
}

/// Store wired to the REST API and `localStorage`.
pub type BrowserSessionStore = SessionStore<crate::net::api::HttpApi, crate::util::storage::BrowserStorage>;

pub fn browser_store() -> BrowserSessionStore {
    SessionStore::default()
}
