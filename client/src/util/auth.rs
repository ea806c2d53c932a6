//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, browser_store};

/// True once the persisted session has been read and holds no token.
pub fn should_redirect_unauth(session: &Session) -> bool {
    session.restored && !session.is_authenticated()
}

/// Redirect to `/login` whenever the session is restored and unauthenticated.
pub fn install_unauth_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Drop the session after a 401 and send the user to `/login`.
pub fn expire_and_redirect<F>(session: RwSignal<Session>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    session.set(browser_store().expire());
    navigate("/login", NavigateOptions::default());
}

/// Log out (best-effort on the server, always locally), then go to `/login`.
pub fn logout_and_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let next = browser_store().logout().await;
        session.set(next);
        navigate("/login", NavigateOptions::default());
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, navigate);
    }
}
