//! Root component, HTML shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders [`shell`] on the server; the browser hydrates [`App`].
//! The root provides the `RwSignal<Session>` context every page reads.
//!
//! DESIGN
//! ======
//! The session starts as a non-restored guest so server and client render the
//! same markup. Persisted state is read in an effect, which only runs after
//! hydration; route guards wait for `restored` before redirecting.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::app_header::AppHeader;
use crate::pages::chat::ChatPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::session::{Session, browser_store};

/// Server-rendered document wrapping [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    Effect::new(move || {
        session.set(browser_store().restore());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/groupchat.css"/>
        <Title text="Групповой чат"/>
        <Router>
            <AppHeader/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=ChatPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <h1>"Страница не найдена"</h1>
            <a href="/">"На главную"</a>
        </div>
    }
}
