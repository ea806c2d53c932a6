//! Top navigation bar with auth-aware identity and logout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::auth::logout_and_redirect;

/// Header rendered above every route.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let is_authenticated = move || session.with(Session::is_authenticated);
    let display_name = move || session.with(|s| s.username().unwrap_or("—").to_owned());

    let logout = Callback::new(move |()| logout_and_redirect(session, navigate.clone()));

    view! {
        <header class="app-header">
            <div class="app-header-left">
                <span class="app-title">"Групповой чат"</span>
                <nav class="app-nav">
                    <A href="/">"Главная"</A>
                    <A href="/register">"Регистрация"</A>
                    <A href="/login">"Авторизация"</A>
                    <Show when=is_authenticated>
                        <A href="/profile">"Профиль"</A>
                    </Show>
                </nav>
            </div>
            <div class="app-header-right">
                <Show
                    when=is_authenticated
                    fallback=|| view! { <span class="app-guest-label">"Гость"</span> }
                >
                    <span class="app-username">"Вы вошли как: " {display_name}</span>
                    <button type="button" class="app-logout-button" on:click=move |_| logout.run(())>
                        "Выход"
                    </button>
                </Show>
            </div>
        </header>
    }
}
