//! Login page: username + password exchanged for an API token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::form::validate_credentials;

pub const LOGIN_FALLBACK: &str = "Неправильное имя пользователя или пароль.";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Вход..." } else { "Войти" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        submitting.set(true);
        error.set(None);
        submit_login(credentials, session, submitting, error, navigate.clone());
    };

    view! {
        <div class="page page-login">
            <div class="form-page-container">
                <h1 class="form-title">"Авторизация"</h1>
                <form class="form" on:submit=on_submit>
                    <FormField
                        id="login-username"
                        label="Имя пользователя"
                        placeholder="Введите имя пользователя"
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                    />
                    <FormField
                        id="login-password"
                        label="Пароль"
                        placeholder="Введите пароль"
                        input_type="password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                    />
                    <Show when=move || error.with(Option::is_some)>
                        <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>
                    <button type="submit" class="form-submit-button" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                </form>
                <div class="form-footer-text">
                    "Нет аккаунта? " <A href="/register">"Зарегистрироваться"</A>
                </div>
            </div>
        </div>
    }
}

fn submit_login<F>(
    credentials: Credentials,
    session: RwSignal<Session>,
    submitting: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::state::session::browser_store().login(&credentials).await {
            Ok(next) => {
                session.set(next);
                navigate("/", NavigateOptions::default());
            }
            Err(e) => {
                leptos::logging::warn!("login failed: {e}");
                error.try_set(Some(e.user_message(LOGIN_FALLBACK)));
            }
        }
        submitting.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, session, submitting, error, navigate);
    }
}
