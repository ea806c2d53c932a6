//! Registration page. A successful sign-up continues to the login screen.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::types::Credentials;
use crate::util::form::validate_credentials;

pub const REGISTER_FALLBACK: &str = "Не удалось выполнить регистрацию. Попробуйте ещё раз.";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Отправка..." } else { "Зарегистрироваться" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
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
        submit_registration(credentials, submitting, error, navigate.clone());
    };

    view! {
        <div class="page page-register">
            <div class="form-page-container">
                <h1 class="form-title">"Регистрация"</h1>
                <form class="form" on:submit=on_submit>
                    <FormField
                        id="register-username"
                        label="Имя пользователя"
                        placeholder="Введите имя пользователя"
                        value=username
                        on_input=Callback::new(move |v| username.set(v))
                    />
                    <FormField
                        id="register-password"
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
                    "Уже есть аккаунт? " <A href="/login">"Войти"</A>
                </div>
            </div>
        </div>
    }
}

fn submit_registration<F>(
    credentials: Credentials,
    submitting: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::register(&credentials).await {
            Ok(member) => {
                leptos::logging::log!("registered {}", member.username);
                navigate("/login", NavigateOptions::default());
            }
            Err(e) => {
                error.try_set(Some(e.user_message(REGISTER_FALLBACK)));
            }
        }
        submitting.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credentials, submitting, error, navigate);
    }
}
