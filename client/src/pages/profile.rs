//! Profile screen: shows and edits the current member's username.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::state::profile::ProfileForm;
use crate::state::session::Session;
use crate::util::auth::{install_unauth_redirect, logout_and_redirect};

fn save_label(saving: bool) -> &'static str {
    if saving { "Сохранение..." } else { "Сохранить" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let seed = session.with_untracked(|s| s.username().map(str::to_owned));
    let form = RwSignal::new(ProfileForm::seeded(seed.as_deref()));

    let loaded = RwSignal::new(false);
    let load_navigate = navigate.clone();
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        if !session.with(|s| s.restored && s.is_authenticated()) {
            return;
        }
        loaded.set(true);
        form.update(|f| {
            if f.username.is_empty() {
                f.username = session.with_untracked(|s| s.username().unwrap_or_default().to_owned());
            }
            f.begin_load();
        });
        load_profile(form, session, load_navigate.clone());
    });

    let save_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.saving || f.loading) {
            return;
        }
        let mut started = None;
        form.update(|f| started = f.begin_save().ok());
        if let Some(username) = started {
            save_profile(username, form, session, save_navigate.clone());
        }
    };

    let logout = Callback::new(move |()| logout_and_redirect(session, navigate.clone()));

    let username = Signal::derive(move || form.with(|f| f.username.clone()));

    view! {
        <div class="page page-profile">
            <div class="form-page-container">
                <h1 class="form-title">"Профиль"</h1>
                <Show
                    when=move || !form.with(|f| f.loading)
                    fallback=|| view! { <div class="form-status">"Загрузка профиля..."</div> }
                >
                    <form class="form" on:submit=on_submit.clone()>
                        <FormField
                            id="profile-username"
                            label="Имя пользователя"
                            placeholder="Введите имя пользователя"
                            value=username
                            on_input=Callback::new(move |v| form.update(|f| f.username = v))
                        />
                        <Show when=move || form.with(|f| f.error.is_some())>
                            <div class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</div>
                        </Show>
                        <Show when=move || form.with(|f| f.success.is_some())>
                            <div class="form-success">
                                {move || form.with(|f| f.success.clone().unwrap_or_default())}
                            </div>
                        </Show>
                        <div class="form-actions">
                            <button
                                type="submit"
                                class="form-submit-button"
                                disabled=move || form.with(|f| f.saving)
                            >
                                {move || save_label(form.with(|f| f.saving))}
                            </button>
                            <button type="button" class="form-secondary-button" on:click=move |_| logout.run(())>
                                "Выйти"
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

fn load_profile<F>(form: RwSignal<ProfileForm>, session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::profile::ProfileOutcome;

        let result = crate::net::api::fetch_profile().await;
        if let Some(ProfileOutcome::Unauthorized) = form.try_update(|f| f.apply_load(result)) {
            crate::util::auth::expire_and_redirect(session, &navigate);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, session, navigate);
    }
}

fn save_profile<F>(username: String, form: RwSignal<ProfileForm>, session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::types::ProfileUpdate;
        use crate::state::profile::ProfileOutcome;
        use crate::state::session::browser_store;

        let result = crate::net::api::update_profile(&ProfileUpdate { username }).await;
        match form.try_update(|f| f.apply_save(result)) {
            Some(ProfileOutcome::Saved(member)) => {
                let next = session.with_untracked(|s| browser_store().update_member(s, member));
                session.set(next);
            }
            Some(ProfileOutcome::Unauthorized) => crate::util::auth::expire_and_redirect(session, &navigate),
            _ => {}
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, form, session, navigate);
    }
}
