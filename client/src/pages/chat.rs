//! Group chat screen: message feed with periodic refresh and a composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. Requires an authenticated session; guests are sent to
//! `/login` once the persisted session has been restored.
//!
//! CONCURRENCY
//! ===========
//! One poll task per mount. It fetches, applies, sleeps, and repeats, so
//! fetches never overlap. Teardown stops the shared [`ChatPoller`] and any
//! response still in flight is discarded.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chat_message::ChatMessageRow;
use crate::state::chat::{ChatPoller, ChatState, prepare_send};
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

fn send_label(sending: bool) -> &'static str {
    if sending { "Отправка..." } else { "Отправить" }
}

fn can_send(draft: &str, sending: bool) -> bool {
    !sending && prepare_send(draft).is_some()
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let chat = RwSignal::new(ChatState::default());
    let draft = RwSignal::new(String::new());
    let poller = ChatPoller::new();

    let cleanup_poller = poller.clone();
    on_cleanup(move || cleanup_poller.stop());

    // Start polling once the session is known to be authenticated.
    let started = RwSignal::new(false);
    let poll_poller = poller.clone();
    let poll_navigate = navigate.clone();
    Effect::new(move || {
        if started.get_untracked() {
            return;
        }
        let ready = session.with(|s| s.restored && s.is_authenticated());
        if !ready {
            return;
        }
        started.set(true);
        start_polling(chat, session, poll_poller.clone(), poll_navigate.clone());
    });

    let send_poller = poller;
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if chat.with_untracked(|s| s.sending) {
            return;
        }
        let Some(text) = prepare_send(&draft.get_untracked()) else {
            return;
        };
        chat.update(ChatState::begin_send);
        submit_message(text, chat, draft, session, send_poller.clone(), navigate.clone());
    };

    let current_username = move || session.with(|s| s.username().map(str::to_owned));

    view! {
        <div class="page page-chat">
            <div class="chat-container">
                <h1 class="chat-title">"Групповой чат"</h1>
                <p class="chat-subtitle">"Общайтесь с другими пользователями в реальном времени."</p>

                <Show when=move || chat.with(|s| s.load_error.is_some())>
                    <div class="chat-error">{move || chat.with(|s| s.load_error.clone().unwrap_or_default())}</div>
                </Show>

                <div class="chat-messages">
                    {move || {
                        let (loading, empty) = chat.with(|s| (s.initial_loading, s.messages.is_empty()));
                        if loading {
                            view! { <div class="chat-status">"Загрузка сообщений..."</div> }.into_any()
                        } else if empty {
                            view! {
                                <div class="chat-status">"Сообщений пока нет. Напишите первое сообщение."</div>
                            }
                                .into_any()
                        } else {
                            let me = current_username();
                            chat.with(|s| {
                                s.messages
                                    .iter()
                                    .map(|message| {
                                        view! {
                                            <ChatMessageRow message=message.clone() current_username=me.clone()/>
                                        }
                                    })
                                    .collect_view()
                            })
                                .into_any()
                        }
                    }}
                </div>

                <form class="chat-form" on:submit=on_submit>
                    <textarea
                        class="chat-input"
                        placeholder="Введите сообщение"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        type="submit"
                        class="chat-send-button"
                        disabled=move || !draft.with(|d| can_send(d, chat.with(|s| s.sending)))
                    >
                        {move || send_label(chat.with(|s| s.sending))}
                    </button>
                </form>

                <Show when=move || chat.with(|s| s.send_error.is_some())>
                    <div class="chat-error">{move || chat.with(|s| s.send_error.clone().unwrap_or_default())}</div>
                </Show>
            </div>
        </div>
    }
}

fn start_polling<F>(chat: RwSignal<ChatState>, session: RwSignal<Session>, poller: ChatPoller, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::chat::{ChatOutcome, FetchMode, POLL_INTERVAL};

        let mut mode = FetchMode::Initial;
        loop {
            if !poller.is_active() || chat.try_update(|s| s.begin_fetch(mode)).is_none() {
                break;
            }
            let result = crate::net::api::fetch_messages(&[]).await;
            match chat.try_update(|s| poller.apply_fetch(s, mode, result)) {
                Some(ChatOutcome::Unauthorized) => {
                    crate::util::auth::expire_and_redirect(session, &navigate);
                    break;
                }
                Some(ChatOutcome::Discarded) | None => break,
                Some(ChatOutcome::Applied | ChatOutcome::Failed) => {}
            }
            mode = FetchMode::Silent;
            gloo_timers::future::sleep(POLL_INTERVAL).await;
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, session, poller, navigate);
    }
}

fn submit_message<F>(
    text: String,
    chat: RwSignal<ChatState>,
    draft: RwSignal<String>,
    session: RwSignal<Session>,
    poller: ChatPoller,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::chat::ChatOutcome;

        let result = crate::net::api::send_message(&text).await;
        match chat.try_update(|s| poller.apply_send(s, result)) {
            Some(ChatOutcome::Applied) => {
                draft.try_set(String::new());
            }
            Some(ChatOutcome::Unauthorized) => crate::util::auth::expire_and_redirect(session, &navigate),
            Some(ChatOutcome::Failed | ChatOutcome::Discarded) | None => {}
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, chat, draft, session, poller, navigate);
    }
}
