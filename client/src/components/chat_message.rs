//! A single row in the chat message list.

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::state::chat::{author_label, message_class};
use crate::util::time::format_timestamp;

/// Message row; own messages get the `chat-message--own` modifier.
#[component]
pub fn ChatMessageRow(message: ChatMessage, current_username: Option<String>) -> impl IntoView {
    let class = message_class(&message, current_username.as_deref());
    let author = author_label(&message).to_owned();
    let time = format_timestamp(message.created_at.as_deref().unwrap_or_default());

    view! {
        <div class=class>
            <div class="chat-message__meta">
                <span class="chat-message__user">{author}</span>
                <span class="chat-message__time">{time}</span>
            </div>
            <div class="chat-message__text">{message.text}</div>
        </div>
    }
}
