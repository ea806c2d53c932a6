//! Group chat feed state and polling lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chat page owns one [`ChatState`] per mount and drives it from a poll
//! loop: one blocking fetch, then silent re-fetches every [`POLL_INTERVAL`].
//! Each successful fetch replaces the list wholesale; sends append the
//! server's copy of the new message.
//!
//! CONCURRENCY
//! ===========
//! Responses may land after the page has unmounted. [`ChatPoller`] carries a
//! shared "active" flag that teardown clears; every `apply_*` checks it first
//! and discards late results without touching state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::net::error::ApiError;
use crate::net::types::ChatMessage;

/// Delay between silent refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(4);

pub const LOAD_FALLBACK: &str = "Не удалось загрузить сообщения.";
pub const SEND_FALLBACK: &str = "Не удалось отправить сообщение.";
pub const UNKNOWN_AUTHOR: &str = "Неизвестный пользователь";

const MESSAGE_CLASS: &str = "chat-message";
const OWN_MESSAGE_CLASS: &str = "chat-message chat-message--own";

/// Whether a fetch shows the loading indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// First fetch after mount; blocks the list with a loading indicator.
    Initial,
    /// Timer-driven refresh; never touches the indicator.
    Silent,
}

/// Result of applying a fetch or send response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    /// State updated with the server's data.
    Applied,
    /// Error message recorded; polling continues.
    Failed,
    /// Session is no longer valid; the caller redirects to login.
    Unauthorized,
    /// The page is gone; nothing was applied.
    Discarded,
}

/// View state for the chat screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub initial_loading: bool,
    pub sending: bool,
    pub load_error: Option<String>,
    pub send_error: Option<String>,
}

impl ChatState {
    /// Mark a fetch as started.
    pub fn begin_fetch(&mut self, mode: FetchMode) {
        if mode == FetchMode::Initial {
            self.initial_loading = true;
        }
        self.load_error = None;
    }

    /// Mark a send as started.
    pub fn begin_send(&mut self) {
        self.sending = true;
        self.send_error = None;
    }
}

/// Lifecycle handle shared between the poll loop and page teardown.
#[derive(Clone, Debug)]
pub struct ChatPoller {
    active: Arc<AtomicBool>,
}

impl Default for ChatPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatPoller {
    pub fn new() -> Self {
        Self { active: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Cancel polling. Idempotent.
    pub fn stop(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    /// Apply a message-list response.
    ///
    /// A 401 stops the poller so the loop exits after the redirect.
    pub fn apply_fetch(
        &self,
        state: &mut ChatState,
        mode: FetchMode,
        result: Result<Vec<ChatMessage>, ApiError>,
    ) -> ChatOutcome {
        if !self.is_active() {
            return ChatOutcome::Discarded;
        }
        if mode == FetchMode::Initial {
            state.initial_loading = false;
        }
        match result {
            Ok(messages) => {
                state.messages = messages;
                ChatOutcome::Applied
            }
            Err(e) if e.is_unauthorized() => {
                self.stop();
                ChatOutcome::Unauthorized
            }
            Err(e) => {
                leptos::logging::warn!("message fetch failed: {e}");
                state.load_error = Some(e.user_message(LOAD_FALLBACK));
                ChatOutcome::Failed
            }
        }
    }

    /// Apply a send response, appending the server's copy on success.
    pub fn apply_send(&self, state: &mut ChatState, result: Result<ChatMessage, ApiError>) -> ChatOutcome {
        if !self.is_active() {
            return ChatOutcome::Discarded;
        }
        state.sending = false;
        match result {
            Ok(message) => {
                state.messages.push(message);
                ChatOutcome::Applied
            }
            Err(e) if e.is_unauthorized() => {
                self.stop();
                ChatOutcome::Unauthorized
            }
            Err(e) => {
                leptos::logging::warn!("message send failed: {e}");
                state.send_error = Some(e.user_message(SEND_FALLBACK));
                ChatOutcome::Failed
            }
        }
    }
}

/// Trimmed message text, or `None` when there is nothing to send.
pub fn prepare_send(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub fn is_own_message(message: &ChatMessage, current_username: Option<&str>) -> bool {
    match (message.member_username.as_deref(), current_username) {
        (Some(author), Some(me)) => !me.is_empty() && author == me,
        _ => false,
    }
}

/// CSS class list for a message row.
pub fn message_class(message: &ChatMessage, current_username: Option<&str>) -> &'static str {
    if is_own_message(message, current_username) {
        OWN_MESSAGE_CLASS
    } else {
        MESSAGE_CLASS
    }
}

pub fn author_label(message: &ChatMessage) -> &str {
    message
        .member_username
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_AUTHOR)
}
