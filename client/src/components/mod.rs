//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and form pieces while reading shared
//! session state from Leptos context providers.

pub mod app_header;
pub mod chat_message;
pub mod form_field;
