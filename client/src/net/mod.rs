//! Networking modules for the chat REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures and extracts
//! user-facing messages, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
