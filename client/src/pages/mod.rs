//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, polling, submits) and
//! delegates rendering details to `components` and state transitions to
//! `state`.

pub mod chat;
pub mod login;
pub mod profile;
pub mod register;
