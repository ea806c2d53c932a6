//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen concern (`session`, `chat`, `profile`) so each
//! page depends on a small focused model. Models are plain structs with
//! transition methods; pages hold them in signals and drive them from async
//! tasks, which keeps every transition testable without a browser.

pub mod chat;
pub mod profile;
pub mod session;
