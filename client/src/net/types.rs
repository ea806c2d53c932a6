//! Wire DTOs mirrored from the chat API.
//!
//! DESIGN
//! ======
//! The upstream API owns these shapes; optional fields default so a partial
//! payload still renders instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered chat member as returned by the auth and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Server-assigned identifier.
    pub id: i64,
    /// Unique login and display name.
    pub username: String,
    /// Creation timestamp (RFC 3339), if sent.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last profile update timestamp (RFC 3339), if sent.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A single group chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Server-assigned identifier, used as the list key.
    pub id: i64,
    /// Author's username; absent for deleted members.
    #[serde(default)]
    pub member_username: Option<String>,
    /// Message body.
    pub text: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Username + password body shared by register and login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful `POST /api/auth/login/` payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub member: Member,
}

/// `PUT /api/auth/profile/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
}

/// `POST /api/chat/messages/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub text: String,
}

/// Interpret a message-list response body.
///
/// Accepts a bare array or a paginated `{ "results": [...] }` envelope. Any
/// other shape is treated as an empty list.
///
/// # Errors
///
/// Returns the serde error message when an array is present but its entries
/// do not match [`ChatMessage`].
pub fn messages_from_value(value: serde_json::Value) -> Result<Vec<ChatMessage>, String> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(serde_json::Value::Array(items)).map_err(|e| e.to_string())
}
