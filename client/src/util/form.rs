//! Credential form validation shared by the login and register pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::Credentials;

pub const MISSING_CREDENTIALS: &str = "Введите имя пользователя и пароль.";

/// Require both fields. Values are submitted as typed; the server owns any
/// further rules (length, uniqueness).
///
/// # Errors
///
/// Returns the inline message when either field is empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}
