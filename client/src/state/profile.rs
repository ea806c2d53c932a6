//! Profile form state, reset on every mount of the profile page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::error::ApiError;
use crate::net::types::Member;

pub const LOAD_FALLBACK: &str = "Не удалось загрузить профиль.";
pub const SAVE_FALLBACK: &str = "Не удалось сохранить профиль.";
pub const EMPTY_USERNAME: &str = "Имя пользователя не может быть пустым.";
pub const SAVED: &str = "Профиль успешно сохранён.";

/// Result of applying a profile response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileOutcome {
    Loaded,
    /// Carries the saved member so the session can be refreshed.
    Saved(Member),
    Failed,
    Unauthorized,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ProfileForm {
    /// Fresh form seeded with the session's username until the fetch lands.
    pub fn seeded(username: Option<&str>) -> Self {
        Self { username: username.unwrap_or_default().to_owned(), ..Self::default() }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_load(&mut self, result: Result<Member, ApiError>) -> ProfileOutcome {
        self.loading = false;
        match result {
            Ok(member) => {
                self.username = member.username;
                ProfileOutcome::Loaded
            }
            Err(e) if e.is_unauthorized() => ProfileOutcome::Unauthorized,
            Err(e) => {
                self.error = Some(e.user_message(LOAD_FALLBACK));
                ProfileOutcome::Failed
            }
        }
    }

    /// Validate and start a save, returning the username to submit.
    ///
    /// # Errors
    ///
    /// Returns the inline message (also stored in `error`) for an empty name.
    pub fn begin_save(&mut self) -> Result<String, &'static str> {
        if self.username.is_empty() {
            self.error = Some(EMPTY_USERNAME.to_owned());
            return Err(EMPTY_USERNAME);
        }
        self.saving = true;
        self.error = None;
        self.success = None;
        Ok(self.username.clone())
    }

    pub fn apply_save(&mut self, result: Result<Member, ApiError>) -> ProfileOutcome {
        self.saving = false;
        match result {
            Ok(member) => {
                self.username.clone_from(&member.username);
                self.success = Some(SAVED.to_owned());
                ProfileOutcome::Saved(member)
            }
            Err(e) if e.is_unauthorized() => ProfileOutcome::Unauthorized,
            Err(e) => {
                self.error = Some(e.user_message(SAVE_FALLBACK));
                ProfileOutcome::Failed
            }
        }
    }
}
