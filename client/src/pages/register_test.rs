use super::*;
use serde_json::json;

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(false), "Зарегистрироваться");
    assert_eq!(submit_label(true), "Отправка...");
}

#[test]
fn taken_username_error_is_shown_verbatim() {
    let err = crate::net::error::ApiError::from_status(
        400,
        Some(json!({ "username": ["Username is already taken."] })),
    );
    assert_eq!(err.user_message(REGISTER_FALLBACK), "Username is already taken.");
}
