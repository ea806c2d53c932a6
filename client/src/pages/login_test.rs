use super::*;

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(false), "Войти");
    assert_eq!(submit_label(true), "Вход...");
}

#[test]
fn login_fallback_is_credentials_message() {
    let err = crate::net::error::ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message(LOGIN_FALLBACK), "Неправильное имя пользователя или пароль.");
}
