use super::*;
use crate::net::types::Member;

#[test]
fn should_redirect_unauth_when_restored_and_token_missing() {
    let session = Session { token: None, member: None, restored: true };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_before_restore() {
    assert!(!should_redirect_unauth(&Session::default()));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let session = Session {
        token: Some("tok".to_owned()),
        member: Some(Member { id: 1, username: "alice".to_owned(), created_at: None, updated_at: None }),
        restored: true,
    };
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn member_without_token_is_still_redirected() {
    let session = Session {
        token: None,
        member: Some(Member { id: 1, username: "alice".to_owned(), created_at: None, updated_at: None }),
        restored: true,
    };
    assert!(should_redirect_unauth(&session));
}
