use super::*;
use serde_json::json;

#[test]
fn chat_message_defaults_missing_author_and_timestamp() {
    let msg: ChatMessage = serde_json::from_value(json!({ "id": 7, "text": "hi" })).unwrap();
    assert_eq!(msg.member_username, None);
    assert_eq!(msg.created_at, None);
    assert_eq!(msg.text, "hi");
}

#[test]
fn login_response_decodes_member() {
    let body = json!({
        "token": "abc",
        "member": {
            "id": 1,
            "username": "alice",
            "created_at": "2024-01-01T10:00:00Z",
            "updated_at": "2024-01-01T10:00:00Z"
        }
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.member.username, "alice");
}

#[test]
fn messages_from_value_accepts_bare_array() {
    let body = json!([
        { "id": 1, "member_username": "alice", "text": "hi", "created_at": "2024-01-01T10:00:00Z" },
        { "id": 2, "member_username": "bob", "text": "yo", "created_at": "2024-01-01T10:01:00Z" }
    ]);
    let messages = messages_from_value(body).unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].member_username.as_deref(), Some("bob"));
}

#[test]
fn messages_from_value_unwraps_paginated_results() {
    let body = json!({ "count": 1, "results": [{ "id": 3, "text": "paged" }] });
    let messages = messages_from_value(body).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, 3);
}

#[test]
fn messages_from_value_treats_other_shapes_as_empty() {
    assert!(messages_from_value(json!({ "detail": "odd" })).unwrap().is_empty());
    assert!(messages_from_value(json!("text")).unwrap().is_empty());
    assert!(messages_from_value(serde_json::Value::Null).unwrap().is_empty());
}

#[test]
fn messages_from_value_reports_malformed_entries() {
    let err = messages_from_value(json!([{ "id": "not-a-number", "text": 5 }])).unwrap_err();
    assert!(!err.is_empty());
}

#[test]
fn credentials_serialize_as_flat_object() {
    let creds = Credentials { username: "alice".to_owned(), password: "secret1".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        json!({ "username": "alice", "password": "secret1" })
    );
}
