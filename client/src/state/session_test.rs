use std::cell::Cell;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::util::storage::MemoryStorage;

struct FakeApi {
    login_result: Result<LoginResponse, ApiError>,
    logout_result: Result<(), ApiError>,
    logout_calls: Cell<u32>,
}

impl FakeApi {
    fn accepting() -> Self {
        Self {
            login_result: Ok(LoginResponse { token: "tok-1".to_owned(), member: member("alice") }),
            logout_result: Ok(()),
            logout_calls: Cell::new(0),
        }
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.login_result.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result.clone()
    }
}

fn member(username: &str) -> Member {
    Member { id: 1, username: username.to_owned(), created_at: None, updated_at: None }
}

fn creds() -> Credentials {
    Credentials { username: "alice".to_owned(), password: "secret1".to_owned() }
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_guest_and_not_restored() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.restored);
    assert_eq!(session.username(), None);
}

#[test]
fn authenticated_iff_token_present() {
    let session = Session { token: Some("t".to_owned()), member: None, restored: true };
    assert!(session.is_authenticated());
    let session = Session { token: None, member: Some(member("alice")), restored: true };
    assert!(!session.is_authenticated());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_authenticates_and_persists_token() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(FakeApi::accepting(), storage.clone());

    let session = block_on(store.login(&creds())).unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.username(), Some("alice"));
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    let stored: Member = serde_json::from_str(&storage.get(MEMBER_KEY).unwrap()).unwrap();
    assert_eq!(stored, member("alice"));
}

#[test]
fn login_failure_leaves_storage_untouched() {
    let storage = MemoryStorage::default();
    let api = FakeApi {
        login_result: Err(ApiError::from_status(
            400,
            Some(json!({ "non_field_errors": ["Invalid username or password."] })),
        )),
        ..FakeApi::accepting()
    };
    let store = SessionStore::new(api, storage.clone());

    let err = block_on(store.login(&creds())).unwrap_err();

    assert_eq!(err.user_message("fallback"), "Invalid username or password.");
    assert!(storage.is_empty());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_success_clears_session_and_storage() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(FakeApi::accepting(), storage.clone());
    block_on(store.login(&creds())).unwrap();

    let session = block_on(store.logout());

    assert!(!session.is_authenticated());
    assert!(session.member.is_none());
    assert!(storage.is_empty());
}

#[test]
fn logout_failure_still_clears_session_and_storage() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "stale");
    storage.set(MEMBER_KEY, r#"{"id":1,"username":"alice"}"#);
    let api = FakeApi { logout_result: Err(ApiError::Network("offline".to_owned())), ..FakeApi::accepting() };
    let store = SessionStore::new(api, storage.clone());

    let session = block_on(store.logout());

    assert_eq!(store.api.logout_calls.get(), 1);
    assert!(!session.is_authenticated());
    assert!(session.restored);
    assert!(storage.is_empty());
}

#[test]
fn expire_clears_without_calling_server() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok");
    let store = SessionStore::new(FakeApi::accepting(), storage.clone());

    let session = store.expire();

    assert_eq!(store.api.logout_calls.get(), 0);
    assert!(!session.is_authenticated());
    assert!(storage.is_empty());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_reads_persisted_entries() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok");
    storage.set(MEMBER_KEY, r#"{"id":5,"username":"bob"}"#);
    let store = SessionStore::new(FakeApi::accepting(), storage);

    let session = store.restore();

    assert!(session.restored);
    assert_eq!(session.token.as_deref(), Some("tok"));
    assert_eq!(session.username(), Some("bob"));
}

#[test]
fn restore_with_empty_storage_is_restored_guest() {
    let store = SessionStore::new(FakeApi::accepting(), MemoryStorage::default());
    let session = store.restore();
    assert!(session.restored);
    assert!(!session.is_authenticated());
}

#[test]
fn restore_drops_malformed_member_but_keeps_token() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok");
    storage.set(MEMBER_KEY, "{not json");
    let store = SessionStore::new(FakeApi::accepting(), storage.clone());

    let session = store.restore();

    assert!(session.is_authenticated());
    assert!(session.member.is_none());
    assert_eq!(storage.get(MEMBER_KEY), None);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok"));
}

// =============================================================
// update_member
// =============================================================

#[test]
fn update_member_replaces_and_persists() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(FakeApi::accepting(), storage.clone());
    let session = block_on(store.login(&creds())).unwrap();

    let updated = store.update_member(&session, member("alice2"));

    assert_eq!(updated.username(), Some("alice2"));
    assert_eq!(updated.token, session.token);
    let stored: Member = serde_json::from_str(&storage.get(MEMBER_KEY).unwrap()).unwrap();
    assert_eq!(stored.username, "alice2");
}

#[test]
fn update_member_ignores_guest_session() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(FakeApi::accepting(), storage.clone());
    let guest = store.expire();

    let updated = store.update_member(&guest, member("ghost"));

    assert_eq!(updated, guest);
    assert!(storage.is_empty());
}
