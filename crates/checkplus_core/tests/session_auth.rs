use checkplus_core::db::open_db_in_memory;
use checkplus_core::session::manager::{DEMO_EMAIL, DEMO_PASSWORD, USERS_REGISTRY_KEY};
use checkplus_core::{AuthError, KvStore, SessionManager, SqliteKvStore};

#[test]
fn register_then_login_with_same_credentials_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    let registered = session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();
    assert_eq!(registered.name, "Ana");
    assert!(session.is_authenticated());

    session.logout().unwrap();
    let logged_in = session.login("ana@x.com", "abcdef").unwrap();
    assert_eq!(logged_in.id, registered.id);
}

#[test]
fn register_with_used_email_fails_with_duplicate_email() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();

    let err = session
        .register("Other", "ana@x.com", "ghijkl")
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail(email) if email == "ana@x.com"));
}

#[test]
fn duplicate_email_wins_over_weak_password() {
    // The registry check runs before any password validation.
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();

    let err = session.register("Other", "ana@x.com", "ab").unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail(_)));
}

#[test]
fn register_with_short_password_fails_with_weak_password() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    let err = session.register("Ana", "ana@x.com", "abcde").unwrap_err();
    assert!(matches!(err, AuthError::WeakPassword { min_chars: 6 }));
    assert!(!session.is_authenticated());
}

#[test]
fn login_with_wrong_password_fails_with_invalid_credentials() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();
    session.logout().unwrap();

    let err = session.login("ana@x.com", "abcdeg").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!session.is_authenticated());
}

#[test]
fn login_with_unknown_email_fails_with_invalid_credentials() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    let err = session.login("nobody@x.com", "abcdef").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn logout_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();

    session.logout().unwrap();
    session.logout().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn session_is_restored_by_a_new_manager_over_the_same_store() {
    let conn = open_db_in_memory().unwrap();

    let registered = {
        let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
        session
            .register("Ana", "ana@x.com", "abcdef")
            .unwrap()
    };

    let restored = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    let user = restored.current_user().expect("session should be restored");
    assert_eq!(user.id, registered.id);
    assert_eq!(user.email, "ana@x.com");
}

#[test]
fn logout_prevents_session_restore() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
        session
            .register("Ana", "ana@x.com", "abcdef")
            .unwrap();
        session.logout().unwrap();
    }

    let restored = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    assert!(restored.current_user().is_none());
}

#[test]
fn malformed_session_record_is_ignored() {
    let conn = open_db_in_memory().unwrap();
    {
        let store = SqliteKvStore::new(&conn);
        store.set("current_session", "{not json").unwrap();
    }

    let session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    assert!(session.current_user().is_none());
}

#[test]
fn registry_never_stores_the_plaintext_password() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session
        .register("Ana", "ana@x.com", "supersecret")
        .unwrap();

    let store = SqliteKvStore::new(&conn);
    let raw = store.get(USERS_REGISTRY_KEY).unwrap().unwrap();
    assert!(!raw.contains("supersecret"));
    assert!(raw.contains("$argon2"));
}

#[test]
fn demo_user_seeding_is_idempotent_and_allows_login() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session.ensure_demo_user().unwrap();
    session.ensure_demo_user().unwrap();

    let demo = session.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(demo.email, DEMO_EMAIL);

    let store = SqliteKvStore::new(&conn);
    let raw = store.get(USERS_REGISTRY_KEY).unwrap().unwrap();
    assert_eq!(raw.matches(DEMO_EMAIL).count(), 1);
}
