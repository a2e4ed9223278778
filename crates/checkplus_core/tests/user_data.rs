use checkplus_core::db::open_db_in_memory;
use checkplus_core::{KvStore, SessionManager, SqliteKvStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Preferences {
    theme: String,
    sounds: bool,
}

#[test]
fn set_then_get_returns_deep_equal_value() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();

    let prefs = Preferences {
        theme: "lofi".to_string(),
        sounds: true,
    };
    session.set_user_data("prefs", &prefs).unwrap();

    let loaded: Preferences = session.get_user_data("prefs").unwrap().unwrap();
    assert_eq!(loaded, prefs);
}

#[test]
fn reads_without_a_session_return_none() {
    let conn = open_db_in_memory().unwrap();
    let session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    let loaded: Option<Preferences> = session.get_user_data("prefs").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn writes_without_a_session_are_silent_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    let prefs = Preferences {
        theme: "lofi".to_string(),
        sounds: false,
    };
    session.set_user_data("prefs", &prefs).unwrap();

    // Nothing may be written: the store only ever saw the (absent) session.
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn user_data_is_isolated_between_accounts() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();

    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();
    session
        .set_user_data("prefs", &Preferences {
            theme: "lofi".to_string(),
            sounds: true,
        })
        .unwrap();

    session
        .register("Bia", "bia@x.com", "abcdef")
        .unwrap();
    let loaded: Option<Preferences> = session.get_user_data("prefs").unwrap();
    assert!(loaded.is_none(), "Bia must not see Ana's data");

    session.logout().unwrap();
    session.login("ana@x.com", "abcdef").unwrap();
    let loaded: Preferences = session.get_user_data("prefs").unwrap().unwrap();
    assert_eq!(loaded.theme, "lofi");
}

#[test]
fn malformed_stored_value_reads_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    let user = session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();

    let store = SqliteKvStore::new(&conn);
    store
        .set(&format!("checkplus_{}_prefs", user.id), "{broken")
        .unwrap();

    let loaded: Option<Preferences> = session.get_user_data("prefs").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn user_data_overwrites_whole_value() {
    let conn = open_db_in_memory().unwrap();
    let mut session = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();

    session.set_user_data("numbers", &vec![1, 2, 3]).unwrap();
    session.set_user_data("numbers", &vec![9]).unwrap();

    let loaded: Vec<i32> = session.get_user_data("numbers").unwrap().unwrap();
    assert_eq!(loaded, vec![9]);
}
