use checkplus_core::db::open_db_in_memory;
use checkplus_core::{ChecklistService, KvStore, ListId, SessionManager, SqliteKvStore};
use rusqlite::Connection;

fn session_with_ana(conn: &Connection) -> SessionManager<SqliteKvStore<'_>> {
    let mut session = SessionManager::new(SqliteKvStore::new(conn)).unwrap();
    session
        .register("Ana", "ana@x.com", "abcdef")
        .unwrap();
    session
}

#[test]
fn first_load_returns_seed_without_persisting_it() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    let lists = service.load().unwrap();
    assert_eq!(lists.len(), 4);
    assert_eq!(lists[&ListId::Shopping].title, "Lista de Compras");
    assert_eq!(lists[&ListId::Shopping].items.len(), 4);
    assert_eq!(lists[&ListId::Notes].items.len(), 3);

    // Pure read: nothing may be written under the lists key yet.
    let user_id = session.current_user().unwrap().id;
    let store = SqliteKvStore::new(&conn);
    assert!(store
        .get(&format!("checkplus_{user_id}_lists"))
        .unwrap()
        .is_none());
}

#[test]
fn add_item_appends_and_persists_everything() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    let added = service
        .add_item(ListId::Shopping, "  Café  ")
        .unwrap()
        .expect("non-empty text should add an item");
    assert_eq!(added.text, "Café");
    assert!(!added.completed);

    let lists = service.load().unwrap();
    let items = &lists[&ListId::Shopping].items;
    assert_eq!(items.len(), 5);
    assert_eq!(items.last().unwrap().id, added.id);

    // First mutation pins the whole seed into storage.
    let user_id = session.current_user().unwrap().id;
    let store = SqliteKvStore::new(&conn);
    assert!(store
        .get(&format!("checkplus_{user_id}_lists"))
        .unwrap()
        .is_some());
}

#[test]
fn add_item_ignores_whitespace_only_text() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    assert!(service.add_item(ListId::Notes, "   ").unwrap().is_none());
    assert_eq!(service.load().unwrap()[&ListId::Notes].items.len(), 3);
}

#[test]
fn toggle_item_flips_exactly_one_item() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    // Seed: "Leite" (id 1) starts uncompleted, "Pão" (id 2) completed.
    assert!(service.toggle_item(ListId::Shopping, 1).unwrap());

    let items = service.load().unwrap()[&ListId::Shopping].items.clone();
    assert!(items[0].completed);
    assert!(items[1].completed);
    assert!(!items[2].completed);

    assert!(service.toggle_item(ListId::Shopping, 1).unwrap());
    let items = service.load().unwrap()[&ListId::Shopping].items.clone();
    assert!(!items[0].completed);
}

#[test]
fn toggle_of_unknown_id_reports_false() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    assert!(!service.toggle_item(ListId::Routine, 999).unwrap());
}

#[test]
fn remove_item_deletes_by_id_and_keeps_order() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    service.remove_item(ListId::Shopping, 2).unwrap();

    let items = service.load().unwrap()[&ListId::Shopping].items.clone();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.iter().map(|item| item.id).collect::<Vec<_>>(),
        vec![1, 3, 4]
    );
}

#[test]
fn progress_counts_completed_items() {
    let conn = open_db_in_memory().unwrap();
    let session = session_with_ana(&conn);
    let service = ChecklistService::new(&session);

    // Seed "Checklist de Saída": Chaves and Celular start completed.
    assert_eq!(service.progress(ListId::Checklist).unwrap(), (2, 4));

    service.toggle_item(ListId::Checklist, 2).unwrap();
    assert_eq!(service.progress(ListId::Checklist).unwrap(), (3, 4));
}

#[test]
fn lists_survive_a_session_reload() {
    let conn = open_db_in_memory().unwrap();

    let added_id = {
        let session = session_with_ana(&conn);
        let service = ChecklistService::new(&session);
        service
            .add_item(ListId::Routine, "Caminhada")
            .unwrap()
            .unwrap()
            .id
    };

    let restored = SessionManager::new(SqliteKvStore::new(&conn)).unwrap();
    let service = ChecklistService::new(&restored);
    let items = service.load().unwrap()[&ListId::Routine].items.clone();
    assert_eq!(items.len(), 5);
    assert_eq!(items.last().unwrap().id, added_id);
}
