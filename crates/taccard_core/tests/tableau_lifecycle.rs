use rusqlite::Connection;
use taccard_core::db::open_db_in_memory;
use taccard_core::{
    ensure_demo_data, BoardService, KvStore, SqliteKvStore, StoreKey, DEFAULT_TABLEAU_NAME,
    DEMO_BOARD_ID,
};

fn demo_service(conn: &Connection) -> BoardService<SqliteKvStore<'_>> {
    let store = SqliteKvStore::new(conn);
    ensure_demo_data(&store).unwrap();
    let mut service = BoardService::new(store);
    service.hydrate(DEMO_BOARD_ID).unwrap();
    service
}

#[test]
fn add_tableau_appends_one_empty_column() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);
    let before = service.board().unwrap().tableau_ids.clone();

    let new_id = service.add_tableau().unwrap().expect("board is loaded");

    let board = service.board().unwrap();
    assert_eq!(board.tableau_ids.len(), before.len() + 1);
    assert_eq!(board.tableau_ids.last().unwrap(), &new_id);
    assert!(!before.contains(&new_id));

    let tableau = service.tableau(&new_id).unwrap();
    assert_eq!(tableau.name, DEFAULT_TABLEAU_NAME);
    assert_eq!(tableau.board_id, DEMO_BOARD_ID);
    assert!(tableau.task_ids.is_empty());
}

#[test]
fn add_tableau_reaches_storage_through_board_sync() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    let new_id = service.add_tableau().unwrap().expect("board is loaded");

    // A second hydration sees exactly what was persisted.
    let mut reloaded = BoardService::new(SqliteKvStore::new(&conn));
    reloaded.hydrate(DEMO_BOARD_ID).unwrap();
    assert!(reloaded.board().unwrap().contains_tableau(&new_id));
    assert!(reloaded.tableau(&new_id).is_some());
}

#[test]
fn add_tableau_without_board_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    ensure_demo_data(&store).unwrap();

    let mut service = BoardService::new(SqliteKvStore::new(&conn));
    service.hydrate("board-nope").unwrap();
    assert!(service.board().is_none());

    assert_eq!(service.add_tableau().unwrap(), None);

    let inspect = SqliteKvStore::new(&conn);
    let tableaus: std::collections::HashMap<String, taccard_core::Tableau> =
        inspect.load_collection(StoreKey::Tableaus).unwrap();
    assert_eq!(tableaus.len(), 4);
}

#[test]
fn delete_tableau_with_tasks_cascades_when_confirmed() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    let doomed_tasks = service.tableau("tableau-1").unwrap().task_ids.clone();
    assert_eq!(doomed_tasks, vec!["task-1", "task-2"]);

    service.delete_tableau("tableau-1", true).unwrap();

    assert!(!service.board().unwrap().contains_tableau("tableau-1"));
    assert!(service.tableau("tableau-1").is_none());
    for task_id in &doomed_tasks {
        assert!(service.task(task_id).is_none());
    }

    // Other columns and their tasks survive.
    assert!(service.tableau("tableau-2").is_some());
    assert!(service.task("task-3").is_some());

    let mut reloaded = BoardService::new(SqliteKvStore::new(&conn));
    reloaded.hydrate(DEMO_BOARD_ID).unwrap();
    assert!(reloaded.tableau("tableau-1").is_none());
    assert!(reloaded.task("task-1").is_none());
}

#[test]
fn declined_delete_leaves_all_collections_untouched() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    let inspect = SqliteKvStore::new(&conn);
    let boards_before = inspect.read(StoreKey::Boards).unwrap();
    let tableaus_before = inspect.read(StoreKey::Tableaus).unwrap();
    let tasks_before = inspect.read(StoreKey::Tasks).unwrap();

    service.delete_tableau("tableau-1", false).unwrap();

    assert!(service.tableau("tableau-1").is_some());
    assert!(service.task("task-1").is_some());
    assert_eq!(inspect.read(StoreKey::Boards).unwrap(), boards_before);
    assert_eq!(inspect.read(StoreKey::Tableaus).unwrap(), tableaus_before);
    assert_eq!(inspect.read(StoreKey::Tasks).unwrap(), tasks_before);
}

#[test]
fn empty_tableau_deletes_without_confirmation() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    let empty_id = service.add_tableau().unwrap().expect("board is loaded");
    service.delete_tableau(&empty_id, false).unwrap();

    assert!(service.tableau(&empty_id).is_none());
    assert!(!service.board().unwrap().contains_tableau(&empty_id));
}

#[test]
fn deleting_unknown_tableau_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    service.delete_tableau("tableau-nope", true).unwrap();

    assert_eq!(service.board().unwrap().tableau_ids.len(), 4);
    assert_eq!(service.tableaus().len(), 4);
    assert_eq!(service.tasks().len(), 5);
}

#[test]
fn rename_tableau_persists_and_keeps_id() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    service
        .update_tableau("tableau-1", |mut tableau| {
            tableau.name = "Backlog".to_string();
            tableau.id = "tableau-hijacked".to_string();
            tableau
        })
        .unwrap();

    let tableau = service.tableau("tableau-1").unwrap();
    assert_eq!(tableau.name, "Backlog");
    assert_eq!(tableau.id, "tableau-1");

    let mut reloaded = BoardService::new(SqliteKvStore::new(&conn));
    reloaded.hydrate(DEMO_BOARD_ID).unwrap();
    assert_eq!(reloaded.tableau("tableau-1").unwrap().name, "Backlog");
}
