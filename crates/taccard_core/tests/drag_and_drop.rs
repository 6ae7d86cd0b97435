use rusqlite::Connection;
use taccard_core::db::open_db_in_memory;
use taccard_core::{
    board_view, ensure_demo_data, BoardService, BoardView, ColumnBounds, DragPayload, DragSession,
    Side, SqliteKvStore, DEMO_BOARD_ID,
};

fn demo_service(conn: &Connection) -> BoardService<SqliteKvStore<'_>> {
    let store = SqliteKvStore::new(conn);
    ensure_demo_data(&store).unwrap();
    let mut service = BoardService::new(store);
    service.hydrate(DEMO_BOARD_ID).unwrap();
    service
}

fn drag_task(service: &BoardService<SqliteKvStore<'_>>, task_id: &str) -> DragPayload {
    let task = service.task(task_id).unwrap();
    DragPayload::Task {
        task_id: task.id.clone(),
        tableau_id: task.tableau_id.clone(),
    }
}

#[test]
fn dropping_a_task_on_a_foreign_column_moves_it() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);
    let mut session = DragSession::new();

    session.drag_start(drag_task(&service, "task-1"));
    session.drag_enter_task_area("tableau-2");
    let action = session.drop_on_task_area("tableau-2").expect("cross-column drop");
    service.apply_drop(action).unwrap();

    assert_eq!(service.tableau("tableau-1").unwrap().task_ids, vec!["task-2"]);
    let destination = service.tableau("tableau-2").unwrap().task_ids.clone();
    assert_eq!(destination.last().unwrap(), "task-1");
    assert_eq!(service.task("task-1").unwrap().tableau_id, "tableau-2");
}

#[test]
fn dropping_a_task_on_its_own_column_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = demo_service(&conn);
    let mut session = DragSession::new();

    let boards_before = service.board().cloned();
    let tableaus_before = service.tableaus().clone();
    let tasks_before = service.tasks().clone();

    session.drag_start(drag_task(&service, "task-1"));
    let action = session.drop_on_task_area("tableau-1");
    assert_eq!(action, None);

    assert_eq!(service.board().cloned(), boards_before);
    assert_eq!(service.tableaus(), &tableaus_before);
    assert_eq!(service.tasks(), &tasks_before);
}

#[test]
fn column_drop_reorders_with_the_drop_time_side() {
    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);
    let mut session = DragSession::new();
    let bounds = ColumnBounds::new(400.0, 200.0);

    session.drag_start(DragPayload::Tableau {
        tableau_id: "tableau-1".to_string(),
    });

    // Hover shows a before-gap, then the pointer crosses the midpoint just
    // before release; the drop position wins.
    session.drag_over_column("tableau-3", bounds, 450.0);
    assert_eq!(session.column_gap("tableau-3"), Some(Side::Before));

    let action = session
        .drop_on_column("tableau-3", bounds, 520.0)
        .expect("reorder drop");
    service.apply_drop(action).unwrap();

    assert_eq!(
        service.board().unwrap().tableau_ids,
        vec!["tableau-2", "tableau-3", "tableau-1", "tableau-4"]
    );
}

#[test]
fn cancelled_gesture_leaves_state_and_highlights_clean() {
    let conn = open_db_in_memory().unwrap();
    let service = demo_service(&conn);
    let mut session = DragSession::new();

    session.drag_start(drag_task(&service, "task-3"));
    session.drag_enter_task_area("tableau-1");
    session.drag_end();

    assert!(session.is_idle());
    assert_eq!(service.task("task-3").unwrap().tableau_id, "tableau-2");

    match board_view(&service, &session) {
        BoardView::Loaded(layout) => {
            assert!(layout
                .columns
                .iter()
                .all(|column| !column.task_area_highlighted && column.gap.is_none()));
        }
        BoardView::Unknown { .. } => panic!("demo board should be loaded"),
    }
}

#[test]
fn view_reflects_gesture_highlights_and_board_order() {
    let conn = open_db_in_memory().unwrap();
    let service = demo_service(&conn);
    let mut session = DragSession::new();
    let bounds = ColumnBounds::new(0.0, 100.0);

    session.drag_start(DragPayload::Tableau {
        tableau_id: "tableau-4".to_string(),
    });
    session.drag_over_column("tableau-2", bounds, 10.0);

    let layout = match board_view(&service, &session) {
        BoardView::Loaded(layout) => layout,
        BoardView::Unknown { .. } => panic!("demo board should be loaded"),
    };

    assert_eq!(layout.name, "Demo Project");
    let names: Vec<&str> = layout.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Not started", "In progress", "Under review", "Done"]
    );

    let in_progress = &layout.columns[1];
    assert_eq!(in_progress.gap, Some(Side::Before));
    assert!(!in_progress.dragging);

    let done = &layout.columns[3];
    assert!(done.dragging);
    assert_eq!(done.gap, None);
}

#[test]
fn unknown_board_renders_the_terminal_display_state() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);
    ensure_demo_data(&store).unwrap();

    let mut service = BoardService::new(SqliteKvStore::new(&conn));
    service.hydrate("board-nope").unwrap();

    match board_view(&service, &DragSession::new()) {
        BoardView::Unknown { board_id } => assert_eq!(board_id, "board-nope"),
        BoardView::Loaded(_) => panic!("unknown board must not load"),
    }

    // Recovery: hydrating a valid id leaves the display state.
    service.hydrate(DEMO_BOARD_ID).unwrap();
    assert!(matches!(
        board_view(&service, &DragSession::new()),
        BoardView::Loaded(_)
    ));
}

#[test]
fn dangling_references_are_skipped_at_render_time() {
    use std::collections::HashMap;
    use taccard_core::{Board, KvStore, StoreKey};

    let conn = open_db_in_memory().unwrap();
    let mut service = demo_service(&conn);

    // Leave a dangling task id in tableau-1's ordering.
    service
        .update_tableau("tableau-1", |mut tableau| {
            tableau.task_ids.push("task-ghost".to_string());
            tableau
        })
        .unwrap();

    // And a dangling tableau id on the persisted board, then rehydrate.
    let inspect = SqliteKvStore::new(&conn);
    let mut boards: HashMap<String, Board> = inspect.load_collection(StoreKey::Boards).unwrap();
    boards
        .get_mut(DEMO_BOARD_ID)
        .unwrap()
        .tableau_ids
        .push("tableau-ghost".to_string());
    inspect.save_collection(StoreKey::Boards, &boards).unwrap();
    service.hydrate(DEMO_BOARD_ID).unwrap();

    let layout = match board_view(&service, &DragSession::new()) {
        BoardView::Loaded(layout) => layout,
        BoardView::Unknown { .. } => panic!("demo board should be loaded"),
    };

    assert_eq!(layout.columns.len(), 4);
    let not_started = &layout.columns[0];
    let card_ids: Vec<&str> = not_started.tasks.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(card_ids, vec!["task-1", "task-2"]);
}
