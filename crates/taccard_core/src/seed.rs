//! First-run demo dataset.
//!
//! # Responsibility
//! - Populate absent collections with the fixed demo board so a fresh store
//!   renders something useful.
//!
//! # Invariants
//! - A collection that is already present is never overwritten.
//! - The current-board slot defaults to the demo board when absent.

use std::collections::HashMap;

use log::info;

use crate::model::board::Board;
use crate::model::tableau::Tableau;
use crate::model::task::Task;
use crate::store::{KvStore, StoreKey, StoreResult};

/// Id of the seeded demo board.
pub const DEMO_BOARD_ID: &str = "board-1";

/// Seeds any absent collection with the demo dataset and defaults the
/// current-board slot.
pub fn ensure_demo_data<S: KvStore>(store: &S) -> StoreResult<()> {
    let mut seeded = false;

    if store.read(StoreKey::Boards)?.is_none() {
        store.save_collection(StoreKey::Boards, &demo_boards())?;
        seeded = true;
    }
    if store.read(StoreKey::Tableaus)?.is_none() {
        store.save_collection(StoreKey::Tableaus, &demo_tableaus())?;
        seeded = true;
    }
    if store.read(StoreKey::Tasks)?.is_none() {
        store.save_collection(StoreKey::Tasks, &demo_tasks())?;
        seeded = true;
    }
    if store.current_board_id()?.is_none() {
        store.set_current_board_id(DEMO_BOARD_ID)?;
    }

    if seeded {
        info!("event=seed module=seed status=ok board_id={DEMO_BOARD_ID}");
    }

    Ok(())
}

fn demo_boards() -> HashMap<String, Board> {
    let mut boards = HashMap::new();
    boards.insert(
        DEMO_BOARD_ID.to_string(),
        Board {
            id: DEMO_BOARD_ID.to_string(),
            name: "Demo Project".to_string(),
            tableau_ids: vec![
                "tableau-1".to_string(),
                "tableau-2".to_string(),
                "tableau-3".to_string(),
                "tableau-4".to_string(),
            ],
        },
    );
    boards
}

fn demo_tableaus() -> HashMap<String, Tableau> {
    let columns = [
        ("tableau-1", "Not started", vec!["task-1", "task-2"]),
        ("tableau-2", "In progress", vec!["task-3"]),
        ("tableau-3", "Under review", vec!["task-4"]),
        ("tableau-4", "Done", vec!["task-5"]),
    ];

    columns
        .into_iter()
        .map(|(id, name, task_ids)| {
            (
                id.to_string(),
                Tableau {
                    id: id.to_string(),
                    board_id: DEMO_BOARD_ID.to_string(),
                    name: name.to_string(),
                    task_ids: task_ids.into_iter().map(str::to_string).collect(),
                },
            )
        })
        .collect()
}

fn demo_tasks() -> HashMap<String, Task> {
    let cards = [
        (
            "task-1",
            "tableau-1",
            "Set up project repo",
            "Initialize GitHub repository with README and license.",
        ),
        (
            "task-2",
            "tableau-1",
            "Design database schema",
            "Outline entities: Board, Tableau, Task.",
        ),
        (
            "task-3",
            "tableau-2",
            "Implement login page",
            "Basic form with email/password validation.",
        ),
        (
            "task-4",
            "tableau-3",
            "Review pull request #42",
            "Check code style and add comments.",
        ),
        (
            "task-5",
            "tableau-4",
            "Deploy to staging",
            "Push latest build to staging environment.",
        ),
    ];

    cards
        .into_iter()
        .map(|(id, tableau_id, title, description)| {
            (
                id.to_string(),
                Task {
                    id: id.to_string(),
                    tableau_id: tableau_id.to_string(),
                    title: title.to_string(),
                    description: Some(description.to_string()),
                    assignee: None,
                    created_at: None,
                    updated_at: None,
                },
            )
        })
        .collect()
}
