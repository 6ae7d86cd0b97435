//! Core domain logic for Taccard, a single-user kanban board.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use dnd::session::{ColumnBounds, DragPayload, DragSession, DropAction, Side};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::Board;
pub use model::tableau::{Tableau, DEFAULT_TABLEAU_NAME};
pub use model::task::{Task, DEFAULT_TASK_TITLE};
pub use seed::{ensure_demo_data, DEMO_BOARD_ID};
pub use service::board_service::BoardService;
pub use store::{KvStore, SqliteKvStore, StoreError, StoreKey, StoreResult};
pub use view::{board_view, BoardLayout, BoardView, ColumnView, TaskCard};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
