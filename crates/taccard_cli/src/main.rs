//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taccard_core` wiring: seed an
//!   in-memory store, hydrate the demo board, print the column layout.
//! - Keep output deterministic for quick local sanity checks.

use taccard_core::db::open_db_in_memory;
use taccard_core::{
    board_view, core_version, ensure_demo_data, BoardService, BoardView, DragSession, KvStore,
    SqliteKvStore, DEMO_BOARD_ID,
};

fn main() {
    println!("taccard_core version={}", core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory store: {err}");
            std::process::exit(1);
        }
    };

    let store = SqliteKvStore::new(&conn);
    if let Err(err) = ensure_demo_data(&store) {
        eprintln!("failed to seed demo data: {err}");
        std::process::exit(1);
    }

    let board_id = match store.current_board_id() {
        Ok(Some(board_id)) => board_id,
        Ok(None) => DEMO_BOARD_ID.to_string(),
        Err(err) => {
            eprintln!("failed to read current board id: {err}");
            std::process::exit(1);
        }
    };

    let mut service = BoardService::new(store);
    if let Err(err) = service.hydrate(&board_id) {
        eprintln!("failed to hydrate board `{board_id}`: {err}");
        std::process::exit(1);
    }

    match board_view(&service, &DragSession::new()) {
        BoardView::Unknown { board_id } => println!("Unknown board: no data found for {board_id}"),
        BoardView::Loaded(layout) => {
            println!("{}", layout.name);
            for column in &layout.columns {
                println!("  {} ({} tasks)", column.name, column.tasks.len());
            }
        }
    }
}
