//! Presentation-layer data contract.
//!
//! # Responsibility
//! - Project controller state plus drag-session state into a render model.
//!
//! # Invariants
//! - Projection is a pure function of its inputs; it never mutates and
//!   never persists.
//! - Dangling tableau and task references are skipped, not repaired.

use crate::dnd::session::{DragSession, Side};
use crate::service::board_service::BoardService;
use crate::store::KvStore;

/// Render model for one board request.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    /// Terminal display state when the requested board id has no data. The
    /// only recovery is hydrating a different, valid id.
    Unknown { board_id: String },
    Loaded(BoardLayout),
}

/// A hydrated board ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub board_id: String,
    pub name: String,
    /// Columns in board order, unknown ids already skipped.
    pub columns: Vec<ColumnView>,
}

/// One tableau column with its gesture-driven highlight flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub tableau_id: String,
    pub name: String,
    /// The column itself is the active drag payload.
    pub dragging: bool,
    /// A foreign task hovers this column's task area.
    pub task_area_highlighted: bool,
    /// Insertion-gap placeholder to draw before/after this column.
    pub gap: Option<Side>,
    /// Cards in column order, unknown ids already skipped.
    pub tasks: Vec<TaskCard>,
}

/// One task card.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    pub task_id: String,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub dragging: bool,
}

/// Projects current state into a render model.
///
/// Any change-notification mechanism (subscription, polling, reactive
/// binding) is the host's concern; re-running this projection after a
/// mutation or gesture event yields the next frame.
pub fn board_view<S: KvStore>(service: &BoardService<S>, session: &DragSession) -> BoardView {
    let board = match service.board() {
        Some(board) => board,
        None => {
            return BoardView::Unknown {
                board_id: service.requested_board_id().unwrap_or_default().to_string(),
            }
        }
    };

    let columns = board
        .tableau_ids
        .iter()
        .filter_map(|tableau_id| service.tableau(tableau_id))
        .map(|tableau| ColumnView {
            tableau_id: tableau.id.clone(),
            name: tableau.name.clone(),
            dragging: session.is_dragging_tableau(&tableau.id),
            task_area_highlighted: session.task_area_highlighted(&tableau.id),
            gap: session.column_gap(&tableau.id),
            tasks: tableau
                .task_ids
                .iter()
                .filter_map(|task_id| service.task(task_id))
                .map(|task| TaskCard {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                    description: task.description.clone(),
                    assignee: task.assignee.clone(),
                    dragging: session.is_dragging_task(&task.id),
                })
                .collect(),
        })
        .collect();

    BoardView::Loaded(BoardLayout {
        board_id: board.id.clone(),
        name: board.name.clone(),
        columns,
    })
}
