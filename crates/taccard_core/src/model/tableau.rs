//! Tableau record: one column of the board.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// Default display name for a freshly added column.
pub const DEFAULT_TABLEAU_NAME: &str = "New tableau";

/// A single column holding an ordered sequence of task ids.
///
/// `board_id` back-references the owning board and is informational only;
/// membership is derived from the board's `tableau_ids`, not from this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tableau {
    pub id: String,
    pub board_id: String,
    pub name: String,
    /// Authoritative top-to-bottom task ordering within this column. No
    /// duplicates.
    pub task_ids: Vec<String>,
}

impl Tableau {
    /// Creates an empty tableau with a fresh id and the default name.
    pub fn new(board_id: impl Into<String>) -> Self {
        Self {
            id: fresh_id("tableau"),
            board_id: board_id.into(),
            name: DEFAULT_TABLEAU_NAME.to_string(),
            task_ids: Vec::new(),
        }
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }
}
