//! Board record: the ordered container of tableau columns.

use serde::{Deserialize, Serialize};

use super::fresh_id;

/// A kanban board owning the ordering of its tableaus by reference.
///
/// `tableau_ids` should only contain ids present in the tableau collection;
/// dangling entries are tolerated at render time (skipped, not repaired).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    /// Authoritative left-to-right column ordering. No duplicates.
    pub tableau_ids: Vec<String>,
}

impl Board {
    /// Creates a board with a fresh id and no tableaus.
    ///
    /// Boards are created out of band (seeding); the board controller never
    /// creates or deletes them.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: fresh_id("board"),
            name: name.into(),
            tableau_ids: Vec::new(),
        }
    }

    pub fn contains_tableau(&self, tableau_id: &str) -> bool {
        self.tableau_ids.iter().any(|id| id == tableau_id)
    }
}
