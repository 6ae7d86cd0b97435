//! Task record: one card on the board.

use serde::{Deserialize, Serialize};

use super::{fresh_id, now_epoch_ms};

/// Default title for a freshly added card.
pub const DEFAULT_TASK_TITLE: &str = "New task";

/// A single card.
///
/// `tableau_id` is the authoritative statement of current column membership
/// and must agree with that tableau's `task_ids` outside of an in-flight
/// move operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub tableau_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Epoch milliseconds. Stamped once at creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Epoch milliseconds. Stamped on edit and move operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Task {
    /// Creates a task attached to the given tableau with the default title
    /// and empty optional fields.
    pub fn new(tableau_id: impl Into<String>) -> Self {
        Self {
            id: fresh_id("task"),
            tableau_id: tableau_id.into(),
            title: DEFAULT_TASK_TITLE.to_string(),
            description: None,
            assignee: None,
            created_at: Some(now_epoch_ms()),
            updated_at: None,
        }
    }

    /// Stamps the audit timestamp after a mutation.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Some(now_epoch_ms());
    }
}
