//! Domain model for the kanban board.
//!
//! # Responsibility
//! - Define the Board / Tableau / Task record shapes and their id-reference
//!   relationships.
//! - Provide creation defaults (fresh prefixed ids, default names).
//!
//! # Invariants
//! - Ids are prefixed UUID strings, generated at creation, immutable.
//! - A task's `tableau_id` and the owning tableau's `task_ids` agree; the
//!   board controller keeps both sides in sync, never one independently.
//! - Entities carry no behavior beyond creation defaults; enforcement lives
//!   in the service layer.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod board;
pub mod tableau;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generates a fresh prefixed entity id, e.g. `tableau-550e8400-…`.
pub fn fresh_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Current wall-clock time in epoch milliseconds for audit fields.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::fresh_id;

    #[test]
    fn fresh_ids_carry_prefix_and_are_unique() {
        let a = fresh_id("task");
        let b = fresh_id("task");
        assert!(a.starts_with("task-"));
        assert_ne!(a, b);
    }
}
