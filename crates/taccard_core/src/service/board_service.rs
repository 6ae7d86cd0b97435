//! Board controller: the sole mutator of board, tableau, and task state.
//!
//! # Responsibility
//! - Hold the hydrated in-memory copy of one board with the full tableau and
//!   task mappings.
//! - Apply every mutation to in-memory state and the injected store
//!   together.
//!
//! # Invariants
//! - A task's `tableau_id` and the owning tableau's `task_ids` are updated
//!   in the same operation, never independently.
//! - Board-level changes (tableau ordering and membership) reach storage
//!   only through `persist_board`.
//! - Operations stage their changes, persist, then commit in memory, so a
//!   failed save leaves in-memory state untouched.
//! - Unknown ids and an absent board are silent no-ops, not errors.
//!
//! # See also
//! - docs/architecture/data-model.md

use std::collections::HashMap;

use log::{debug, info};

use crate::dnd::session::{DropAction, Side};
use crate::model::board::Board;
use crate::model::tableau::Tableau;
use crate::model::task::Task;
use crate::store::{KvStore, StoreKey, StoreResult};

/// Use-case controller for a single hydrated board.
///
/// Generic over the store so tests and hosts can inject any `KvStore`
/// implementation.
pub struct BoardService<S: KvStore> {
    store: S,
    requested_board_id: Option<String>,
    board: Option<Board>,
    tableaus: HashMap<String, Tableau>,
    tasks: HashMap<String, Task>,
}

impl<S: KvStore> BoardService<S> {
    /// Creates an unhydrated service around an injected store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            requested_board_id: None,
            board: None,
            tableaus: HashMap::new(),
            tasks: HashMap::new(),
        }
    }

    /// Loads all three collections and selects the requested board.
    ///
    /// When the board id is unknown the service stays in the unknown-board
    /// display state: every mutation is a no-op until a present id is
    /// hydrated.
    pub fn hydrate(&mut self, board_id: &str) -> StoreResult<()> {
        self.requested_board_id = Some(board_id.to_string());
        self.tableaus = self.store.load_collection(StoreKey::Tableaus)?;
        self.tasks = self.store.load_collection(StoreKey::Tasks)?;

        let mut boards: HashMap<String, Board> = self.store.load_collection(StoreKey::Boards)?;
        self.board = boards.remove(board_id);

        match &self.board {
            Some(board) => info!(
                "event=board_hydrate module=service status=ok board_id={board_id} tableaus={}",
                board.tableau_ids.len()
            ),
            None => info!("event=board_hydrate module=service status=missing board_id={board_id}"),
        }

        Ok(())
    }

    /// The hydrated board, absent when the last requested id was unknown.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// The board id most recently passed to `hydrate`.
    pub fn requested_board_id(&self) -> Option<&str> {
        self.requested_board_id.as_deref()
    }

    pub fn tableau(&self, tableau_id: &str) -> Option<&Tableau> {
        self.tableaus.get(tableau_id)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn tableaus(&self) -> &HashMap<String, Tableau> {
        &self.tableaus
    }

    pub fn tasks(&self) -> &HashMap<String, Task> {
        &self.tasks
    }

    /// Adds an empty tableau to the end of the board.
    ///
    /// Returns the new tableau id, or `None` without a loaded board.
    pub fn add_tableau(&mut self) -> StoreResult<Option<String>> {
        let board = match &self.board {
            Some(board) => board,
            None => return Ok(None),
        };

        let tableau = Tableau::new(board.id.clone());
        let tableau_id = tableau.id.clone();

        let mut tableaus = self.tableaus.clone();
        tableaus.insert(tableau_id.clone(), tableau);

        let mut board = board.clone();
        board.tableau_ids.push(tableau_id.clone());

        self.store.save_collection(StoreKey::Tableaus, &tableaus)?;
        self.persist_board(&board)?;

        self.tableaus = tableaus;
        self.board = Some(board);

        info!("event=tableau_add module=service status=ok tableau_id={tableau_id}");
        Ok(Some(tableau_id))
    }

    /// Deletes a tableau and cascades to its member tasks.
    ///
    /// A tableau that still holds tasks is only deleted when `proceed` is
    /// true; the confirmation prompt itself is a presentation concern and
    /// must be resolved before calling. Declining leaves all state
    /// unchanged.
    pub fn delete_tableau(&mut self, tableau_id: &str, proceed: bool) -> StoreResult<()> {
        let board = match &self.board {
            Some(board) => board,
            None => return Ok(()),
        };
        let tableau = match self.tableaus.get(tableau_id) {
            Some(tableau) => tableau,
            None => return Ok(()),
        };

        if !tableau.task_ids.is_empty() && !proceed {
            debug!("event=tableau_delete module=service status=declined tableau_id={tableau_id}");
            return Ok(());
        }

        let mut tableaus = self.tableaus.clone();
        let removed = match tableaus.remove(tableau_id) {
            Some(removed) => removed,
            None => return Ok(()),
        };

        let mut tasks = self.tasks.clone();
        for task_id in &removed.task_ids {
            tasks.remove(task_id);
        }

        let mut board = board.clone();
        board.tableau_ids.retain(|id| id != tableau_id);

        self.store.save_collection(StoreKey::Tableaus, &tableaus)?;
        self.store.save_collection(StoreKey::Tasks, &tasks)?;
        self.persist_board(&board)?;

        self.tableaus = tableaus;
        self.tasks = tasks;
        self.board = Some(board);

        info!(
            "event=tableau_delete module=service status=ok tableau_id={tableau_id} cascaded_tasks={}",
            removed.task_ids.len()
        );
        Ok(())
    }

    /// Moves a tableau immediately before or after a sibling.
    ///
    /// The insertion index is computed against the ordering *after* the
    /// dragged id is removed, so dragging a column rightwards does not
    /// overshoot by one. Unknown ids and `dragged == target` are no-ops.
    pub fn reorder_tableau(
        &mut self,
        dragged_id: &str,
        target_id: &str,
        side: Side,
    ) -> StoreResult<()> {
        if dragged_id == target_id {
            return Ok(());
        }
        let board = match &self.board {
            Some(board) => board,
            None => return Ok(()),
        };
        if !board.contains_tableau(dragged_id) || !board.contains_tableau(target_id) {
            return Ok(());
        }

        let mut order = board.tableau_ids.clone();
        order.retain(|id| id != dragged_id);

        let target_index = match order.iter().position(|id| id == target_id) {
            Some(index) => index,
            None => return Ok(()),
        };
        let insert_index = match side {
            Side::Before => target_index,
            Side::After => target_index + 1,
        };
        order.insert(insert_index, dragged_id.to_string());

        let mut board = board.clone();
        board.tableau_ids = order;

        self.persist_board(&board)?;
        self.board = Some(board);

        info!(
            "event=tableau_reorder module=service status=ok dragged={dragged_id} target={target_id} side={side:?}"
        );
        Ok(())
    }

    /// Adds a default task to the end of a tableau.
    ///
    /// Returns the new task id, or `None` for an unknown tableau.
    pub fn add_task(&mut self, tableau_id: &str) -> StoreResult<Option<String>> {
        if self.board.is_none() || !self.tableaus.contains_key(tableau_id) {
            return Ok(None);
        }

        let task = Task::new(tableau_id);
        let task_id = task.id.clone();

        let mut tasks = self.tasks.clone();
        tasks.insert(task_id.clone(), task);

        let mut tableaus = self.tableaus.clone();
        if let Some(tableau) = tableaus.get_mut(tableau_id) {
            tableau.task_ids.push(task_id.clone());
        }

        self.store.save_collection(StoreKey::Tasks, &tasks)?;
        self.store.save_collection(StoreKey::Tableaus, &tableaus)?;

        self.tasks = tasks;
        self.tableaus = tableaus;

        info!("event=task_add module=service status=ok task_id={task_id} tableau_id={tableau_id}");
        Ok(Some(task_id))
    }

    /// Moves a task to the end of another tableau.
    ///
    /// Removes the id from the source ordering, appends it to the
    /// destination, and updates the task's own `tableau_id` in the same
    /// operation. The destination is always the end of the column: there is
    /// no intra-column reordering. Same-tableau moves and unknown ids are
    /// no-ops.
    pub fn move_task(
        &mut self,
        task_id: &str,
        from_tableau_id: &str,
        to_tableau_id: &str,
    ) -> StoreResult<()> {
        if from_tableau_id == to_tableau_id || self.board.is_none() {
            return Ok(());
        }
        if !self.tasks.contains_key(task_id)
            || !self.tableaus.contains_key(from_tableau_id)
            || !self.tableaus.contains_key(to_tableau_id)
        {
            debug!(
                "event=task_move module=service status=skipped task_id={task_id} from={from_tableau_id} to={to_tableau_id}"
            );
            return Ok(());
        }

        let mut tableaus = self.tableaus.clone();
        if let Some(source) = tableaus.get_mut(from_tableau_id) {
            source.task_ids.retain(|id| id != task_id);
        }
        if let Some(destination) = tableaus.get_mut(to_tableau_id) {
            if !destination.contains_task(task_id) {
                destination.task_ids.push(task_id.to_string());
            }
        }

        let mut tasks = self.tasks.clone();
        if let Some(task) = tasks.get_mut(task_id) {
            task.tableau_id = to_tableau_id.to_string();
            task.touch();
        }

        self.store.save_collection(StoreKey::Tasks, &tasks)?;
        self.store.save_collection(StoreKey::Tableaus, &tableaus)?;

        self.tasks = tasks;
        self.tableaus = tableaus;

        info!(
            "event=task_move module=service status=ok task_id={task_id} from={from_tableau_id} to={to_tableau_id}"
        );
        Ok(())
    }

    /// Applies a pure transform to a tableau (rename and similar edits) and
    /// persists the tableau mapping.
    ///
    /// The id is immutable: whatever the patch returns, the stored id is
    /// kept.
    pub fn update_tableau(
        &mut self,
        tableau_id: &str,
        patch: impl FnOnce(Tableau) -> Tableau,
    ) -> StoreResult<()> {
        if self.board.is_none() {
            return Ok(());
        }
        let current = match self.tableaus.get(tableau_id) {
            Some(tableau) => tableau.clone(),
            None => return Ok(()),
        };

        let mut updated = patch(current);
        updated.id = tableau_id.to_string();

        let mut tableaus = self.tableaus.clone();
        tableaus.insert(tableau_id.to_string(), updated);

        self.store.save_collection(StoreKey::Tableaus, &tableaus)?;
        self.tableaus = tableaus;
        Ok(())
    }

    /// Applies a pure transform to a task (title, description, assignee
    /// edits) and persists the task mapping.
    ///
    /// The id is immutable; the audit timestamp is stamped after the patch.
    pub fn update_task(
        &mut self,
        task_id: &str,
        patch: impl FnOnce(Task) -> Task,
    ) -> StoreResult<()> {
        if self.board.is_none() {
            return Ok(());
        }
        let current = match self.tasks.get(task_id) {
            Some(task) => task.clone(),
            None => return Ok(()),
        };

        let mut updated = patch(current);
        updated.id = task_id.to_string();
        updated.touch();

        let mut tasks = self.tasks.clone();
        tasks.insert(task_id.to_string(), updated);

        self.store.save_collection(StoreKey::Tasks, &tasks)?;
        self.tasks = tasks;
        Ok(())
    }

    /// Dispatches a completed drop gesture onto the matching operation.
    pub fn apply_drop(&mut self, action: DropAction) -> StoreResult<()> {
        match action {
            DropAction::MoveTask {
                task_id,
                from_tableau_id,
                to_tableau_id,
            } => self.move_task(&task_id, &from_tableau_id, &to_tableau_id),
            DropAction::ReorderTableau {
                dragged_id,
                target_id,
                side,
            } => self.reorder_tableau(&dragged_id, &target_id, side),
        }
    }

    /// Writes the full board object back into the boards collection.
    ///
    /// Read-modify-write: sibling boards in the collection are preserved.
    fn persist_board(&self, board: &Board) -> StoreResult<()> {
        let mut boards: HashMap<String, Board> = self.store.load_collection(StoreKey::Boards)?;
        boards.insert(board.id.clone(), board.clone());
        self.store.save_collection(StoreKey::Boards, &boards)
    }
}
