//! Drag session state machine.
//!
//! # Responsibility
//! - Track the active drag payload and per-target hover state.
//! - Decide drop outcomes: cross-column task moves and column reordering.
//!
//! # Invariants
//! - A task area only reacts to a task dragged from a different tableau.
//! - A column area only reacts to a different tableau being dragged.
//! - The reorder side is recomputed from the drop-time pointer position;
//!   the last hover update is display-only.

use log::debug;

/// Which side of the target column a dragged tableau lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// What is being dragged during the current gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A task card, carrying its current column for self-drop detection.
    Task { task_id: String, tableau_id: String },
    /// A whole column.
    Tableau { tableau_id: String },
}

/// Horizontal extent of a column element in host coordinates.
///
/// The host UI supplies these with pointer events; the protocol never
/// measures anything itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnBounds {
    pub left: f64,
    pub width: f64,
}

impl ColumnBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Pointer left of the midpoint lands before the column, else after.
    pub fn side_of(&self, pointer_x: f64) -> Side {
        if pointer_x < self.left + self.width / 2.0 {
            Side::Before
        } else {
            Side::After
        }
    }
}

/// Board mutation requested by a completed drop, to be applied through the
/// board service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    MoveTask {
        task_id: String,
        from_tableau_id: String,
        to_tableau_id: String,
    },
    ReorderTableau {
        dragged_id: String,
        target_id: String,
        side: Side,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnHover {
    tableau_id: String,
    side: Side,
}

/// Per-gesture drag state: idle → dragging → idle.
///
/// One session instance serves the whole board; hover state is keyed by the
/// hovered element's tableau id, so each drop target reads its own flags
/// independently.
#[derive(Debug, Default)]
pub struct DragSession {
    payload: Option<DragPayload>,
    hovered_task_area: Option<String>,
    hovered_column: Option<ColumnHover>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no drag gesture is in flight.
    pub fn is_idle(&self) -> bool {
        self.payload.is_none()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    /// Begins a gesture. A payload from an unfinished previous gesture is
    /// discarded.
    pub fn drag_start(&mut self, payload: DragPayload) {
        debug!("event=drag_start module=dnd payload={payload:?}");
        self.clear_hover();
        self.payload = Some(payload);
    }

    /// Ends the gesture with no drop: releasing outside any valid target.
    pub fn drag_end(&mut self) {
        self.payload = None;
        self.clear_hover();
    }

    /// Pointer entered a tableau's task area.
    ///
    /// Highlights only for a task dragged from a different tableau.
    pub fn drag_enter_task_area(&mut self, tableau_id: &str) {
        if let Some(DragPayload::Task {
            tableau_id: source, ..
        }) = &self.payload
        {
            if source != tableau_id {
                self.hovered_task_area = Some(tableau_id.to_string());
            }
        }
    }

    /// Pointer left a tableau's task area.
    pub fn drag_leave_task_area(&mut self, tableau_id: &str) {
        if self.hovered_task_area.as_deref() == Some(tableau_id) {
            self.hovered_task_area = None;
        }
    }

    /// Pointer moved over a column area while dragging.
    ///
    /// Recomputes the before/after indicator on every move; enter and move
    /// are the same event for this target kind because the side cannot be
    /// known without a pointer position.
    pub fn drag_over_column(&mut self, tableau_id: &str, bounds: ColumnBounds, pointer_x: f64) {
        if let Some(DragPayload::Tableau { tableau_id: dragged }) = &self.payload {
            if dragged != tableau_id {
                self.hovered_column = Some(ColumnHover {
                    tableau_id: tableau_id.to_string(),
                    side: bounds.side_of(pointer_x),
                });
            }
        }
    }

    /// Pointer left a column area.
    pub fn drag_leave_column(&mut self, tableau_id: &str) {
        if self
            .hovered_column
            .as_ref()
            .is_some_and(|hover| hover.tableau_id == tableau_id)
        {
            self.hovered_column = None;
        }
    }

    /// Drop on a tableau's task area. Ends the gesture.
    ///
    /// Returns a move action for a task dropped on a foreign column; `None`
    /// for a drop back onto its own column or a non-task payload.
    pub fn drop_on_task_area(&mut self, tableau_id: &str) -> Option<DropAction> {
        let payload = self.payload.take();
        self.clear_hover();

        match payload {
            Some(DragPayload::Task {
                task_id,
                tableau_id: from,
            }) if from != tableau_id => {
                debug!(
                    "event=drop module=dnd kind=task task_id={task_id} from={from} to={tableau_id}"
                );
                Some(DropAction::MoveTask {
                    task_id,
                    from_tableau_id: from,
                    to_tableau_id: tableau_id.to_string(),
                })
            }
            _ => None,
        }
    }

    /// Drop on a tableau's column area. Ends the gesture.
    ///
    /// The side is recomputed from the drop-time pointer position: the
    /// pointer may have crossed the midpoint after the last hover update,
    /// and the drop position is authoritative.
    pub fn drop_on_column(
        &mut self,
        tableau_id: &str,
        bounds: ColumnBounds,
        pointer_x: f64,
    ) -> Option<DropAction> {
        let payload = self.payload.take();
        self.clear_hover();

        match payload {
            Some(DragPayload::Tableau { tableau_id: dragged }) if dragged != tableau_id => {
                let side = bounds.side_of(pointer_x);
                debug!(
                    "event=drop module=dnd kind=tableau dragged={dragged} target={tableau_id} side={side:?}"
                );
                Some(DropAction::ReorderTableau {
                    dragged_id: dragged,
                    target_id: tableau_id.to_string(),
                    side,
                })
            }
            _ => None,
        }
    }

    /// True while the given task is the active drag payload.
    pub fn is_dragging_task(&self, task_id: &str) -> bool {
        matches!(
            &self.payload,
            Some(DragPayload::Task { task_id: id, .. }) if id == task_id
        )
    }

    /// True while the given tableau is the active drag payload.
    pub fn is_dragging_tableau(&self, tableau_id: &str) -> bool {
        matches!(
            &self.payload,
            Some(DragPayload::Tableau { tableau_id: id }) if id == tableau_id
        )
    }

    /// True while a foreign task hovers this tableau's task area.
    pub fn task_area_highlighted(&self, tableau_id: &str) -> bool {
        self.hovered_task_area.as_deref() == Some(tableau_id)
    }

    /// Insertion-gap indicator for this column, if it is the hovered reorder
    /// target.
    pub fn column_gap(&self, tableau_id: &str) -> Option<Side> {
        self.hovered_column
            .as_ref()
            .filter(|hover| hover.tableau_id == tableau_id)
            .map(|hover| hover.side)
    }

    fn clear_hover(&mut self) {
        self.hovered_task_area = None;
        self.hovered_column = None;
    }
}
