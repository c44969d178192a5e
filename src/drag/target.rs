//! Drop target state machine for a board list.

use super::payload::{DragPayload, TASK_ID_KIND};
use crate::board::domain::{TaskId, TaskStatus};
use crate::board::store::TaskStore;
use mockable::Clock;

/// Gesture state of a board list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetDragState {
    /// No compatible drag is hovering.
    #[default]
    Idle,
    /// A compatible drag is hovering and the list renders its droppable
    /// indicator.
    DragOver,
}

/// Result of delivering a drop to a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task moved to this list's status bucket and subscribers were
    /// notified.
    Moved(TaskId),
    /// The store declined the transition: the identifier was stale or the
    /// task already lives in this list. No notification fired.
    NoChange,
    /// The payload was missing, carried the wrong kind tag, or held a
    /// malformed identifier. The store was not touched.
    Rejected,
}

/// Drop target bound to one board list.
///
/// Each list accepts drags whose payload declares [`TASK_ID_KIND`] and
/// translates a drop into a status transition on the store. Lists never
/// hold the store; mutating handlers receive it as an explicit parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    target_status: TaskStatus,
    state: TargetDragState,
}

impl DropTarget {
    /// Creates an idle drop target for the list rendering the given
    /// status bucket.
    #[must_use]
    pub const fn new(target_status: TaskStatus) -> Self {
        Self {
            target_status,
            state: TargetDragState::Idle,
        }
    }

    /// Handles a hover notification, which fires repeatedly while a drag
    /// is over the list.
    ///
    /// Returns `true` when the declared payload kind matches
    /// [`TASK_ID_KIND`], meaning the caller must suppress the platform's
    /// default handling to permit a drop; the list then renders its
    /// droppable indicator. Any other kind is ignored, leaving the
    /// default (reject) behavior in place.
    pub fn drag_over(&mut self, declared_kind: Option<&str>) -> bool {
        if declared_kind != Some(TASK_ID_KIND) {
            return false;
        }
        self.state = TargetDragState::DragOver;
        true
    }

    /// Handles the drag leaving the list, clearing the droppable
    /// indicator. No store interaction.
    pub const fn drag_leave(&mut self) {
        self.state = TargetDragState::Idle;
    }

    /// Handles a drop, translating it into a status transition.
    ///
    /// The droppable indicator is cleared unconditionally. A missing or
    /// malformed payload aborts with [`DropOutcome::Rejected`] and no
    /// store mutation. When the task already has this list's status the
    /// store's idempotence contract applies: no flicker, no duplicate
    /// notification, [`DropOutcome::NoChange`].
    pub fn drop_payload<C>(
        &mut self,
        store: &mut TaskStore<C>,
        payload: Option<&DragPayload>,
    ) -> DropOutcome
    where
        C: Clock,
    {
        self.state = TargetDragState::Idle;
        let Some(id) = payload.and_then(DragPayload::task_id) else {
            return DropOutcome::Rejected;
        };
        if store.transition(id, self.target_status) {
            DropOutcome::Moved(id)
        } else {
            DropOutcome::NoChange
        }
    }

    /// Returns the status bucket this list renders.
    #[must_use]
    pub const fn target_status(&self) -> TaskStatus {
        self.target_status
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> TargetDragState {
        self.state
    }

    /// Returns `true` while the list should render its droppable
    /// indicator.
    #[must_use]
    pub const fn is_drag_over(&self) -> bool {
        matches!(self.state, TargetDragState::DragOver)
    }
}
