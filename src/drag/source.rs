//! Drag source state machine for a task card.

use super::payload::{DragEffect, DragPayload};
use crate::board::domain::TaskId;

/// Gesture state of a rendered task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardDragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The card is being dragged.
    Dragging,
}

/// Drag source bound to one rendered task card.
///
/// The card attaches its task identifier as the gesture payload at drag
/// start and returns to idle at drag end regardless of whether a drop
/// happened; the platform does not guarantee a drop event when the drag
/// is released outside any valid target, so the card must never stay
/// stuck in [`CardDragState::Dragging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDrag {
    task_id: TaskId,
    state: CardDragState,
}

impl CardDrag {
    /// Creates an idle drag source for the card rendering the given task.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            state: CardDragState::Idle,
        }
    }

    /// Begins a drag gesture and returns the payload to attach to it.
    pub fn drag_start(&mut self) -> DragPayload {
        self.state = CardDragState::Dragging;
        DragPayload::for_task(self.task_id)
    }

    /// Ends the gesture, dropped or not.
    pub const fn drag_end(&mut self) {
        self.state = CardDragState::Idle;
    }

    /// Returns the effect hint advertised at drag start.
    #[must_use]
    pub const fn effect_hint() -> DragEffect {
        DragEffect::Move
    }

    /// Returns the task this card renders.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> CardDragState {
        self.state
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, CardDragState::Dragging)
    }
}
