//! Drag-and-drop status transitions.
//!
//! This module implements the gesture protocol between a dragged task card
//! and a board list. The two endpoints exchange exactly one typed message,
//! the [`DragPayload`], carrying the dragged task's identifier under an
//! agreed kind tag. Dragging is a best-effort UI affordance: every
//! missing or malformed payload is absorbed as a no-op, never surfaced as
//! an error, and no handler mutates the store on a bad payload.

mod payload;
mod source;
mod target;

pub use payload::{DragEffect, DragPayload, TASK_ID_KIND};
pub use source::{CardDrag, CardDragState};
pub use target::{DropOutcome, DropTarget, TargetDragState};

#[cfg(test)]
mod tests;
