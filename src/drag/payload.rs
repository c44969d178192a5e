//! Typed drag gesture payload.

use crate::board::domain::TaskId;
use serde::{Deserialize, Serialize};

/// Kind tag under which task identifiers travel during a drag gesture.
///
/// Drop targets accept a drag only when its payload declares this kind;
/// anything else is left to the platform's default (reject) handling.
pub const TASK_ID_KIND: &str = "text/plain";

/// Effect hint attached at drag start. Informational only; nothing
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEffect {
    /// The gesture moves the card between lists.
    Move,
}

/// The single message exchanged between a drag source and a drop target:
/// a kind tag plus an opaque string value, matched structurally at the
/// target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    kind: String,
    value: String,
}

impl DragPayload {
    /// Creates a payload with an arbitrary kind tag and value.
    #[must_use]
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Creates the payload a task card attaches at drag start.
    #[must_use]
    pub fn for_task(id: TaskId) -> Self {
        Self::new(TASK_ID_KIND, id.to_string())
    }

    /// Returns the declared kind tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the opaque payload value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Extracts the dragged task identifier.
    ///
    /// Returns `None` when the kind tag is not [`TASK_ID_KIND`] or the
    /// value is not a well-formed identifier.
    #[must_use]
    pub fn task_id(&self) -> Option<TaskId> {
        if self.kind != TASK_ID_KIND {
            return None;
        }
        self.value.parse().ok()
    }
}
