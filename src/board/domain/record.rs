//! Task record aggregate root.

use super::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single task on the board.
///
/// Records are created with [`TaskStatus::Active`] and a freshly generated
/// identifier. Only the status ever changes after creation, and only the
/// owning store may change it; every other component receives clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    title: String,
    description: String,
    assignees: u32,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a new active task record.
    ///
    /// The title, description, and assignee count are assumed to have been
    /// validated by the caller.
    #[must_use]
    pub(crate) fn new(
        title: String,
        description: String,
        assignees: u32,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            assignees,
            status: TaskStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned to the task.
    #[must_use]
    pub const fn assignees(&self) -> u32 {
        self.assignees
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the record to a new status. Store-internal: external code
    /// only ever holds clones, so this cannot corrupt board state.
    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
