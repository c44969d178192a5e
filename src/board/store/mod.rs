//! Observable in-memory task store.
//!
//! Provides [`TaskStore`], the single source of truth for every
//! [`TaskRecord`] on the board. The store owns its records exclusively,
//! hands out only cloned snapshots, and notifies registered subscribers
//! after every observable mutation.

use crate::board::domain::{TaskId, TaskRecord, TaskStatus};
use crate::board::ports::Subscriber;
use mockable::{Clock, DefaultClock};
use std::fmt;

/// Request payload for creating a new task.
///
/// Inputs are assumed to have been validated by the caller (see
/// [`crate::input::InputCollector`]); creation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    assignees: u32,
}

impl CreateTaskRequest {
    /// Creates a request with all task creation fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, assignees: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignees,
        }
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the requested assignee count.
    #[must_use]
    pub const fn assignees(&self) -> u32 {
        self.assignees
    }
}

/// Observable, ordered collection of task records.
///
/// The store is constructed explicitly and passed by reference to the
/// components that mutate it (input collector, drop targets); there is no
/// hidden global instance. Insertion order is display order within a
/// status bucket. All mutation and notification is synchronous: every
/// subscriber callback completes before the mutating method returns, in
/// registration order, so a subscriber always observes a fully consistent
/// snapshot.
pub struct TaskStore<C = DefaultClock>
where
    C: Clock,
{
    records: Vec<TaskRecord>,
    subscribers: Vec<Box<dyn Subscriber>>,
    clock: C,
}

impl<C> TaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store using the given clock for creation
    /// timestamps.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            records: Vec::new(),
            subscribers: Vec::new(),
            clock,
        }
    }

    /// Creates a task record and appends it to the board.
    ///
    /// The record receives a freshly generated unique identifier and
    /// starts in [`TaskStatus::Active`]. Exactly one notification with a
    /// full ordered snapshot is delivered to every subscriber. Returns a
    /// clone of the new record.
    pub fn create(&mut self, request: CreateTaskRequest) -> TaskRecord {
        let CreateTaskRequest {
            title,
            description,
            assignees,
        } = request;
        let record = TaskRecord::new(title, description, assignees, &self.clock);
        self.records.push(record.clone());
        self.notify();
        record
    }

    /// Moves the record with the given identifier to a new status.
    ///
    /// Returns `true` and notifies subscribers once when the status
    /// actually changed. Returns `false` without notifying when the
    /// identifier is unknown (a stale reference from a concurrent drag is
    /// an expected transient condition, not an error) or when the record
    /// is already in the requested status (repeated drops onto the same
    /// list must not re-notify).
    pub fn transition(&mut self, id: TaskId, new_status: TaskStatus) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            return false;
        };
        if record.status() == new_status {
            return false;
        }
        record.set_status(new_status);
        self.notify();
        true
    }

    /// Registers a subscriber for future snapshots.
    ///
    /// The current snapshot is not replayed: the subscriber first hears
    /// from the store on the next mutation.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Returns an ordered snapshot of all records.
    ///
    /// The snapshot is a deep copy: mutating it never affects the store
    /// or subsequent snapshots.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.records.clone()
    }

    /// Returns the number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn notify(&mut self) {
        let snapshot = self.records.clone();
        for subscriber in &mut self.subscribers {
            subscriber.on_snapshot(&snapshot);
        }
    }
}

impl Default for TaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new(DefaultClock)
    }
}

impl<C> fmt::Debug for TaskStore<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("records", &self.records)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
