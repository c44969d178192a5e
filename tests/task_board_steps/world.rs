//! Shared world state for task board BDD scenarios.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::fixture;
use taskboard::board::domain::{TaskRecord, TaskStatus};
use taskboard::board::store::TaskStore;
use taskboard::drag::{DropOutcome, DropTarget};
use taskboard::input::{InputCollector, ValidationFailure};

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    /// The store under test.
    pub store: TaskStore,
    /// Collector applying the default field policy.
    pub collector: InputCollector,
    /// Drop target rendering the active bucket.
    pub active_list: DropTarget,
    /// Drop target rendering the finished bucket.
    pub finished_list: DropTarget,
    /// Every snapshot delivered to the recording subscriber.
    pub notifications: Rc<RefCell<Vec<Vec<TaskRecord>>>>,
    /// Result of the last submission attempt.
    pub last_submission: Option<Result<TaskRecord, ValidationFailure>>,
    /// Outcome of the last drop gesture.
    pub last_drop: Option<DropOutcome>,
}

impl BoardWorld {
    /// Creates a world with an empty store and a recording subscriber.
    #[must_use]
    pub fn new() -> Self {
        let mut store = TaskStore::default();
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        store.subscribe(move |records: &[TaskRecord]| {
            sink.borrow_mut().push(records.to_vec());
        });
        Self {
            store,
            collector: InputCollector::default(),
            active_list: DropTarget::new(TaskStatus::Active),
            finished_list: DropTarget::new(TaskStatus::Finished),
            notifications,
            last_submission: None,
            last_drop: None,
        }
    }

    /// Returns the drop target for the named list.
    pub fn list_mut(&mut self, list: &str) -> Result<&mut DropTarget, eyre::Report> {
        match TaskStatus::try_from(list) {
            Ok(TaskStatus::Active) => Ok(&mut self.active_list),
            Ok(TaskStatus::Finished) => Ok(&mut self.finished_list),
            Err(err) => Err(eyre::eyre!("unknown list in scenario: {err}")),
        }
    }

    /// Finds a record in the current snapshot by title.
    pub fn find_by_title(&self, title: &str) -> Result<TaskRecord, eyre::Report> {
        self.store
            .snapshot()
            .into_iter()
            .find(|record| record.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
