//! Subscriber port for store change notifications.

use crate::board::domain::TaskRecord;

/// Consumer of store snapshots.
///
/// A subscriber is registered once and lives as long as the view that owns
/// it; there is no unregistration. After every observable store mutation it
/// receives exactly one full, ordered snapshot of all records, delivered
/// synchronously and in registration order before the mutating call
/// returns. Registration does not replay the current snapshot: the first
/// delivery happens on the next mutation.
pub trait Subscriber {
    /// Receives an ordered snapshot of every record in the store.
    fn on_snapshot(&mut self, records: &[TaskRecord]);
}

impl<F> Subscriber for F
where
    F: FnMut(&[TaskRecord]),
{
    fn on_snapshot(&mut self, records: &[TaskRecord]) {
        self(records);
    }
}
