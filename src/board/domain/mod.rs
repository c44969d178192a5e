//! Domain model for board tasks.
//!
//! The task domain models the records shown on the board: identity,
//! descriptive fields, and lifecycle status. All infrastructure concerns
//! are kept outside the domain boundary.

mod error;
mod ids;
mod record;
mod status;

pub use error::ParseTaskStatusError;
pub use ids::TaskId;
pub use record::TaskRecord;
pub use status::TaskStatus;
