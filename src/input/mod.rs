//! Form input collection.
//!
//! Provides [`InputCollector`], which gathers the three raw form values,
//! checks each against the configured [`InputPolicy`] using the pure
//! [`crate::validation`] predicate, and on success emits a creation
//! request to the task store. A failed submission never partially creates
//! a task; the caller surfaces the [`ValidationFailure`] to the user and
//! leaves the input fields unchanged for correction.

use crate::board::domain::TaskRecord;
use crate::board::store::{CreateTaskRequest, TaskStore};
use crate::validation::{Constraints, FieldValue, validate};
use mockable::Clock;
use thiserror::Error;

/// Field policy applied to task submissions.
///
/// Title and description are always required. Description length bounds
/// are deployment-configurable and unbounded by default; the assignee
/// range defaults to `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    description_min: Option<i64>,
    description_max: Option<i64>,
    assignees_min: i64,
    assignees_max: i64,
}

impl InputPolicy {
    /// Sets an inclusive minimum description length in characters.
    #[must_use]
    pub const fn with_description_min(mut self, min: i64) -> Self {
        self.description_min = Some(min);
        self
    }

    /// Sets an inclusive maximum description length in characters.
    #[must_use]
    pub const fn with_description_max(mut self, max: i64) -> Self {
        self.description_max = Some(max);
        self
    }

    /// Sets the inclusive assignee count range.
    #[must_use]
    pub const fn with_assignee_range(mut self, min: i64, max: i64) -> Self {
        self.assignees_min = min;
        self.assignees_max = max;
        self
    }

    /// Returns the inclusive assignee lower bound.
    #[must_use]
    pub const fn assignees_min(&self) -> i64 {
        self.assignees_min
    }

    /// Returns the inclusive assignee upper bound.
    #[must_use]
    pub const fn assignees_max(&self) -> i64 {
        self.assignees_max
    }
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            description_min: None,
            description_max: None,
            assignees_min: 1,
            assignees_max: 5,
        }
    }
}

/// Recoverable, user-correctable submission failure.
///
/// Never reaches the task store: the collector rejects the submission
/// before any record is created.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The description is empty after trimming or violates the configured
    /// length bounds.
    #[error("description must not be empty and must satisfy the configured length bounds")]
    InvalidDescription,

    /// The assignee field does not hold a whole number.
    #[error("assignees must be a whole number, got '{0}'")]
    NonNumericAssignees(String),

    /// The assignee count lies outside the configured range.
    #[error("assignees must be between {min} and {max}")]
    AssigneesOutOfRange {
        /// Inclusive lower bound from the policy.
        min: i64,
        /// Inclusive upper bound from the policy.
        max: i64,
    },
}

/// Gathers raw form values into validated creation requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCollector {
    policy: InputPolicy,
}

impl InputCollector {
    /// Creates a collector with the given field policy.
    #[must_use]
    pub const fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }

    /// Returns the configured field policy.
    #[must_use]
    pub const fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    /// Validates and normalizes the three raw form values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] naming the first offending field.
    /// No task is ever partially created on failure.
    pub fn collect(
        &self,
        raw_title: &str,
        raw_description: &str,
        raw_assignees: &str,
    ) -> Result<CreateTaskRequest, ValidationFailure> {
        let title = FieldValue::Text(raw_title.to_owned());
        if !validate(&title, &Constraints::required()) {
            return Err(ValidationFailure::EmptyTitle);
        }

        let description = FieldValue::Text(raw_description.to_owned());
        let description_constraints = Constraints {
            required: true,
            min: self.policy.description_min,
            max: self.policy.description_max,
        };
        if !validate(&description, &description_constraints) {
            return Err(ValidationFailure::InvalidDescription);
        }

        let assignees: i64 = raw_assignees
            .trim()
            .parse()
            .map_err(|_| ValidationFailure::NonNumericAssignees(raw_assignees.to_owned()))?;
        let assignee_constraints = Constraints::required()
            .with_min(self.policy.assignees_min)
            .with_max(self.policy.assignees_max);
        if !validate(&FieldValue::Number(assignees), &assignee_constraints) {
            return Err(self.assignees_out_of_range());
        }
        let assignee_count = u32::try_from(assignees).map_err(|_| self.assignees_out_of_range())?;

        Ok(CreateTaskRequest::new(
            raw_title,
            raw_description,
            assignee_count,
        ))
    }

    /// Validates the raw form values and, on success, creates the task.
    ///
    /// The caller clears its input fields on `Ok` and leaves them
    /// unchanged on `Err` so the user can correct and resubmit.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationFailure`] from [`Self::collect`]; the
    /// store is not touched.
    pub fn submit<C>(
        &self,
        store: &mut TaskStore<C>,
        raw_title: &str,
        raw_description: &str,
        raw_assignees: &str,
    ) -> Result<TaskRecord, ValidationFailure>
    where
        C: Clock,
    {
        let request = self.collect(raw_title, raw_description, raw_assignees)?;
        Ok(store.create(request))
    }

    const fn assignees_out_of_range(&self) -> ValidationFailure {
        ValidationFailure::AssigneesOutOfRange {
            min: self.policy.assignees_min,
            max: self.policy.assignees_max,
        }
    }
}
