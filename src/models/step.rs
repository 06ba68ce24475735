//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::StepStatus;

/// Represents an individual unit of work within a process.
///
/// A step carries a tri-state lifecycle (pending, started, complete) and
/// an opaque key/value data bag owned by the host. The lifecycle flags
/// only move through [`start`](Step::start), [`complete`](Step::complete)
/// and [`reopen`](Step::reopen); completing a step always marks it started
/// as well, so completion never produces a step that was never begun.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier within the owning process
    id: String,

    /// Brief title/summary of the step
    title: String,

    /// Whether work on the step has begun
    started: bool,

    /// Whether the step has been completed
    completed: bool,

    /// Host-owned payload, never interpreted by the tracker
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
}

impl Step {
    /// Create a new step with both lifecycle flags cleared and an empty
    /// data bag.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            started: false,
            completed: false,
            data: Map::new(),
        }
    }

    /// Unique identifier within the owning process.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label for the step.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether work on the step has begun.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the step has been completed.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Mark the step as started. Idempotent.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Mark the step as complete. Idempotent.
    ///
    /// Also sets the started flag, so a completed step always reports it
    /// was started.
    pub fn complete(&mut self) {
        self.started = true;
        self.completed = true;
    }

    /// Clear the completion flag, leaving the started flag untouched.
    ///
    /// Reopening a previously completed step yields the "started but not
    /// complete" state.
    pub fn reopen(&mut self) {
        self.completed = false;
    }

    /// Current status derived from the lifecycle flags.
    ///
    /// Completion takes priority over having been started.
    pub fn status(&self) -> StepStatus {
        if self.completed {
            StepStatus::Complete
        } else if self.started {
            StepStatus::Started
        } else {
            StepStatus::Pending
        }
    }

    /// The step's data bag.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Mutable access to the step's data bag.
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }
}
