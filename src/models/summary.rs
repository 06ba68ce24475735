//! Process summary type and functionality.

use serde::{Deserialize, Serialize};

use super::Process;

/// Summary information about a process with step statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessSummary {
    /// Process ID
    pub id: String,
    /// Title of the process
    pub title: String,
    /// Whether the step sequence is semantically ordered
    pub ordered: bool,
    /// Total number of steps
    pub total_steps: usize,
    /// Number of completed steps
    pub completed_steps: usize,
    /// Number of steps not yet complete
    pub remaining_steps: usize,
}

impl From<&Process> for ProcessSummary {
    fn from(process: &Process) -> Self {
        let total_steps = process.total_steps();
        let completed_steps = process.completed_steps();

        Self {
            id: process.id().to_string(),
            title: process.title().to_string(),
            ordered: process.is_ordered(),
            total_steps,
            completed_steps,
            remaining_steps: total_steps - completed_steps,
        }
    }
}
