//! Process model definition and aggregate queries.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Step;
use crate::error::Result;
use crate::export::{self, ExportMode};

/// Represents an ordered collection of steps with a pointer to the
/// currently active one.
///
/// The process owns its steps; step ids are kept unique within the
/// collection by [`add_step`](Process::add_step). All aggregate queries
/// derive from iterating the step sequence, and every operation is
/// synchronous and caller-driven.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Process {
    /// Identifier for the process
    id: String,

    /// Title of the process
    title: String,

    /// Whether the step sequence is semantically ordered. Informational:
    /// the tracker never reorders steps based on it.
    ordered: bool,

    /// Steps in insertion order
    #[serde(default)]
    steps: Vec<Step>,

    /// Index of the current step, when one is set. Always within bounds of
    /// `steps`; insertions before it shift it along with the step it
    /// points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<usize>,
}

impl Process {
    /// Create a new process with an empty step sequence and no current
    /// step.
    pub fn new(id: impl Into<String>, title: impl Into<String>, ordered: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ordered,
            steps: Vec::new(),
            current: None,
        }
    }

    /// Identifier for the process.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label for the process.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the step sequence is semantically ordered.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Steps in insertion order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Add a step to the process and return a reference to the step now in
    /// the sequence, enabling chained construction.
    ///
    /// When no step with the same id is present, the step is inserted at
    /// `position` if that index falls strictly within the current bounds
    /// (shifting subsequent steps right), and appended otherwise — `None`
    /// and out-of-range positions degrade to an append rather than raising
    /// an error. When the id is already present the insertion is skipped
    /// entirely: no duplicate, no reordering.
    ///
    /// Whether or not an insertion happened, the step becomes the current
    /// step if `active` is true or if it is the only step in the sequence
    /// (the first step added to an empty process is always made current).
    pub fn add_step(&mut self, step: Step, position: Option<usize>, active: bool) -> &mut Step {
        let index = match self.steps.iter().position(|existing| existing.id() == step.id()) {
            Some(existing) => {
                debug!(
                    "step '{}' already present in process '{}', skipping insert",
                    step.id(),
                    self.id
                );
                existing
            }
            None => match position {
                Some(pos) if pos < self.steps.len() => {
                    self.steps.insert(pos, step);
                    // Keep the pointer on the step it referred to before
                    // the shift.
                    if let Some(current) = self.current.as_mut() {
                        if *current >= pos {
                            *current += 1;
                        }
                    }
                    pos
                }
                _ => {
                    self.steps.push(step);
                    self.steps.len() - 1
                }
            },
        };

        if active || self.steps.len() == 1 {
            self.current = Some(index);
        }

        &mut self.steps[index]
    }

    /// Look up a step by id, first match in sequence order.
    pub fn get_step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|step| step.id() == id)
    }

    /// Mutable lookup of a step by id.
    pub fn get_step_mut(&mut self, id: &str) -> Option<&mut Step> {
        self.steps.iter_mut().find(|step| step.id() == id)
    }

    /// The step a host should present as active, when one is set.
    ///
    /// The pointer is only moved by [`add_step`](Process::add_step); it is
    /// never advanced by completing a step.
    pub fn current_step(&self) -> Option<&Step> {
        self.current.and_then(|index| self.steps.get(index))
    }

    /// Mutable access to the current step.
    pub fn current_step_mut(&mut self) -> Option<&mut Step> {
        match self.current {
            Some(index) => self.steps.get_mut(index),
            None => None,
        }
    }

    /// Total number of steps in the sequence.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Whether the process holds no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of completed steps.
    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.is_complete()).count()
    }

    /// Number of steps not yet complete.
    pub fn remaining_steps(&self) -> usize {
        self.steps.iter().filter(|step| !step.is_complete()).count()
    }

    /// Whether every step in the process is complete.
    ///
    /// Vacuously true for a process with no steps.
    pub fn all_complete(&self) -> bool {
        self.completed_steps() == self.total_steps()
    }

    /// Whether every id in `ids` names a completed step.
    ///
    /// An empty `ids` returns false unconditionally: an empty requirement
    /// cannot be vacuously satisfied, unlike
    /// [`all_complete`](Process::all_complete). Ids that name an
    /// incomplete step, or no step at all, fail the check the same way.
    pub fn are_complete(&self, ids: &[&str]) -> bool {
        if ids.is_empty() {
            return false;
        }
        let completed: Vec<&str> = self
            .steps
            .iter()
            .filter(|step| step.is_complete())
            .map(Step::id)
            .collect();
        if completed.is_empty() {
            return false;
        }
        ids.iter().all(|id| completed.contains(id))
    }

    /// Completion percentage as a display string, e.g. `"50%"`.
    ///
    /// Rounded to the nearest whole percent. A process with no steps
    /// reports `"0%"`.
    pub fn percent_complete(&self) -> String {
        if self.steps.is_empty() {
            return "0%".to_string();
        }
        let percent = self.completed_steps() as f64 / self.total_steps() as f64 * 100.0;
        format!("{}%", percent.round() as u32)
    }

    /// Fold every step's data bag into a single map.
    ///
    /// Starts from `wrapper` when provided, otherwise an empty map, and
    /// visits steps in sequence order. [`ExportMode::Keyed`] assigns each
    /// step's data under its id; [`ExportMode::Merged`] deep-merges each
    /// step's data into the accumulator with values already present (from
    /// the wrapper or earlier steps) taking precedence.
    pub fn to_object(
        &self,
        wrapper: Option<Map<String, Value>>,
        mode: ExportMode,
    ) -> Map<String, Value> {
        let mut accumulator = wrapper.unwrap_or_default();
        for step in &self.steps {
            match mode {
                ExportMode::Merged => export::merge_defaults(&mut accumulator, step.data()),
                ExportMode::Keyed => {
                    accumulator.insert(step.id().to_string(), Value::Object(step.data().clone()));
                }
            }
        }
        accumulator
    }

    /// Serialize [`to_object`](Process::to_object) to a JSON string.
    ///
    /// Standard JSON encoding, no custom formatting.
    pub fn stringify(&self, wrapper: Option<Map<String, Value>>, mode: ExportMode) -> Result<String> {
        let object = self.to_object(wrapper, mode);
        Ok(serde_json::to_string(&object)?)
    }
}
