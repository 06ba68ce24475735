//! Display implementations for domain models.
//!
//! The implementations provide markdown-formatted output with consistent
//! status icons, suitable for terminal rendering or log capture. Step
//! data bags are opaque to the tracker and are deliberately not printed.

use std::fmt;

use super::collections::Steps;
use crate::models::{Process, ProcessSummary, Step, StepStatus};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id(),
            self.title(),
            self.status().with_icon()
        )?;
        writeln!(f)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id(), self.title())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Ordered: {}", if self.is_ordered() { "yes" } else { "no" })?;
        writeln!(
            f,
            "- Progress: {}/{} ({})",
            self.completed_steps(),
            self.total_steps(),
            self.percent_complete()
        )?;
        if let Some(step) = self.current_step() {
            writeln!(f, "- Current: {}", step.id())?;
        }

        if self.is_empty() {
            writeln!(f, "\nNo steps in this process.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            write!(f, "{}", Steps(self.steps()))?;
        }

        Ok(())
    }
}

impl fmt::Display for ProcessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_steps > 0 {
            format!(" ({}/{})", self.completed_steps, self.total_steps)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        if self.ordered {
            writeln!(f, "- **Ordered**: yes")?;
        }
        writeln!(f, "- **Remaining**: {}", self.remaining_steps)?;
        writeln!(f)?; // Add blank line after each process

        Ok(())
    }
}
