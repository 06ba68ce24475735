//! Status enumeration for steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step statuses.
///
/// A step's status is derived from its two lifecycle flags; the variants
/// are mutually exclusive, with completion taking priority over having
/// been started.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step has not been started yet
    #[default]
    Pending,

    /// Step is being worked on
    Started,

    /// Step has been completed
    Complete,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(StepStatus::Pending),
            "started" => Ok(StepStatus::Started),
            "complete" => Ok(StepStatus::Complete),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to the canonical label hosts use when persisting status
    /// text.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Started => "started",
            StepStatus::Complete => "complete",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the
    /// status name, for consistent visual representation across display
    /// contexts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use waymark::StepStatus;
    ///
    /// assert_eq!(StepStatus::Complete.with_icon(), "✓ Complete");
    /// assert_eq!(StepStatus::Started.with_icon(), "➤ Started");
    /// assert_eq!(StepStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Complete => "✓ Complete",
            StepStatus::Started => "➤ Started",
            StepStatus::Pending => "○ Pending",
        }
    }
}
