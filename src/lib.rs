//! Core library for the Waymark process tracker.
//!
//! This crate provides an embeddable state tracker for multi-step
//! workflows such as onboarding wizards and checklists: a [`Process`]
//! aggregate over [`Step`] entities with a tri-state lifecycle (pending,
//! started, complete), aggregate completion queries, and JSON export of
//! the step data bags. The host application owns persistence, UI, and the
//! business meaning of step data; the tracker owns only the state.
//!
//! Every operation is synchronous and caller-driven, and the API fails
//! soft: lookups return [`Option`], duplicate insertions are ignored, and
//! out-of-range insert positions degrade to an append. The one fallible
//! operation is [`Process::stringify`].
//!
//! # Quick Start
//!
//! ```rust
//! use waymark::{ExportMode, Process, Step};
//!
//! # fn main() -> waymark::Result<()> {
//! let mut process = Process::new("onboarding", "Account onboarding", true);
//!
//! // Build up the step sequence; the first step becomes current.
//! process.add_step(Step::new("profile", "Fill out profile"), None, false);
//! process.add_step(Step::new("billing", "Add billing details"), None, false);
//!
//! if let Some(step) = process.get_step_mut("profile") {
//!     step.data_mut().insert("name".into(), "Ada".into());
//!     step.complete();
//! }
//!
//! assert_eq!(process.percent_complete(), "50%");
//! assert_eq!(process.current_step().map(Step::id), Some("profile"));
//! assert!(!process.all_complete());
//!
//! // One top-level key per step id.
//! let json = process.stringify(None, ExportMode::Keyed)?;
//! assert!(json.contains(r#""profile":{"name":"Ada"}"#));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod models;

// Re-export commonly used types
pub use display::Steps;
pub use error::{ProcessError, Result};
pub use export::ExportMode;
pub use models::{Process, ProcessSummary, Step, StepStatus};
