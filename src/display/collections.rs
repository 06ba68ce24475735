//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::Step;

/// Newtype wrapper for displaying a slice of steps.
///
/// Formats each step using its own Display implementation and handles
/// empty collections gracefully. The wrapper borrows, so it can be built
/// directly over [`Process::steps`](crate::Process::steps) or any subset
/// a host assembles.
///
/// # Examples
///
/// ```rust
/// use waymark::{display::Steps, Step};
///
/// let mut step = Step::new("profile", "Fill out profile");
/// step.start();
/// let steps = vec![step];
///
/// let output = format!("{}", Steps(&steps));
/// assert!(output.contains("Fill out profile"));
/// assert!(output.contains("➤ Started"));
/// ```
pub struct Steps<'a>(pub &'a [Step]);

impl Steps<'_> {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the step at the given index.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.0.get(index)
    }

    /// Get an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }
}

impl Index<usize> for Steps<'_> {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Steps<'a> {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Steps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in self.0 {
                write!(f, "{}", step)?;
            }
            Ok(())
        }
    }
}
