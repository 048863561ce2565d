//! Task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus};

/// `"1 week"` or `"N weeks"`.
pub fn weeks_label(count: u32) -> String {
    if count == 1 {
        "1 week".to_string()
    } else {
        format!("{count} weeks")
    }
}

/// A single scheduled unit of work within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Position of the task in the plan (0-indexed)
    pub id: usize,

    /// Display name, `"{phase}: Task {n}"`
    pub name: String,

    pub description: String,

    /// Name of the phase this task belongs to
    pub phase: String,

    pub duration_weeks: u32,

    pub start_date: Date,

    /// Always `start_date + duration_weeks * 7` days
    pub end_date: Date,

    /// Ids of earlier tasks this one waits on
    #[serde(default)]
    pub dependencies: Vec<usize>,

    pub priority: Priority,

    #[serde(default)]
    pub status: TaskStatus,

    pub assigned_to: String,

    pub estimated_hours: u32,
}

impl Task {
    /// 1-based number used in every human-facing rendering.
    pub fn number(&self) -> usize {
        self.id.saturating_add(1)
    }

    /// `"1 week"` or `"3 weeks"`.
    pub fn duration_label(&self) -> String {
        weeks_label(self.duration_weeks)
    }

    /// Dependencies as 1-based task numbers joined with `", "`, or `None`
    /// when the task has no dependencies.
    pub fn dependency_numbers(&self) -> Option<String> {
        if self.dependencies.is_empty() {
            return None;
        }
        Some(
            self.dependencies
                .iter()
                .map(|dep| dep.saturating_add(1).to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}
