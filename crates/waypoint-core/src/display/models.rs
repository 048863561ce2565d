//! Display implementations for domain models.
//!
//! All output is markdown, rendered by the CLI through termimad and returned
//! verbatim to MCP clients.

use std::fmt;

use super::datetime::{LocalDateTime, ShortDate};
use crate::models::{
    task::weeks_label, Complexity, Domain, GoalAnalysis, Plan, PlanListing, PlanRecord, PlanSource,
    Priority, Task, TaskStatus,
};

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanSource::Remote => write!(f, "planning service"),
            PlanSource::Local => write!(f, "demo mode"),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;

        writeln!(f, "- Domain: {}", self.domain)?;
        writeln!(f, "- Timeline: {}", weeks_label(self.timeline_weeks))?;
        writeln!(
            f,
            "- Tasks: {} across {} phases",
            self.tasks.len(),
            self.phases.len()
        )?;
        writeln!(f, "- Start: {}", ShortDate(&self.start_date))?;
        writeln!(f, "- End: {}", ShortDate(&self.end_date))?;
        writeln!(f, "- Complexity: {}", self.complexity)?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;

        if self.tasks.is_empty() {
            return writeln!(f, "\nNo tasks in this plan.");
        }

        writeln!(f, "\n## Tasks")?;
        writeln!(f)?;
        for (index, task) in self.tasks.iter().enumerate() {
            task.fmt_card(f, self.is_critical(index))?;
        }

        Ok(())
    }
}

impl Task {
    /// Compact card used both standalone and inside a plan.
    fn fmt_card(&self, f: &mut fmt::Formatter<'_>, critical: bool) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.number(),
            self.name,
            self.priority.badge()
        )?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "- Dates: {} → {}",
            ShortDate(&self.start_date),
            ShortDate(&self.end_date)
        )?;
        writeln!(f, "- Duration: {}", self.duration_label())?;
        writeln!(f, "- Assigned to: {}", self.assigned_to)?;
        if self.dependencies.is_empty() {
            writeln!(f, "- No dependencies")?;
        } else {
            writeln!(f, "- Depends on: {}", task_refs(&self.dependencies))?;
        }
        if critical {
            writeln!(f, "- **Critical path**")?;
        }
        writeln!(f)
    }
}

/// `"Task 1, Task 4"` for 0-based dependency ids.
pub(crate) fn task_refs(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| format!("Task {}", id.saturating_add(1)))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, false)
    }
}

impl fmt::Display for PlanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan ID: {} (from {})", self.id, self.source)?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}

impl fmt::Display for PlanListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.goal, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Domain**: {}", self.domain)?;
        writeln!(
            f,
            "- **Timeline**: {}, {} tasks",
            weeks_label(self.timeline_weeks),
            self.total_tasks
        )?;
        writeln!(f, "- **Complexity**: {}", self.complexity)?;
        writeln!(f, "- **Source**: {}", self.source)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for GoalAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Goal Analysis")?;
        writeln!(f)?;
        writeln!(f, "{}", self.goal)?;
        writeln!(f)?;
        writeln!(f, "- Domain: {}", self.domain)?;
        writeln!(f, "- Words: {}", self.word_count)?;
        writeln!(f, "- Characters: {}", self.character_count)?;
        writeln!(f, "- Timeline: {}", weeks_label(self.timeline_weeks))?;
        writeln!(f, "- Estimated tasks: {}", self.estimated_tasks)?;
        writeln!(f, "- Complexity: {}", self.complexity)
    }
}
