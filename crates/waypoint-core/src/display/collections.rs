//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Plan, PlanListing, PriorityFilter, Task};

/// Newtype wrapper for displaying stored plan listings.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use waypoint_core::{
///     display::PlanListings,
///     models::{Complexity, Domain, PlanListing, PlanSource},
/// };
///
/// let listing = PlanListing {
///     id: 1,
///     goal: "Organize a tech conference".to_string(),
///     domain: Domain::Event,
///     timeline_weeks: 6,
///     total_tasks: 6,
///     complexity: Complexity::Low,
///     source: PlanSource::Local,
///     created_at: Timestamp::now(),
/// };
///
/// let output = PlanListings(vec![listing]).to_string();
/// assert!(output.contains("Organize a tech conference (ID: 1)"));
/// ```
pub struct PlanListings(pub Vec<PlanListing>);

impl PlanListings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlanListings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for listing in &self.0 {
                write!(f, "{listing}")?;
            }
            Ok(())
        }
    }
}

/// Borrowed task list, usually a plan's tasks narrowed by priority.
pub struct Tasks<'a>(pub Vec<&'a Task>);

impl<'a> Tasks<'a> {
    /// The tasks of `plan` that pass `filter`, in plan order.
    pub fn filtered(plan: &'a Plan, filter: PriorityFilter) -> Self {
        Self(filter.apply(&plan.tasks))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{
        generator::{DemoPlanGenerator, FixedClock},
        models::{Complexity, Domain, PlanSource, Priority},
    };

    fn create_test_listing(id: u64, goal: &str) -> PlanListing {
        PlanListing {
            id,
            goal: goal.to_string(),
            domain: Domain::Software,
            timeline_weeks: 8,
            total_tasks: 12,
            complexity: Complexity::Medium,
            source: PlanSource::Remote,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    #[test]
    fn test_plan_listings_display() {
        let listings = PlanListings(vec![
            create_test_listing(1, "Build a website"),
            create_test_listing(2, "Develop an API"),
        ]);
        let output = listings.to_string();

        assert!(output.contains("## Build a website (ID: 1)"));
        assert!(output.contains("## Develop an API (ID: 2)"));
        assert!(output.contains("- **Timeline**: 8 weeks, 12 tasks"));
        assert!(output.contains("- **Source**: planning service"));
        assert!(!output.starts_with("# "));

        let empty = PlanListings(vec![]);
        assert_eq!(empty.to_string(), "No plans found.\n");
    }

    #[test]
    fn test_tasks_filtered_by_priority() {
        let clock = FixedClock("2024-03-01T00:00:00Z".parse::<Timestamp>().unwrap());
        let plan = DemoPlanGenerator::with_clock(clock).generate("Organize a charity run", 12);

        let high = Tasks::filtered(&plan, PriorityFilter::Only(Priority::High));
        assert_eq!(high.len(), 2);
        assert!(high.0.iter().all(|task| task.priority == Priority::High));

        let all = Tasks::filtered(&plan, PriorityFilter::All);
        assert_eq!(all.len(), plan.tasks.len());

        let output = high.to_string();
        assert!(output.contains("### 1. Research & Analysis: Task 1 (HIGH)"));
        assert!(!output.contains("(MEDIUM)"));
    }

    #[test]
    fn test_tasks_display_empty() {
        assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
    }
}
