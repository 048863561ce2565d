//! Deterministic demo-plan generation.
//!
//! [`DemoPlanGenerator`] expands a goal and a timeline into a fixed
//! six-phase template. It is the fallback used when the remote planning
//! service is unavailable, and it is total: every goal string and every
//! timeline produces a plan.
//!
//! # Algorithm
//!
//! - The goal is classified into a [`Domain`] by keyword.
//! - Every phase gets `max(1, ceil(weeks / 6))` tasks. The count is computed
//!   from the full timeline for each phase, so the total amount of scheduled
//!   work usually exceeds the requested timeline.
//! - Each task lasts `max(1, ceil(weeks / 6 / tasks_in_phase))` weeks.
//! - Tasks run back to back from the generation date, each starting the day
//!   after the previous one ends.
//! - Only the first task of every phase after the first depends on its
//!   predecessor.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use waypoint_core::generator::{DemoPlanGenerator, FixedClock};
//! use waypoint_core::models::{Complexity, Domain};
//!
//! let clock = FixedClock("2024-03-01T09:00:00Z".parse::<Timestamp>().unwrap());
//! let plan = DemoPlanGenerator::with_clock(clock)
//!     .generate("Build a mobile app for fitness tracking", 8);
//!
//! assert_eq!(plan.domain, Domain::Software);
//! assert_eq!(plan.tasks.len(), 12);
//! assert_eq!(plan.critical_path, vec![0, 6, 11]);
//! assert_eq!(plan.complexity, Complexity::Medium);
//! ```

use std::sync::Arc;

use jiff::{civil::Date, tz::TimeZone, Span};
use log::debug;

use crate::{
    catalog::{self, PHASES},
    models::{Complexity, Domain, Plan, Priority, Task, TaskStatus},
};

mod clock;


pub use clock::{Clock, FixedClock, SystemClock};

/// Estimated effort per week of task duration.
pub const HOURS_PER_WEEK: u32 = 20;

/// Number of tasks generated for each phase of a `timeline_weeks` plan.
pub fn tasks_per_phase(timeline_weeks: u32) -> usize {
    timeline_weeks.div_ceil(PHASES.len() as u32).max(1) as usize
}

/// Total number of tasks a `timeline_weeks` plan contains.
pub fn task_count(timeline_weeks: u32) -> usize {
    PHASES.len() * tasks_per_phase(timeline_weeks)
}

/// Duration in weeks of every task when a phase holds `tasks_in_phase` tasks.
fn task_duration(timeline_weeks: u32, tasks_in_phase: usize) -> u32 {
    let divisor = PHASES.len() as u64 * tasks_in_phase as u64;
    u64::from(timeline_weeks).div_ceil(divisor).max(1) as u32
}

/// Heuristic critical path: first, middle (for more than three tasks), last.
pub fn critical_path(task_count: usize) -> Vec<usize> {
    let mut path = Vec::with_capacity(3);
    if task_count > 0 {
        path.push(0);
        if task_count > 3 {
            path.push(task_count / 2);
        }
        path.push(task_count - 1);
    }
    path
}

fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(Span::new().days(days))
}

/// Generates plans from the fixed phase template.
#[derive(Debug, Clone)]
pub struct DemoPlanGenerator {
    clock: Arc<dyn Clock>,
}

impl DemoPlanGenerator {
    /// Creates a generator that reads the system clock.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a generator with an explicit time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Creates a generator sharing an existing time source.
    pub fn with_shared_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Builds a plan for `goal` spread over `timeline_weeks`.
    pub fn generate(&self, goal: &str, timeline_weeks: u32) -> Plan {
        let generated_at = self.clock.now();
        let start_date = generated_at.to_zoned(TimeZone::UTC).date();
        let domain = Domain::classify(goal);

        let tasks_in_phase = tasks_per_phase(timeline_weeks);
        let duration = task_duration(timeline_weeks, tasks_in_phase);
        let mut tasks = Vec::with_capacity(PHASES.len() * tasks_in_phase);
        let mut cursor = start_date;

        for (phase_index, phase) in PHASES.iter().enumerate() {
            let priority = Priority::for_phase(phase_index, PHASES.len());
            let assigned_to = catalog::assign_resource(domain, phase);

            for task_index in 0..tasks_in_phase {
                let id = tasks.len();
                let task_number = task_index + 1;
                let end_date = add_days(cursor, i64::from(duration) * 7);

                let dependencies = if phase_index > 0 && task_index == 0 {
                    vec![id - 1]
                } else {
                    Vec::new()
                };

                tasks.push(Task {
                    id,
                    name: format!("{phase}: Task {task_number}"),
                    description: catalog::describe(domain, phase, task_number, goal),
                    phase: (*phase).to_string(),
                    duration_weeks: duration,
                    start_date: cursor,
                    end_date,
                    dependencies,
                    priority,
                    status: TaskStatus::Pending,
                    assigned_to: assigned_to.to_string(),
                    estimated_hours: duration.saturating_mul(HOURS_PER_WEEK),
                });

                cursor = add_days(end_date, 1);
            }
        }

        let end_date = tasks.last().map_or(start_date, |task| task.end_date);
        let total_duration_weeks = tasks
            .iter()
            .fold(0u32, |sum, task| sum.saturating_add(task.duration_weeks));

        debug!(
            "Generated {} tasks for {} goal over {timeline_weeks} weeks",
            tasks.len(),
            domain.as_str()
        );

        Plan {
            goal: goal.to_string(),
            domain,
            timeline_weeks,
            total_tasks: tasks.len(),
            total_phases: PHASES.len(),
            start_date,
            end_date,
            total_duration_weeks,
            critical_path: critical_path(tasks.len()),
            complexity: Complexity::assess(goal, tasks.len()),
            phases: PHASES.iter().map(|phase| (*phase).to_string()).collect(),
            tasks,
            generated_at,
        }
    }
}

impl Default for DemoPlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}
