//! Alternate views over a plan: timeline, dependency flow, and task details.

use std::fmt;

use super::{datetime::ShortDate, models::task_refs};
use crate::models::{task::weeks_label, Plan, Task};

/// Character width of the rendered timeline bar.
const BAR_WIDTH: usize = 40;

/// One task placed on the plan timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSegment {
    /// 1-based task number
    pub number: usize,
    pub name: String,
    pub duration_weeks: u32,
    /// Offset of the task start from the plan start, in percent of the span
    pub left_percent: f64,
    /// Task length in percent of the span
    pub width_percent: f64,
}

/// Tasks laid out as segments relative to the plan span.
///
/// The span runs from the first task's start to the last task's end. Tasks
/// that start or end outside it (possible with remote plans) get
/// percentages below 0 or above 100; the text bar clamps them.
pub struct TimelineView<'a> {
    plan: &'a Plan,
    segments: Vec<TimelineSegment>,
}

impl<'a> TimelineView<'a> {
    pub fn new(plan: &'a Plan) -> Self {
        let segments = match (plan.tasks.first(), plan.tasks.last()) {
            (Some(first), Some(last)) => {
                let total_days = days_between(first.start_date, last.end_date);
                plan.tasks
                    .iter()
                    .map(|task| TimelineSegment {
                        number: task.number(),
                        name: task.name.clone(),
                        duration_weeks: task.duration_weeks,
                        left_percent: percent(
                            days_between(first.start_date, task.start_date),
                            total_days,
                        ),
                        width_percent: percent(
                            days_between(task.start_date, task.end_date),
                            total_days,
                        ),
                    })
                    .collect()
            }
            _ => Vec::new(),
        };

        Self { plan, segments }
    }

    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }
}

fn days_between(from: jiff::civil::Date, to: jiff::civil::Date) -> i64 {
    i64::from((to - from).get_days())
}

fn percent(days: i64, total_days: i64) -> f64 {
    if total_days <= 0 {
        return 0.0;
    }
    days as f64 / total_days as f64 * 100.0
}

/// Maps a percentage onto a bar column, clamped to the bar.
fn column(percent: f64) -> usize {
    let col = (percent / 100.0 * BAR_WIDTH as f64).round();
    col.clamp(0.0, BAR_WIDTH as f64) as usize
}

impl fmt::Display for TimelineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Timeline")?;
        writeln!(f)?;

        let (Some(first), Some(last)) = (self.plan.tasks.first(), self.plan.tasks.last()) else {
            return writeln!(f, "No timeline data available.");
        };

        writeln!(
            f,
            "{} → {}",
            ShortDate(&first.start_date),
            ShortDate(&last.end_date)
        )?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        let digits = self.segments.len().to_string().len();
        for segment in &self.segments {
            let start = column(segment.left_percent).min(BAR_WIDTH - 1);
            let width = column(segment.width_percent).max(1).min(BAR_WIDTH - start);
            writeln!(
                f,
                "{:>digits$} |{}{}{}| {} ({})",
                segment.number,
                " ".repeat(start),
                "█".repeat(width),
                " ".repeat(BAR_WIDTH - start - width),
                segment.name,
                weeks_label(segment.duration_weeks),
            )?;
        }
        writeln!(f, "```")
    }
}

/// The dependency flow: each task with the tasks it waits on.
pub struct DependencyView<'a>(pub &'a Plan);

impl fmt::Display for DependencyView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dependencies")?;
        writeln!(f)?;

        if self.0.tasks.is_empty() {
            return writeln!(f, "No dependencies to display.");
        }

        for task in &self.0.tasks {
            match task.dependency_numbers() {
                Some(numbers) => writeln!(f, "- Task {} ← {numbers}", task.number())?,
                None => writeln!(f, "- Task {}", task.number())?,
            }
        }
        Ok(())
    }
}

/// Full detail of a single task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetails {
    pub task: Task,
    /// Whether the task lies on the plan's critical path
    pub critical: bool,
    /// Number of tasks in the plan the task belongs to
    pub total_tasks: usize,
}

impl TaskDetails {
    /// Details for the task with 1-based `number`, if the plan has one.
    pub fn from_plan(plan: &Plan, number: usize) -> Option<Self> {
        plan.task(number).map(|task| Self {
            task: task.clone(),
            critical: plan.is_critical(task.id),
            total_tasks: plan.tasks.len(),
        })
    }
}

impl fmt::Display for TaskDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = &self.task;
        writeln!(f, "# {}", task.name)?;
        writeln!(f)?;
        writeln!(f, "Task {} of {}", task.number(), self.total_tasks)?;
        writeln!(f)?;
        writeln!(f, "**Description:** {}", task.description)?;
        writeln!(f)?;
        writeln!(f, "- Phase: {}", task.phase)?;
        writeln!(f, "- Duration: {}", task.duration_label())?;
        writeln!(f, "- Start Date: {}", ShortDate(&task.start_date))?;
        writeln!(f, "- End Date: {}", ShortDate(&task.end_date))?;
        writeln!(f, "- Priority: {}", task.priority.badge())?;
        writeln!(f, "- Status: {}", task.status)?;
        writeln!(f, "- Assigned To: {}", task.assigned_to)?;
        writeln!(f, "- Estimated Hours: {} hours", task.estimated_hours)?;
        if task.dependencies.is_empty() {
            writeln!(f, "- Dependencies: None")?;
        } else {
            writeln!(f, "- Dependencies: {}", task_refs(&task.dependencies))?;
        }
        if self.critical {
            writeln!(f, "- On the critical path")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::generator::{DemoPlanGenerator, FixedClock};

    fn sample_plan(goal: &str, weeks: u32) -> Plan {
        let clock = FixedClock("2024-03-01T09:00:00Z".parse::<Timestamp>().unwrap());
        DemoPlanGenerator::with_clock(clock).generate(goal, weeks)
    }

    #[test]
    fn test_timeline_segments_span_the_plan() {
        let plan = sample_plan("Organize a tech conference", 4);
        let view = TimelineView::new(&plan);
        let segments = view.segments();

        assert_eq!(segments.len(), 6);
        assert_eq!(segments[0].left_percent, 0.0);
        // Six one-week tasks with a gap day between them span 6*7 + 5 days.
        let total = 47.0;
        assert!((segments[1].left_percent - 8.0 / total * 100.0).abs() < 1e-9);
        assert!((segments[0].width_percent - 7.0 / total * 100.0).abs() < 1e-9);
        let last = &segments[5];
        assert!((last.left_percent + last.width_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_display() {
        let plan = sample_plan("Organize a tech conference", 4);
        let output = TimelineView::new(&plan).to_string();

        assert!(output.contains("Mar 1, 2024 → Apr 17, 2024"));
        assert!(output.contains("1 |██████"));
        assert!(output.contains("Launch & Delivery: Task 1 (1 week)"));
        assert_eq!(output.lines().filter(|line| line.contains('|')).count(), 6);
    }

    #[test]
    fn test_timeline_single_task_has_no_gap() {
        let mut plan = sample_plan("Organize a tech conference", 4);
        plan.tasks.truncate(1);
        let view = TimelineView::new(&plan);
        assert_eq!(view.segments()[0].width_percent, 100.0);
    }

    #[test]
    fn test_dependency_view() {
        let plan = sample_plan("Build a mobile app", 12);
        let output = DependencyView(&plan).to_string();

        assert!(output.contains("- Task 1\n"));
        assert!(output.contains("- Task 2\n"));
        assert!(output.contains("- Task 3 ← 2\n"));
        assert!(output.contains("- Task 11 ← 10\n"));
        assert_eq!(output.matches('←').count(), 5);
    }

    #[test]
    fn test_task_details() {
        let plan = sample_plan("Build a mobile app", 8);
        let details = TaskDetails::from_plan(&plan, 3).unwrap();
        let output = details.to_string();

        assert!(output.starts_with("# Planning & Strategy: Task 1\n"));
        assert!(output.contains("Task 3 of 12"));
        assert!(output.contains("- Phase: Planning & Strategy"));
        assert!(output.contains("- Priority: MEDIUM"));
        assert!(output.contains("- Assigned To: Project Manager"));
        assert!(output.contains("- Estimated Hours: 20 hours"));
        assert!(output.contains("- Dependencies: Task 2"));
        assert!(!output.contains("critical path"));

        assert!(TaskDetails::from_plan(&plan, 0).is_none());
        assert!(TaskDetails::from_plan(&plan, 13).is_none());
        assert!(TaskDetails::from_plan(&plan, 1).unwrap().critical);
    }
}
