//! Plan model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Complexity, Domain, Task};

/// A complete generated plan.
///
/// Built atomically by one generation call and never mutated afterwards.
/// The JSON form uses the same snake_case field names as the remote planning
/// service, so plans from either source are interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// The goal text, verbatim
    pub goal: String,

    pub domain: Domain,

    /// Requested timeline, verbatim
    pub timeline_weeks: u32,

    #[serde(default)]
    pub total_tasks: usize,

    #[serde(default)]
    pub total_phases: usize,

    /// Plan start (the generation date)
    pub start_date: Date,

    /// End of the last task
    pub end_date: Date,

    /// Sum of all task durations
    #[serde(default)]
    pub total_duration_weeks: u32,

    pub tasks: Vec<Task>,

    /// Indices of the schedule-driving tasks
    #[serde(default)]
    pub critical_path: Vec<usize>,

    pub phases: Vec<String>,

    #[serde(with = "generated_at")]
    pub generated_at: Timestamp,

    pub complexity: Complexity,
}

impl Plan {
    /// Returns the task with the given 1-based number.
    pub fn task(&self, number: usize) -> Option<&Task> {
        number.checked_sub(1).and_then(|index| self.tasks.get(index))
    }

    /// Whether the task at `index` lies on the critical path.
    pub fn is_critical(&self, index: usize) -> bool {
        self.critical_path.contains(&index)
    }

    /// Checks the structural invariants every rendering relies on.
    ///
    /// A plan needs at least one task; task ids must equal their positions;
    /// dependencies must point at earlier tasks; no task may end before it
    /// starts; critical path entries must name existing tasks.
    pub fn validate(&self) -> Result<(), String> {
        if self.tasks.is_empty() {
            return Err("plan has no tasks".to_string());
        }

        for (index, task) in self.tasks.iter().enumerate() {
            if task.id != index {
                return Err(format!("task at position {index} has id {}", task.id));
            }
            if let Some(dep) = task.dependencies.iter().find(|&&dep| dep >= index) {
                return Err(format!(
                    "task {index} depends on task {dep}, which does not precede it"
                ));
            }
            if task.end_date < task.start_date {
                return Err(format!("task {index} ends before it starts"));
            }
        }

        if let Some(index) = self
            .critical_path
            .iter()
            .find(|&&index| index >= self.tasks.len())
        {
            return Err(format!("critical path names unknown task {index}"));
        }

        Ok(())
    }
}

/// `generated_at` is written as RFC 3339. On input it also accepts the
/// `YYYY-MM-DD HH:MM:SS` form (read as UTC) that the remote service emits.
mod generated_at {
    use jiff::{fmt::strtime, tz::TimeZone, Timestamp};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const REMOTE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(ts) = raw.parse::<Timestamp>() {
            return Ok(ts);
        }
        strtime::parse(REMOTE_FORMAT, &raw)
            .and_then(|tm| tm.to_datetime())
            .and_then(|dt| dt.to_zoned(TimeZone::UTC))
            .map(|zoned| zoned.timestamp())
            .map_err(D::Error::custom)
    }
}
