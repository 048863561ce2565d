//! Priority, status, and complexity enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task priority, derived from the phase position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Priority for the phase at `phase_index` out of `phase_count` phases.
    ///
    /// The first phase is high, the last two are low, everything between is
    /// medium.
    pub fn for_phase(phase_index: usize, phase_count: usize) -> Self {
        if phase_index == 0 {
            Priority::High
        } else if phase_index + 2 < phase_count {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Upper-case badge text used by the exports.
    pub fn badge(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Task status. Generated tasks are always pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
        }
    }
}

/// Overall plan complexity.
///
/// Serialized capitalized (`Low`, `Medium`, `High`); lower-case spellings
/// are accepted on input since the remote service emits them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Complexity {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
}

impl Complexity {
    /// Rates a plan by goal length in characters and task count.
    ///
    /// ```rust
    /// use waypoint_core::models::Complexity;
    ///
    /// assert_eq!(Complexity::assess("Plan a birthday party", 6), Complexity::Low);
    /// assert_eq!(Complexity::assess("Build a mobile app", 12), Complexity::Medium);
    /// assert_eq!(Complexity::assess("Ship it", 18), Complexity::High);
    /// ```
    pub fn assess(goal: &str, task_count: usize) -> Self {
        let length = goal.chars().count();
        if length > 100 || task_count > 15 {
            Complexity::High
        } else if length > 50 || task_count > 8 {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            _ => Err(format!("Invalid complexity: {s}")),
        }
    }
}
