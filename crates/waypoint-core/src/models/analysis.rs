//! Lightweight goal analysis without building a plan.

use serde::{Deserialize, Serialize};

use super::{Complexity, Domain};

/// What the generator would make of a goal, computed without scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAnalysis {
    pub goal: String,
    pub domain: Domain,
    pub word_count: usize,
    pub character_count: usize,
    pub timeline_weeks: u32,
    /// Number of tasks a generated plan would contain
    pub estimated_tasks: usize,
    pub complexity: Complexity,
}
