//! Parameter structures for Waypoint operations
//!
//! Shared request types used by every interface (CLI, MCP) without
//! framework-specific derives beyond serde. Interface layers add their own
//! argument parsing and convert into these types:
//!
//! ```text
//! CLI Args (clap) ──┐
//!                   ├──▶ Core Params ──▶ Planner
//! MCP Params (json) ┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature, which the
//! MCP server enables.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Shortest goal accepted for planning, in characters.
pub const MIN_GOAL_CHARS: usize = 5;

/// Longest timeline accepted for planning, in weeks.
pub const MAX_TIMELINE_WEEKS: u32 = 520;

/// Timeline used when none is given.
pub const DEFAULT_TIMELINE_WEEKS: u32 = 8;

fn default_timeline() -> u32 {
    DEFAULT_TIMELINE_WEEKS
}

/// Checks a goal and timeline before planning.
///
/// The goal must have at least [`MIN_GOAL_CHARS`] characters once trimmed,
/// and the timeline must lie in `1..=MAX_TIMELINE_WEEKS`.
pub fn validate_goal(goal: &str, timeline_weeks: u32) -> Result<()> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(PlannerError::invalid_input("goal").with_reason("Please enter a goal to plan"));
    }
    if goal.chars().count() < MIN_GOAL_CHARS {
        return Err(PlannerError::invalid_input("goal").with_reason(format!(
            "Please provide a more detailed goal (min {MIN_GOAL_CHARS} characters)"
        )));
    }
    if timeline_weeks == 0 {
        return Err(PlannerError::invalid_input("timeline_weeks")
            .with_reason("Timeline must be a positive number of weeks"));
    }
    if timeline_weeks > MAX_TIMELINE_WEEKS {
        return Err(PlannerError::invalid_input("timeline_weeks").with_reason(format!(
            "Timeline must be at most {MAX_TIMELINE_WEEKS} weeks"
        )));
    }
    Ok(())
}

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// Free-text description of what should be achieved
    pub goal: String,
    /// Timeline length in weeks (defaults to 8)
    #[serde(default = "default_timeline")]
    pub timeline_weeks: u32,
}

impl GeneratePlan {
    /// Validates and returns the trimmed goal.
    pub fn validated_goal(&self) -> Result<&str> {
        validate_goal(&self.goal, self.timeline_weeks)?;
        Ok(self.goal.trim())
    }
}

/// Parameters for analyzing a goal without building a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AnalyzeGoal {
    /// Free-text description of what should be achieved
    pub goal: String,
    /// Timeline length in weeks (defaults to 8)
    #[serde(default = "default_timeline")]
    pub timeline_weeks: u32,
}

/// Parameters for operations on a stored plan.
///
/// Without an id the most recent plan is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRef {
    /// Id of a stored plan; omit for the last generated plan
    #[serde(default)]
    pub id: Option<u64>,
}

impl PlanRef {
    pub fn last() -> Self {
        Self { id: None }
    }

    pub fn id(id: u64) -> Self {
        Self { id: Some(id) }
    }
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the stored plan
    pub id: u64,
}

/// Parameters for listing stored plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Maximum number of plans to return, newest first
    #[serde(default = "default_list_limit")]
    pub limit: u32,
}

fn default_list_limit() -> u32 {
    20
}

impl Default for ListPlans {
    fn default() -> Self {
        Self {
            limit: default_list_limit(),
        }
    }
}

/// Output format for plan exports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON of the plan
    #[default]
    Json,
    /// Plain-text report
    Text,
    /// Print-styled HTML page
    Html,
}

impl ExportFormat {
    /// File extension conventionally used for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }
}

/// Parameters for exporting a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExportPlan {
    /// Id of a stored plan; omit for the last generated plan
    #[serde(default)]
    pub id: Option<u64>,
    /// Export format (json, text, or html)
    #[serde(default)]
    pub format: ExportFormat,
}
