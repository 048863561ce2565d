//! Command-line argument definitions using clap
//!
//! Arguments are CLI-specific wrappers that convert into the interface-free
//! parameter types from `waypoint_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use waypoint_core::{
    models::{Priority, PriorityFilter},
    params::{
        AnalyzeGoal, ExportFormat, ExportPlan, GeneratePlan, ListPlans, PlanRef,
        DEFAULT_TIMELINE_WEEKS,
    },
    remote::DEFAULT_TIMEOUT,
};

/// Turn a goal and a timeline into a phased project plan
///
/// Waypoint asks a remote planning service for a plan when one is configured
/// and falls back to a built-in generator ("demo mode") otherwise. Every plan
/// is stored locally; the most recent one can be reopened for 24 hours.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the remote planning service
    #[arg(long, global = true, env = "WAYPOINT_API_URL")]
    pub api_url: Option<String>,

    /// Never contact the planning service; always use demo mode
    #[arg(long, global = true)]
    pub offline: bool,

    /// Seconds to wait for the planning service before using demo mode
    #[arg(long, global = true, env = "WAYPOINT_TIMEOUT", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plan for a goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the last plan, or a stored plan by id
    #[command(alias = "s")]
    Show(PlanRefArgs),
    /// List stored plans, newest first
    #[command(alias = "ls")]
    List(ListArgs),
    /// List the tasks of a plan, optionally by priority
    Tasks(TasksArgs),
    /// Show one task in detail
    Task(TaskArgs),
    /// Show a plan as a timeline
    Timeline(PlanRefArgs),
    /// Show the dependency flow of a plan
    Deps(PlanRefArgs),
    /// Export a plan as JSON, text, or HTML
    Export(ExportArgs),
    /// Analyze a goal without generating a plan
    Analyze(AnalyzeArgs),
    /// Check the planning service connection
    Status,
    /// Forget the last generated plan
    Reset,
    /// Start the MCP server
    Serve,
}

/// Generate a plan for a goal
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// What you want to achieve, e.g. "Build a mobile app for fitness tracking"
    pub goal: String,
    /// Timeline length in weeks
    #[arg(short, long, default_value_t = DEFAULT_TIMELINE_WEEKS)]
    pub weeks: u32,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            goal: val.goal,
            timeline_weeks: val.weeks,
        }
    }
}

/// Analyze a goal without generating a plan
#[derive(ClapArgs)]
pub struct AnalyzeArgs {
    /// Goal to analyze
    pub goal: String,
    /// Timeline length in weeks
    #[arg(short, long, default_value_t = DEFAULT_TIMELINE_WEEKS)]
    pub weeks: u32,
}

impl From<AnalyzeArgs> for AnalyzeGoal {
    fn from(val: AnalyzeArgs) -> Self {
        AnalyzeGoal {
            goal: val.goal,
            timeline_weeks: val.weeks,
        }
    }
}

/// Selects a stored plan
#[derive(ClapArgs)]
pub struct PlanRefArgs {
    #[arg(help = "Id of a stored plan; defaults to the last generated plan")]
    pub id: Option<u64>,
}

impl From<PlanRefArgs> for PlanRef {
    fn from(val: PlanRefArgs) -> Self {
        PlanRef { id: val.id }
    }
}

/// List stored plans
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Maximum number of plans to show
    #[arg(short, long, default_value_t = 20)]
    pub limit: u32,
}

impl From<ListArgs> for ListPlans {
    fn from(val: ListArgs) -> Self {
        ListPlans { limit: val.limit }
    }
}

/// List the tasks of a plan
#[derive(ClapArgs)]
pub struct TasksArgs {
    /// Only show tasks with this priority
    #[arg(short, long, value_enum, default_value_t = PriorityArg::All)]
    pub priority: PriorityArg,
    #[arg(help = "Id of a stored plan; defaults to the last generated plan")]
    pub id: Option<u64>,
}

/// Show one task in detail
#[derive(ClapArgs)]
pub struct TaskArgs {
    #[arg(help = "Task number as shown in the plan (starting at 1)")]
    pub number: usize,
    /// Id of a stored plan; defaults to the last generated plan
    #[arg(long)]
    pub plan: Option<u64>,
}

/// Export a plan
#[derive(ClapArgs)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,
    /// Output file; "-" writes to stdout. Defaults to task-plan-YYYY-MM-DD.<ext>
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(help = "Id of a stored plan; defaults to the last generated plan")]
    pub id: Option<u64>,
}

impl ExportArgs {
    pub fn params(&self) -> ExportPlan {
        ExportPlan {
            id: self.id,
            format: self.format.into(),
        }
    }
}

/// Priority filter values accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    All,
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for PriorityFilter {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::All => PriorityFilter::All,
            PriorityArg::High => PriorityFilter::Only(Priority::High),
            PriorityArg::Medium => PriorityFilter::Only(Priority::Medium),
            PriorityArg::Low => PriorityFilter::Only(Priority::Low),
        }
    }
}

/// Export formats accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
    Html,
}

impl From<FormatArg> for ExportFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Text => ExportFormat::Text,
            FormatArg::Html => ExportFormat::Html,
        }
    }
}
