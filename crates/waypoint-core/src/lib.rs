//! Core library for the Waypoint goal planner.
//!
//! Waypoint turns a free-text goal and a timeline in weeks into a phased
//! task plan. Plans come from a remote planning service when one is
//! configured and reachable, and from the deterministic local generator
//! ("demo mode") otherwise. Every plan is stored in SQLite; the most recent
//! one can be reloaded for 24 hours.
//!
//! # Crate Layout
//!
//! - [`generator`]: The local plan generator and its clock
//! - [`catalog`]: Phase names, description templates, and resource roles
//! - [`remote`]: HTTP client for the remote planning service
//! - [`planner`]: The [`Planner`] facade tying generation and storage together
//! - [`display`]: Markdown views and text, HTML, and JSON exports
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{PlannerBuilder, display::TextExport, params::GeneratePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .with_remote_url(std::env::var("WAYPOINT_API_URL").ok())
//!     .build()
//!     .await?;
//!
//! let generated = planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Launch a marketing campaign for a coffee brand".to_string(),
//!         timeline_weeks: 6,
//!     })
//!     .await?;
//! println!("{}", generated.notice());
//! println!("{}", TextExport(&generated.record.plan));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod remote;

// Re-export commonly used types
pub use db::Database;
pub use display::{OperationStatus, PlanListings, Tasks};
pub use error::{PlannerError, Result};
pub use generator::{Clock, DemoPlanGenerator, FixedClock, SystemClock};
pub use models::{
    Complexity, Domain, GoalAnalysis, Plan, PlanListing, PlanRecord, PlanSource, Priority,
    PriorityFilter, SavedPlan, Task, TaskStatus,
};
pub use params::{AnalyzeGoal, ExportFormat, ExportPlan, GeneratePlan, Id, ListPlans, PlanRef};
pub use planner::{GeneratedPlan, Planner, PlannerBuilder, ServiceStatus};
