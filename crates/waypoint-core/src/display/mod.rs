//! Display formatting for plans, tasks, and exports.
//!
//! Domain models implement [`std::fmt::Display`] directly and produce
//! markdown for the terminal and MCP clients. Views over a plan (timeline,
//! dependencies, a filtered task list) and the file exports are newtype
//! wrappers that borrow the plan:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Exports │    │   Formatted     │
//! │  (Plan, Task)   │───▶│ (borrowing)     │───▶│    Output       │
//! │                 │    │                 │    │ (Terminal/File) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (PlanListings, Tasks)
//! - [`views`]: Plan views (TimelineView, DependencyView, TaskDetails)
//! - [`export`]: File exports (TextExport, HtmlExport, JsonExport)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use waypoint_core::{
//!     display::{TextExport, TimelineView},
//!     generator::{DemoPlanGenerator, FixedClock},
//! };
//!
//! let clock = FixedClock("2024-03-01T09:00:00Z".parse::<Timestamp>().unwrap());
//! let plan = DemoPlanGenerator::with_clock(clock).generate("Organize a tech conference", 4);
//!
//! let text = TextExport(&plan).to_string();
//! assert!(text.starts_with("SMART TASK PLAN\n"));
//! assert!(text.contains("Assigned to: Event Coordinator"));
//!
//! let timeline = TimelineView::new(&plan);
//! assert_eq!(timeline.segments().len(), plan.tasks.len());
//! ```

pub mod collections;
pub mod datetime;
pub mod export;
pub mod models;
pub mod status;
pub mod views;

pub use collections::{PlanListings, Tasks};
pub use datetime::{LocalDateTime, ShortDate};
pub use export::{render_export, HtmlExport, JsonExport, TextExport};
pub use status::{OperationStatus, StatusKind};
pub use views::{DependencyView, TaskDetails, TimelineSegment, TimelineView};
