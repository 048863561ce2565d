//! Data models for plans and tasks.
//!
//! This module contains the domain values produced by plan generation. A
//! [`Plan`] owns its [`Task`]s exclusively; both are plain values that
//! serialize losslessly to JSON. Display implementations live in
//! [`crate::display::models`] to keep presentation out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Domain, Priority};
//!
//! assert_eq!(Domain::classify("Launch a brand campaign"), Domain::Marketing);
//! assert_eq!(Priority::for_phase(0, 6), Priority::High);
//! assert_eq!(Priority::for_phase(3, 6), Priority::Medium);
//! assert_eq!(Priority::for_phase(4, 6), Priority::Low);
//! ```

pub mod analysis;
pub mod domain;
pub mod filters;
pub mod plan;
pub mod saved;
pub mod status;
pub mod summary;
pub mod task;


pub use analysis::GoalAnalysis;
pub use domain::Domain;
pub use filters::PriorityFilter;
pub use plan::Plan;
pub use saved::{PlanRecord, PlanSource, SavedPlan, LAST_PLAN_MAX_AGE};
pub use status::{Complexity, Priority, TaskStatus};
pub use summary::PlanListing;
pub use task::Task;
