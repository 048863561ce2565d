//! High-level planner API.
//!
//! [`Planner`] is the single entry point interfaces use. It validates input,
//! runs the remote-then-local generation pipeline, and persists results:
//!
//! ```text
//! ┌──────────────┐   Err    ┌──────────────────┐
//! │ attempt      │────────▶│ DemoPlanGenerator │
//! │ remote       │          └────────┬─────────┘
//! └──────┬───────┘                   │
//!        │ Ok                        │
//!        ▼                           ▼
//! ┌───────────────────────────────────────────┐
//! │   Database: store plan, mark as last plan │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Generation, retrieval, analysis, and status operations
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use waypoint_core::{PlannerBuilder, params::GeneratePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .offline(true)
//!     .build()
//!     .await?;
//!
//! let generated = planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Build a mobile app for fitness tracking".to_string(),
//!         timeline_weeks: 8,
//!     })
//!     .await?;
//! println!("{}", generated.record.plan);
//! # Ok(())
//! # }
//! ```

use std::{fmt, path::PathBuf, sync::Arc};

use crate::{
    generator::{Clock, DemoPlanGenerator},
    models::{PlanRecord, PlanSource},
    remote::RemotePlanner,
};

pub mod builder;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) remote: Option<RemotePlanner>,
    pub(crate) offline: bool,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) generator: DemoPlanGenerator,
}

impl Planner {
    pub(crate) fn new(
        db_path: PathBuf,
        remote: Option<RemotePlanner>,
        offline: bool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let generator = DemoPlanGenerator::with_shared_clock(clock.clone());
        Self {
            db_path,
            remote,
            offline,
            clock,
            generator,
        }
    }

    /// The remote client to try first, unless running offline.
    pub(crate) fn active_remote(&self) -> Option<&RemotePlanner> {
        if self.offline {
            None
        } else {
            self.remote.as_ref()
        }
    }
}

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    /// The stored plan
    pub record: PlanRecord,
    /// Why the remote service was not used, when it was configured but failed
    pub fallback_reason: Option<String>,
}

impl GeneratedPlan {
    /// Whether the plan came from the local generator.
    pub fn is_demo(&self) -> bool {
        self.record.source == PlanSource::Local
    }

    /// User-facing message describing how the plan was produced.
    pub fn notice(&self) -> String {
        match (&self.record.source, &self.fallback_reason) {
            (PlanSource::Remote, _) => "Plan generated successfully by the planning service".to_string(),
            (PlanSource::Local, Some(reason)) => {
                format!("Using demo mode (planning service unavailable: {reason})")
            }
            (PlanSource::Local, None) => "Plan generated in demo mode".to_string(),
        }
    }
}

/// Reachability of the remote planning service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    /// No service URL is configured
    NotConfigured,
    /// A URL is configured but offline mode is on
    Offline { url: String },
    /// The service answered its health check
    Connected { url: String },
    /// The service did not answer, or answered with an error
    Unreachable { url: String, reason: String },
}

impl ServiceStatus {
    /// Whether a generation request would be sent to the service.
    pub fn is_connected(&self) -> bool {
        matches!(self, ServiceStatus::Connected { .. })
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::NotConfigured => {
                write!(f, "No planning service configured (demo mode)")
            }
            ServiceStatus::Offline { url } => {
                write!(f, "Offline mode, not contacting {url} (demo mode)")
            }
            ServiceStatus::Connected { url } => write!(f, "Planning service connected at {url}"),
            ServiceStatus::Unreachable { url, reason } => {
                write!(f, "Planning service at {url} unreachable: {reason} (demo mode)")
            }
        }
    }
}
