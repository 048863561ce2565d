//! Compact plan listing entries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Complexity, Domain, PlanSource};

/// One row of the stored plan list, without the task breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanListing {
    pub id: u64,
    pub goal: String,
    pub domain: Domain,
    pub timeline_weeks: u32,
    pub total_tasks: usize,
    pub complexity: Complexity,
    pub source: PlanSource,
    pub created_at: Timestamp,
}
