//! Persisted plan envelopes.

use std::str::FromStr;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::Plan;

/// How long the last generated plan stays reloadable.
pub const LAST_PLAN_MAX_AGE: SignedDuration = SignedDuration::from_hours(24);

/// Where a plan came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    /// Returned by the remote planning service
    Remote,
    /// Produced by the local generator (demo mode)
    Local,
}

impl PlanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanSource::Remote => "remote",
            PlanSource::Local => "local",
        }
    }
}

impl FromStr for PlanSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(PlanSource::Remote),
            "local" => Ok(PlanSource::Local),
            _ => Err(format!("Invalid plan source: {s}")),
        }
    }
}

/// A plan stored in the local database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    /// Database identifier
    pub id: u64,

    pub source: PlanSource,

    /// Identifier assigned by the remote service, when there was one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,

    /// When the plan was stored (UTC)
    pub created_at: Timestamp,

    pub plan: Plan,
}

/// The `{plan, timestamp}` envelope kept for the most recent plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlan {
    /// Database identifier of the saved plan
    pub id: u64,

    pub plan: Plan,

    /// When the plan was saved (UTC)
    pub timestamp: Timestamp,
}

impl SavedPlan {
    /// Whether the envelope is still young enough to reload at `now`.
    pub fn is_fresh(&self, now: Timestamp) -> bool {
        now.duration_since(self.timestamp) < LAST_PLAN_MAX_AGE
    }
}
