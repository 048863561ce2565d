//! Plan operations for the Planner.

use log::{info, warn};
use tokio::task;

use super::{GeneratedPlan, Planner, ServiceStatus};
use crate::{
    db::Database,
    display::{render_export, TaskDetails},
    error::{join_error, PlannerError, Result},
    generator,
    models::{Complexity, Domain, GoalAnalysis, Plan, PlanListing, PlanRecord, PlanSource, SavedPlan},
    params::{validate_goal, AnalyzeGoal, ExportPlan, GeneratePlan, Id, ListPlans, PlanRef},
};

/// A plan together with where it came from, before it is stored.
struct Outcome {
    plan: Plan,
    source: PlanSource,
    remote_id: Option<String>,
    fallback_reason: Option<String>,
}

impl Planner {
    /// Generates, stores, and returns a plan for the given goal.
    ///
    /// The remote planning service is tried first when one is configured and
    /// the planner is not offline. Any remote failure falls back to the local
    /// generator; only invalid input and storage failures are errors.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<GeneratedPlan> {
        let goal = params.validated_goal()?;
        let weeks = params.timeline_weeks;

        let outcome = match self.active_remote() {
            Some(remote) => match remote.attempt_remote(goal, weeks).await {
                Ok(remote_plan) => Outcome {
                    plan: remote_plan.plan,
                    source: PlanSource::Remote,
                    remote_id: remote_plan.remote_id,
                    fallback_reason: None,
                },
                Err(e) => {
                    warn!("Falling back to demo mode: {e}");
                    self.generate_locally(goal, weeks, Some(e.to_string()))
                }
            },
            None => self.generate_locally(goal, weeks, None),
        };

        let Outcome {
            plan,
            source,
            remote_id,
            fallback_reason,
        } = outcome;

        let db_path = self.db_path.clone();
        let now = self.clock.now();
        let record = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan(&plan, source, remote_id.as_deref(), now)
        })
        .await
        .map_err(join_error)??;

        info!(
            "Stored plan {} ({} tasks, {} source)",
            record.id,
            record.plan.tasks.len(),
            record.source.as_str()
        );

        Ok(GeneratedPlan {
            record,
            fallback_reason,
        })
    }

    fn generate_locally(&self, goal: &str, weeks: u32, fallback_reason: Option<String>) -> Outcome {
        Outcome {
            plan: self.generator.generate(goal, weeks),
            source: PlanSource::Local,
            remote_id: None,
            fallback_reason,
        }
    }

    /// Retrieves a stored plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<PlanRecord>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(id)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists stored plans, newest first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<PlanListing>> {
        let db_path = self.db_path.clone();
        let limit = params.limit;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(limit)
        })
        .await
        .map_err(join_error)?
    }

    /// Returns the last generated plan if it was saved less than 24 hours ago.
    pub async fn last_plan(&self) -> Result<Option<SavedPlan>> {
        let db_path = self.db_path.clone();
        let now = self.clock.now();

        let saved = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.last_plan()
        })
        .await
        .map_err(join_error)??;

        Ok(saved.filter(|saved| saved.is_fresh(now)))
    }

    /// Resolves a plan reference: a stored plan by id, or the last plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown id and
    /// `PlannerError::NoRecentPlan` when no id is given and the last plan is
    /// missing or expired.
    pub async fn resolve_plan(&self, params: &PlanRef) -> Result<Plan> {
        match params.id {
            Some(id) => self
                .get_plan(&Id { id })
                .await?
                .map(|record| record.plan)
                .ok_or(PlannerError::PlanNotFound { id }),
            None => self
                .last_plan()
                .await?
                .map(|saved| saved.plan)
                .ok_or(PlannerError::NoRecentPlan),
        }
    }

    /// Looks up one task of a plan by its 1-based number.
    pub async fn task_details(&self, plan: &PlanRef, number: usize) -> Result<TaskDetails> {
        let plan = self.resolve_plan(plan).await?;
        TaskDetails::from_plan(&plan, number).ok_or(PlannerError::TaskNotFound {
            number,
            total: plan.tasks.len(),
        })
    }

    /// Renders a plan in an export format.
    pub async fn export_plan(&self, params: &ExportPlan) -> Result<String> {
        let plan = self.resolve_plan(&PlanRef { id: params.id }).await?;
        render_export(&plan, params.format)
    }

    /// Forgets the last generated plan. Returns whether one was recorded.
    pub async fn clear_last_plan(&self) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.clear_last_plan()
        })
        .await
        .map_err(join_error)?
    }

    /// Describes what the generator would make of a goal without storing
    /// anything.
    pub fn analyze_goal(&self, params: &AnalyzeGoal) -> Result<GoalAnalysis> {
        validate_goal(&params.goal, params.timeline_weeks)?;
        let goal = params.goal.trim();
        let estimated_tasks = generator::task_count(params.timeline_weeks);

        Ok(GoalAnalysis {
            goal: goal.to_string(),
            domain: Domain::classify(goal),
            word_count: goal.split_whitespace().count(),
            character_count: goal.chars().count(),
            timeline_weeks: params.timeline_weeks,
            estimated_tasks,
            complexity: Complexity::assess(goal, estimated_tasks),
        })
    }

    /// Checks the health of the remote planning service.
    pub async fn service_status(&self) -> ServiceStatus {
        let Some(remote) = self.remote.as_ref() else {
            return ServiceStatus::NotConfigured;
        };
        let url = remote.base_url().to_string();
        if self.offline {
            return ServiceStatus::Offline { url };
        }

        match remote.health().await {
            Ok(true) => ServiceStatus::Connected { url },
            Ok(false) => ServiceStatus::Unreachable {
                url,
                reason: "health check returned an error status".to_string(),
            },
            Err(e) => ServiceStatus::Unreachable {
                url,
                reason: e.to_string(),
            },
        }
    }
}
