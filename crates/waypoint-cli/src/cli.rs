//! Command handlers for the terminal interface
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! planner, and renders the markdown `Display` output of the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use waypoint_core::{
    display::{DependencyView, OperationStatus, PlanListings, Tasks, TimelineView},
    models::PriorityFilter,
    params::{ExportFormat, ListPlans, PlanRef},
    Clock, Plan, Planner, SystemClock,
};

use crate::{
    args::{
        AnalyzeArgs, Commands, ExportArgs, GenerateArgs, PlanRefArgs, TaskArgs, TasksArgs,
    },
    renderer::TerminalRenderer,
};

/// Terminal front end over a [`Planner`]
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Runs one terminal command. `serve` is handled by the caller.
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Generate(args) => self.generate(args).await,
            Commands::Show(args) => self.show(args).await,
            Commands::List(args) => self.list_plans(args.into()).await,
            Commands::Tasks(args) => self.tasks(args).await,
            Commands::Task(args) => self.task(args).await,
            Commands::Timeline(args) => self.timeline(args).await,
            Commands::Deps(args) => self.deps(args).await,
            Commands::Export(args) => self.export(args).await,
            Commands::Analyze(args) => self.analyze(args),
            Commands::Status => self.status().await,
            Commands::Reset => self.reset().await,
            Commands::Serve => anyhow::bail!("the serve command runs outside the terminal handler"),
        }
    }

    async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let generated = self
            .planner
            .generate_plan(&args.into())
            .await
            .context("Failed to generate plan")?;

        let status = if generated.is_demo() {
            OperationStatus::notice(generated.notice())
        } else {
            OperationStatus::success(generated.notice())
        };
        self.renderer
            .render(&format!("{status}\n{}", generated.record))
    }

    async fn show(&self, args: PlanRefArgs) -> Result<()> {
        let plan = self.resolve(args.into()).await?;
        self.renderer.render(&plan.to_string())
    }

    /// Lists stored plans; also the default action without a command.
    pub async fn list_plans(&self, params: ListPlans) -> Result<()> {
        let listings = self
            .planner
            .list_plans(&params)
            .await
            .context("Failed to list plans")?;

        let listings = PlanListings(listings);
        let output = if listings.is_empty() {
            listings.to_string()
        } else {
            format!("# Stored Plans\n\n{listings}")
        };
        self.renderer.render(&output)
    }

    async fn tasks(&self, args: TasksArgs) -> Result<()> {
        let filter = PriorityFilter::from(args.priority);
        let plan = self.resolve(PlanRef { id: args.id }).await?;
        let tasks = Tasks::filtered(&plan, filter);

        let title = match filter {
            PriorityFilter::All => "Tasks".to_string(),
            PriorityFilter::Only(priority) => format!("{} Priority Tasks", priority.badge()),
        };
        self.renderer
            .render(&format!("# {title} ({})\n\n{tasks}", tasks.len()))
    }

    async fn task(&self, args: TaskArgs) -> Result<()> {
        let details = self
            .planner
            .task_details(&PlanRef { id: args.plan }, args.number)
            .await
            .context("Failed to show task")?;
        self.renderer.render(&details.to_string())
    }

    async fn timeline(&self, args: PlanRefArgs) -> Result<()> {
        let plan = self.resolve(args.into()).await?;
        self.renderer.render(&TimelineView::new(&plan).to_string())
    }

    async fn deps(&self, args: PlanRefArgs) -> Result<()> {
        let plan = self.resolve(args.into()).await?;
        self.renderer.render(&DependencyView(&plan).to_string())
    }

    async fn export(&self, args: ExportArgs) -> Result<()> {
        let params = args.params();
        let content = self
            .planner
            .export_plan(&params)
            .await
            .context("Failed to export plan")?;

        let path = args
            .output
            .unwrap_or_else(|| default_export_path(&SystemClock, params.format));
        if path.as_os_str() == "-" {
            print!("{content}");
            return Ok(());
        }

        debug!("Writing export to {}", path.display());
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.renderer.render(
            &OperationStatus::success(format!("Exported plan to {}", path.display())).to_string(),
        )
    }

    fn analyze(&self, args: AnalyzeArgs) -> Result<()> {
        let analysis = self
            .planner
            .analyze_goal(&args.into())
            .context("Failed to analyze goal")?;
        self.renderer.render(&analysis.to_string())
    }

    async fn status(&self) -> Result<()> {
        let status = self.planner.service_status().await;
        let message = if status.is_connected() {
            OperationStatus::success(status.to_string())
        } else {
            OperationStatus::notice(status.to_string())
        };
        self.renderer.render(&message.to_string())
    }

    async fn reset(&self) -> Result<()> {
        let cleared = self
            .planner
            .clear_last_plan()
            .await
            .context("Failed to reset")?;

        let message = if cleared {
            OperationStatus::success("Cleared the last plan. Stored plans are kept.".to_string())
        } else {
            OperationStatus::notice("There was no recent plan to clear.".to_string())
        };
        self.renderer.render(&message.to_string())
    }

    async fn resolve(&self, plan: PlanRef) -> Result<Plan> {
        self.planner
            .resolve_plan(&plan)
            .await
            .context("Failed to load plan")
    }
}

/// `task-plan-YYYY-MM-DD.<ext>` in the current directory, dated with the
/// UTC day.
fn default_export_path(clock: &dyn Clock, format: ExportFormat) -> PathBuf {
    let today = clock.today();
    PathBuf::from(format!(
        "task-plan-{}.{}",
        today.strftime("%Y-%m-%d"),
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use waypoint_core::FixedClock;

    use super::*;

    #[test]
    fn test_default_export_path() {
        let path = default_export_path(&SystemClock, ExportFormat::Html);
        let name = path.to_str().unwrap();
        assert!(name.starts_with("task-plan-"));
        assert!(name.ends_with(".html"));
        assert_eq!(name.len(), "task-plan-2024-03-01.html".len());
    }

    #[test]
    fn test_default_export_path_uses_utc_day() {
        let clock = FixedClock("2024-03-01T20:00:00-08:00".parse().unwrap());
        let path = default_export_path(&clock, ExportFormat::Json);
        assert_eq!(path, PathBuf::from("task-plan-2024-03-02.json"));
    }
}
