//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use waypoint_core::{
    display::{OperationStatus, PlanListings},
    params as core, Planner,
};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// Passes deserialization and the JSON schema straight through to the
/// wrapped core type, so tools accept exactly the core parameter shapes.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type GeneratePlan = McpParams<core::GeneratePlan>;
pub type AnalyzeGoal = McpParams<core::AnalyzeGoal>;
pub type PlanRef = McpParams<core::PlanRef>;
pub type ListPlans = McpParams<core::ListPlans>;
pub type ExportPlan = McpParams<core::ExportPlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {params:?}");

        let generated = self
            .planner
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        let status = if generated.is_demo() {
            OperationStatus::notice(generated.notice())
        } else {
            OperationStatus::success(generated.notice())
        };
        text_result(format!("{status}\n{}", generated.record))
    }

    pub async fn analyze_goal(&self, Parameters(params): Parameters<AnalyzeGoal>) -> McpResult {
        debug!("analyze_goal: {params:?}");

        let analysis = self
            .planner
            .analyze_goal(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to analyze goal", &e))?;

        text_result(analysis.to_string())
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<PlanRef>) -> McpResult {
        debug!("show_plan: {params:?}");

        let plan = self
            .planner
            .resolve_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;

        text_result(plan.to_string())
    }

    pub async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {params:?}");

        let listings = self
            .planner
            .list_plans(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let listings = PlanListings(listings);
        let title = if listings.is_empty() {
            "No stored plans"
        } else {
            "Stored Plans"
        };
        text_result(format!("# {title}\n\n{listings}"))
    }

    pub async fn export_plan(&self, Parameters(params): Parameters<ExportPlan>) -> McpResult {
        debug!("export_plan: {params:?}");

        let content = self
            .planner
            .export_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to export plan", &e))?;

        text_result(content)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use waypoint_core::PlannerBuilder;

    use super::*;

    async fn create_test_handlers() -> (TempDir, McpHandlers) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let planner = PlannerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .offline(true)
            .build()
            .await
            .expect("Failed to create planner");
        (temp_dir, McpHandlers::new(Arc::new(planner)))
    }

    fn params<T: JsonSchema + serde::de::DeserializeOwned>(json: &str) -> Parameters<McpParams<T>> {
        Parameters(serde_json::from_str(json).expect("valid params"))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_generate_then_show() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let generated = handlers
            .generate_plan(params(r#"{"goal": "Organize a tech conference", "timeline_weeks": 4}"#))
            .await
            .unwrap();
        let text = text_of(&generated);
        assert!(text.starts_with("Notice: Plan generated in demo mode"));
        assert!(text.contains("# Organize a tech conference"));

        let shown = handlers.show_plan(params("{}")).await.unwrap();
        assert!(text_of(&shown).contains("- Domain: Event"));
    }

    #[tokio::test]
    async fn test_generate_rejects_short_goal() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let err = handlers
            .generate_plan(params(r#"{"goal": "app"}"#))
            .await
            .unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_list_and_export() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let empty = handlers.list_plans(params("{}")).await.unwrap();
        assert!(text_of(&empty).starts_with("# No stored plans"));

        handlers
            .generate_plan(params(r#"{"goal": "Launch a brand campaign"}"#))
            .await
            .unwrap();

        let listed = handlers.list_plans(params(r#"{"limit": 5}"#)).await.unwrap();
        assert!(text_of(&listed).contains("## Launch a brand campaign (ID: 1)"));

        let exported = handlers
            .export_plan(params(r#"{"id": 1, "format": "text"}"#))
            .await
            .unwrap();
        assert!(text_of(&exported).starts_with("SMART TASK PLAN"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_generate_calls() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let (first, second) = tokio::join!(
            handlers.generate_plan(params(r#"{"goal": "Plan a team offsite"}"#)),
            handlers.generate_plan(params(r#"{"goal": "Write a cookbook"}"#)),
        );
        assert!(first.is_ok());
        assert!(second.is_ok());

        let listed = text_of(&handlers.list_plans(params("{}")).await.unwrap());
        assert!(listed.contains("## Plan a team offsite"));
        assert!(listed.contains("## Write a cookbook"));
    }

    #[tokio::test]
    async fn test_analyze_goal() {
        let (_temp_dir, handlers) = create_test_handlers().await;

        let result = handlers
            .analyze_goal(params(r#"{"goal": "Develop a budgeting website", "timeline_weeks": 13}"#))
            .await
            .unwrap();
        let text = text_of(&result);
        assert!(text.contains("- Domain: Software"));
        assert!(text.contains("- Estimated tasks: 18"));
        assert!(text.contains("- Complexity: High"));
    }
}
