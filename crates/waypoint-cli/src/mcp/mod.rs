//! MCP server implementation for Waypoint
//!
//! Exposes plan generation, goal analysis and stored plan access as Model
//! Context Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use waypoint_core::Planner;

pub mod errors;
pub mod handlers;

pub use handlers::{AnalyzeGoal, ExportPlan, GeneratePlan, ListPlans, McpResult, PlanRef};

const INSTRUCTIONS: &str = r#"Waypoint turns a goal and a timeline into a phased project plan.

## Core Concepts
- **Plans**: A goal split into six phases (Research & Analysis through Launch & Delivery) with one-week tasks, priorities, dependencies and a critical path
- **Demo mode**: When no planning service is reachable, plans come from the built-in generator

## Workflow
1. Use `analyze_goal` to preview the domain, task count and complexity of a goal
2. Create a plan with `generate_plan` (goal of at least 5 characters, timeline in weeks)
3. Review it with `show_plan`; omit the id to get the plan generated in the last 24 hours
4. Find earlier plans with `list_plans` and export them with `export_plan` (json, text or html)"#;

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a phased project plan for a goal. Requires goal (at least 5 characters); timeline_weeks defaults to 8. Uses the planning service when available and the built-in generator otherwise. The plan is stored and becomes the last plan."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "analyze_goal",
        description = "Analyze a goal without generating a plan. Returns the detected domain (Software, Marketing, Event or General), word and character counts, the number of tasks a plan would have, and its complexity."
    )]
    async fn analyze_goal(&self, params: Parameters<AnalyzeGoal>) -> McpResult {
        self.handlers().analyze_goal(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a plan with all its tasks, dates, priorities, dependencies and critical path markers. Pass the id of a stored plan, or omit it for the plan generated in the last 24 hours."
    )]
    async fn show_plan(&self, params: Parameters<PlanRef>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List stored plans, newest first, with their ids, domains, timelines and sources. Use limit to cap the number of results (default 20)."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_plans(params).await
    }

    #[tool(
        name = "export_plan",
        description = "Export a plan as json (default), text or html and return the document. Pass the id of a stored plan, or omit it for the last plan."
    )]
    async fn export_plan(&self, params: Parameters<ExportPlan>) -> McpResult {
        self.handlers().export_plan(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
