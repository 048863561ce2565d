//! Waypoint CLI Application
//!
//! Command-line interface and MCP server for the waypoint plan generator.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaypointMcpServer};
use renderer::TerminalRenderer;
use waypoint_core::{params::ListPlans, PlannerBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_url,
        offline,
        timeout,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_remote_url(api_url)
        .offline(offline)
        .with_timeout(Duration::from_secs(timeout))
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Commands::Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(command) => Cli::new(planner, renderer).handle_command(command).await,
        None => {
            Cli::new(planner, renderer)
                .list_plans(ListPlans::default())
                .await
        }
    }
}
