//! Error handling utilities for MCP server

use rmcp::ErrorData;
use waypoint_core::PlannerError;

/// Converts a planner error into an MCP error.
///
/// Problems with the caller's input (bad goal, unknown plan or task) become
/// invalid-params errors; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_invalid_input() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
