//! Client for the remote planning service.
//!
//! The service exposes `POST /api/plan` taking `{"goal", "timeline"}` and
//! answering `{"success", "plan_id", "plan"}`, plus `GET /health`. Any
//! failure (connection, timeout, non-success status, undecodable payload, or
//! a plan failing [`Plan::validate`]) surfaces as [`PlannerError::Remote`];
//! the planner treats all of them the same way and falls back to the local
//! generator.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::Plan,
};

/// Default request timeout for the remote service.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct PlanRequest<'a> {
    goal: &'a str,
    timeline: u32,
}

#[derive(Debug, Deserialize)]
struct PlanResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    plan_id: Option<String>,
    plan: Option<Plan>,
    #[serde(default)]
    error: Option<String>,
}

/// A plan returned by the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct RemotePlan {
    /// Identifier the service assigned to the plan
    pub remote_id: Option<String>,
    pub plan: Plan,
}

/// HTTP client for the remote planning service.
#[derive(Debug, Clone)]
pub struct RemotePlanner {
    client: reqwest::Client,
    base_url: String,
}

impl RemotePlanner {
    /// Creates a client for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("waypoint/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| PlannerError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the service to plan `goal` over `timeline_weeks`.
    pub async fn attempt_remote(&self, goal: &str, timeline_weeks: u32) -> Result<RemotePlan> {
        let url = format!("{}/api/plan", self.base_url);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .json(&PlanRequest {
                goal,
                timeline: timeline_weeks,
            })
            .send()
            .await
            .map_err(PlannerError::remote)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::remote(format!(
                "service returned {status}"
            )));
        }

        let body: PlanResponse = response.json().await.map_err(PlannerError::remote)?;
        match body.plan {
            Some(plan) if body.success => {
                plan.validate()
                    .map_err(|reason| PlannerError::remote(format!("malformed plan: {reason}")))?;
                Ok(RemotePlan {
                    remote_id: body.plan_id,
                    plan,
                })
            }
            _ => Err(PlannerError::remote(
                body.error
                    .unwrap_or_else(|| "response did not contain a plan".to_string()),
            )),
        }
    }

    /// Returns whether the service reports itself healthy.
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(PlannerError::remote)?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
pub(crate) mod stub {
    //! Minimal one-shot HTTP server for exercising the client.

    use std::net::SocketAddr;

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Serves `responses` in order, one per connection, and returns the
    /// address to connect to.
    pub async fn serve(responses: Vec<(u16, String)>) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                read_request(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        addr
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let Ok(n) = socket.read(&mut chunk).await else {
                return;
            };
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// An address nothing is listening on.
    pub async fn closed_addr() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REMOTE_PLAN: &str = r#"{
        "success": true,
        "message": "Task plan generated successfully",
        "plan_id": "7",
        "plan": {
            "goal": "Launch a podcast",
            "domain": "general",
            "timeline_weeks": 5,
            "total_tasks": 1,
            "total_phases": 1,
            "start_date": "2024-05-01",
            "end_date": "2024-05-08",
            "total_duration_weeks": 1,
            "tasks": [{
                "id": 0,
                "name": "Research & Analysis: Task 1",
                "description": "Study competitors and market trends",
                "phase": "Research & Analysis",
                "duration_weeks": 1,
                "start_date": "2024-05-01",
                "end_date": "2024-05-08",
                "dependencies": [],
                "priority": "high",
                "status": "pending",
                "assigned_to": "Project Team",
                "estimated_hours": 20
            }],
            "critical_path": [0],
            "phases": ["Research & Analysis"],
            "generated_at": "2024-05-01 10:15:00",
            "complexity": "low"
        }
    }"#;

    #[tokio::test]
    async fn test_attempt_remote_decodes_service_payload() {
        let addr = stub::serve(vec![(200, REMOTE_PLAN.to_string())]).await;
        let remote = RemotePlanner::new(format!("http://{addr}/"), DEFAULT_TIMEOUT).unwrap();

        let result = remote.attempt_remote("Launch a podcast", 5).await.unwrap();
        assert_eq!(result.remote_id.as_deref(), Some("7"));
        assert_eq!(result.plan.goal, "Launch a podcast");
        assert_eq!(result.plan.tasks.len(), 1);
        assert_eq!(
            result.plan.generated_at,
            "2024-05-01T10:15:00Z".parse::<jiff::Timestamp>().unwrap()
        );
    }

    #[tokio::test]
    async fn test_attempt_remote_rejects_error_status() {
        let addr = stub::serve(vec![(
            500,
            r#"{"error": "Failed to generate plan"}"#.to_string(),
        )])
        .await;
        let remote = RemotePlanner::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();

        let err = remote.attempt_remote("Launch a podcast", 5).await.unwrap_err();
        assert!(matches!(err, PlannerError::Remote { .. }));
    }

    #[tokio::test]
    async fn test_attempt_remote_rejects_missing_plan() {
        let addr = stub::serve(vec![(200, r#"{"success": false, "error": "busy"}"#.to_string())])
            .await;
        let remote = RemotePlanner::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();

        let err = remote.attempt_remote("Launch a podcast", 5).await.unwrap_err();
        assert!(err.to_string().contains("busy"));
    }

    #[tokio::test]
    async fn test_attempt_remote_rejects_malformed_plan() {
        let body = REMOTE_PLAN.replace(r#""dependencies": []"#, r#""dependencies": [5]"#);
        let addr = stub::serve(vec![(200, body)]).await;
        let remote = RemotePlanner::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();

        let err = remote.attempt_remote("Launch a podcast", 5).await.unwrap_err();
        assert!(matches!(err, PlannerError::Remote { .. }));
        assert!(err.to_string().contains("does not precede"));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_remote_error() {
        let addr = stub::closed_addr().await;
        let remote = RemotePlanner::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();

        let err = remote.attempt_remote("Launch a podcast", 5).await.unwrap_err();
        assert!(matches!(err, PlannerError::Remote { .. }));
        assert!(remote.health().await.is_err());
    }

    #[tokio::test]
    async fn test_health() {
        let addr = stub::serve(vec![(200, r#"{"status": "healthy"}"#.to_string())]).await;
        let remote = RemotePlanner::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();
        assert!(remote.health().await.unwrap());
    }
}
