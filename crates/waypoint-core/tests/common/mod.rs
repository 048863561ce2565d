#![allow(dead_code)]

use jiff::Timestamp;
use tempfile::TempDir;
use waypoint_core::{FixedClock, Planner, PlannerBuilder};

/// Fixed generation instant shared by the integration tests
pub fn test_now() -> Timestamp {
    "2024-03-01T09:00:00Z".parse().expect("valid timestamp")
}

/// Helper function to create an offline test planner with a fixed clock
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .offline(true)
        .with_clock(FixedClock(test_now()))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
