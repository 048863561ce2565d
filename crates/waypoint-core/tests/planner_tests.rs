use waypoint_core::{
    display::{DependencyView, HtmlExport, TextExport, TimelineView},
    ExportFormat, ExportPlan, GeneratePlan, ListPlans, PlanRef, PlanSource, PlannerBuilder,
    PlannerError, PriorityFilter, Priority, Tasks,
};

mod common;

use common::create_test_planner;

#[tokio::test]
async fn test_complete_plan_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    let generated = planner
        .generate_plan(&GeneratePlan {
            goal: "Build a mobile app for fitness tracking".to_string(),
            timeline_weeks: 8,
        })
        .await
        .expect("Failed to generate plan");
    assert_eq!(generated.record.source, PlanSource::Local);

    // Reload through the last-plan slot
    let plan = planner
        .resolve_plan(&PlanRef::last())
        .await
        .expect("Failed to reload plan");
    assert_eq!(plan, generated.record.plan);

    // Views over the reloaded plan
    let high = Tasks::filtered(&plan, PriorityFilter::Only(Priority::High));
    assert_eq!(high.len(), 2);
    assert_eq!(TimelineView::new(&plan).segments().len(), 12);
    assert!(DependencyView(&plan).to_string().contains("- Task 3 ← 2"));

    // Text export has one block per task
    let text = planner
        .export_plan(&ExportPlan {
            id: None,
            format: ExportFormat::Text,
        })
        .await
        .unwrap();
    assert_eq!(text, TextExport(&plan).to_string());
    assert_eq!(text.matches("   Assigned to: ").count(), 12);
    assert_eq!(text.matches("   Dependencies: None").count(), 7);

    // Listing shows the stored plan
    let listings = planner.list_plans(&ListPlans::default()).await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].goal, "Build a mobile app for fitness tracking");
    assert_eq!(listings[0].total_tasks, 12);

    // Reset forgets the last plan but keeps the record
    assert!(planner.clear_last_plan().await.unwrap());
    assert!(matches!(
        planner.resolve_plan(&PlanRef::last()).await,
        Err(PlannerError::NoRecentPlan)
    ));
    assert!(planner.resolve_plan(&PlanRef::id(listings[0].id)).await.is_ok());
}

#[tokio::test]
async fn test_html_export_escapes_goal() {
    let (_temp_dir, planner) = create_test_planner().await;

    let generated = planner
        .generate_plan(&GeneratePlan {
            goal: "Plan <b>bold</b> party".to_string(),
            timeline_weeks: 2,
        })
        .await
        .unwrap();

    let html = planner
        .export_plan(&ExportPlan {
            id: Some(generated.record.id),
            format: ExportFormat::Html,
        })
        .await
        .unwrap();
    assert_eq!(html, HtmlExport(&generated.record.plan).to_string());
    assert!(html.contains("Plan &lt;b&gt;bold&lt;/b&gt; party"));
    assert!(!html.contains("<b>bold</b>"));
}

#[tokio::test]
async fn test_plans_persist_across_planner_instances() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("plans.db");

    let first = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .offline(true)
        .build()
        .await
        .unwrap();
    let generated = first
        .generate_plan(&GeneratePlan {
            goal: "Organize a tech conference".to_string(),
            timeline_weeks: 6,
        })
        .await
        .unwrap();
    drop(first);

    let second = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .offline(true)
        .build()
        .await
        .unwrap();

    let last = second.last_plan().await.unwrap().expect("plan saved just now");
    assert_eq!(last.id, generated.record.id);
    assert_eq!(last.plan, generated.record.plan);
}

#[tokio::test]
async fn test_unknown_plan_id() {
    let (_temp_dir, planner) = create_test_planner().await;

    let err = planner
        .export_plan(&ExportPlan {
            id: Some(7),
            format: ExportFormat::Json,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::PlanNotFound { id: 7 }));
    assert_eq!(err.to_string(), "Plan with ID 7 not found");
}
