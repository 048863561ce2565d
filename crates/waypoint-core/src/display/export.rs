//! File exports of a plan: plain text, printable HTML, and JSON.

use std::fmt;

use crate::{error::Result, models::Plan, params::ExportFormat};

/// Renders `plan` in the requested export format.
pub fn render_export(plan: &Plan, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => JsonExport(plan).render(),
        ExportFormat::Text => Ok(TextExport(plan).to_string()),
        ExportFormat::Html => Ok(HtmlExport(plan).to_string()),
    }
}

/// Plain-text report with one numbered block per task.
///
/// Dates are ISO `YYYY-MM-DD`; dependencies are 1-based task numbers.
pub struct TextExport<'a>(pub &'a Plan);

impl fmt::Display for TextExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "SMART TASK PLAN")?;
        writeln!(f, "===============")?;
        writeln!(f)?;
        writeln!(f, "Goal: {}", plan.goal)?;
        writeln!(f, "Timeline: {} weeks", plan.timeline_weeks)?;
        writeln!(f, "Start Date: {}", plan.start_date)?;
        writeln!(f, "End Date: {}", plan.end_date)?;
        writeln!(f, "Total Tasks: {}", plan.tasks.len())?;
        writeln!(f, "Complexity: {}", plan.complexity)?;
        writeln!(f)?;
        writeln!(f, "TASKS")?;
        writeln!(f, "=====")?;
        writeln!(f)?;

        for task in &plan.tasks {
            writeln!(f, "{}. {}", task.number(), task.name)?;
            writeln!(f, "   Description: {}", task.description)?;
            writeln!(f, "   Duration: {}", task.duration_label())?;
            writeln!(f, "   Dates: {} to {}", task.start_date, task.end_date)?;
            writeln!(f, "   Priority: {}", task.priority.badge())?;
            writeln!(f, "   Assigned to: {}", task.assigned_to)?;
            writeln!(
                f,
                "   Dependencies: {}",
                task.dependency_numbers().as_deref().unwrap_or("None")
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

const HTML_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 2rem; }
h1 { color: #333; border-bottom: 2px solid #4361ee; padding-bottom: 0.5rem; }
h2 { color: #555; margin-top: 2rem; }
.task { border: 1px solid #ddd; padding: 1rem; margin: 1rem 0; border-radius: 4px; }
.task-header { display: flex; justify-content: space-between; }
.priority { padding: 0.25rem 0.5rem; border-radius: 4px; color: white; }
.priority-high { background: #f94144; }
.priority-medium { background: #f8961e; }
.priority-low { background: #4cc9f0; }
.meta { font-size: 0.9rem; color: #666; margin-top: 0.5rem; }
@media print { .no-print { display: none; } }";

/// Escapes text for interpolation into HTML element content and attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Standalone print-styled HTML page.
pub struct HtmlExport<'a>(pub &'a Plan);

impl fmt::Display for HtmlExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let goal = escape_html(&plan.goal);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>Task Plan: {goal}</title>")?;
        writeln!(f, "<style>\n{HTML_STYLE}\n</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<h1>Smart Task Plan</h1>")?;
        writeln!(f, "<div class=\"summary\">")?;
        writeln!(f, "<p><strong>Goal:</strong> {goal}</p>")?;
        writeln!(
            f,
            "<p><strong>Timeline:</strong> {} weeks</p>",
            plan.timeline_weeks
        )?;
        writeln!(f, "<p><strong>Start Date:</strong> {}</p>", plan.start_date)?;
        writeln!(f, "<p><strong>End Date:</strong> {}</p>", plan.end_date)?;
        writeln!(f, "<p><strong>Total Tasks:</strong> {}</p>", plan.tasks.len())?;
        writeln!(f, "<p><strong>Complexity:</strong> {}</p>", plan.complexity)?;
        writeln!(f, "</div>")?;
        writeln!(f, "<h2>Task Breakdown</h2>")?;

        for task in &plan.tasks {
            writeln!(f, "<div class=\"task\">")?;
            writeln!(f, "<div class=\"task-header\">")?;
            writeln!(
                f,
                "<h3>Task {}: {}</h3>",
                task.number(),
                escape_html(&task.name)
            )?;
            writeln!(
                f,
                "<span class=\"priority priority-{}\">{}</span>",
                task.priority.as_str(),
                task.priority.badge()
            )?;
            writeln!(f, "</div>")?;
            writeln!(f, "<p>{}</p>", escape_html(&task.description))?;
            writeln!(
                f,
                "<div class=\"meta\"><strong>Duration:</strong> {} | \
                 <strong>Dates:</strong> {} to {} | \
                 <strong>Assigned to:</strong> {} | \
                 <strong>Dependencies:</strong> {}</div>",
                task.duration_label(),
                task.start_date,
                task.end_date,
                escape_html(&task.assigned_to),
                task.dependency_numbers().as_deref().unwrap_or("None")
            )?;
            writeln!(f, "</div>")?;
        }

        writeln!(f, "<div class=\"no-print\">")?;
        writeln!(
            f,
            "<p><em>Generated by Waypoint on {}</em></p>",
            plan.generated_at.strftime("%Y-%m-%d")
        )?;
        writeln!(f, "</div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Pretty-printed JSON, the same shape the plan is stored in.
pub struct JsonExport<'a>(pub &'a Plan);

impl JsonExport<'_> {
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.0)?)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::generator::{DemoPlanGenerator, FixedClock};

    fn sample_plan(goal: &str, weeks: u32) -> Plan {
        let clock = FixedClock("2024-03-01T09:00:00Z".parse::<Timestamp>().unwrap());
        DemoPlanGenerator::with_clock(clock).generate(goal, weeks)
    }

    #[test]
    fn test_text_export_header() {
        let plan = sample_plan("Build a mobile app for fitness tracking", 8);
        let text = TextExport(&plan).to_string();

        assert!(text.starts_with(
            "SMART TASK PLAN\n===============\n\n\
             Goal: Build a mobile app for fitness tracking\n\
             Timeline: 8 weeks\n\
             Start Date: 2024-03-01\n"
        ));
        assert!(text.contains("Total Tasks: 12\nComplexity: Medium\n\nTASKS\n=====\n\n"));
    }

    #[test]
    fn test_text_export_task_blocks() {
        let plan = sample_plan("Build a mobile app for fitness tracking", 8);
        let text = TextExport(&plan).to_string();

        assert_eq!(text.matches("   Description: ").count(), plan.tasks.len());
        assert!(text.contains(
            "1. Research & Analysis: Task 1\n\
             \x20  Description: Research technology stack options\n\
             \x20  Duration: 1 week\n\
             \x20  Dates: 2024-03-01 to 2024-03-08\n\
             \x20  Priority: HIGH\n\
             \x20  Assigned to: Business Analyst\n\
             \x20  Dependencies: None\n\n"
        ));
        assert!(text.contains("3. Planning & Strategy: Task 1\n"));
        assert!(text.contains("   Dependencies: 2\n"));
    }

    #[test]
    fn test_html_export_escapes_text() {
        let plan = sample_plan("Ship <script>alert('x')</script> & more", 2);
        let html = HtmlExport(&plan).to_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Ship &lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert_eq!(html.matches("<div class=\"task\">").count(), plan.tasks.len());
        assert!(html.contains("<span class=\"priority priority-high\">HIGH</span>"));
        assert!(html.contains("Generated by Waypoint on 2024-03-01"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let plan = sample_plan("Plan a product launch campaign", 6);
        let json = JsonExport(&plan).render().unwrap();

        assert!(json.contains("\n  \"goal\": \"Plan a product launch campaign\""));
        let decoded: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plan);
    }

    #[test]
    fn test_render_export_dispatch() {
        let plan = sample_plan("Organize a tech conference", 4);
        assert!(render_export(&plan, ExportFormat::Text)
            .unwrap()
            .starts_with("SMART TASK PLAN"));
        assert!(render_export(&plan, ExportFormat::Html)
            .unwrap()
            .contains("<h1>Smart Task Plan</h1>"));
        assert!(render_export(&plan, ExportFormat::Json)
            .unwrap()
            .starts_with('{'));
    }
}
