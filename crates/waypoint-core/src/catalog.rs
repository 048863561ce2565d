//! Fixed phase catalog and the template tables keyed by domain and phase.
//!
//! Descriptions are looked up by exact `(domain, phase)` pair; resources by
//! the first phase-name substring that matches in a per-domain table. Both
//! have a documented fallback, so every lookup produces a value.

use crate::models::Domain;

/// The six phases every generated plan is divided into, in order.
pub const PHASES: [&str; 6] = [
    "Research & Analysis",
    "Planning & Strategy",
    "Execution Phase 1",
    "Execution Phase 2",
    "Testing & Quality Assurance",
    "Launch & Delivery",
];

/// Role used when no resource table entry applies.
pub const DEFAULT_RESOURCE: &str = "Project Team";

/// Placeholder replaced with the goal text in description templates.
const GOAL_PLACEHOLDER: &str = "{goal}";

type DescriptionTable = &'static [(&'static str, &'static [&'static str])];
type ResourceTable = &'static [(&'static str, &'static str)];

const SOFTWARE_DESCRIPTIONS: DescriptionTable = &[
    (
        "Research & Analysis",
        &[
            "Analyze requirements for {goal}",
            "Research technology stack options",
            "Study user needs and market gaps",
        ],
    ),
    (
        "Planning & Strategy",
        &[
            "Create technical specifications",
            "Design system architecture",
            "Plan development milestones",
        ],
    ),
    (
        "Execution Phase 1",
        &[
            "Set up development environment",
            "Implement core functionality",
            "Create database schema",
        ],
    ),
    (
        "Testing & Quality Assurance",
        &[
            "Write and execute test cases",
            "Perform security testing",
            "Optimize performance",
        ],
    ),
];

const MARKETING_DESCRIPTIONS: DescriptionTable = &[
    (
        "Research & Analysis",
        &[
            "Analyze target audience for {goal}",
            "Research competitor strategies",
            "Identify market opportunities",
        ],
    ),
    (
        "Planning & Strategy",
        &[
            "Develop marketing strategy",
            "Create content calendar",
            "Plan campaign budget",
        ],
    ),
];

const SOFTWARE_RESOURCES: ResourceTable = &[
    ("Research", "Business Analyst"),
    ("Planning", "Project Manager"),
    ("Execution", "Development Team"),
    ("Testing", "QA Team"),
];

const MARKETING_RESOURCES: ResourceTable = &[
    ("Research", "Market Analyst"),
    ("Planning", "Marketing Manager"),
    ("Execution", "Marketing Team"),
];

const EVENT_RESOURCES: ResourceTable = &[
    ("Research", "Event Coordinator"),
    ("Planning", "Event Manager"),
    ("Execution", "Event Team"),
];

fn description_table(domain: Domain) -> Option<DescriptionTable> {
    match domain {
        Domain::Software => Some(SOFTWARE_DESCRIPTIONS),
        Domain::Marketing => Some(MARKETING_DESCRIPTIONS),
        Domain::Event | Domain::General => None,
    }
}

fn resource_table(domain: Domain) -> Option<ResourceTable> {
    match domain {
        Domain::Software => Some(SOFTWARE_RESOURCES),
        Domain::Marketing => Some(MARKETING_RESOURCES),
        Domain::Event => Some(EVENT_RESOURCES),
        Domain::General => None,
    }
}

/// Custom templates for a `(domain, phase)` pair, if the catalog has any.
pub fn custom_descriptions(domain: Domain, phase: &str) -> Option<&'static [&'static str]> {
    description_table(domain)?
        .iter()
        .find(|(name, _)| *name == phase)
        .map(|(_, templates)| *templates)
}

/// Description for the task numbered `task_number` (1-based) in `phase`.
///
/// Picks `templates[task_number % len]` from the custom list, or from the
/// three generic templates built from the lower-cased phase name.
pub fn describe(domain: Domain, phase: &str, task_number: usize, goal: &str) -> String {
    if let Some(templates) = custom_descriptions(domain, phase) {
        return templates[task_number % templates.len()].replace(GOAL_PLACEHOLDER, goal);
    }

    let phase = phase.to_lowercase();
    let generic = [
        format!("Complete {phase} activities"),
        format!("Work on {phase} deliverables"),
        format!("Implement {phase} requirements"),
    ];
    let index = task_number % generic.len();
    generic[index].clone()
}

/// Role responsible for `phase` work in `domain`.
pub fn assign_resource(domain: Domain, phase: &str) -> &'static str {
    resource_table(domain)
        .and_then(|table| table.iter().find(|(key, _)| phase.contains(key)))
        .map_or(DEFAULT_RESOURCE, |(_, role)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_description_indexing() {
        // Task number 1 picks the second template
        assert_eq!(
            describe(Domain::Software, "Planning & Strategy", 1, "x"),
            "Design system architecture"
        );
        assert_eq!(
            describe(Domain::Software, "Planning & Strategy", 3, "x"),
            "Create technical specifications"
        );
    }

    #[test]
    fn test_description_embeds_goal() {
        assert_eq!(
            describe(Domain::Marketing, "Research & Analysis", 3, "a spring sale"),
            "Analyze target audience for a spring sale"
        );
    }

    #[test]
    fn test_generic_description_fallback() {
        // Software has no list for the second execution phase
        assert_eq!(
            describe(Domain::Software, "Execution Phase 2", 1, "x"),
            "Work on execution phase 2 deliverables"
        );
        assert_eq!(
            describe(Domain::Event, "Launch & Delivery", 2, "x"),
            "Implement launch & delivery requirements"
        );
        assert_eq!(
            describe(Domain::General, "Research & Analysis", 3, "x"),
            "Complete research & analysis activities"
        );
    }

    #[test]
    fn test_resource_assignment() {
        assert_eq!(
            assign_resource(Domain::Software, "Testing & Quality Assurance"),
            "QA Team"
        );
        assert_eq!(
            assign_resource(Domain::Marketing, "Execution Phase 2"),
            "Marketing Team"
        );
        assert_eq!(
            assign_resource(Domain::Event, "Research & Analysis"),
            "Event Coordinator"
        );
        assert_eq!(
            assign_resource(Domain::Marketing, "Testing & Quality Assurance"),
            DEFAULT_RESOURCE
        );
        assert_eq!(
            assign_resource(Domain::General, "Planning & Strategy"),
            DEFAULT_RESOURCE
        );
        assert_eq!(
            assign_resource(Domain::Software, "Launch & Delivery"),
            DEFAULT_RESOURCE
        );
    }
}
