//! Goal domain classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse category inferred from the goal text.
///
/// The domain selects which description and resource tables the generator
/// consults; it has no other effect on the plan shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Software,
    Marketing,
    Event,
    General,
}

/// Keyword sets checked in order; the first set with a hit wins.
const KEYWORDS: [(Domain, &[&str]); 3] = [
    (Domain::Software, &["app", "software", "website", "develop"]),
    (Domain::Marketing, &["market", "campaign", "promote", "brand"]),
    (Domain::Event, &["event", "meeting", "conference", "party"]),
];

impl Domain {
    /// Classifies a goal by case-insensitive substring match.
    ///
    /// Precedence is software, then marketing, then event. A goal matching
    /// none of the keyword sets is [`Domain::General`].
    ///
    /// ```rust
    /// use waypoint_core::models::Domain;
    ///
    /// assert_eq!(Domain::classify("promote our new app"), Domain::Software);
    /// assert_eq!(Domain::classify("Plan a birthday party"), Domain::Event);
    /// assert_eq!(Domain::classify("Learn to paint"), Domain::General);
    /// ```
    pub fn classify(goal: &str) -> Self {
        let goal = goal.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| goal.contains(word)))
            .map_or(Domain::General, |(domain, _)| *domain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Software => "software",
            Domain::Marketing => "marketing",
            Domain::Event => "event",
            Domain::General => "general",
        }
    }

    /// Capitalized label used in summaries ("Software", "Event", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Software => "Software",
            Domain::Marketing => "Marketing",
            Domain::Event => "Event",
            Domain::General => "General",
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "software" => Ok(Domain::Software),
            "marketing" => Ok(Domain::Marketing),
            "event" => Ok(Domain::Event),
            "general" => Ok(Domain::General),
            _ => Err(format!("Invalid domain: {s}")),
        }
    }
}
