//! Static life-scenario catalog compiled into the client.
//!
//! Entries are looked up by id when a card is selected; the id is what
//! [`crate::state::ui::UiState`] stores, so the catalog itself never changes.

#[cfg(test)]
#[path = "scenarios_test.rs"]
mod scenarios_test;

/// Relative effort of a scenario, shown as a colored badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Badge modifier class, e.g. `difficulty-easy`.
    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty-easy",
            Difficulty::Medium => "difficulty-medium",
            Difficulty::Hard => "difficulty-hard",
        }
    }
}

/// Research background shown on a card and in its detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioDetails {
    pub variables: [&'static str; 4],
    pub outcomes: [&'static str; 4],
    pub timeframe: &'static str,
    pub research: &'static str,
}

/// One card of the scenarios panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioCatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub category: &'static str,
    /// CSS color used for the icon and card accent.
    pub color: &'static str,
    pub details: ScenarioDetails,
}

impl ScenarioCatalogEntry {
    /// Label of the detail view's start action.
    pub fn start_label(&self) -> String {
        format!("Start {} Simulation", self.name)
    }
}

pub static SCENARIOS: [ScenarioCatalogEntry; 10] = [
    ScenarioCatalogEntry {
        id: "health_wellness",
        name: "Health & Wellness Path",
        icon: "🏃‍♂️",
        description: "Simulate adopting healthy habits, sports, or routines and their life effects",
        difficulty: Difficulty::Easy,
        category: "Personal Development",
        color: "#10b981",
        details: ScenarioDetails {
            variables: ["Exercise frequency", "Diet quality", "Sleep patterns", "Stress management"],
            outcomes: ["Life expectancy", "Energy levels", "Medical costs", "Quality of life"],
            timeframe: "3-12 months",
            research: "Based on Harvard Health Study and WHO guidelines",
        },
    },
    ScenarioCatalogEntry {
        id: "relationship_decisions",
        name: "Relationship Decisions",
        icon: "💕",
        description: "Explore outcomes of relationship choices: moving in, marriage, family planning",
        difficulty: Difficulty::Medium,
        category: "Social Life",
        color: "#ec4899",
        details: ScenarioDetails {
            variables: ["Relationship status", "Living arrangements", "Family planning", "Social network"],
            outcomes: ["Relationship satisfaction", "Financial impact", "Life stability", "Personal growth"],
            timeframe: "1-5 years",
            research: "Based on relationship psychology research and demographic studies",
        },
    },
    ScenarioCatalogEntry {
        id: "financial_milestones",
        name: "Financial Milestones",
        icon: "💰",
        description: "What if you invest early vs. late? Buy or rent? Major life purchases",
        difficulty: Difficulty::Medium,
        category: "Financial Planning",
        color: "#f59e0b",
        details: ScenarioDetails {
            variables: ["Investment strategy", "Housing decisions", "Career income", "Spending habits"],
            outcomes: ["Net worth", "Retirement readiness", "Financial freedom", "Risk tolerance"],
            timeframe: "5-30 years",
            research: "Based on financial planning models and economic forecasting",
        },
    },
    ScenarioCatalogEntry {
        id: "global_mobility",
        name: "Global Mobility",
        icon: "🌍",
        description: "Simulate working or living abroad, immigration scenarios",
        difficulty: Difficulty::Hard,
        category: "Career & Location",
        color: "#06b6d4",
        details: ScenarioDetails {
            variables: ["Destination country", "Visa status", "Language skills", "Cultural adaptation"],
            outcomes: ["Career opportunities", "Cultural exposure", "Financial impact", "Personal growth"],
            timeframe: "2-10 years",
            research: "Based on immigration data and expat success studies",
        },
    },
    ScenarioCatalogEntry {
        id: "life_setbacks",
        name: "Major Life Setbacks",
        icon: "🛡️",
        description: "What if you face job loss, illness, or market crashes? Resilience paths",
        difficulty: Difficulty::Hard,
        category: "Crisis Management",
        color: "#ef4444",
        details: ScenarioDetails {
            variables: ["Emergency fund", "Support network", "Skills backup", "Mental resilience"],
            outcomes: ["Recovery time", "Personal growth", "New opportunities", "Life lessons"],
            timeframe: "6 months - 3 years",
            research: "Based on resilience psychology and crisis recovery studies",
        },
    },
    ScenarioCatalogEntry {
        id: "passion_projects",
        name: "Passion Project/Creativity",
        icon: "🎨",
        description: "Focus on hobby, art, or passion: how it shapes life, happiness, career",
        difficulty: Difficulty::Easy,
        category: "Personal Fulfillment",
        color: "#8b5cf6",
        details: ScenarioDetails {
            variables: ["Time investment", "Skill development", "Market potential", "Personal satisfaction"],
            outcomes: ["Creative fulfillment", "Side income", "Career pivot", "Life satisfaction"],
            timeframe: "6 months - 5 years",
            research: "Based on creativity research and entrepreneurial studies",
        },
    },
    ScenarioCatalogEntry {
        id: "retirement_legacy",
        name: "Retirement & Legacy",
        icon: "👴",
        description: "Early/late retirement, volunteering, legacy planning outcomes",
        difficulty: Difficulty::Medium,
        category: "Long-term Planning",
        color: "#6b7280",
        details: ScenarioDetails {
            variables: ["Retirement age", "Savings rate", "Volunteer work", "Estate planning"],
            outcomes: ["Retirement security", "Life purpose", "Family impact", "Community contribution"],
            timeframe: "10-50 years",
            research: "Based on retirement planning models and longevity studies",
        },
    },
    ScenarioCatalogEntry {
        id: "climate_environment",
        name: "Climate & Environment",
        icon: "🌱",
        description: "Choices with long-term eco/sustainability impacts",
        difficulty: Difficulty::Medium,
        category: "Environmental Impact",
        color: "#059669",
        details: ScenarioDetails {
            variables: ["Carbon footprint", "Sustainable choices", "Green investments", "Lifestyle changes"],
            outcomes: ["Environmental impact", "Cost savings", "Health benefits", "Future readiness"],
            timeframe: "1-20 years",
            research: "Based on climate science and sustainability research",
        },
    },
    ScenarioCatalogEntry {
        id: "tech_adoption",
        name: "Tech Adoption Curve",
        icon: "🤖",
        description: "How using or avoiding new tech affects career and lifestyle",
        difficulty: Difficulty::Easy,
        category: "Technology",
        color: "#3b82f6",
        details: ScenarioDetails {
            variables: ["Tech adoption rate", "Learning investment", "Career relevance", "Digital lifestyle"],
            outcomes: ["Career competitiveness", "Efficiency gains", "Learning curve", "Future readiness"],
            timeframe: "1-5 years",
            research: "Based on technology adoption studies and digital transformation research",
        },
    },
    ScenarioCatalogEntry {
        id: "social_political",
        name: "Social/Political Engagement",
        icon: "🗳️",
        description: "Effects of volunteering, activism, or civic engagement",
        difficulty: Difficulty::Medium,
        category: "Social Impact",
        color: "#dc2626",
        details: ScenarioDetails {
            variables: ["Volunteer hours", "Civic participation", "Social causes", "Community involvement"],
            outcomes: ["Social impact", "Network expansion", "Personal growth", "Community standing"],
            timeframe: "1-10 years",
            research: "Based on civic engagement studies and social impact research",
        },
    },
];

pub fn find_scenario(id: &str) -> Option<&'static ScenarioCatalogEntry> {
    SCENARIOS.iter().find(|s| s.id == id)
}
