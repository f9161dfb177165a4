//! Read-only display caches filled once at session start.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use crate::net::types::{CommunityInsights, PopularCareer, RemoteScenario};

/// How many popular careers the community panel lists.
pub const POPULAR_CAREER_LIMIT: usize = 5;

/// Backend-supplied statistics and shared scenarios.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommunityState {
    pub insights: Option<CommunityInsights>,
    pub scenarios: Vec<RemoteScenario>,
}

impl CommunityState {
    pub fn set_insights(&mut self, insights: Option<CommunityInsights>) {
        if insights.is_some() {
            self.insights = insights;
        }
    }

    pub fn set_scenarios(&mut self, scenarios: Vec<RemoteScenario>) {
        self.scenarios = scenarios;
    }

    /// The head of the popular-careers ranking.
    pub fn top_careers(&self) -> &[PopularCareer] {
        let Some(insights) = &self.insights else {
            return &[];
        };
        let careers = insights.popular_careers.as_slice();
        &careers[..careers.len().min(POPULAR_CAREER_LIMIT)]
    }
}
