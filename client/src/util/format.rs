//! Display formatting for backend-supplied values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{PopularCareer, RemoteScenario};

/// Education-impact row label: first `-` becomes a space, then upper-cased.
pub fn education_label(level: &str) -> String {
    level.replacen('-', " ", 1).to_uppercase()
}

/// Education-impact score, e.g. `82.456` -> `"82.5% avg score"`.
///
/// Halves round away from zero, so `82.25` shows as `82.3`.
pub fn avg_score_label(score: f64) -> String {
    let rounded = (score * 10.0).round() / 10.0;
    format!("{rounded:.1}% avg score")
}

/// Success score as shown in the score circle; a missing score shows `0`.
pub fn score_label(score: Option<f64>) -> String {
    score.unwrap_or(0.0).to_string()
}

pub fn career_name(career: &PopularCareer) -> &str {
    career.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Unknown")
}

/// Inline width for a 0–100 trait bar. Out-of-range values are clamped.
pub fn trait_width_style(value: f64) -> String {
    let pct = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    format!("width: {pct}%")
}

/// Heading for a backend-shared scenario.
pub fn scenario_title(scenario: &RemoteScenario) -> &str {
    scenario.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("Untitled scenario")
}
