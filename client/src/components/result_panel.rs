//! Simulation result panel.
//!
//! Every optional section is skipped when its field is absent or empty, so a
//! minimal `{score, message}` result renders just the score and message.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use leptos::prelude::*;

use crate::net::types::{Insights, MediaItem, SimulationResult};
use crate::state::simulation::SimulationState;
use crate::util::format::score_label;

/// `(label, value)` rows of the key-insights grid; empty when there are no insights.
pub fn insight_rows(insights: Option<&Insights>) -> Vec<(&'static str, String)> {
    let Some(insights) = insights else {
        return Vec::new();
    };
    [
        ("Growth Potential:", &insights.career_growth_potential),
        ("Time to Success:", &insights.time_to_success),
        ("Risk Level:", &insights.risk_level),
    ]
    .into_iter()
    .map(|(label, value)| (label, value.clone().unwrap_or_default()))
    .collect()
}

/// Shows the last result, if any.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulationState>>();
    move || sim.with(|s| s.result.clone()).map(|result| view! { <ResultView result /> })
}

#[component]
fn ResultView(result: SimulationResult) -> impl IntoView {
    let rows = insight_rows(result.insights.as_ref());
    let SimulationResult {
        score,
        message,
        recommendations,
        media,
        journal_entry,
        multimedia_suggestions,
        simulation_id,
        ..
    } = result;

    view! {
        <div class="result-panel">
            <h3>"Simulation Results"</h3>
            <div class="result-content">
                <div class="success-score">
                    <div class="score-circle">
                        <span class="score-number">{score_label(score)}</span>
                        <span class="score-label">"Success Score"</span>
                    </div>
                </div>
                <div class="result-message">
                    <p>{message.unwrap_or_default()}</p>
                    {(!media.is_empty())
                        .then(|| {
                            view! {
                                <div class="simulation-media">
                                    {media.into_iter().map(media_view).collect_view()}
                                </div>
                            }
                        })}
                    {(!rows.is_empty())
                        .then(|| {
                            view! {
                                <div class="insights">
                                    <h4>"Key Insights:"</h4>
                                    <div class="insights-grid">
                                        {rows
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <div class="insight-item">
                                                        <span class="insight-label">{label}</span>
                                                        <span class="insight-value">{value}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                    {(!recommendations.is_empty())
                        .then(|| {
                            view! {
                                <div class="recommendations">
                                    <h4>"Actionable Recommendations:"</h4>
                                    <ul>
                                        {recommendations
                                            .into_iter()
                                            .map(|rec| view! { <li>{rec}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}
                    {simulation_id
                        .filter(|id| !id.is_empty())
                        .map(|id| {
                            view! {
                                <div class="simulation-id">
                                    <small>"Simulation ID: " {id}</small>
                                </div>
                            }
                        })}
                    {journal_entry
                        .filter(|entry| !entry.is_empty())
                        .map(|entry| {
                            view! {
                                <div class="journal-entry">
                                    <h4>"📖 Digital Twin Journal Entry:"</h4>
                                    <div class="journal-content">
                                        <pre>{entry}</pre>
                                    </div>
                                </div>
                            }
                        })}
                    {(!multimedia_suggestions.is_empty())
                        .then(|| {
                            view! {
                                <div class="multimedia-suggestions">
                                    <h4>"🎨 Multimedia Content Ideas:"</h4>
                                    <div class="suggestions-grid">
                                        {multimedia_suggestions
                                            .into_iter()
                                            .map(|s| view! { <div class="suggestion-item">{s}</div> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

fn media_view(item: MediaItem) -> AnyView {
    if item.is_image() {
        view! { <img src=item.url alt="Simulation" /> }.into_any()
    } else {
        view! { <video src=item.url controls=true></video> }.into_any()
    }
}
