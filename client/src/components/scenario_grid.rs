//! Scenario catalog cards, the selected-scenario detail, and the scenarios
//! shared by the backend.

use leptos::prelude::*;

use crate::app::Actions;
use crate::content::scenarios::{SCENARIOS, ScenarioCatalogEntry, find_scenario};
use crate::state::community::CommunityState;
use crate::state::ui::{Tab, UiState};
use crate::util::format::scenario_title;

#[component]
pub fn ScenarioGrid() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let selected = move || ui.with(|u| u.selected_scenario).and_then(find_scenario);

    view! {
        <div class="life-scenarios">
            <div class="scenarios-header">
                <h2>"Interactive Life Scenarios"</h2>
                <p>"Explore comprehensive life path simulations based on research and data science"</p>
                <div class="research-badge">
                    <span class="badge-icon">"🔬"</span>
                    <span>"Research-Backed Predictions"</span>
                </div>
            </div>
            <div class="scenarios-grid">
                {SCENARIOS.iter().map(|scenario| view! { <ScenarioCard scenario /> }).collect_view()}
            </div>
            {move || selected().map(|scenario| view! { <ScenarioDetail scenario /> })}
            <CommunityScenarios />
        </div>
    }
}

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()
}

#[component]
fn ScenarioCard(scenario: &'static ScenarioCatalogEntry) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_selected = move || ui.with(|u| u.selected_scenario == Some(scenario.id));

    view! {
        <div
            class="scenario-card"
            class:selected=is_selected
            style=format!("--scenario-color: {}", scenario.color)
            on:click=move |_| ui.update(|u| u.select_scenario(scenario.id))
        >
            <div class="scenario-icon" style=format!("color: {}", scenario.color)>
                {scenario.icon}
            </div>
            <div class="scenario-content">
                <h3>{scenario.name}</h3>
                <p>{scenario.description}</p>
                <div class="scenario-meta">
                    <span class=format!("difficulty {}", scenario.difficulty.css_class())>
                        {scenario.difficulty.label()}
                    </span>
                    <span class="category">{scenario.category}</span>
                </div>
                <div class="scenario-details">
                    <div class="detail-item">
                        <strong>"Timeframe:"</strong>
                        " "
                        {scenario.details.timeframe}
                    </div>
                    <div class="detail-item">
                        <strong>"Research:"</strong>
                        " "
                        {scenario.details.research}
                    </div>
                </div>
            </div>
            <div class="scenario-overlay">
                <div class="overlay-content">
                    <h4>"Key Variables"</h4>
                    <ul>{bullet_list(&scenario.details.variables)}</ul>
                    <h4>"Predicted Outcomes"</h4>
                    <ul>{bullet_list(&scenario.details.outcomes)}</ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ScenarioDetail(scenario: &'static ScenarioCatalogEntry) -> impl IntoView {
    let actions = expect_context::<Actions>();

    view! {
        <div class="scenario-detail-modal">
            <div class="modal-content">
                <h3>{scenario.name}</h3>
                <p>{scenario.description}</p>
                <div class="detail-sections">
                    <div class="detail-section">
                        <h4>"Research Foundation"</h4>
                        <p>{scenario.details.research}</p>
                    </div>
                    <div class="detail-section">
                        <h4>"Simulation Variables"</h4>
                        <ul>{bullet_list(&scenario.details.variables)}</ul>
                    </div>
                    <div class="detail-section">
                        <h4>"Predicted Outcomes"</h4>
                        <ul>{bullet_list(&scenario.details.outcomes)}</ul>
                    </div>
                </div>
                <button class="start-simulation-btn" on:click=move |_| actions.select_tab(Tab::Simulate)>
                    {scenario.start_label()}
                </button>
            </div>
        </div>
    }
}

/// Scenarios loaded from the backend at startup. Renders nothing when empty.
#[component]
fn CommunityScenarios() -> impl IntoView {
    let community = expect_context::<RwSignal<CommunityState>>();

    move || {
        let scenarios = community.with(|c| c.scenarios.clone());
        (!scenarios.is_empty()).then(|| {
            view! {
                <div class="community-scenarios">
                    <h3>"Community Scenarios"</h3>
                    <div class="scenarios-grid">
                        {scenarios
                            .into_iter()
                            .map(|scenario| {
                                let title = scenario_title(&scenario).to_owned();
                                view! {
                                    <div class="scenario-card scenario-card--community">
                                        <div class="scenario-content">
                                            <h3>{title}</h3>
                                            <p>{scenario.description.unwrap_or_default()}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    }
}
