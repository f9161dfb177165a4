//! AR/VR panel: suggestions and avatar traits from the last result.

use leptos::prelude::*;

use crate::app::Actions;
use crate::net::types::{AvatarData, SimulationResult};
use crate::state::simulation::SimulationState;
use crate::state::ui::Tab;
use crate::util::format::trait_width_style;

#[component]
pub fn ArVrPanel() -> impl IntoView {
    let sim = expect_context::<RwSignal<SimulationState>>();
    let actions = expect_context::<Actions>();

    view! {
        <div class="ar-vr">
            <h2>"AR/VR Experience"</h2>
            <p>"Explore your future in immersive 3D environments and augmented reality."</p>
            {move || match sim.with(|s| s.result.clone()) {
                Some(result) => result_view(result).into_any(),
                None => {
                    view! {
                        <div class="ar-vr-placeholder">
                            <h3>"🚀 Ready for AR/VR Experience"</h3>
                            <p>"Run a simulation first to generate your personalized AR/VR content and 3D avatar!"</p>
                            <button class="simulate-btn" on:click=move |_| actions.select_tab(Tab::Simulate)>
                                "Start Simulation"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

fn result_view(result: SimulationResult) -> impl IntoView {
    let SimulationResult { ar_vr_suggestions, avatar_data, .. } = result;
    view! {
        <div class="ar-vr-content">
            {(!ar_vr_suggestions.is_empty())
                .then(|| {
                    view! {
                        <div class="ar-vr-suggestions">
                            <h3>"🥽 AR/VR Recommendations"</h3>
                            <div class="suggestions-grid">
                                {ar_vr_suggestions
                                    .into_iter()
                                    .map(|suggestion| {
                                        view! {
                                            <div class="suggestion-card">
                                                <div class="suggestion-icon">"🥽"</div>
                                                <p>{suggestion}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}
            {avatar_data.map(avatar_view)}
        </div>
    }
}

fn avatar_view(avatar: AvatarData) -> impl IntoView {
    view! {
        <div class="avatar-section">
            <h3>"👤 Your 3D Avatar"</h3>
            <div class="avatar-card">
                <div class="avatar-preview">
                    <div class="avatar-placeholder">
                        <span class="avatar-icon">"👤"</span>
                        <p>"Avatar ID: " {avatar.avatar_id}</p>
                    </div>
                </div>
                <div class="avatar-traits">
                    <h4>"Personality Traits"</h4>
                    <div class="trait-bars">
                        {avatar
                            .personality_traits
                            .labeled()
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="trait">
                                        <span>{label}</span>
                                        <div class="trait-bar">
                                            <div class="trait-fill" style=trait_width_style(value)></div>
                                        </div>
                                        <span>{format!("{value}%")}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
