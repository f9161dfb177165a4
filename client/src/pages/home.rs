//! Landing view with the two calls to action.

use leptos::prelude::*;

use crate::app::Actions;
use crate::state::ui::Tab;

const FEATURES: [(&str, &str, &str); 4] = [
    ("🎯", "Life Simulation", "Simulate different career paths, education choices, and life decisions"),
    ("🤖", "AI-Powered Insights", "Get personalized recommendations based on data and AI analysis"),
    ("🥽", "AR/VR Experience", "Visualize your future in immersive 3D environments"),
    ("👥", "Community Insights", "Learn from others' experiences and share your journey"),
];

#[component]
pub fn HomePanel() -> impl IntoView {
    let actions = expect_context::<Actions>();

    view! {
        <div class="home-page">
            <div class="hero-section">
                <h1 class="hero-title">"Welcome to Parallel You"</h1>
                <p class="hero-subtitle">"AI-Generated Personalized Reality Simulator"</p>
                <p class="hero-description">
                    "Explore alternate life paths, simulate different career choices, and discover what your \
                     future could look like with the power of AI and digital twin technology."
                </p>
                <div class="hero-actions">
                    <button class="cta-btn primary" on:click=move |_| actions.select_tab(Tab::Simulate)>
                        "🚀 Start Your Journey"
                    </button>
                    <button class="cta-btn secondary" on:click=move |_| actions.select_tab(Tab::Scenarios)>
                        "🎭 Explore Scenarios"
                    </button>
                </div>
            </div>
            <div class="features-preview">
                <h2>"What You Can Do"</h2>
                <div class="features-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
