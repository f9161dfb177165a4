//! The single route: header, navigation, the active panel, and the auth modal.
//!
//! ARCHITECTURE
//! ============
//! Panels are switched on `UiState::active_tab` rather than by URL, so tab
//! changes never reload state.

use leptos::prelude::*;

use crate::components::ar_vr_panel::ArVrPanel;
use crate::components::auth_modal::AuthModal;
use crate::components::chat_panel::ChatPanel;
use crate::components::community_panel::CommunityPanel;
use crate::components::nav_bar::NavBar;
use crate::components::profile_wizard::ProfileWizard;
use crate::components::result_panel::ResultPanel;
use crate::components::scenario_grid::ScenarioGrid;
use crate::components::simulation_form::SimulationForm;
use crate::components::technical_docs::TechnicalDocs;
use crate::pages::about::AboutPanel;
use crate::pages::dashboard::DashboardPanel;
use crate::pages::home::HomePanel;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn SimulatorPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = Memo::new(move |_| ui.with(|u| u.active_tab));

    view! {
        <div class="app">
            <header class="header">
                <div class="container">
                    <h1 class="logo">"Parallel You"</h1>
                    <ProfileWizard />
                    <p class="tagline">"AI-Generated Personalized Reality Simulator"</p>
                    <div class="research-badges">
                        <span class="badge">"🔬 Research-Backed"</span>
                    </div>
                </div>
            </header>
            <NavBar />
            <main class="main">
                <div class="container">{move || panel(active_tab.get())}</div>
            </main>
            <footer class="footer">
                <div class="container">
                    <p>"© 2024 Parallel You - AI-Generated Personalized Reality Simulator"</p>
                </div>
            </footer>
            <AuthModal />
        </div>
    }
}

fn panel(tab: Tab) -> AnyView {
    match tab {
        Tab::Home => view! { <HomePanel /> }.into_any(),
        Tab::Simulate => {
            view! {
                <div class="simulation-panel">
                    <div class="panel-header">
                        <h2>"Create Your Digital Twin"</h2>
                        <p>"Enter your details to simulate alternate life paths and career outcomes"</p>
                    </div>
                    <SimulationForm />
                    <ResultPanel />
                </div>
            }
                .into_any()
        }
        Tab::Dashboard => view! { <DashboardPanel /> }.into_any(),
        Tab::Scenarios => view! { <ScenarioGrid /> }.into_any(),
        Tab::Community => view! { <CommunityPanel /> }.into_any(),
        Tab::Chat => view! { <ChatPanel /> }.into_any(),
        Tab::ArVr => view! { <ArVrPanel /> }.into_any(),
        Tab::Technical => view! { <TechnicalDocs /> }.into_any(),
        Tab::About => view! { <AboutPanel /> }.into_any(),
    }
}
