//! Application shell, context wiring, and the action handle views use.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per state slice, a [`SessionSignals`] bundle
//! that adapts them to [`SessionStore`], and an [`Actions`] handle that runs
//! controller operations on the UI thread. Startup loads fire once when the
//! app is created in the browser.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::controller::{self, AppController};
use crate::net::api::HttpBackend;
use crate::net::config::ApiConfig;
use crate::pages::simulator::SimulatorPage;
use crate::state::SessionStore;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::community::CommunityState;
use crate::state::simulation::SimulationState;
use crate::state::ui::{Tab, UiState};

/// HTML document rendered by the host server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Reactive session state, one signal per slice.
#[derive(Clone, Copy)]
pub struct SessionSignals {
    pub ui: RwSignal<UiState>,
    pub auth: RwSignal<AuthState>,
    pub simulation: RwSignal<SimulationState>,
    pub chat: RwSignal<ChatState>,
    pub community: RwSignal<CommunityState>,
}

impl SessionSignals {
    fn new() -> Self {
        Self {
            ui: RwSignal::new(UiState::default()),
            auth: RwSignal::new(AuthState::default()),
            simulation: RwSignal::new(SimulationState::default()),
            chat: RwSignal::new(ChatState::default()),
            community: RwSignal::new(CommunityState::default()),
        }
    }

    fn provide(self) {
        provide_context(self);
        provide_context(self.ui);
        provide_context(self.auth);
        provide_context(self.simulation);
        provide_context(self.chat);
        provide_context(self.community);
    }
}

impl SessionStore for SessionSignals {
    fn with_ui<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R> {
        self.ui.try_update(f)
    }

    fn with_auth<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        self.auth.try_update(f)
    }

    fn with_simulation<R>(&self, f: impl FnOnce(&mut SimulationState) -> R) -> Option<R> {
        self.simulation.try_update(f)
    }

    fn with_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        self.chat.try_update(f)
    }

    fn with_community<R>(&self, f: impl FnOnce(&mut CommunityState) -> R) -> Option<R> {
        self.community.try_update(f)
    }
}

/// Copyable handle for triggering controller operations from event handlers.
///
/// Backend calls only run in the browser; during SSR they are skipped.
#[derive(Clone, Copy)]
pub struct Actions {
    session: SessionSignals,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    controller: StoredValue<AppController>,
}

impl Actions {
    pub fn new(session: SessionSignals, controller: AppController) -> Self {
        Self { session, controller: StoredValue::new(controller) }
    }

    pub fn select_tab(self, tab: Tab) {
        controller::select_tab(&self.session, tab);
    }

    pub fn submit_simulation(self) {
        self.spawn(|c, s| async move { c.submit_simulation(&s).await });
    }

    pub fn login(self) {
        self.spawn(|c, s| async move { c.login(&s).await });
    }

    pub fn register(self) {
        self.spawn(|c, s| async move { c.register(&s).await });
    }

    pub fn logout(self) {
        self.spawn(|c, s| async move { c.logout(&s).await });
    }

    pub fn send_chat_message(self, text: String) {
        self.spawn(|c, s| async move { c.send_chat_message(&s, &text).await });
    }

    /// Session-start loads. Each runs independently.
    pub fn startup(self) {
        self.spawn(|c, s| async move { c.check_auth_status(&s).await });
        self.spawn(|c, s| async move { c.load_scenarios(&s).await });
        self.spawn(|c, s| async move { c.load_community_insights(&s).await });
    }

    fn spawn<F, Fut>(self, op: F)
    where
        F: FnOnce(AppController, SessionSignals) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let controller = self.controller.get_value();
            leptos::task::spawn_local(op(controller, self.session));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = op;
        }
    }
}

/// Root application component with context providers and routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionSignals::new();
    session.provide();

    let controller = AppController::new(HttpBackend::new(ApiConfig::from_build_env()));
    let actions = Actions::new(session, controller);
    provide_context(actions);

    Effect::new(move || actions.startup());

    view! {
        <Title text="Parallel You" />
        <Router>
            <Routes fallback=|| "Not found.">
                <Route path=StaticSegment("") view=SimulatorPage />
            </Routes>
        </Router>
    }
}
