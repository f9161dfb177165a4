//! Session & navigation controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action maps to at most one backend call. The controller reads
//! what it needs from the [`SessionStore`], awaits the call without holding
//! any state borrow, then folds the outcome back in.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Each failure is logged and replaced by the
//! safe default for its operation, so one failed call never blocks or
//! invalidates another panel. There is no retry.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::net::api::{Backend, HttpBackend};
use crate::net::error::ApiError;
use crate::net::types::{AuthUser, ChatRequest, SimulationResult};
use crate::state::SessionStore;
use crate::state::auth::{AuthForm, AuthMode, AuthState};
use crate::state::simulation::SimulationState;
use crate::state::ui::Tab;

/// Shown when the backend rejects credentials without saying why.
pub const AUTH_REJECTED_FALLBACK: &str = "Authentication failed";
/// Shown when the auth backend cannot be reached.
pub const AUTH_TRANSPORT_MESSAGE: &str = "Authentication failed. Please try again.";
/// Stored as the chat reply when the chat backend cannot be reached.
pub const CHAT_APOLOGY: &str = "Sorry, I had trouble processing your message. Please try again.";

/// Controller wired to the production backend.
pub type AppController = SessionController<HttpBackend>;

/// Mediates every backend call on behalf of the views.
#[derive(Clone, Debug, Default)]
pub struct SessionController<B> {
    backend: B,
}

/// Switch the visible panel. Never touches the backend.
pub fn select_tab<S: SessionStore>(store: &S, tab: Tab) {
    store.with_ui(|ui| ui.select_tab(tab));
}

impl<B: Backend> SessionController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Submit the onboarding form to the prediction backend.
    ///
    /// Invalid or already-pending submissions send nothing.
    pub async fn submit_simulation<S: SessionStore>(&self, store: &S) {
        let Some(profile) = store.with_simulation(SimulationState::begin_submit).flatten() else {
            return;
        };
        let result = match self.backend.predict(&profile).await {
            Ok(result) => result,
            Err(e) => {
                leptos::logging::warn!("simulation request failed: {e}");
                SimulationResult::connection_error()
            }
        };
        store.with_simulation(|s| s.finish_submit(result));
    }

    /// Sign in with the credentials typed into the auth modal.
    pub async fn login<S: SessionStore>(&self, store: &S) {
        self.submit_credentials(store, AuthMode::Login).await;
    }

    /// Create an account with the credentials typed into the auth modal.
    pub async fn register<S: SessionStore>(&self, store: &S) {
        self.submit_credentials(store, AuthMode::Register).await;
    }

    async fn submit_credentials<S: SessionStore>(&self, store: &S, mode: AuthMode) {
        let Some(form) = store
            .with_auth(|auth| auth.begin_attempt().then(|| auth.form.clone()))
            .flatten()
        else {
            return;
        };
        let outcome = self.authenticate(mode, &form).await;
        store.with_auth(|auth| auth.finish_attempt(outcome));
    }

    /// Send credentials and translate failures into the message shown to the user.
    ///
    /// # Errors
    ///
    /// Returns the server's message for a rejected attempt (or a generic one if
    /// the server gave none), or a fixed message when the call itself failed.
    pub async fn authenticate(&self, mode: AuthMode, form: &AuthForm) -> Result<AuthUser, String> {
        let outcome = match mode {
            AuthMode::Login => self.backend.login(&form.login_request()).await,
            AuthMode::Register => self.backend.register(&form.register_request()).await,
        };
        outcome.map_err(|e| {
            leptos::logging::warn!("{} failed: {e}", mode.title());
            auth_error_message(&e)
        })
    }

    /// Tell the backend, then log out locally whatever it answered.
    pub async fn logout<S: SessionStore>(&self, store: &S) {
        if let Err(e) = self.backend.logout().await {
            leptos::logging::warn!("logout request failed: {e}");
        }
        store.with_auth(AuthState::clear);
    }

    /// Adopt an existing backend session, if there is one.
    pub async fn check_auth_status<S: SessionStore>(&self, store: &S) {
        let user = match self.backend.auth_status().await {
            Ok(status) => status.into_user(),
            Err(e) => {
                leptos::logging::log!("auth status check failed: {e}");
                None
            }
        };
        store.with_auth(|auth| auth.restore(user));
    }

    /// Fill the shared-scenario list. Failure leaves it empty.
    pub async fn load_scenarios<S: SessionStore>(&self, store: &S) {
        match self.backend.scenarios().await {
            Ok(scenarios) => {
                store.with_community(|c| c.set_scenarios(scenarios));
            }
            Err(e) => leptos::logging::warn!("error fetching scenarios: {e}"),
        }
    }

    /// Fill the community statistics. Failure leaves them unset.
    pub async fn load_community_insights<S: SessionStore>(&self, store: &S) {
        match self.backend.community_insights().await {
            Ok(insights) => {
                store.with_community(|c| c.set_insights(Some(insights)));
            }
            Err(e) => leptos::logging::warn!("error fetching community insights: {e}"),
        }
    }

    /// Ask the chat backend and keep its single reply.
    ///
    /// Blank text is ignored without a call.
    pub async fn send_chat_message<S: SessionStore>(&self, store: &S, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let user_id = store
            .with_simulation(|s| s.chat_user_id())
            .unwrap_or_else(|| "anonymous".to_owned());
        store.with_chat(|c| c.sending = true);
        let request = ChatRequest { message: text.to_owned(), user_id };
        let reply = match self.backend.chat(&request).await {
            Ok(reply) => reply.unwrap_or_default(),
            Err(e) => {
                leptos::logging::warn!("chat request failed: {e}");
                CHAT_APOLOGY.to_owned()
            }
        };
        store.with_chat(|c| c.apply_reply(reply));
    }
}

fn auth_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { .. } => err.server_message().unwrap_or(AUTH_REJECTED_FALLBACK).to_owned(),
        ApiError::Transport(_) => AUTH_TRANSPORT_MESSAGE.to_owned(),
    }
}
