//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `simulation`, `chat`, etc.) so individual
//! components can depend on small focused models. Every model is a plain
//! struct with pure transition methods. The controller reaches them through
//! [`SessionStore`], implemented over reactive signals in `app` and over a
//! plain [`Session`] for headless use.

pub mod auth;
pub mod chat;
pub mod community;
pub mod simulation;
pub mod ui;

use std::cell::RefCell;

use self::auth::AuthState;
use self::chat::ChatState;
use self::community::CommunityState;
use self::simulation::SimulationState;
use self::ui::UiState;

/// Mutable access to each slice of session state.
///
/// Every method runs `f` synchronously and returns its value, or `None` if the
/// state no longer exists (the view that owned it was torn down).
pub trait SessionStore {
    fn with_ui<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R>;
    fn with_auth<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R>;
    fn with_simulation<R>(&self, f: impl FnOnce(&mut SimulationState) -> R) -> Option<R>;
    fn with_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R>;
    fn with_community<R>(&self, f: impl FnOnce(&mut CommunityState) -> R) -> Option<R>;
}

/// All in-memory state of one page session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub ui: UiState,
    pub auth: AuthState,
    pub simulation: SimulationState,
    pub chat: ChatState,
    pub community: CommunityState,
}

impl SessionStore for RefCell<Session> {
    fn with_ui<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut().ui))
    }

    fn with_auth<R>(&self, f: impl FnOnce(&mut AuthState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut().auth))
    }

    fn with_simulation<R>(&self, f: impl FnOnce(&mut SimulationState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut().simulation))
    }

    fn with_chat<R>(&self, f: impl FnOnce(&mut ChatState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut().chat))
    }

    fn with_community<R>(&self, f: impl FnOnce(&mut CommunityState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut().community))
    }
}
