//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session identity is an `Option<AuthUser>`, so "user id and email are
//! present iff authenticated" holds by construction. The modal fields live
//! beside it because only a successful login/register closes the modal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthUser, LoginRequest, RegisterRequest};

/// Which credential form the auth modal shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    /// Lead-in for the button that switches to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? ",
            AuthMode::Register => "Already have an account? ",
        }
    }
}

/// Credential fields typed into the auth modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl AuthForm {
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }

    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            name: self.name.trim().to_owned(),
        }
    }
}

/// Authentication state plus the auth modal that edits it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub modal_open: bool,
    pub mode: AuthMode,
    pub form: AuthForm,
    /// Message shown in the modal after a failed attempt.
    pub error: Option<String>,
    pub pending: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
        self.error = None;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.error = None;
    }

    /// Switch between login and register without touching the session.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.error = None;
    }

    /// Mark an attempt as started. Returns `false` if one is already in flight.
    pub fn begin_attempt(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Fold a login/register outcome into state.
    ///
    /// Success replaces the session, closes the modal, and clears the form.
    /// Failure only records the message.
    pub fn finish_attempt(&mut self, outcome: Result<AuthUser, String>) {
        self.pending = false;
        match outcome {
            Ok(user) => {
                self.user = Some(user);
                self.modal_open = false;
                self.form = AuthForm::default();
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Adopt an existing backend session found at startup.
    pub fn restore(&mut self, user: Option<AuthUser>) {
        if let Some(user) = user {
            self.user = Some(user);
        }
    }

    /// Drop the local session.
    pub fn clear(&mut self) {
        self.user = None;
    }

    /// Label for the navigation-bar auth button.
    pub fn nav_label(&self) -> String {
        match &self.user {
            Some(user) => format!("👤 {} (Logout)", user.email),
            None => "🔐 Login".to_owned(),
        }
    }
}
