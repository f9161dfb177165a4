use super::*;

fn ada() -> AuthUser {
    AuthUser { user_id: "u1".to_owned(), email: "ada@example.com".to_owned() }
}

#[test]
fn default_state_is_logged_out_with_closed_modal() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.modal_open);
    assert_eq!(state.mode, AuthMode::Login);
    assert_eq!(state.nav_label(), "🔐 Login");
}

#[test]
fn toggle_mode_flips_and_clears_error() {
    let mut state = AuthState { error: Some("bad".to_owned()), ..AuthState::default() };
    state.toggle_mode();
    assert_eq!(state.mode, AuthMode::Register);
    assert_eq!(state.error, None);
    state.toggle_mode();
    assert_eq!(state.mode, AuthMode::Login);
}

#[test]
fn begin_attempt_rejects_second_concurrent_attempt() {
    let mut state = AuthState::default();
    assert!(state.begin_attempt());
    assert!(!state.begin_attempt());
}

#[test]
fn successful_attempt_sets_session_closes_modal_and_clears_form() {
    let mut state = AuthState::default();
    state.open_modal();
    state.form.email = "ada@example.com".to_owned();
    state.form.password = "secret".to_owned();
    state.begin_attempt();
    state.finish_attempt(Ok(ada()));
    assert_eq!(state.user, Some(ada()));
    assert!(!state.modal_open);
    assert!(!state.pending);
    assert_eq!(state.form, AuthForm::default());
    assert_eq!(state.nav_label(), "👤 ada@example.com (Logout)");
}

#[test]
fn failed_attempt_keeps_session_and_modal() {
    let mut state = AuthState { user: Some(ada()), ..AuthState::default() };
    state.open_modal();
    state.begin_attempt();
    state.finish_attempt(Err("Email already registered".to_owned()));
    assert_eq!(state.user, Some(ada()));
    assert!(state.modal_open);
    assert_eq!(state.error.as_deref(), Some("Email already registered"));
    assert!(!state.pending);
}

#[test]
fn restore_only_sets_session_when_present() {
    let mut state = AuthState::default();
    state.restore(None);
    assert!(!state.is_authenticated());
    state.restore(Some(ada()));
    assert!(state.is_authenticated());
}

#[test]
fn clear_logs_out() {
    let mut state = AuthState { user: Some(ada()), ..AuthState::default() };
    state.clear();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
}

#[test]
fn form_requests_trim_email_and_name_but_not_password() {
    let form = AuthForm {
        email: "  ada@example.com ".to_owned(),
        password: " pass ".to_owned(),
        name: " Ada ".to_owned(),
    };
    let login = form.login_request();
    assert_eq!(login.email, "ada@example.com");
    assert_eq!(login.password, " pass ");
    let register = form.register_request();
    assert_eq!(register.name, "Ada");
}

#[test]
fn switch_prompt_points_at_the_other_mode() {
    assert_eq!(AuthMode::Login.switch_prompt(), "Don't have an account? ");
    assert_eq!(AuthMode::Login.toggled().title(), "Register");
    assert_eq!(AuthMode::Register.switch_prompt(), "Already have an account? ");
}
