use std::cell::RefCell;

use serde_json::json;

use super::*;
use crate::net::types::{
    AuthStatus, CommunityInsights, LoginRequest, Profile, RegisterRequest, RemoteScenario, CONNECTION_ERROR_MESSAGE,
};
use crate::state::Session;
use crate::state::ui::UiState;

// =========================================================================
// FakeBackend
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Predict(serde_json::Value),
    AuthStatus,
    Login(LoginRequest),
    Register(RegisterRequest),
    Logout,
    Scenarios,
    Insights,
    Chat(ChatRequest),
}

fn offline() -> ApiError {
    ApiError::Transport("connection refused".to_owned())
}

struct FakeBackend {
    calls: RefCell<Vec<Call>>,
    predict: Result<SimulationResult, ApiError>,
    auth_status: Result<AuthStatus, ApiError>,
    auth: Result<AuthUser, ApiError>,
    logout: Result<(), ApiError>,
    scenarios: Result<Vec<RemoteScenario>, ApiError>,
    insights: Result<CommunityInsights, ApiError>,
    chat: Result<Option<String>, ApiError>,
}

impl FakeBackend {
    /// Every endpoint unreachable.
    fn offline() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            predict: Err(offline()),
            auth_status: Err(offline()),
            auth: Err(offline()),
            logout: Err(offline()),
            scenarios: Err(offline()),
            insights: Err(offline()),
            chat: Err(offline()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for FakeBackend {
    async fn predict(&self, profile: &Profile) -> Result<SimulationResult, ApiError> {
        self.record(Call::Predict(serde_json::to_value(profile).unwrap()));
        self.predict.clone()
    }

    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.record(Call::AuthStatus);
        self.auth_status.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError> {
        self.record(Call::Login(request.clone()));
        self.auth.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthUser, ApiError> {
        self.record(Call::Register(request.clone()));
        self.auth.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record(Call::Logout);
        self.logout.clone()
    }

    async fn scenarios(&self) -> Result<Vec<RemoteScenario>, ApiError> {
        self.record(Call::Scenarios);
        self.scenarios.clone()
    }

    async fn community_insights(&self) -> Result<CommunityInsights, ApiError> {
        self.record(Call::Insights);
        self.insights.clone()
    }

    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>, ApiError> {
        self.record(Call::Chat(request.clone()));
        self.chat.clone()
    }
}

fn ada() -> AuthUser {
    AuthUser { user_id: "u1".to_owned(), email: "ada@example.com".to_owned() }
}

fn ada_profile() -> Profile {
    Profile {
        name: "Ada".to_owned(),
        age: Some(30),
        dream_career: "Researcher".to_owned(),
        habits: vec!["Exercise regularly".to_owned()],
        ..Profile::default()
    }
}

fn session_with_profile(profile: Profile) -> RefCell<Session> {
    let mut session = Session::default();
    session.simulation.profile = profile;
    RefCell::new(session)
}

// =========================================================================
// select_tab
// =========================================================================

#[test]
fn select_tab_twice_leaves_state_unchanged() {
    let store = RefCell::new(Session::default());
    store.borrow_mut().ui.select_scenario("health_wellness");
    select_tab(&store, Tab::Scenarios);
    let once = store.borrow().ui.clone();
    select_tab(&store, Tab::Scenarios);
    assert_eq!(store.borrow().ui, once);
    assert_eq!(once, UiState { active_tab: Tab::Scenarios, selected_scenario: None });
}

// =========================================================================
// submit_simulation
// =========================================================================

#[tokio::test]
async fn submit_simulation_end_to_end_sends_profile_and_stores_result() {
    let backend = FakeBackend {
        predict: Ok(serde_json::from_value(json!({ "score": 81, "message": "A bright research career ahead." }))
            .unwrap()),
        ..FakeBackend::offline()
    };
    let controller = SessionController::new(backend);
    let store = session_with_profile(ada_profile());

    controller.submit_simulation(&store).await;

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Predict(json!({
            "name": "Ada",
            "age": 30,
            "dreamCareer": "Researcher",
            "habits": ["Exercise regularly"]
        }))]
    );
    let session = store.borrow();
    let result = session.simulation.result.as_ref().unwrap();
    assert_eq!(result.score, Some(81.0));
    assert_eq!(result.message.as_deref(), Some("A bright research career ahead."));
    assert!(!session.simulation.loading);
}

#[tokio::test]
async fn submit_simulation_network_failure_stores_connection_fallback() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = session_with_profile(ada_profile());

    controller.submit_simulation(&store).await;

    let session = store.borrow();
    let result = session.simulation.result.as_ref().unwrap();
    assert_eq!(result.score, Some(0.0));
    assert_eq!(result.message.as_deref(), Some(CONNECTION_ERROR_MESSAGE));
    assert!(!session.simulation.loading);
}

#[tokio::test]
async fn submit_simulation_without_insights_keeps_them_absent() {
    let backend = FakeBackend {
        predict: Ok(serde_json::from_value(json!({ "score": 64, "message": "ok" })).unwrap()),
        ..FakeBackend::offline()
    };
    let controller = SessionController::new(backend);
    let store = session_with_profile(ada_profile());

    controller.submit_simulation(&store).await;

    assert!(store.borrow().simulation.result.as_ref().unwrap().insights.is_none());
}

#[tokio::test]
async fn submit_simulation_invalid_profile_makes_no_call() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = session_with_profile(Profile { age: Some(12), ..ada_profile() });

    controller.submit_simulation(&store).await;

    assert!(controller.backend().calls().is_empty());
    let session = store.borrow();
    assert!(session.simulation.result.is_none());
    assert!(session.simulation.form_error.is_some());
}

#[tokio::test]
async fn submit_simulation_while_pending_makes_no_call() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = session_with_profile(ada_profile());
    store.borrow_mut().simulation.loading = true;

    controller.submit_simulation(&store).await;

    assert!(controller.backend().calls().is_empty());
}

// =========================================================================
// login / register
// =========================================================================

fn store_with_credentials() -> RefCell<Session> {
    let mut session = Session::default();
    session.auth.open_modal();
    session.auth.form.email = "ada@example.com".to_owned();
    session.auth.form.password = "secret".to_owned();
    session.auth.form.name = "Ada".to_owned();
    RefCell::new(session)
}

#[tokio::test]
async fn login_success_sets_session_and_closes_modal() {
    let controller = SessionController::new(FakeBackend { auth: Ok(ada()), ..FakeBackend::offline() });
    let store = store_with_credentials();

    controller.login(&store).await;

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Login(LoginRequest { email: "ada@example.com".to_owned(), password: "secret".to_owned() })]
    );
    let session = store.borrow();
    assert_eq!(session.auth.user, Some(ada()));
    assert!(!session.auth.modal_open);
    assert!(session.auth.form.email.is_empty());
}

#[tokio::test]
async fn register_sends_name() {
    let controller = SessionController::new(FakeBackend { auth: Ok(ada()), ..FakeBackend::offline() });
    let store = store_with_credentials();

    controller.register(&store).await;

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Register(RegisterRequest {
            email: "ada@example.com".to_owned(),
            password: "secret".to_owned(),
            name: "Ada".to_owned(),
        })]
    );
    assert!(store.borrow().auth.is_authenticated());
}

#[tokio::test]
async fn login_rejected_surfaces_server_message_without_touching_session() {
    let rejected = ApiError::Rejected { status: 401, message: Some("Invalid credentials".to_owned()) };
    let controller = SessionController::new(FakeBackend { auth: Err(rejected), ..FakeBackend::offline() });
    let store = store_with_credentials();

    controller.login(&store).await;

    let session = store.borrow();
    assert_eq!(session.auth.user, None);
    assert!(session.auth.modal_open);
    assert_eq!(session.auth.error.as_deref(), Some("Invalid credentials"));
    assert!(!session.auth.pending);
}

#[tokio::test]
async fn login_rejected_without_message_uses_generic_fallback() {
    let rejected = ApiError::Rejected { status: 400, message: None };
    let controller = SessionController::new(FakeBackend { auth: Err(rejected), ..FakeBackend::offline() });
    let store = store_with_credentials();

    controller.login(&store).await;

    assert_eq!(store.borrow().auth.error.as_deref(), Some(AUTH_REJECTED_FALLBACK));
}

#[tokio::test]
async fn login_transport_failure_surfaces_fixed_message() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = store_with_credentials();

    controller.login(&store).await;

    let session = store.borrow();
    assert_eq!(session.auth.error.as_deref(), Some(AUTH_TRANSPORT_MESSAGE));
    assert!(!session.auth.is_authenticated());
}

// =========================================================================
// logout / check_auth_status
// =========================================================================

#[tokio::test]
async fn logout_clears_session_even_when_backend_fails() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = RefCell::new(Session::default());
    store.borrow_mut().auth.user = Some(ada());

    controller.logout(&store).await;

    assert_eq!(controller.backend().calls(), vec![Call::Logout]);
    let session = store.borrow();
    assert!(!session.auth.is_authenticated());
    assert_eq!(session.auth.user, None);
}

#[tokio::test]
async fn logout_clears_session_when_backend_succeeds() {
    let controller = SessionController::new(FakeBackend { logout: Ok(()), ..FakeBackend::offline() });
    let store = RefCell::new(Session::default());
    store.borrow_mut().auth.user = Some(ada());

    controller.logout(&store).await;

    assert_eq!(store.borrow().auth.user, None);
}

#[tokio::test]
async fn check_auth_status_adopts_authenticated_session() {
    let status = AuthStatus {
        authenticated: true,
        user_id: Some("u1".to_owned()),
        email: Some("ada@example.com".to_owned()),
    };
    let controller = SessionController::new(FakeBackend { auth_status: Ok(status), ..FakeBackend::offline() });
    let store = RefCell::new(Session::default());

    controller.check_auth_status(&store).await;

    assert_eq!(store.borrow().auth.user, Some(ada()));
}

#[tokio::test]
async fn check_auth_status_unauthenticated_stays_logged_out() {
    let controller = SessionController::new(FakeBackend {
        auth_status: Ok(AuthStatus::default()),
        ..FakeBackend::offline()
    });
    let store = RefCell::new(Session::default());

    controller.check_auth_status(&store).await;

    assert!(!store.borrow().auth.is_authenticated());
}

#[tokio::test]
async fn check_auth_status_failure_is_silent() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = RefCell::new(Session::default());

    controller.check_auth_status(&store).await;

    assert_eq!(*store.borrow(), Session::default());
}

// =========================================================================
// startup loads
// =========================================================================

#[tokio::test]
async fn startup_loads_fill_caches() {
    let scenario = RemoteScenario { name: Some("Career switch".to_owned()), ..RemoteScenario::default() };
    let insights = CommunityInsights { total_simulations: 12, ..CommunityInsights::default() };
    let controller = SessionController::new(FakeBackend {
        scenarios: Ok(vec![scenario.clone()]),
        insights: Ok(insights.clone()),
        ..FakeBackend::offline()
    });
    let store = RefCell::new(Session::default());

    controller.load_scenarios(&store).await;
    controller.load_community_insights(&store).await;

    let session = store.borrow();
    assert_eq!(session.community.scenarios, vec![scenario]);
    assert_eq!(session.community.insights, Some(insights));
}

#[tokio::test]
async fn failed_load_leaves_default_and_does_not_affect_other_load() {
    let insights = CommunityInsights { total_simulations: 3, ..CommunityInsights::default() };
    let controller = SessionController::new(FakeBackend { insights: Ok(insights), ..FakeBackend::offline() });
    let store = RefCell::new(Session::default());

    controller.load_scenarios(&store).await;
    controller.load_community_insights(&store).await;

    let session = store.borrow();
    assert!(session.community.scenarios.is_empty());
    assert_eq!(session.community.insights.as_ref().map(|i| i.total_simulations), Some(3));
}

#[tokio::test]
async fn failed_insights_load_leaves_none() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = RefCell::new(Session::default());

    controller.load_community_insights(&store).await;

    assert!(store.borrow().community.insights.is_none());
}

// =========================================================================
// send_chat_message
// =========================================================================

#[tokio::test]
async fn blank_chat_message_makes_no_call_and_keeps_reply() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = RefCell::new(Session::default());
    store.borrow_mut().chat.reply = Some("Earlier reply".to_owned());

    controller.send_chat_message(&store, "").await;
    controller.send_chat_message(&store, "   \t").await;

    assert!(controller.backend().calls().is_empty());
    assert_eq!(store.borrow().chat.reply.as_deref(), Some("Earlier reply"));
}

#[tokio::test]
async fn chat_message_without_name_uses_anonymous_user() {
    let controller = SessionController::new(FakeBackend {
        chat: Ok(Some("Try research internships.".to_owned())),
        ..FakeBackend::offline()
    });
    let store = RefCell::new(Session::default());

    controller.send_chat_message(&store, "What career should I choose?").await;

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Chat(ChatRequest {
            message: "What career should I choose?".to_owned(),
            user_id: "anonymous".to_owned(),
        })]
    );
    let session = store.borrow();
    assert_eq!(session.chat.reply.as_deref(), Some("Try research internships."));
    assert!(!session.chat.sending);
}

#[tokio::test]
async fn chat_message_uses_entered_name() {
    let controller = SessionController::new(FakeBackend { chat: Ok(Some("Hi Ada".to_owned())), ..FakeBackend::offline() });
    let store = session_with_profile(ada_profile());

    controller.send_chat_message(&store, "Hello").await;

    match controller.backend().calls().as_slice() {
        [Call::Chat(request)] => assert_eq!(request.user_id, "Ada"),
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[tokio::test]
async fn chat_failure_replaces_reply_with_apology() {
    let controller = SessionController::new(FakeBackend::offline());
    let store = RefCell::new(Session::default());
    store.borrow_mut().chat.reply = Some("Earlier reply".to_owned());

    controller.send_chat_message(&store, "Hello").await;

    assert_eq!(store.borrow().chat.reply.as_deref(), Some(CHAT_APOLOGY));
}
