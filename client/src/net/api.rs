//! Backend boundary: one async method per endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a transport error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are read as text first and decoded by plain functions, so status
//! classification and decoding are testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::error::ApiError;
use super::types::{
    AuthStatus, AuthUser, ChatReply, ChatRequest, CommunityInsights, ErrorBody, LoginRequest, Profile,
    RegisterRequest, RemoteScenario, ScenariosResponse, SimulationResult,
};

/// Capabilities the session controller needs from the backend.
///
/// `?Send` because browser futures are tied to the UI thread.
#[async_trait::async_trait(?Send)]
pub trait Backend {
    /// `POST /predict`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the call fails or the body is not a prediction.
    async fn predict(&self, profile: &Profile) -> Result<SimulationResult, ApiError>;

    /// `GET /auth/status`, with credentials.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn auth_status(&self) -> Result<AuthStatus, ApiError>;

    /// `POST /auth/login`, with credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the server message when the
    /// credentials are refused.
    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError>;

    /// `POST /auth/register`, with credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the server message when
    /// registration is refused.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthUser, ApiError>;

    /// `POST /auth/logout`, with credentials. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /scenarios`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn scenarios(&self) -> Result<Vec<RemoteScenario>, ApiError>;

    /// `GET /community/insights`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn community_insights(&self) -> Result<CommunityInsights, ApiError>;

    /// `POST /ai/chat`. Returns the reply text, if the backend sent one.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or a non-success status.
    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>, ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

/// Plain JSON-over-HTTP backend at a fixed origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpBackend {
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Send one request and return `(status, body text)`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        credentials: bool,
    ) -> Result<(u16, String), ApiError> {
        let url = self.config.endpoint(path);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if credentials {
                builder = builder.credentials(web_sys::RequestCredentials::Include);
            }
            let resp = match body {
                Some(json) => {
                    builder
                        .header("Content-Type", "application/json")
                        .body(json)
                        .map_err(ApiError::transport)?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(ApiError::transport)?;
            let status = resp.status();
            let text = resp.text().await.map_err(ApiError::transport)?;
            Ok((status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, body, credentials);
            Err(ApiError::Transport(format!("{url}: not available on server")))
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        credentials: bool,
    ) -> Result<(u16, String), ApiError> {
        let json = serde_json::to_string(body).map_err(ApiError::transport)?;
        self.send(Method::Post, path, Some(json), credentials).await
    }
}

#[async_trait::async_trait(?Send)]
impl Backend for HttpBackend {
    async fn predict(&self, profile: &Profile) -> Result<SimulationResult, ApiError> {
        let (_status, text) = self.post_json("/predict", profile, false).await?;
        decode_prediction(&text)
    }

    async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        let (status, text) = self.send(Method::Get, "/auth/status", None, true).await?;
        decode_response(status, &text)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthUser, ApiError> {
        let (status, text) = self.post_json("/auth/login", request, true).await?;
        decode_response(status, &text)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthUser, ApiError> {
        let (status, text) = self.post_json("/auth/register", request, true).await?;
        decode_response(status, &text)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let (status, text) = self.send(Method::Post, "/auth/logout", None, true).await?;
        if is_success(status) {
            Ok(())
        } else {
            Err(rejection(status, &text))
        }
    }

    async fn scenarios(&self) -> Result<Vec<RemoteScenario>, ApiError> {
        let (status, text) = self.send(Method::Get, "/scenarios", None, false).await?;
        decode_response::<ScenariosResponse>(status, &text).map(|body| body.scenarios)
    }

    async fn community_insights(&self) -> Result<CommunityInsights, ApiError> {
        let (status, text) = self.send(Method::Get, "/community/insights", None, false).await?;
        decode_response(status, &text)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<Option<String>, ApiError> {
        let (status, text) = self.post_json("/ai/chat", request, false).await?;
        decode_response::<ChatReply>(status, &text).map(|reply| reply.response)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a success body, or turn a non-success status into a rejection.
fn decode_response<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(rejection(status, text));
    }
    serde_json::from_str(text).map_err(ApiError::transport)
}

/// The prediction backend reports its own failures as a prediction body, so
/// the status is not consulted.
fn decode_prediction(text: &str) -> Result<SimulationResult, ApiError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(ApiError::transport)?;
    if !value.is_object() {
        return Err(ApiError::Transport("prediction body is not an object".to_owned()));
    }
    serde_json::from_value(value).map_err(ApiError::transport)
}

fn rejection(status: u16, text: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(text).ok().and_then(|body| body.error);
    ApiError::Rejected { status, message }
}
