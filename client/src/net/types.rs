//! Wire DTOs for the JSON-over-HTTP backend.
//!
//! DESIGN
//! ======
//! Response types decode leniently: a field that is missing, `null`, or of an
//! unexpected shape falls back to its empty default instead of failing the
//! whole body. Views can then render optional sections by checking for
//! emptiness, never by handling decode errors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Message stored when the prediction backend cannot be reached.
pub const CONNECTION_ERROR_MESSAGE: &str = "Error connecting to simulation engine";

// =============================================================================
// PROFILE
// =============================================================================

/// Onboarding form values sent to `POST /predict`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_career: String,
    #[serde(default)]
    pub dream_career: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub education: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Selected habits in the order they were toggled on. Never contains duplicates.
    #[serde(default)]
    pub habits: Vec<String>,
}

// =============================================================================
// SIMULATION RESULT
// =============================================================================

/// Prediction returned by the backend, stored verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub insights: Option<Insights>,
    #[serde(default, deserialize_with = "lenient")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub media: Vec<MediaItem>,
    #[serde(default, deserialize_with = "lenient")]
    pub journal_entry: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub multimedia_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ar_vr_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_data: Option<AvatarData>,
    #[serde(default, deserialize_with = "lenient")]
    pub simulation_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
    /// Fields this client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SimulationResult {
    /// Fallback stored when `/predict` cannot be reached or decoded.
    pub fn connection_error() -> Self {
        Self {
            score: Some(0.0),
            message: Some(CONNECTION_ERROR_MESSAGE.to_owned()),
            ..Self::default()
        }
    }
}

/// Qualitative insight labels attached to a prediction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub career_growth_potential: Option<String>,
    #[serde(default)]
    pub time_to_success: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub confidence_level: Option<String>,
}

/// Generated image or video attached to a prediction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

impl MediaItem {
    /// Anything that is not an image is rendered as a video.
    pub fn is_image(&self) -> bool {
        self.kind == "image"
    }
}

/// 3D avatar descriptor for the AR/VR panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarData {
    #[serde(default, deserialize_with = "lenient")]
    pub avatar_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub personality_traits: PersonalityTraits,
}

/// Trait scores on a 0–100 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    #[serde(default, deserialize_with = "lenient")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub creativity: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub analytical: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub social: f64,
}

impl PersonalityTraits {
    /// Traits in display order, with their labels.
    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        [
            ("Confidence", self.confidence),
            ("Creativity", self.creativity),
            ("Analytical", self.analytical),
            ("Social", self.social),
        ]
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Body of `GET /auth/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub authenticated: bool,
    #[serde(default, deserialize_with = "optional_id")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

impl AuthStatus {
    /// Identity of an existing session. `None` unless the backend reports
    /// `authenticated: true` together with a user id.
    pub fn into_user(self) -> Option<AuthUser> {
        if !self.authenticated {
            return None;
        }
        let user_id = self.user_id.filter(|id| !id.is_empty())?;
        Some(AuthUser { user_id, email: self.email.unwrap_or_default() })
    }
}

/// Identity of the signed-in user, as returned by login/register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(deserialize_with = "required_id")]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Structured rejection body (`{"error": "..."}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

// =============================================================================
// SCENARIOS / COMMUNITY
// =============================================================================

/// Body of `GET /scenarios`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ScenariosResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub scenarios: Vec<RemoteScenario>,
}

/// Scenario shared by the backend. All fields are optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteScenario {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, alias = "title", deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Body of `GET /community/insights`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityInsights {
    #[serde(default, deserialize_with = "lenient")]
    pub total_simulations: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub popular_careers: Vec<PopularCareer>,
    /// Education level (`bachelor`, `high-school`, ...) to average score.
    #[serde(default, deserialize_with = "lenient")]
    pub education_impact: BTreeMap<String, f64>,
}

/// One entry of the popular-careers ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularCareer {
    #[serde(default, alias = "_id", deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub count: u64,
}

// =============================================================================
// CHAT
// =============================================================================

/// Body of `POST /ai/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

/// Reply from `POST /ai/chat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "lenient")]
    pub response: Option<String>,
}

/// Decode a field, substituting its default when the JSON value has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Identifier text from a JSON string or number.
fn id_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id_text(serde_json::Value::deserialize(deserializer)?))
}

fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_text(value).ok_or_else(|| serde::de::Error::custom("user_id must be a string or number"))
}
