//! Error type for calls across the backend boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend call.
///
/// Views never see this type directly: the controller folds every variant
/// into a renderable fallback value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (network error,
    /// non-JSON body, body that does not match the expected schema).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },
}

impl ApiError {
    /// Server-provided message for a rejected call, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            Self::Transport(_) => None,
        }
    }

    pub(crate) fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}
