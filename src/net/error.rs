//! Error type for calls against the activities backend.
//!
//! ERROR HANDLING
//! ==============
//! Only `Rejected` carries text meant for the user. Every other variant means
//! the request never produced a usable answer and the UI substitutes a fixed
//! message for it.

use super::types::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection refused, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response on an endpoint without a failure body contract.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// The backend answered non-2xx with a JSON failure body.
    #[error("rejected with status {status}")]
    Rejected { status: u16, body: ErrorBody },
}

impl ApiError {
    /// True when the backend itself refused the mutation.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Failure body of a rejection, if this is one.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }
}
