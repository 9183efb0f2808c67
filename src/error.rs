//! Error types for the activity API.
//!
//! Validation failures carry the exact message returned to clients in the
//! `detail` field. Store failures are logged and reported generically.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::ActivityNotFound | ActivityError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            ActivityError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            ActivityError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            ActivityError::Store(e) => {
                tracing::error!(error = %e, "activity store failure");
                "Internal store error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type ActivityResult<T> = Result<T, ActivityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_client_statuses() {
        assert_eq!(
            ActivityError::ActivityNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ActivityError::ParticipantNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ActivityError::AlreadySignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn store_errors_are_internal() {
        let err: ActivityError = StoreError::Unavailable("offline".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn messages_match_api_contract() {
        assert_eq!(ActivityError::ActivityNotFound.to_string(), "Activity not found");
        assert_eq!(
            ActivityError::AlreadySignedUp.to_string(),
            "Student already signed up"
        );
        assert_eq!(
            ActivityError::ParticipantNotFound.to_string(),
            "Participant not found"
        );
    }
}
