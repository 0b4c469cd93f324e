use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app::workos::WorkOsError;

/// Application error type for unified error handling across the app.
#[derive(Debug)]
pub enum AppError {
    /// Upstream provider call failed (500 Internal Server Error)
    Provider(WorkOsError),

    /// Session user has no directory record on a path that assumes one (500)
    DirectoryLookup(String),

    /// Handler reached without the session it assumes (500)
    SessionMissing,

    /// Template rendering failed (500)
    Render(askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Provider(err) => {
                tracing::error!(%err, "provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::DirectoryLookup(email) => {
                tracing::error!(%email, "session user has no directory record");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::SessionMissing => {
                tracing::error!("handler reached without a session");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Render(err) => {
                tracing::error!(%err, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Template error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<WorkOsError> for AppError {
    fn from(err: WorkOsError) -> Self {
        AppError::Provider(err)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err)
    }
}
