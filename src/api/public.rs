//! Public API types

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use thiserror::Error;

use crate::fcm::ProviderError;

// Errors

/// Everything that can go wrong while handling a send request. The
/// `Display` text is returned verbatim to the caller.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Method not allowed. Use POST")]
    MethodNotAllowed,

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Device token is required")]
    MissingToken,

    #[error("Title and body are required")]
    MissingContent,

    #[error("Failed to send notification: {0}")]
    Provider(#[from] ProviderError),
}

impl SendError {
    pub fn status(&self) -> StatusCode {
        match self {
            SendError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SendError::InvalidJson | SendError::MissingToken | SendError::MissingContent => {
                StatusCode::BAD_REQUEST
            }
            SendError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `SendError` into an Axum compatible response.
impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        match &self {
            SendError::Provider(err) => tracing::error!("Error sending FCM message: {}", err),
            other => tracing::debug!("Rejected notification request: {}", other),
        }

        let status = self.status();
        let body = notification::NotificationResponse::failed(self.to_string());
        (status, Json(body)).into_response()
    }
}

// Re-export public types from each route

pub mod notification {
    pub use crate::api::routes::notification::public::*;
}
