//! Router for the notification API

use axum::{
    Json, Router,
    body::to_bytes,
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::any,
};
use http::{HeaderValue, Method, StatusCode, header};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use super::public::{NotificationRequest, NotificationResponse};
use crate::api::public::SendError;
use crate::api::state::SharedState;
use crate::fcm::Message;

fn validate(request: &NotificationRequest) -> Result<(), SendError> {
    if request.token.is_empty() {
        return Err(SendError::MissingToken);
    }
    if request.title.is_empty() || request.body.is_empty() {
        return Err(SendError::MissingContent);
    }
    Ok(())
}

// Send a notification to a single device. Registered for every method
// so that preflight and wrong-method requests get a JSON answer. The
// body is only read after the method check and is not size limited.
async fn send_notification(
    State(state): State<SharedState>,
    request: Request,
) -> Result<Response, SendError> {
    if *request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if *request.method() != Method::POST {
        return Err(SendError::MethodNotAllowed);
    }

    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|_| SendError::InvalidJson)?;
    let request: NotificationRequest =
        serde_json::from_slice(&body).map_err(|_| SendError::InvalidJson)?;
    validate(&request)?;

    let message =
        Message::new(&request.token, &request.title, &request.body).with_data(request.data);
    let message_id = state.provider.send(&message).await?;
    tracing::info!("Successfully sent FCM message. ID: {}", message_id);

    Ok(Json(NotificationResponse::sent(message_id)).into_response())
}

/// Create the notification router
pub fn router() -> Router<SharedState> {
    let headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ));

    Router::new()
        .route("/send-notification", any(send_notification))
        .layer(headers)
}
