//! API routes module

pub mod notification;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Send a push notification to a single device
        .merge(notification::router())
}
