use std::sync::Arc;

use anyhow::{Context, Result};
use axum::middleware;
use axum::{Router, extract::Request, response::Response};
use http::{HeaderValue, header};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::routes;
use super::static_files::guard_static_path;
use crate::api::state::{AppState, SharedState};
use crate::core::AppConfig;
use crate::fcm::FcmClient;

async fn set_static_cache_control(request: Request, next: middleware::Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

pub fn app(shared_state: SharedState) -> Router {
    let web_root = shared_state.config.web_root.clone();

    Router::new()
        .merge(routes::router())
        // Static server of assets for the companion web page
        .fallback_service(
            ServiceBuilder::new()
                .layer(middleware::from_fn(set_static_cache_control))
                .layer(middleware::from_fn(guard_static_path))
                .service(ServeDir::new(web_root).append_index_html_on_directories(false)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

// Run the server
pub async fn serve(config: AppConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Without a working provider there is nothing to serve
    let client = FcmClient::from_service_account_file(&config.credentials_path)
        .context("Failed to initialize FCM client")?;
    tracing::info!("Loaded FCM credentials for project {}", client.project_id());

    let addr = config.listen_addr();
    let app_state = AppState::new(Arc::new(client), config);
    let app = app(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("FCM relay listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
