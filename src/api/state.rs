use std::sync::Arc;

use crate::core::AppConfig;
use crate::fcm::PushProvider;

/// Shared by every request. Built once at startup and never mutated.
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub provider: Arc<dyn PushProvider>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(provider: Arc<dyn PushProvider>, config: AppConfig) -> Self {
        Self { provider, config }
    }
}
