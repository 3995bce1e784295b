//! Push delivery through Firebase Cloud Messaging
pub mod client;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use errors::ProviderError;
pub use models::{Message, Notification, ServiceAccountKey};

use async_trait::async_trait;

/// Something that can deliver a message to a single device and hand
/// back the provider's message id.
#[async_trait]
pub trait PushProvider: Send + Sync {
    async fn send(&self, message: &Message) -> Result<String, ProviderError>;
}
