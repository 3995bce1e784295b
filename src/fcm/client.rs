use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use tokio::sync::Mutex;

use super::PushProvider;
use super::errors::ProviderError;
use super::models::*;

const FCM_API_URL: &str = "https://fcm.googleapis.com";
const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
// Refresh the access token when it's this close to expiring
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Firebase Cloud Messaging client for the HTTP v1 API.
///
/// Authenticates with a service account and caches the OAuth2 access
/// token until shortly before it expires.
pub struct FcmClient {
    credentials: ServiceAccountKey,
    signing_key: EncodingKey,
    api_url: String,
    http_client: Client,
    token_cache: Mutex<Option<CachedToken>>,
}

impl FcmClient {
    pub fn new(credentials: ServiceAccountKey) -> Result<Self> {
        let signing_key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .context("Service account private key is not a valid RSA PEM")?;

        Ok(Self {
            credentials,
            signing_key,
            api_url: FCM_API_URL.to_string(),
            http_client: Client::new(),
            token_cache: Mutex::new(None),
        })
    }

    /// Build a client from a service account JSON key file
    pub fn from_service_account_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read service account file {}", path.display()))?;
        let credentials: ServiceAccountKey = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid service account file {}", path.display()))?;
        Self::new(credentials)
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_token_uri(mut self, token_uri: &str) -> Self {
        self.credentials.token_uri = token_uri.to_string();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.credentials.project_id
    }

    fn sign_assertion(&self, now: i64) -> Result<String, ProviderError> {
        let claims = JwtClaims {
            iss: &self.credentials.client_email,
            sub: &self.credentials.client_email,
            scope: FCM_SCOPE,
            aud: &self.credentials.token_uri,
            iat: now,
            exp: now + Duration::hours(1).num_seconds(),
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.credentials.private_key_id.clone());

        encode(&header, &claims, &self.signing_key)
            .map_err(|e| ProviderError::Auth(format!("failed to sign JWT: {}", e)))
    }

    /// Get an access token, exchanging a freshly signed JWT when the
    /// cached one is missing or about to expire.
    async fn access_token(&self) -> Result<String, ProviderError> {
        // Held across the exchange so concurrent requests don't all
        // refresh at once
        let mut cache = self.token_cache.lock().await;
        let now = Utc::now().timestamp();
        if let Some(cached) = cache.as_ref() {
            if cached.expires_at > now + TOKEN_EXPIRY_MARGIN_SECS {
                return Ok(cached.access_token.clone());
            }
        }

        let assertion = self.sign_assertion(now)?;
        let params = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())];
        let res = self
            .http_client
            .post(&self.credentials.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Auth(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| ProviderError::Auth(e.to_string()))?;
        if !status.is_success() {
            return Err(ProviderError::Auth(format!("{} {}", status, body)));
        }
        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::Auth(format!("invalid token response: {}", e)))?;

        tracing::debug!("Refreshed FCM access token, expires in {}s", token.expires_in);
        *cache = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at: now + token.expires_in,
        });

        Ok(token.access_token)
    }
}

/// Pull the human readable reason out of an FCM error response,
/// falling back to the raw body and then the status.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(ErrorEnvelope { error }) = serde_json::from_str::<ErrorEnvelope>(body) {
        return error.message;
    }
    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl PushProvider for FcmClient {
    async fn send(&self, message: &Message) -> Result<String, ProviderError> {
        let access_token = self.access_token().await?;
        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.api_url, self.credentials.project_id
        );

        let res = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&SendRequest { message })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let SendResponse { name } = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        Ok(name)
    }
}
