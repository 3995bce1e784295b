use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Google service account key as downloaded from the Firebase console
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key_id: String,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// A message addressed to a single device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub token: String,
    pub notification: Notification,
    // Omitted entirely rather than sent as `{}` when there is no
    // custom data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
}

impl Message {
    pub fn new(token: &str, title: &str, body: &str) -> Self {
        Self {
            token: token.to_string(),
            notification: Notification {
                title: title.to_string(),
                body: body.to_string(),
            },
            data: None,
        }
    }

    /// Attach custom key/value data. An absent or empty map leaves the
    /// message without a data field.
    pub fn with_data(mut self, data: Option<HashMap<String, String>>) -> Self {
        self.data = data.filter(|d| !d.is_empty());
        self
    }
}

#[derive(Serialize)]
pub(crate) struct SendRequest<'a> {
    pub message: &'a Message,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SendResponse {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

/// JWT claims for the OAuth2 service account flow
#[derive(Debug, Serialize)]
pub(crate) struct JwtClaims<'a> {
    pub iss: &'a str,
    pub sub: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct CachedToken {
    pub access_token: String,
    pub expires_at: i64,
}
