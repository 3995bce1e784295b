use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub credentials_path: PathBuf,
    pub web_root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = env::var("FCM_RELAY_HOST").unwrap_or("0.0.0.0".to_string());
        let port = env::var("FCM_RELAY_PORT").unwrap_or("8000".to_string());
        let credentials_path = env::var("FCM_RELAY_CREDENTIALS")
            .unwrap_or("secrets/serviceAccountKey.json".to_string());
        let web_root = env::var("FCM_RELAY_WEB_ROOT").unwrap_or("web".to_string());

        Self {
            host,
            port,
            credentials_path: PathBuf::from(credentials_path),
            web_root: PathBuf::from(web_root),
        }
    }
}

impl AppConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
