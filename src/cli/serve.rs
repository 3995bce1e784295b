use std::path::PathBuf;

use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

pub async fn run(
    host: Option<String>,
    port: Option<String>,
    credentials: Option<PathBuf>,
    web_root: Option<PathBuf>,
) -> Result<()> {
    let defaults = AppConfig::default();
    let config = AppConfig {
        host: host.unwrap_or(defaults.host),
        port: port.unwrap_or(defaults.port),
        credentials_path: credentials.unwrap_or(defaults.credentials_path),
        web_root: web_root.unwrap_or(defaults.web_root),
    };
    api::serve(config).await
}
