use anyhow::Result;
use fcm_relay::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
