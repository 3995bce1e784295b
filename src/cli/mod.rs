use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the notification server (the default)
    Serve {
        /// Set the server host address
        #[arg(long)]
        host: Option<String>,

        /// Set the server port
        #[arg(long)]
        port: Option<String>,

        /// Path to the Firebase service account key
        #[arg(long)]
        credentials: Option<PathBuf>,

        /// Directory of static files for the web page
        #[arg(long)]
        web_root: Option<PathBuf>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Some(Command::Serve {
            host,
            port,
            credentials,
            web_root,
        }) => {
            serve::run(host, port, credentials, web_root).await?;
        }
        None => {
            serve::run(None, None, None, None).await?;
        }
    }

    Ok(())
}
