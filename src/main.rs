use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use reel::app::{App, AppEvent};
use reel::catalog::CatalogClient;
use reel::config::Config;
use reel::ui;

/// Get the config directory path (~/.config/reel/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("reel"))
}

#[derive(Parser, Debug)]
#[command(name = "reel", about = "Terminal browser for paged video catalogs")]
struct Args {
    /// Catalog API base URL (overrides config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    // Env var takes precedence over the config file for the API token.
    let api_token = std::env::var("REEL_API_TOKEN")
        .ok()
        .or_else(|| config.api_token.clone())
        .map(SecretString::from);

    let http = reqwest::Client::builder()
        .user_agent(concat!("reel/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    let client = Arc::new(
        CatalogClient::new(http, &config.api_url, api_token)
            .with_context(|| format!("Invalid catalog URL: {}", config.api_url))?,
    );

    tracing::info!(api_url = %config.api_url, page_size = config.page_size, "Starting reel");

    let mut app = App::new(client, &config);

    // Channel for background fetch results
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
