use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

mod config;
mod metadata;
mod refresh;

use config::Config;
use metadata::HttpMetadataFetcher;
use refresh::{BatchRefresher, ImmutableClient};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a dotenv file to load before reading the environment
    #[arg(short, long)]
    env_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.env_file {
        dotenv::from_path(path).with_context(|| format!("Failed to load env file {}", path))?;
    } else {
        dotenv::dotenv().ok();
    }

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting refreshy...");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Refreshing tokens {}-{} for collection {} on {}",
        config.min_token_id, config.max_token_id, config.collection_address, config.chain
    );

    let fetcher = HttpMetadataFetcher::new(config.metadata_base_url.clone());
    let client = ImmutableClient::new(&config).context("Failed to initialize refresh client")?;

    let refresher = BatchRefresher::new(&config, Box::new(fetcher), Box::new(client));
    refresher.run().await
}
