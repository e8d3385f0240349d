use anyhow::{anyhow, Context, Result};
use std::time::Duration;

const DEFAULT_DELAY_MS: u64 = 300;
const DEFAULT_API_BASE_URL: &str = "https://api.sandbox.immutable.com";

/// Immutable run configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub publishable_key: String,
    pub chain: String,
    pub collection_address: String,
    pub min_token_id: u64,
    pub max_token_id: u64,
    pub metadata_base_url: String,
    pub api_base_url: String,
    pub delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(|name| std::env::var(name).ok())
    }

    /// Build a config from a variable lookup. Missing required variables and
    /// non-numeric values fail fast with an error naming the variable.
    pub fn load<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min_token_id = require_number(&lookup, "MIN_TOKEN_ID")?;
        let max_token_id = require_number(&lookup, "MAX_TOKEN_ID")?;
        if min_token_id > max_token_id {
            return Err(anyhow!(
                "MIN_TOKEN_ID ({}) is greater than MAX_TOKEN_ID ({})",
                min_token_id,
                max_token_id
            ));
        }

        let delay_ms = match lookup("DELAY_MS") {
            Some(value) => parse_number("DELAY_MS", &value)?,
            None => DEFAULT_DELAY_MS,
        };

        Ok(Self {
            api_key: require(&lookup, "API_KEY")?,
            publishable_key: require(&lookup, "PUBLISHABLE_KEY")?,
            chain: require(&lookup, "CHAIN")?,
            collection_address: require(&lookup, "COLLECTION_ADDRESS")?,
            min_token_id,
            max_token_id,
            metadata_base_url: require(&lookup, "METADATA_BASE_URL")?,
            api_base_url: lookup("REFRESH_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            delay: Duration::from_millis(delay_ms),
        })
    }
}

fn require<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| anyhow!("Environment variable '{}' not set", name))
}

fn require_number<F>(lookup: &F, name: &str) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = require(lookup, name)?;
    parse_number(name, &value)
}

fn parse_number(name: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Environment variable '{}' is not a number: '{}'", name, value))
}
