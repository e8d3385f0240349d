use crate::config::Config;
use crate::metadata::TokenMetadata;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    nft_metadata: &'a [TokenMetadata],
}

#[async_trait]
pub trait RefreshClient: Send + Sync {
    /// Submit a set of metadata records for re-indexing. The response body is
    /// opaque to us and only surfaced in logs.
    async fn refresh(
        &self,
        chain: &str,
        contract_address: &str,
        metadata: &[TokenMetadata],
    ) -> Result<Value>;
}

/// Client for the Immutable blockchain-data refresh endpoint.
pub struct ImmutableClient {
    client: reqwest::Client,
    api_base: Url,
    api_key: String,
    publishable_key: String,
}

impl ImmutableClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_base = Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid refresh API base URL '{}'", config.api_base_url))?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_base,
            api_key: config.api_key.clone(),
            publishable_key: config.publishable_key.clone(),
        })
    }

    fn refresh_url(&self, chain: &str, contract_address: &str) -> Result<Url> {
        self.api_base
            .join(&format!(
                "/v1/chains/{}/collections/{}/nfts/refresh-metadata",
                chain, contract_address
            ))
            .context("Failed to build refresh endpoint URL")
    }
}

#[async_trait]
impl RefreshClient for ImmutableClient {
    async fn refresh(
        &self,
        chain: &str,
        contract_address: &str,
        metadata: &[TokenMetadata],
    ) -> Result<Value> {
        let url = self.refresh_url(chain, contract_address)?;
        debug!("Submitting {} metadata records to {}", metadata.len(), url);

        let response = self
            .client
            .post(url)
            .header("x-immutable-api-key", &self.api_key)
            .header("x-immutable-publishable-key", &self.publishable_key)
            .json(&RefreshRequest {
                nft_metadata: metadata,
            })
            .send()
            .await
            .context("Refresh request failed")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read refresh response")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "Refresh request returned {}: {}",
                status,
                body
            ));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
