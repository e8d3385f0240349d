use super::types::{RemoteMetadata, TokenMetadata};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch and normalize metadata for one token. Failures stop at this
    /// boundary: an unreachable or malformed token yields `None`.
    async fn fetch(&self, token_id: u64) -> Option<TokenMetadata>;
}

pub struct HttpMetadataFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMetadataFetcher {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn token_url(&self, token_id: u64) -> String {
        format!("{}{}", self.base_url, token_id)
    }

    async fn fetch_remote(&self, token_id: u64) -> Result<RemoteMetadata> {
        let url = self.token_url(token_id);
        debug!("Fetching metadata from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Metadata endpoint {} returned an error status", url))?;

        response
            .json::<RemoteMetadata>()
            .await
            .with_context(|| format!("Failed to parse metadata response from {}", url))
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, token_id: u64) -> Option<TokenMetadata> {
        match self.fetch_remote(token_id).await {
            Ok(remote) => Some(TokenMetadata::from_remote(token_id, remote)),
            Err(e) => {
                warn!("Failed to fetch metadata for token ID {}: {:#}", token_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_url_concatenates_id() {
        let fetcher = HttpMetadataFetcher::new("https://meta.example.com/tokens/".to_string());
        assert_eq!(fetcher.token_url(15), "https://meta.example.com/tokens/15");
    }

    #[test]
    fn test_token_url_without_trailing_slash() {
        // concatenation is deliberate, matching whatever base the operator set
        let fetcher = HttpMetadataFetcher::new("https://meta.example.com/id-".to_string());
        assert_eq!(fetcher.token_url(3), "https://meta.example.com/id-3");
    }
}
