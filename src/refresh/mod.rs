mod client;

pub use client::{ImmutableClient, RefreshClient};

use crate::config::Config;
use crate::metadata::MetadataFetcher;
use anyhow::Result;
use tracing::{error, info};

/// Number of token IDs covered by one refresh submission.
pub const BATCH_SIZE: u64 = 10;

pub struct BatchRefresher<'a> {
    config: &'a Config,
    fetcher: Box<dyn MetadataFetcher>,
    client: Box<dyn RefreshClient>,
}

impl<'a> BatchRefresher<'a> {
    pub fn new(
        config: &'a Config,
        fetcher: Box<dyn MetadataFetcher>,
        client: Box<dyn RefreshClient>,
    ) -> Self {
        Self {
            config,
            fetcher,
            client,
        }
    }

    /// Fetch every token in the inclusive range and submit the successful
    /// results as one refresh call. Tokens that fail to fetch are dropped; a
    /// batch with no results is skipped without a submission.
    pub async fn refresh_batch(&self, start: u64, end: u64) -> Result<()> {
        let mut collected = Vec::new();
        for token_id in start..=end {
            if let Some(metadata) = self.fetcher.fetch(token_id).await {
                collected.push(metadata);
            }
            // pace requests regardless of outcome, including after the last ID
            tokio::time::sleep(self.config.delay).await;
        }

        if collected.is_empty() {
            return Ok(());
        }

        match self
            .client
            .refresh(&self.config.chain, &self.config.collection_address, &collected)
            .await
        {
            Ok(response) => {
                info!("Batch {}-{} refreshed successfully: {}", start, end, response);
                Ok(())
            }
            Err(e) => {
                error!("Failed to refresh metadata for batch {}-{}: {:#}", start, end, e);
                Err(e)
            }
        }
    }

    /// Walk the configured ID range batch by batch, aborting on the first
    /// submission failure.
    pub async fn run(&self) -> Result<()> {
        for (start, end) in batch_ranges(self.config.min_token_id, self.config.max_token_id) {
            self.refresh_batch(start, end).await?;
        }
        info!("Done processing all batches");
        Ok(())
    }
}

/// Partition the inclusive range [min, max] into consecutive chunks of at
/// most BATCH_SIZE IDs. The last chunk may be shorter.
pub fn batch_ranges(min: u64, max: u64) -> Vec<(u64, u64)> {
    let mut ranges = Vec::new();
    let mut start = min;
    while start <= max {
        let end = max.min(start.saturating_add(BATCH_SIZE - 1));
        ranges.push((start, end));
        if end == max {
            break;
        }
        start = end + 1;
    }
    ranges
}
