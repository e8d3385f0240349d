mod fetcher;
mod types;

pub use fetcher::{HttpMetadataFetcher, MetadataFetcher};
pub use types::{RemoteMetadata, TokenMetadata};
