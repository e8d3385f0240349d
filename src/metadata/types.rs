use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of the collection's metadata endpoint.
#[derive(Debug, Deserialize)]
pub struct RemoteMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub external_link: String,
    pub youtube_url: Option<String>,
}

/// One entry of the refresh request body. Field names match the indexer's
/// wire format, so `animation_url` is always serialized (as null) while a
/// missing `youtube_url` is omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    pub token_id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub external_url: String,
    pub animation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    pub attributes: Vec<Value>,
}

impl TokenMetadata {
    pub fn from_remote(token_id: u64, remote: RemoteMetadata) -> Self {
        Self {
            token_id: token_id.to_string(),
            name: remote.name,
            image: remote.image,
            description: remote.description,
            external_url: remote.external_link,
            animation_url: None,
            youtube_url: remote.youtube_url,
            attributes: Vec::new(),
        }
    }
}
