//! Fetchers for the collection list.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::store::collections::{parse_collection_list, CollectionInfo};
use crate::store::error::FetchError;

/// Asynchronous provider of the collection list.
#[async_trait]
pub trait CollectionsSource: Send + Sync {
    /// Returns a short description used in logs, usually the endpoint.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<CollectionInfo>, FetchError>;
}

/// Reads `/_db/{database}/_api/collection` over HTTP.
pub struct HttpCollectionsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCollectionsSource {
    pub fn new(server: &ServerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(server.fetch_timeout_seconds as u64))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            url: collection_list_url(&server.base_url, &server.database),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

pub fn collection_list_url(base_url: &str, database: &str) -> String {
    format!(
        "{}/_db/{}/_api/collection",
        base_url.trim_end_matches('/'),
        urlencoding::encode(database)
    )
}

#[async_trait]
impl CollectionsSource for HttpCollectionsSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<CollectionInfo>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Transport {
            url: self.url.clone(),
            source,
        })?;
        parse_collection_list(&body)
    }
}
