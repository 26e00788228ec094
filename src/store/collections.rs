//! Collection models and the shared collections data source.

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use std::time::SystemTime;

use crate::store::error::FetchError;
use crate::store::source::CollectionsSource;

/// Lifecycle status of a collection as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CollectionStatus {
    Corrupted,
    NewBorn,
    Unloaded,
    Loaded,
    Unloading,
    Deleted,
    Unknown(u8),
}

impl From<u8> for CollectionStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => CollectionStatus::Corrupted,
            1 => CollectionStatus::NewBorn,
            2 => CollectionStatus::Unloaded,
            3 => CollectionStatus::Loaded,
            4 => CollectionStatus::Unloading,
            5 => CollectionStatus::Deleted,
            other => CollectionStatus::Unknown(other),
        }
    }
}

impl From<CollectionStatus> for u8 {
    fn from(status: CollectionStatus) -> Self {
        match status {
            CollectionStatus::Corrupted => 0,
            CollectionStatus::NewBorn => 1,
            CollectionStatus::Unloaded => 2,
            CollectionStatus::Loaded => 3,
            CollectionStatus::Unloading => 4,
            CollectionStatus::Deleted => 5,
            CollectionStatus::Unknown(code) => code,
        }
    }
}

impl CollectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            CollectionStatus::Corrupted => "corrupted",
            CollectionStatus::NewBorn => "new born",
            CollectionStatus::Unloaded => "unloaded",
            CollectionStatus::Loaded => "loaded",
            CollectionStatus::Unloading => "unloading",
            CollectionStatus::Deleted => "deleted",
            CollectionStatus::Unknown(_) => "unknown",
        }
    }
}

/// Collection type code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CollectionType {
    #[default]
    Document,
    Edge,
    Other(u8),
}

impl From<u8> for CollectionType {
    fn from(code: u8) -> Self {
        match code {
            2 => CollectionType::Document,
            3 => CollectionType::Edge,
            other => CollectionType::Other(other),
        }
    }
}

impl From<CollectionType> for u8 {
    fn from(kind: CollectionType) -> Self {
        match kind {
            CollectionType::Document => 2,
            CollectionType::Edge => 3,
            CollectionType::Other(code) => code,
        }
    }
}

impl CollectionType {
    pub fn label(self) -> &'static str {
        match self {
            CollectionType::Document => "document",
            CollectionType::Edge => "edge",
            CollectionType::Other(_) => "other",
        }
    }
}

/// One entry of the collection list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    pub status: CollectionStatus,
    #[serde(rename = "type", default)]
    pub kind: CollectionType,
    #[serde(rename = "isSystem", default)]
    pub is_system: bool,
}

impl CollectionInfo {
    /// Collections whose name starts with `_` are system collections even
    /// when the server omits `isSystem`.
    pub fn is_system(&self) -> bool {
        self.is_system || self.name.starts_with('_')
    }
}

// Older servers report numeric ids.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[derive(Deserialize)]
struct CollectionListBody {
    #[serde(default)]
    result: Option<Vec<CollectionInfo>>,
    #[serde(default)]
    collections: Option<Vec<CollectionInfo>>,
}

/// Parse a `/_api/collection` response body.
///
/// Accepts both the `result` envelope and the legacy `collections` one.
pub fn parse_collection_list(body: &str) -> Result<Vec<CollectionInfo>, FetchError> {
    let parsed: CollectionListBody = serde_json::from_str(body)?;
    Ok(parsed.result.or(parsed.collections).unwrap_or_default())
}

/// The shared collections data source.
///
/// Holds the fetcher and the last successfully fetched list. Only the UI
/// thread replaces the list; views read it through a `Weak` handle.
pub struct CollectionsStore {
    source: Arc<dyn CollectionsSource>,
    models: RwLock<Vec<CollectionInfo>>,
    fetched_at: RwLock<Option<SystemTime>>,
}

impl CollectionsStore {
    pub fn new(source: Arc<dyn CollectionsSource>) -> Self {
        Self {
            source,
            models: RwLock::new(Vec::new()),
            fetched_at: RwLock::new(None),
        }
    }

    pub fn source(&self) -> Arc<dyn CollectionsSource> {
        Arc::clone(&self.source)
    }

    /// Replace the list with a fresh fetch result.
    pub fn replace(&self, mut models: Vec<CollectionInfo>) {
        models.sort_by(|a, b| {
            a.is_system()
                .cmp(&b.is_system())
                .then_with(|| a.name.cmp(&b.name))
        });
        *self.models.write() = models;
        *self.fetched_at.write() = Some(SystemTime::now());
    }

    /// User collections first, then system collections, each by name.
    pub fn snapshot(&self) -> Vec<CollectionInfo> {
        self.models.read().clone()
    }

    /// Look a collection up by name or id.
    pub fn find(&self, name_or_id: &str) -> Option<CollectionInfo> {
        self.models
            .read()
            .iter()
            .find(|model| model.name == name_or_id || model.id == name_or_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.models.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.read().is_empty()
    }

    pub fn fetched_at(&self) -> Option<SystemTime> {
        *self.fetched_at.read()
    }
}
