//! Application-wide data shared by the views.

mod collections;
mod error;
mod source;

pub use collections::{
    parse_collection_list, CollectionInfo, CollectionStatus, CollectionType, CollectionsStore,
};
pub use error::FetchError;
pub use source::{collection_list_url, CollectionsSource, HttpCollectionsSource};

use std::sync::Arc;

/// State constructed once at startup and owned by the navigation controller.
pub struct AppState {
    collections: Arc<CollectionsStore>,
}

impl AppState {
    pub fn new(source: Arc<dyn CollectionsSource>) -> Self {
        Self {
            collections: Arc::new(CollectionsStore::new(source)),
        }
    }

    pub fn collections(&self) -> &Arc<CollectionsStore> {
        &self.collections
    }
}
