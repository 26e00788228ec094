//! Built-in views for each console screen.

use crate::nav::Screen;
use crate::store::CollectionsStore;
use crate::views::{ContentPane, View, ViewFactory, ViewOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default view factory used by the terminal console.
#[derive(Clone, Copy, Debug, Default)]
pub struct StockViews;

impl ViewFactory for StockViews {
    fn create(&self, screen: Screen, options: ViewOptions) -> Box<dyn View> {
        match screen {
            Screen::Collections => Box::new(CollectionsView { options }),
            Screen::Collection => Box::new(CollectionView { options }),
            other => Box::new(StaticView { screen: other }),
        }
    }
}

struct CollectionsView {
    options: ViewOptions,
}

impl View for CollectionsView {
    fn screen(&self) -> Screen {
        Screen::Collections
    }

    fn render(&mut self, pane: &mut ContentPane) {
        pane.mount(Screen::Collections, "Collections");
        let Some(store) = self.options.collections.as_ref().and_then(|weak| weak.upgrade()) else {
            pane.push_line("Collection list unavailable");
            return;
        };
        if store.is_empty() {
            pane.push_line("No collections");
            return;
        }
        for model in store.snapshot() {
            pane.push_line(format!(
                "{:<32} {:<9} {:<10} id {}",
                model.name,
                model.kind.label(),
                model.status.label(),
                model.id
            ));
        }
    }

    fn options_mut(&mut self) -> Option<&mut ViewOptions> {
        Some(&mut self.options)
    }
}

struct CollectionView {
    options: ViewOptions,
}

impl CollectionView {
    fn describe(&self, store: &CollectionsStore, col_id: &str, pane: &mut ContentPane) {
        match store.find(col_id) {
            Some(model) => {
                pane.push_line(format!("Name:   {}", model.name));
                pane.push_line(format!("Id:     {}", model.id));
                pane.push_line(format!("Type:   {}", model.kind.label()));
                pane.push_line(format!("Status: {}", model.status.label()));
            }
            None => pane.push_line(format!("Collection '{}' is not loaded", col_id)),
        }
    }
}

impl View for CollectionView {
    fn screen(&self) -> Screen {
        Screen::Collection
    }

    fn render(&mut self, pane: &mut ContentPane) {
        let col_id = self.options.col_id.clone().unwrap_or_default();
        pane.mount(Screen::Collection, format!("Collection {}", col_id));
        match self.options.collections.as_ref().and_then(|weak| weak.upgrade()) {
            Some(store) => self.describe(&store, &col_id, pane),
            None => pane.push_line(format!("Collection: {}", col_id)),
        }
    }

    fn options_mut(&mut self) -> Option<&mut ViewOptions> {
        Some(&mut self.options)
    }
}

struct StaticView {
    screen: Screen,
}

impl View for StaticView {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn render(&mut self, pane: &mut ContentPane) {
        let (title, lines): (&str, Vec<String>) = match self.screen {
            Screen::Documents => ("Documents", vec!["Document list".to_string()]),
            Screen::Document => ("Document", vec!["Document editor".to_string()]),
            Screen::Shell => ("Shell", vec!["arangosh>".to_string()]),
            Screen::Dashboard => ("Dashboard", vec!["Server statistics".to_string()]),
            Screen::Query => ("Query", vec!["AQL query editor".to_string()]),
            Screen::Logs => ("Logs", vec!["Server log".to_string()]),
            Screen::About => (
                "About",
                vec![
                    format!("arangoadmin v{}", VERSION),
                    "Administration console for ArangoDB".to_string(),
                ],
            ),
            Screen::Collections | Screen::Collection => (self.screen.name(), Vec::new()),
        };
        pane.mount(self.screen, title);
        for line in lines {
            pane.push_line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CollectionInfo, CollectionStatus, CollectionType, CollectionsSource, FetchError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoSource;

    #[async_trait]
    impl CollectionsSource for NoSource {
        fn describe(&self) -> String {
            "none".to_string()
        }

        async fn fetch(&self) -> Result<Vec<CollectionInfo>, FetchError> {
            Ok(Vec::new())
        }
    }

    fn store_with(names: &[&str]) -> Arc<CollectionsStore> {
        let store = Arc::new(CollectionsStore::new(Arc::new(NoSource)));
        store.replace(
            names
                .iter()
                .enumerate()
                .map(|(index, name)| CollectionInfo {
                    id: index.to_string(),
                    name: name.to_string(),
                    status: CollectionStatus::Loaded,
                    kind: CollectionType::Document,
                    is_system: false,
                })
                .collect(),
        );
        store
    }

    #[test]
    fn collections_view_lists_user_collections_first() {
        let store = store_with(&["_graphs", "users", "accounts"]);
        let mut view = StockViews.create(
            Screen::Collections,
            ViewOptions {
                col_id: None,
                collections: Some(Arc::downgrade(&store)),
            },
        );
        let mut pane = ContentPane::new();
        view.render(&mut pane);

        assert_eq!(pane.owner(), Some(Screen::Collections));
        assert_eq!(pane.lines().len(), 3);
        assert!(pane.lines()[0].starts_with("accounts"));
        assert!(pane.lines()[2].starts_with("_graphs"));
    }

    #[test]
    fn collections_view_survives_dropped_store() {
        let store = store_with(&["users"]);
        let weak = Arc::downgrade(&store);
        drop(store);

        let mut view = StockViews.create(
            Screen::Collections,
            ViewOptions {
                col_id: None,
                collections: Some(weak),
            },
        );
        let mut pane = ContentPane::new();
        view.render(&mut pane);
        assert_eq!(pane.lines(), ["Collection list unavailable"]);
    }

    #[test]
    fn collection_view_follows_reconfiguration() {
        let mut view = StockViews.create(
            Screen::Collection,
            ViewOptions {
                col_id: Some("42".to_string()),
                collections: None,
            },
        );
        let mut pane = ContentPane::new();
        view.render(&mut pane);
        assert_eq!(pane.title(), "Collection 42");

        view.options_mut().unwrap().col_id = Some("43".to_string());
        view.render(&mut pane);
        assert_eq!(pane.title(), "Collection 43");
    }

    #[test]
    fn collection_view_describes_loaded_entry() {
        let store = store_with(&["users"]);
        let mut view = StockViews.create(
            Screen::Collection,
            ViewOptions {
                col_id: Some("users".to_string()),
                collections: Some(Arc::downgrade(&store)),
            },
        );
        let mut pane = ContentPane::new();
        view.render(&mut pane);
        assert_eq!(pane.lines()[0], "Name:   users");
        assert_eq!(pane.lines()[3], "Status: loaded");

        view.options_mut().unwrap().col_id = Some("orders".to_string());
        view.render(&mut pane);
        assert_eq!(pane.lines(), ["Collection 'orders' is not loaded"]);
    }

    #[test]
    fn static_views_are_not_reconfigurable() {
        let mut view = StockViews.create(Screen::About, ViewOptions::unbound());
        assert!(view.options_mut().is_none());

        let mut pane = ContentPane::new();
        view.render(&mut pane);
        assert_eq!(pane.owner(), Some(Screen::About));
        assert!(pane.lines()[0].starts_with("arangoadmin v"));
    }
}
