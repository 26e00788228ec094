//! Active menu selection shared between the controller and the navigation chrome.

use parking_lot::RwLock;
use std::sync::Arc;

/// Entries of the navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Collections,
    Dashboard,
    Query,
    Shell,
    Logs,
    About,
}

impl MenuItem {
    /// Menu entries in display order.
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Collections,
        MenuItem::Dashboard,
        MenuItem::Query,
        MenuItem::Shell,
        MenuItem::Logs,
        MenuItem::About,
    ];

    /// Stable identifier of the entry, e.g. `shell-menu`.
    pub fn id(self) -> &'static str {
        match self {
            MenuItem::Collections => "collections-menu",
            MenuItem::Dashboard => "dashboard-menu",
            MenuItem::Query => "query-menu",
            MenuItem::Shell => "shell-menu",
            MenuItem::Logs => "logs-menu",
            MenuItem::About => "about-menu",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Collections => "Collections",
            MenuItem::Dashboard => "Dashboard",
            MenuItem::Query => "Query",
            MenuItem::Shell => "Shell",
            MenuItem::Logs => "Logs",
            MenuItem::About => "About",
        }
    }

    /// Location the entry navigates to.
    pub fn location(self) -> &'static str {
        match self {
            MenuItem::Collections => "",
            MenuItem::Dashboard => "dashboard",
            MenuItem::Query => "query",
            MenuItem::Shell => "shell",
            MenuItem::Logs => "logs",
            MenuItem::About => "about",
        }
    }

    /// Digit hotkey shown in the menu.
    pub fn hotkey(self) -> char {
        match self {
            MenuItem::Collections => '1',
            MenuItem::Dashboard => '2',
            MenuItem::Query => '3',
            MenuItem::Shell => '4',
            MenuItem::Logs => '5',
            MenuItem::About => '6',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.hotkey() == key)
    }
}

/// Cloneable handle to the active menu item.
///
/// Clones share the same selection, so the chrome and anyone inspecting the
/// console observe every update.
#[derive(Clone, Debug, Default)]
pub struct NavigationState {
    inner: Arc<RwLock<NavigationStateInner>>,
}

#[derive(Debug, Default)]
struct NavigationStateInner {
    active: Option<MenuItem>,
    updates: u64,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<MenuItem> {
        self.inner.read().active
    }

    /// Number of selections applied so far, repeated ones included.
    pub fn updates(&self) -> u64 {
        self.inner.read().updates
    }

    pub(crate) fn select(&self, item: MenuItem) {
        let mut inner = self.inner.write();
        inner.active = Some(item);
        inner.updates += 1;
    }
}
