//! Location dispatch and view lifecycle.

use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::nav::route::{LoadPolicy, RouteMatch, RouteParams, RouteTable, Screen};
use crate::nav::slot::ViewSlots;
use crate::nav::state::NavigationState;
use crate::store::{AppState, CollectionInfo, CollectionsSource, FetchError};
use crate::ui::footer::FooterChrome;
use crate::ui::navigation::NavigationChrome;
use crate::views::{ContentPane, View, ViewFactory, ViewOptions};

/// Completion posted back to the UI thread by background work.
#[derive(Debug)]
pub enum NavEvent {
    CollectionsFetched {
        ticket: u64,
        result: Result<Vec<CollectionInfo>, FetchError>,
    },
}

/// Delivers [`NavEvent`]s to whatever drives the controller.
pub type NavSink = Arc<dyn Fn(NavEvent) + Send + Sync>;

/// Tunables for the controller.
#[derive(Clone, Debug)]
pub struct NavOptions {
    pub routes: RouteTable,
    pub fetch_timeout: Duration,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            routes: RouteTable::standard(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

struct PendingFetch {
    ticket: u64,
    route: usize,
    params: RouteParams,
    task: JoinHandle<()>,
}

/// Maps locations to screens and owns everything a screen needs.
///
/// All methods run on the UI thread. The only background work is the
/// collections fetch; its result comes back through the [`NavSink`] and must
/// be handed to [`NavigationController::on_event`].
pub struct NavigationController {
    routes: RouteTable,
    state: AppState,
    navigation: NavigationState,
    chrome: NavigationChrome,
    footer: FooterChrome,
    pane: ContentPane,
    slots: ViewSlots,
    factory: Box<dyn ViewFactory>,
    runtime: Handle,
    sink: NavSink,
    fetch_timeout: Duration,
    next_ticket: u64,
    pending: Option<PendingFetch>,
    renders: u64,
}

impl NavigationController {
    /// Build the application state and the chrome, and render the chrome.
    ///
    /// Nothing is fetched until the first dispatch.
    pub fn new(
        source: Arc<dyn CollectionsSource>,
        factory: Box<dyn ViewFactory>,
        runtime: Handle,
        sink: NavSink,
        options: NavOptions,
    ) -> Self {
        let state = AppState::new(source);
        let navigation = NavigationState::new();
        let mut chrome = NavigationChrome::new(navigation.clone());
        let mut footer = FooterChrome::new();
        chrome.render();
        footer.render();

        tracing::info!(
            source = %state.collections().source().describe(),
            routes = options.routes.routes().len(),
            "navigation controller initialized"
        );

        Self {
            routes: options.routes,
            state,
            navigation,
            chrome,
            footer,
            pane: ContentPane::new(),
            slots: ViewSlots::new(),
            factory,
            runtime,
            sink,
            fetch_timeout: options.fetch_timeout,
            next_ticket: 0,
            pending: None,
            renders: 0,
        }
    }

    /// Route `location` to its handler.
    ///
    /// Returns the matched screen, or `None` when no route matches; an
    /// unmatched location changes nothing. A matched dispatch aborts any
    /// collections fetch still in flight.
    pub fn dispatch(&mut self, location: &str) -> Option<Screen> {
        let Some(RouteMatch {
            index,
            route,
            params,
        }) = self.routes.resolve(location)
        else {
            tracing::debug!(location, "no route matches location");
            return None;
        };
        let screen = route.screen;
        let load = route.load;

        self.cancel_pending_fetch();
        tracing::debug!(location, handler = screen.name(), %params, "dispatching");

        match load {
            LoadPolicy::Immediate => {
                self.mount(index, &params);
            }
            LoadPolicy::AfterCollectionsFetch => self.start_collections_fetch(index, params),
        }
        Some(screen)
    }

    /// Apply a completion produced by background work.
    ///
    /// Returns the screen that was mounted as a result, if any. Completions
    /// of cancelled or superseded fetches are dropped.
    pub fn on_event(&mut self, event: NavEvent) -> Option<Screen> {
        match event {
            NavEvent::CollectionsFetched { ticket, result } => {
                let pending = match self.pending.take() {
                    Some(pending) if pending.ticket == ticket => pending,
                    other => {
                        self.pending = other;
                        tracing::trace!(ticket, "dropping stale collections fetch");
                        return None;
                    }
                };

                match result {
                    Ok(models) => {
                        tracing::debug!(ticket, count = models.len(), "collections fetched");
                        self.state.collections().replace(models);
                        self.mount(pending.route, &pending.params)
                    }
                    Err(err) => {
                        tracing::warn!(
                            ticket,
                            transient = err.is_transient(),
                            "collections fetch failed: {}",
                            err
                        );
                        None
                    }
                }
            }
        }
    }

    fn mount(&mut self, index: usize, params: &RouteParams) -> Option<Screen> {
        let route = self.routes.get(index)?;
        let options = ViewOptions {
            col_id: route
                .col_id_param
                .and_then(|name| params.get(name))
                .map(str::to_string),
            // Only views that read collection data hold the store.
            collections: match (route.load, route.col_id_param) {
                (LoadPolicy::AfterCollectionsFetch, _) | (_, Some(_)) => {
                    Some(Arc::downgrade(self.state.collections()))
                }
                (LoadPolicy::Immediate, None) => None,
            },
        };

        let view = self
            .slots
            .obtain(route.screen, route.slot, options, self.factory.as_ref());
        view.render(&mut self.pane);
        self.renders += 1;

        if let Some(item) = route.menu_item {
            self.chrome.select_menu_item(item);
        }
        Some(route.screen)
    }

    fn start_collections_fetch(&mut self, route: usize, params: RouteParams) {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let source = self.state.collections().source();
        let sink = Arc::clone(&self.sink);
        let timeout = self.fetch_timeout;

        tracing::debug!(ticket, source = %source.describe(), "fetching collections");
        let task = self.runtime.spawn(async move {
            let result = match tokio::time::timeout(timeout, source.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(timeout)),
            };
            sink(NavEvent::CollectionsFetched { ticket, result });
        });

        self.pending = Some(PendingFetch {
            ticket,
            route,
            params,
            task,
        });
    }

    fn cancel_pending_fetch(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            tracing::debug!(ticket = pending.ticket, "cancelled in-flight collections fetch");
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn app_state(&self) -> &AppState {
        &self.state
    }

    pub fn navigation_state(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn chrome(&self) -> &NavigationChrome {
        &self.chrome
    }

    pub fn footer(&self) -> &FooterChrome {
        &self.footer
    }

    pub fn pane(&self) -> &ContentPane {
        &self.pane
    }

    /// The live view cached for `screen`, if any.
    pub fn view(&self, screen: Screen) -> Option<&dyn View> {
        self.slots.get(screen)
    }

    pub fn live_views(&self) -> usize {
        self.slots.len()
    }

    /// Total views constructed since startup.
    pub fn constructed_views(&self) -> u64 {
        self.slots.constructed()
    }

    /// Total view renders since startup.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    /// Ticket of the collections fetch still awaiting completion.
    pub fn pending_fetch(&self) -> Option<u64> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }
}

impl Drop for NavigationController {
    fn drop(&mut self) {
        self.cancel_pending_fetch();
    }
}
