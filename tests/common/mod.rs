//! Shared test utilities: recording views and scripted collection sources.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use arangoadmin::nav::{NavEvent, NavOptions, NavSink, NavigationController, Screen};
use arangoadmin::store::{
    CollectionInfo, CollectionStatus, CollectionType, CollectionsSource, FetchError,
};
use arangoadmin::views::{ContentPane, View, ViewFactory, ViewOptions};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::sync::Notify;

// -- Views --------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewRecord {
    Created {
        id: usize,
        screen: Screen,
        col_id: Option<String>,
        bound_to_store: bool,
    },
    Rendered {
        id: usize,
        screen: Screen,
        col_id: Option<String>,
    },
}

/// Everything the recording views did, in order.
#[derive(Clone, Default)]
pub struct ViewLog(Arc<Mutex<Vec<ViewRecord>>>);

impl ViewLog {
    pub fn records(&self) -> Vec<ViewRecord> {
        self.0.lock().clone()
    }

    fn push(&self, record: ViewRecord) {
        self.0.lock().push(record);
    }

    /// Ids of views constructed for `screen`.
    pub fn created(&self, screen: Screen) -> Vec<usize> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                ViewRecord::Created { id, screen: s, .. } if s == screen => Some(id),
                _ => None,
            })
            .collect()
    }

    /// (view id, configured col_id) for every render of `screen`.
    pub fn renders(&self, screen: Screen) -> Vec<(usize, Option<String>)> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                ViewRecord::Rendered {
                    id,
                    screen: s,
                    col_id,
                } if s == screen => Some((id, col_id)),
                _ => None,
            })
            .collect()
    }

    pub fn total_created(&self) -> usize {
        self.records()
            .iter()
            .filter(|record| matches!(record, ViewRecord::Created { .. }))
            .count()
    }
}

pub struct RecordingViews {
    log: ViewLog,
    configurable: bool,
}

impl RecordingViews {
    pub fn new(log: ViewLog) -> Self {
        Self {
            log,
            configurable: true,
        }
    }

    /// Views that expose no configuration after construction.
    pub fn fixed(log: ViewLog) -> Self {
        Self {
            log,
            configurable: false,
        }
    }
}

impl ViewFactory for RecordingViews {
    fn create(&self, screen: Screen, options: ViewOptions) -> Box<dyn View> {
        let id = self.log.total_created() + 1;
        self.log.push(ViewRecord::Created {
            id,
            screen,
            col_id: options.col_id.clone(),
            bound_to_store: options.collections.is_some(),
        });
        Box::new(RecordingView {
            id,
            screen,
            options,
            configurable: self.configurable,
            log: self.log.clone(),
        })
    }
}

struct RecordingView {
    id: usize,
    screen: Screen,
    options: ViewOptions,
    configurable: bool,
    log: ViewLog,
}

impl View for RecordingView {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn render(&mut self, pane: &mut ContentPane) {
        pane.mount(self.screen, format!("{} #{}", self.screen.name(), self.id));
        self.log.push(ViewRecord::Rendered {
            id: self.id,
            screen: self.screen,
            col_id: self.options.col_id.clone(),
        });
    }

    fn options_mut(&mut self) -> Option<&mut ViewOptions> {
        self.configurable.then_some(&mut self.options)
    }
}

// -- Collections source -------------------------------------------------------

pub enum Reply {
    Collections(Vec<CollectionInfo>),
    Status(u16),
    Hang,
}

/// Collections source answering with a fixed reply, optionally held back
/// until a gate is opened.
pub struct ScriptedSource {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            gate: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(reply)
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CollectionsSource for ScriptedSource {
    fn describe(&self) -> String {
        "scripted".to_string()
    }

    async fn fetch(&self) -> Result<Vec<CollectionInfo>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.reply {
            Reply::Collections(models) => Ok(models.clone()),
            Reply::Status(status) => Err(FetchError::Status {
                url: "scripted".to_string(),
                status: *status,
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

pub fn collection(id: &str, name: &str) -> CollectionInfo {
    CollectionInfo {
        id: id.to_string(),
        name: name.to_string(),
        status: CollectionStatus::Loaded,
        kind: CollectionType::Document,
        is_system: name.starts_with('_'),
    }
}

pub fn sample_collections() -> Vec<CollectionInfo> {
    vec![
        collection("1001", "users"),
        collection("1002", "_graphs"),
        collection("1003", "accounts"),
    ]
}

// -- Controller harness -------------------------------------------------------

pub struct Harness {
    pub controller: NavigationController,
    pub views: ViewLog,
    pub calls: Arc<AtomicUsize>,
    events: UnboundedReceiver<NavEvent>,
}

/// Controller wired to recording views. Must be called inside a tokio runtime.
pub fn harness(source: ScriptedSource) -> Harness {
    harness_with(source, NavOptions::default())
}

pub fn harness_with(source: ScriptedSource, options: NavOptions) -> Harness {
    let views = ViewLog::default();
    build_harness(source, options, RecordingViews::new(views.clone()), views)
}

/// Harness whose views cannot be reconfigured in place.
pub fn harness_with_fixed_views(source: ScriptedSource) -> Harness {
    let views = ViewLog::default();
    build_harness(
        source,
        NavOptions::default(),
        RecordingViews::fixed(views.clone()),
        views,
    )
}

fn build_harness(
    source: ScriptedSource,
    options: NavOptions,
    factory: RecordingViews,
    views: ViewLog,
) -> Harness {
    let calls = source.calls();
    let (tx, events) = unbounded_channel();
    let sink: NavSink = Arc::new(move |event: NavEvent| {
        let _ = tx.send(event);
    });
    let controller = NavigationController::new(
        Arc::new(source),
        Box::new(factory),
        tokio::runtime::Handle::current(),
        sink,
        options,
    );
    Harness {
        controller,
        views,
        calls,
        events,
    }
}

impl Harness {
    pub async fn next_event_within(&mut self, wait: Duration) -> Option<NavEvent> {
        tokio::time::timeout(wait, self.events.recv())
            .await
            .ok()
            .flatten()
    }

    pub async fn next_event(&mut self) -> NavEvent {
        self.next_event_within(Duration::from_secs(5))
            .await
            .expect("expected a navigation event")
    }

    /// Deliver the next background completion to the controller.
    pub async fn settle(&mut self) -> Option<Screen> {
        let event = self.next_event().await;
        self.controller.on_event(event)
    }

    pub fn fetch_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
