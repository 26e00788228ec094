//! Per-screen view cache.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::nav::route::{Screen, SlotPolicy};
use crate::views::{View, ViewFactory, ViewOptions};

/// Holds at most one live view per screen.
#[derive(Default)]
pub struct ViewSlots {
    slots: HashMap<Screen, Box<dyn View>>,
    constructed: u64,
}

impl ViewSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the view for `screen`, constructing or reconfiguring it
    /// according to `policy`.
    ///
    /// With [`SlotPolicy::Reuse`] a cached view only receives the new
    /// `col_id`; the rest of `options` is discarded. A cached view without
    /// configuration is replaced instead.
    pub fn obtain(
        &mut self,
        screen: Screen,
        policy: SlotPolicy,
        options: ViewOptions,
        factory: &dyn ViewFactory,
    ) -> &mut dyn View {
        let view = match self.slots.entry(screen) {
            Entry::Occupied(mut entry) if policy == SlotPolicy::Reuse => {
                let reconfigured = match entry.get_mut().options_mut() {
                    Some(config) => {
                        config.col_id = options.col_id.clone();
                        true
                    }
                    None => false,
                };
                if reconfigured {
                    tracing::debug!(screen = screen.name(), "reconfiguring cached view");
                } else {
                    tracing::warn!(
                        screen = screen.name(),
                        "cached view cannot be reconfigured, replacing it"
                    );
                    self.constructed += 1;
                    entry.insert(factory.create(screen, options));
                }
                entry.into_mut()
            }
            Entry::Occupied(mut entry) => {
                tracing::debug!(screen = screen.name(), "replacing cached view");
                self.constructed += 1;
                entry.insert(factory.create(screen, options));
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                tracing::debug!(screen = screen.name(), "constructing view");
                self.constructed += 1;
                entry.insert(factory.create(screen, options))
            }
        };
        view.as_mut()
    }

    pub fn get(&self, screen: Screen) -> Option<&dyn View> {
        self.slots.get(&screen).map(|view| view.as_ref())
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total number of views constructed since startup.
    pub fn constructed(&self) -> u64 {
        self.constructed
    }
}
