//! View contract used by the navigation controller.
//!
//! A view is an opaque renderable unit for one console screen. The
//! controller constructs views through a [`ViewFactory`], calls
//! [`View::render`] exactly once per dispatch, and reconfigures cached views
//! through [`View::options_mut`].

mod pane;
mod stock;

pub use pane::ContentPane;
pub use stock::StockViews;

use std::sync::Weak;

use crate::nav::Screen;
use crate::store::CollectionsStore;

/// Construction-time configuration of a view.
#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    /// Collection the view is about, for screens that show one.
    pub col_id: Option<String>,
    /// Non-owning handle to the shared collections data source.
    pub collections: Option<Weak<CollectionsStore>>,
}

impl ViewOptions {
    /// Options with nothing bound.
    pub fn unbound() -> Self {
        Self::default()
    }
}

pub trait View {
    fn screen(&self) -> Screen;

    /// Draw the view into the content pane.
    fn render(&mut self, pane: &mut ContentPane);

    /// Mutable configuration for views that can be reconfigured in place.
    fn options_mut(&mut self) -> Option<&mut ViewOptions> {
        None
    }
}

/// Constructs views for the controller.
pub trait ViewFactory {
    fn create(&self, screen: Screen, options: ViewOptions) -> Box<dyn View>;
}
