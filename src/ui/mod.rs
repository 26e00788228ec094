//! Terminal host: chrome widgets, event loop and the location prompt.

pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod location;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use footer::FooterChrome;
pub use navigation::NavigationChrome;
pub use runtime::run;
