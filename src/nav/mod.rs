//! Client-side navigation: route table, view cache and the controller that
//! ties them to the chrome.

mod controller;
mod route;
mod slot;
mod state;

pub use controller::{NavEvent, NavOptions, NavSink, NavigationController};
pub use route::{
    normalize_location, LoadPolicy, Route, RouteMatch, RouteParams, RoutePattern, RouteTable,
    Screen, SlotPolicy,
};
pub use slot::ViewSlots;
pub use state::{MenuItem, NavigationState};
