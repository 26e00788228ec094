//! Terminal administration console for ArangoDB.
//!
//! The heart of the crate is [`nav::NavigationController`], which maps
//! locations such as `collection/users` to console screens, decides whether a
//! screen's view is reused or rebuilt, and keeps the navigation chrome's
//! active menu entry in sync.

pub mod cli;
pub mod config;
pub mod logging;
pub mod nav;
pub mod store;
pub mod ui;
pub mod views;
