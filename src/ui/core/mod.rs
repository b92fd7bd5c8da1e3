//! Core UI functionality for the swipelist demo.
//!
//! # Module Components
//!
//! - [`actions`] - Actions produced by input and by the action handler
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling, including mouse input
//!
//! Components turn terminal events into [`AppAction`]s; the application
//! applies them in [`Component::update`].

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::AppAction;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
