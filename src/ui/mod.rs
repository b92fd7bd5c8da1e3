//! UI module for swipelist
//!
//! This module hosts the swipe list in a terminal: rendering, mouse-to-pointer
//! translation and the event loop.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use layout::LayoutManager;
pub use renderer::run_app;
