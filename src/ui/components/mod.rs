//! Reusable UI components

pub mod status_bar;
pub mod swipe_list;

pub use status_bar::StatusBar;
pub use swipe_list::SwipeListView;
