//! Swipe-to-reveal gesture core.
//!
//! Dragging a row horizontally reveals a fixed-width action control; a release
//! past the threshold snaps the row open, anything else snaps it closed. At
//! most one row is open at a time.
//!
//! # Module Components
//!
//! - [`gesture`] - Per-row drag tracking and the release decision
//! - [`registry`] - Single-open-row coordination
//! - [`observer`] - Tracker attachment for rows present now and added later
//! - [`bridge`] - Action control taps forwarded to the host application
//! - [`controller`] - Pointer routing and ownership of the shared state
//!
//! All state changes happen synchronously inside event callbacks; the only
//! asynchronous work is the fire-and-forget action handler invocation.

pub mod bridge;
pub mod controller;
pub mod gesture;
pub mod input;
pub mod observer;
pub mod registry;
pub mod row;

pub use bridge::{ActionBridge, ActionError, ActionHandler};
pub use controller::SwipeController;
pub use gesture::{Commit, GestureSession, GestureTracker};
pub use input::{EventOutcome, InputSource, PointerEvent, PointerKind};
pub use observer::AttachmentObserver;
pub use registry::RowRegistry;
pub use row::{parse_row_key, RowHandle, RowKey};
