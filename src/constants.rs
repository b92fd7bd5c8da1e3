//! Constants used throughout the application
//!
//! This module centralizes marker names, default values and UI text so the
//! gesture core and the terminal host agree on them.

// Element markers
/// Class carried by every row eligible for the swipe gesture
pub const ROW_CLASS: &str = "swipe-item";
/// Class of the revealable content region nested inside a row
pub const CONTENT_CLASS: &str = "swipe-content";
/// Class of the tappable action control inside a row
pub const ACTION_CLASS: &str = "delete-button";
/// Class present on a row while a drag is in progress
pub const SWIPING_CLASS: &str = "swiping";

// Row attributes
pub const ATTR_ID: &str = "id";
pub const ATTR_OPEN: &str = "open";
pub const ATTR_INITIALIZED: &str = "swipe-initialized";

pub const ATTR_TRUE: &str = "true";
pub const ATTR_FALSE: &str = "false";

// Gesture defaults (pixels)
/// Minimum horizontal travel required to commit a row to open
pub const DEFAULT_THRESHOLD: i32 = 40;
/// Width of the action control, which is also the maximum reveal offset
pub const DEFAULT_ACTION_WIDTH: i32 = 50;
/// Pixels represented by one terminal column
pub const DEFAULT_CELL_WIDTH: u16 = 8;

// UI text
pub const ACTION_LABEL: &str = "Delete";
pub const LIST_TITLE: &str = " Items ";
pub const STATUS_HINTS: &str = "drag right: reveal • a: add • r: refresh • Esc: close • q: quit";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const SUCCESS_ITEM_DELETED: &str = "✅ Item deleted";
pub const SUCCESS_ITEM_ADDED: &str = "✅ Item added";
pub const SUCCESS_REFRESHED: &str = "✅ List refreshed";
