//! Row attributes and the per-row handle exposed to host code.

use super::controller::SwipeController;
use crate::constants::{ATTR_FALSE, ATTR_ID, ATTR_OPEN, ATTR_TRUE, CONTENT_CLASS};
use crate::surface::{ElementId, Surface};

/// Identifier forwarded to the action handler
pub type RowKey = i64;

/// Parse a row identifier attribute. Only plain integers are accepted.
pub fn parse_row_key(raw: &str) -> Option<RowKey> {
    raw.trim().parse().ok()
}

/// The row's identifier, or `None` when missing or malformed
pub fn row_key(surface: &Surface, row: ElementId) -> Option<RowKey> {
    surface.data(row, ATTR_ID).and_then(parse_row_key)
}

pub fn is_row_open(surface: &Surface, row: ElementId) -> bool {
    surface.data(row, ATTR_OPEN) == Some(ATTR_TRUE)
}

/// Only the row registry flips the open attribute.
pub(crate) fn set_row_open(surface: &mut Surface, row: ElementId, open: bool) -> bool {
    surface.set_data(row, ATTR_OPEN, if open { ATTR_TRUE } else { ATTR_FALSE })
}

/// Translate the row's content region. Offset 0 clears the translation.
/// Rows without a content region are left untouched.
pub(crate) fn apply_offset(surface: &mut Surface, row: ElementId, offset: i32) -> bool {
    match surface.find_descendant(row, CONTENT_CLASS) {
        Some(content) => surface.set_transform(content, (offset != 0).then_some(offset)),
        None => false,
    }
}

/// Current reveal offset of the row's content region
pub fn row_offset(surface: &Surface, row: ElementId) -> i32 {
    surface
        .find_descendant(row, CONTENT_CLASS)
        .and_then(|content| surface.transform(content))
        .unwrap_or(0)
}

/// Handle bound to one attached row, for host code that holds a row and
/// wants to close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle {
    row: ElementId,
}

impl RowHandle {
    pub(crate) fn new(row: ElementId) -> Self {
        Self { row }
    }

    pub fn element(&self) -> ElementId {
        self.row
    }

    /// Close this row; harmless when it is already closed or gone.
    pub fn close_swipe(&self, controller: &mut SwipeController) {
        controller.close_row(self.row);
    }
}
