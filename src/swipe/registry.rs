//! Single-open-row coordination.
//!
//! The registry is the only writer of a row's open attribute. It caches which
//! row is open; the attribute on the row stays the source of truth, and the
//! cache is cleared whenever the row it names is closed or removed.

use super::row::{apply_offset, is_row_open, set_row_open};
use crate::config::SwipeConfig;
use crate::constants::ROW_CLASS;
use crate::surface::{ElementId, Surface};
use anyhow::Result;
use log::debug;

#[derive(Debug)]
pub struct RowRegistry {
    open_row: Option<ElementId>,
    config: SwipeConfig,
}

impl RowRegistry {
    /// Fails when `config` does not pass [`SwipeConfig::validate`].
    pub fn new(config: SwipeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { open_row: None, config })
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The currently open row, if it still exists and is still open.
    pub fn open_row(&self, surface: &Surface) -> Option<ElementId> {
        self.open_row
            .filter(|row| surface.contains(*row) && is_row_open(surface, *row))
    }

    /// Reset `row` to closed. Passing `None` is a no-op.
    pub fn request_close(&mut self, row: Option<ElementId>, surface: &mut Surface) {
        let Some(row) = row else {
            return;
        };
        apply_offset(surface, row, 0);
        set_row_open(surface, row, false);
        if self.open_row == Some(row) {
            self.open_row = None;
        }
        debug!("Row {} closed", row);
    }

    /// Mark `row` open, closing any other open row first.
    pub fn request_open(&mut self, row: ElementId, surface: &mut Surface) {
        if !surface.contains(row) {
            return;
        }
        self.close_others(row, surface);
        apply_offset(surface, row, self.config.action_width);
        set_row_open(surface, row, true);
        self.open_row = Some(row);
        debug!("Row {} opened", row);
    }

    /// Close every open row except `row`, including rows whose open attribute
    /// was written behind the registry's back.
    pub fn close_others(&mut self, row: ElementId, surface: &mut Surface) {
        for other in Self::open_rows(surface) {
            if other != row {
                self.request_close(Some(other), surface);
            }
        }
        if let Some(current) = self.open_row.filter(|current| *current != row) {
            self.request_close(Some(current), surface);
        }
    }

    /// Close whatever is open; does nothing when no row is open.
    pub fn close_all(&mut self, surface: &mut Surface) {
        self.request_close(self.open_row, surface);
    }

    /// Forget the cached row once its element has left the surface.
    pub fn prune(&mut self, surface: &Surface) {
        if self.open_row.is_some_and(|row| !surface.contains(row)) {
            debug!("Open row removed from the surface");
            self.open_row = None;
        }
    }

    /// Every row whose open attribute is set, in document order.
    pub fn open_rows(surface: &Surface) -> Vec<ElementId> {
        surface
            .query_class(ROW_CLASS)
            .into_iter()
            .filter(|row| is_row_open(surface, *row))
            .collect()
    }
}
