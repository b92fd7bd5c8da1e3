//! Per-row gesture tracking.
//!
//! A [`GestureTracker`] turns one horizontal drag into a bounded reveal
//! offset while the pointer moves, and into an open/closed decision on
//! release. Row state changes go through the [`RowRegistry`] so the
//! single-open-row rule is kept.

use super::registry::RowRegistry;
use super::row::is_row_open;
use crate::config::{DragMode, SwipeConfig};
use crate::constants::{CONTENT_CLASS, SWIPING_CLASS};
use crate::surface::{ElementId, Surface};
use log::debug;

/// Ephemeral state of one drag. Present only while the drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureSession {
    /// Pointer X at drag start
    pub origin_x: i32,
    /// Offset already applied when the drag began: 0 or the action width
    pub base_offset: i32,
}

/// Outcome of a released drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Open,
    Closed,
}

/// Offset shown while dragging, always within `[0, action_width]`.
pub fn preview_offset(session: &GestureSession, pointer_x: i32, config: &SwipeConfig) -> i32 {
    let delta = pointer_x.saturating_sub(session.origin_x);
    let delta = match config.drag_mode {
        DragMode::Symmetric => delta,
        DragMode::RevealOnly => delta.max(0),
    };
    session.base_offset.saturating_add(delta).clamp(0, config.action_width)
}

/// Release decision. The unclamped final offset is compared, and reaching the
/// threshold exactly counts as open.
pub fn commit_for(final_offset: i32, config: &SwipeConfig) -> Commit {
    if final_offset >= config.threshold {
        Commit::Open
    } else {
        Commit::Closed
    }
}

#[derive(Debug)]
pub struct GestureTracker {
    row: ElementId,
    content: Option<ElementId>,
    session: Option<GestureSession>,
}

impl GestureTracker {
    /// Bind a tracker to `row`, resolving its content region once.
    pub fn attach(row: ElementId, surface: &Surface) -> Self {
        let content = surface.find_descendant(row, CONTENT_CLASS);
        if content.is_none() {
            debug!("Row {} has no content region; offsets will be skipped", row);
        }
        Self {
            row,
            content,
            session: None,
        }
    }

    pub fn row(&self) -> ElementId {
        self.row
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn on_drag_start(&mut self, pointer_x: i32, surface: &mut Surface, registry: &mut RowRegistry) {
        registry.close_others(self.row, surface);

        let base_offset = if is_row_open(surface, self.row) {
            registry.config().action_width
        } else {
            0
        };
        self.session = Some(GestureSession {
            origin_x: pointer_x,
            base_offset,
        });
        surface.add_class(self.row, SWIPING_CLASS);
        debug!("Drag started on row {} at x={} (base {})", self.row, pointer_x, base_offset);
    }

    /// Returns `true` when an active session consumed the move.
    pub fn on_drag_move(&mut self, pointer_x: i32, surface: &mut Surface, registry: &RowRegistry) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let offset = preview_offset(&session, pointer_x, registry.config());
        self.set_offset(surface, offset);
        true
    }

    /// Returns the commit decision, or `None` when no session was active.
    pub fn on_drag_end(&mut self, pointer_x: i32, surface: &mut Surface, registry: &mut RowRegistry) -> Option<Commit> {
        let session = self.session.take()?;
        surface.remove_class(self.row, SWIPING_CLASS);

        let final_offset = session.base_offset.saturating_add(pointer_x.saturating_sub(session.origin_x));
        let commit = commit_for(final_offset, registry.config());
        match commit {
            Commit::Open => registry.request_open(self.row, surface),
            Commit::Closed => registry.request_close(Some(self.row), surface),
        }
        debug!("Drag ended on row {} at offset {}: {:?}", self.row, final_offset, commit);
        Some(commit)
    }

    /// Drop an unfinished session without deciding. The row keeps whatever
    /// offset the last move applied.
    pub fn abandon(&mut self, surface: &mut Surface) {
        if self.session.take().is_some() {
            surface.remove_class(self.row, SWIPING_CLASS);
            debug!("Drag on row {} abandoned", self.row);
        }
    }

    fn set_offset(&self, surface: &mut Surface, offset: i32) {
        if let Some(content) = self.content {
            surface.set_transform(content, Some(offset));
        }
    }
}
