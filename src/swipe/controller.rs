//! Routes pointer input to row trackers and owns the shared swipe state.

use super::bridge::{ActionBridge, ActionHandler};
use super::gesture::Commit;
use super::input::{EventOutcome, InputSource, PointerEvent, PointerKind};
use super::observer::AttachmentObserver;
use super::registry::RowRegistry;
use super::row::{row_offset, RowHandle};
use crate::config::SwipeConfig;
use crate::constants::ROW_CLASS;
use crate::surface::{ElementId, Surface};
use anyhow::Result;
use log::debug;
use std::sync::Arc;

/// Row and input source that own the pointer between down and up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capture {
    row: ElementId,
    source: InputSource,
}

/// The swipe service: one per surface.
///
/// Holds the surface, the single open-row registry, the attachment observer
/// and the action bridge, and hands each of them to the others by reference.
pub struct SwipeController {
    surface: Surface,
    registry: RowRegistry,
    observer: AttachmentObserver,
    bridge: ActionBridge,
    capture: Option<Capture>,
}

impl SwipeController {
    pub fn new(config: SwipeConfig) -> Result<Self> {
        Self::with_surface(Surface::new(), config)
    }

    /// Take over an existing surface, attaching to the rows it already holds.
    /// Fails when `config` is out of bounds.
    pub fn with_surface(mut surface: Surface, config: SwipeConfig) -> Result<Self> {
        let registry = RowRegistry::new(config)?;
        let observer = AttachmentObserver::observe(&mut surface);
        Ok(Self {
            surface,
            registry,
            observer,
            bridge: ActionBridge::new(),
            capture: None,
        })
    }

    pub fn config(&self) -> &SwipeConfig {
        self.registry.config()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access for the host to insert and remove elements. Structural
    /// changes are picked up by the next [`sync`](Self::sync) or pointer event.
    ///
    /// The row attribute [`ATTR_OPEN`](crate::constants::ATTR_OPEN) belongs to
    /// the registry: open and close rows through the controller or a
    /// [`RowHandle`]. A row marked open directly is closed by the next drag
    /// start on another row.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn observer(&self) -> &AttachmentObserver {
        &self.observer
    }

    /// Apply pending structural changes: attach new rows, forget removed ones.
    pub fn sync(&mut self) -> usize {
        let attached = self.observer.pump(&mut self.surface);
        self.registry.prune(&self.surface);
        if self.capture.is_some_and(|capture| !self.surface.contains(capture.row)) {
            self.capture = None;
        }
        attached
    }

    pub fn register_action_handler(&mut self, handler: Arc<dyn ActionHandler>) {
        self.bridge.register(handler);
    }

    pub fn has_action_handler(&self) -> bool {
        self.bridge.is_registered()
    }

    /// Close whichever row is open, for host code reacting to unrelated
    /// events such as navigation.
    pub fn close_all_swipes(&mut self) {
        self.registry.close_all(&mut self.surface);
    }

    pub fn close_row(&mut self, row: ElementId) {
        self.registry.request_close(Some(row), &mut self.surface);
    }

    /// Handle for an attached row
    pub fn row_handle(&self, row: ElementId) -> Option<RowHandle> {
        self.observer.is_attached(row).then(|| RowHandle::new(row))
    }

    pub fn open_row(&self) -> Option<ElementId> {
        self.registry.open_row(&self.surface)
    }

    /// Current reveal offset of `row`
    pub fn offset(&self, row: ElementId) -> i32 {
        row_offset(&self.surface, row)
    }

    /// Row currently being dragged
    pub fn dragging_row(&self) -> Option<ElementId> {
        self.capture.map(|capture| capture.row)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> EventOutcome {
        self.sync();
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(event);
                EventOutcome::default()
            }
            PointerKind::Move => self.pointer_move(event),
            PointerKind::Up => {
                self.pointer_up(event);
                EventOutcome::default()
            }
            PointerKind::Click => self.click(event.target),
        }
    }

    fn pointer_down(&mut self, event: PointerEvent) {
        let Some(row) = event.target.and_then(|target| self.surface.closest(target, ROW_CLASS)) else {
            return;
        };
        if !self.observer.is_attached(row) {
            return;
        }

        // An earlier drag whose release never arrived is dropped undecided
        if let Some(previous) = self.capture.take() {
            if let Some(tracker) = self.observer.tracker_mut(previous.row) {
                tracker.abandon(&mut self.surface);
            }
        }

        if let Some(tracker) = self.observer.tracker_mut(row) {
            tracker.on_drag_start(event.x, &mut self.surface, &mut self.registry);
            self.capture = Some(Capture {
                row,
                source: event.source,
            });
        }
    }

    fn pointer_move(&mut self, event: PointerEvent) -> EventOutcome {
        let Some(capture) = self.capture.filter(|capture| capture.source == event.source) else {
            return EventOutcome::default();
        };
        let Some(tracker) = self.observer.tracker_mut(capture.row) else {
            return EventOutcome::default();
        };
        let consumed = tracker.on_drag_move(event.x, &mut self.surface, &self.registry);
        if consumed && event.source == InputSource::Touch {
            EventOutcome::prevent_default()
        } else {
            EventOutcome::default()
        }
    }

    fn pointer_up(&mut self, event: PointerEvent) -> Option<Commit> {
        let capture = self.capture.filter(|capture| capture.source == event.source)?;
        self.capture = None;
        let tracker = self.observer.tracker_mut(capture.row)?;
        tracker.on_drag_end(event.x, &mut self.surface, &mut self.registry)
    }

    /// Action controls are checked first; an unconsumed click then closes the
    /// open row when it lands outside of it.
    fn click(&mut self, target: Option<ElementId>) -> EventOutcome {
        let outcome = self.bridge.handle_click(target, &mut self.surface, &mut self.registry);
        if outcome.propagation_stopped {
            return outcome;
        }

        if let Some(open) = self.registry.open_row(&self.surface) {
            let inside = target.is_some_and(|target| self.surface.is_ancestor_or_self(open, target));
            if !inside {
                debug!("Click outside open row {}", open);
                self.registry.request_close(Some(open), &mut self.surface);
            }
        }
        outcome
    }
}
