//! Pointer input delivered to the swipe controller.

use crate::surface::ElementId;

/// Device family that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Click,
}

/// A single pointer event, positioned by its horizontal coordinate in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub source: InputSource,
    pub x: i32,
    /// Element under the pointer, `None` when outside every element
    pub target: Option<ElementId>,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, source: InputSource, x: i32, target: Option<ElementId>) -> Self {
        Self {
            kind,
            source,
            x,
            target,
        }
    }

    pub fn down(source: InputSource, x: i32, target: ElementId) -> Self {
        Self::new(PointerKind::Down, source, x, Some(target))
    }

    pub fn moved(source: InputSource, x: i32) -> Self {
        Self::new(PointerKind::Move, source, x, None)
    }

    pub fn up(source: InputSource, x: i32) -> Self {
        Self::new(PointerKind::Up, source, x, None)
    }

    pub fn click(target: Option<ElementId>) -> Self {
        Self::new(PointerKind::Click, InputSource::Mouse, 0, target)
    }
}

/// What the host should do with an event after the controller handled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Suppress the host's default behavior (e.g. scrolling during a touch drag)
    pub default_prevented: bool,
    /// Do not deliver the event to any other listener
    pub propagation_stopped: bool,
}

impl EventOutcome {
    pub fn consumed() -> Self {
        Self {
            default_prevented: true,
            propagation_stopped: true,
        }
    }

    pub fn prevent_default() -> Self {
        Self {
            default_prevented: true,
            propagation_stopped: false,
        }
    }
}
