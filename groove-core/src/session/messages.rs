use std::time::Instant;

use serde::Serialize;

use crate::geometry::{Point, Rect};
use crate::router::ViewMode;

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Raw host events, already translated out of the host's own types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Viewport measured or resized (px).
    Resized { width: f32, height: f32 },
    /// One wheel event with the host's delivery timestamp.
    Wheel {
        delta_x: f32,
        delta_y: f32,
        at: Instant,
    },
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    /// Pointer pressed on the card stack.
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp,
    /// The host lost the pointer (capture lost, window blur).
    PointerCancel,
    /// Click on stacked card `index`; arrives after the matching `PointerUp`.
    CardClicked { index: usize },
    Key(Key),
    /// Opening-screen scroll track position (px).
    TurntableScroll { scroll_top: f32 },
    /// Pointer pressed on the disc. `disc` is its bounding box if measured.
    TurntableDragStart {
        position: Point,
        disc: Option<Rect>,
    },
    TurntableDrag {
        position: Point,
        disc: Option<Rect>,
    },
    TurntableDragEnd,
    /// Animation frame with the host's frame timestamp.
    Frame(Instant),
    /// The host is tearing the view down.
    Teardown,
}

/// Observable outcomes of one [`Event`], in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// Browsing moved the active album.
    IndexChanged { from: usize, to: usize },
    /// The active album was selected.
    DetailRequested { index: usize },
    /// Top-level view switched. Background audio keys off this.
    ModeChanged { from: ViewMode, to: ViewMode },
    /// The turntable finished its rotation. Fires once per session.
    OpeningCompleted,
}
