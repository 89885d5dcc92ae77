//! Per-gesture tracking and the elastic drag transform

use crate::geometry::Point;

/// Which modality opened the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    Touch,
    Pointer,
}

/// Ephemeral record for one press-move-release interaction.
///
/// Created on touch/pointer down, updated on move and dropped on release.
/// Nothing here outlives the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub source: GestureSource,
    pub origin: Point,
    /// Raw horizontal travel from `origin` (px).
    pub current_offset: f32,
    /// Set once horizontal travel leaves the deadzone; from then on the
    /// gesture is a drag and the trailing click is swallowed.
    pub axis_locked: bool,
    moved: bool,
}

impl GestureState {
    pub fn begin(source: GestureSource, origin: Point) -> Self {
        Self {
            source,
            origin,
            current_offset: 0.0,
            axis_locked: false,
            moved: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.source == GestureSource::Pointer
    }

    /// Whether any move arrived since the gesture began.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn update(&mut self, position: Point, deadzone: f32) {
        self.moved = true;
        self.current_offset = position.x - self.origin.x;
        if self.current_offset.abs() > deadzone {
            self.axis_locked = true;
        }
    }
}

/// Saturating drag transform.
///
/// Near zero it tracks the input one to one; as `raw` grows the output
/// approaches `limit` but stays strictly inside `(-limit, limit)`.
pub fn rubber_band(raw: f32, limit: f32) -> f32 {
    if raw.is_nan() || limit.is_nan() || limit <= 0.0 || limit.is_infinite() {
        return 0.0;
    }
    let ceiling = limit.next_down();
    if raw.is_infinite() {
        return ceiling.copysign(raw);
    }
    // Divide first so huge inputs cannot overflow to inf/inf.
    let eased = raw / (raw.abs() + limit) * limit;
    eased.clamp(-ceiling, ceiling)
}
