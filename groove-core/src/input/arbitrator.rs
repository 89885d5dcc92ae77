use std::time::{Duration, Instant};

use tracing::trace;

use super::Direction;
use super::config::InputConfig;
use super::gesture::{GestureSource, GestureState, rubber_band};
use crate::geometry::Point;

/// Normalizes wheel, touch and pointer input into [`Direction`] signals.
#[derive(Debug, Clone, Default)]
pub struct InputArbitrator {
    /// Thresholds and cooldowns.
    cfg: InputConfig,
    /// Wheel input is ignored until this instant.
    wheel_quiet_until: Option<Instant>,
    /// Touch swipe being tracked, if any.
    touch: Option<GestureState>,
    /// Pointer drag being tracked, if any.
    drag: Option<GestureState>,
    /// Current card spacing; scales the elastic limit.
    spacing: f32,
    /// Swallow the click that trails a completed drag.
    suppress_click: bool,
}

impl InputArbitrator {
    pub fn new(cfg: InputConfig, spacing: f32) -> Self {
        Self {
            cfg,
            spacing,
            ..Default::default()
        }
    }

    pub fn config(&self) -> InputConfig {
        self.cfg
    }

    /// Layout changed; the elastic limit follows the new card spacing.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing.max(0.0);
    }

    /// Saturation limit for the visual drag offset (px).
    pub fn elastic_limit(&self) -> f32 {
        self.cfg.elastic_limit_factor * self.spacing
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Live gesture, pointer drag first.
    pub fn gesture(&self) -> Option<&GestureState> {
        self.drag.as_ref().or(self.touch.as_ref())
    }

    // ---- wheel ----

    /// One wheel event. Emits at most one signal per cooldown window.
    pub fn wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        now: Instant,
    ) -> Option<Direction> {
        if self.is_dragging() {
            trace!("wheel ignored: drag in progress");
            return None;
        }
        let min = self.cfg.wheel_min_delta;
        if !(delta_x.abs() > min || delta_y.abs() > min) {
            return None;
        }
        if let Some(until) = self.wheel_quiet_until
            && now < until
        {
            trace!("wheel ignored: cooling down");
            return None;
        }

        self.wheel_quiet_until =
            Some(now + Duration::from_millis(self.cfg.wheel_cooldown_ms));
        if delta_y > 0.0 || delta_x > 0.0 {
            Some(Direction::Advance)
        } else {
            Some(Direction::Retreat)
        }
    }

    // ---- touch swipe ----

    pub fn touch_start(&mut self, x: f32) {
        if self.is_dragging() {
            return;
        }
        self.touch = Some(GestureState::begin(
            GestureSource::Touch,
            Point::new(x, 0.0),
        ));
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.is_dragging() {
            return;
        }
        let deadzone = self.cfg.drag_deadzone;
        if let Some(touch) = self.touch.as_mut() {
            touch.update(Point::new(x, 0.0), deadzone);
        }
    }

    /// Release: a leftward swipe past the threshold advances, rightward
    /// retreats, anything shorter is a tap or jitter.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let touch = self.touch.take()?;
        if self.is_dragging() || !touch.has_moved() {
            return None;
        }
        let travel = touch.current_offset;
        let threshold = self.cfg.swipe_threshold;
        if travel < -threshold {
            Some(Direction::Advance)
        } else if travel > threshold {
            Some(Direction::Retreat)
        } else {
            None
        }
    }

    // ---- pointer drag ----

    pub fn drag_start(&mut self, position: Point) {
        self.suppress_click = false;
        self.touch = None;
        self.drag = Some(GestureState::begin(GestureSource::Pointer, position));
    }

    /// Track the pointer and return the elastic visual offset (px).
    pub fn drag_move(&mut self, position: Point) -> f32 {
        let deadzone = self.cfg.drag_deadzone;
        match self.drag.as_mut() {
            Some(drag) => drag.update(position, deadzone),
            None => return 0.0,
        }
        self.drag_offset()
    }

    /// Visual offset of the live drag, or zero.
    pub fn drag_offset(&self) -> f32 {
        self.drag
            .map(|d| rubber_band(d.current_offset, self.elastic_limit()))
            .unwrap_or(0.0)
    }

    /// Release the drag. The threshold applies to raw pointer travel; the
    /// visual offset always returns to zero.
    pub fn drag_end(&mut self) -> Option<Direction> {
        let drag = self.drag.take()?;
        self.suppress_click = drag.axis_locked;

        let travel = drag.current_offset;
        let threshold = self.cfg.drag_threshold;
        let dir = if travel < -threshold {
            Some(Direction::Advance)
        } else if travel > threshold {
            Some(Direction::Retreat)
        } else {
            None
        };
        trace!(travel, ?dir, suppress_click = self.suppress_click, "drag released");
        dir
    }

    /// Abandon the drag with no signal and no click suppression.
    pub fn drag_cancel(&mut self) {
        self.drag = None;
        self.suppress_click = false;
    }

    /// Input unrelated to the pointer arrived; a drag's trailing click can no
    /// longer follow, so the next click counts.
    pub fn clear_click_suppression(&mut self) {
        self.suppress_click = false;
    }

    /// Consume a click. Returns `false` when it trails a real drag and must
    /// not be treated as a selection.
    pub fn take_click(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        !std::mem::take(&mut self.suppress_click)
    }

    /// Drop every gesture and cooldown. Used on teardown and view switches.
    pub fn reset(&mut self) {
        self.wheel_quiet_until = None;
        self.touch = None;
        self.drag = None;
        self.suppress_click = false;
    }
}
