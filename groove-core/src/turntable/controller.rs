//! TurntableController: scroll/drag driven rotation with one-shot completion

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::config::TurntableConfig;
use super::normalize_angle_delta;
use crate::geometry::{Point, Rect};
use crate::spring::Spring;

#[derive(Debug, Clone)]
pub struct TurntableController {
    cfg: TurntableConfig,
    viewport_height: f32,
    /// Scroll offset into the track (px), clamped to `[0, scroll_range]`.
    scroll_top: f32,
    dragging: bool,
    /// Pointer angle around the disc centre at the last accepted sample.
    last_pointer_angle: Option<f32>,
    rotation: Spring,
    completed: bool,
}

impl TurntableController {
    pub fn new(cfg: TurntableConfig, viewport_height: f32) -> Self {
        Self {
            cfg,
            viewport_height: sanitize(viewport_height),
            scroll_top: 0.0,
            dragging: false,
            last_pointer_angle: None,
            rotation: Spring::new(0.0, cfg.scroll_spring),
            completed: false,
        }
    }

    pub fn config(&self) -> &TurntableConfig {
        &self.cfg
    }

    /// Scrollable distance (px).
    pub fn scroll_range(&self) -> f32 {
        self.viewport_height * self.cfg.scroll_range_fraction.max(0.0)
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Normalized scroll progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let range = self.scroll_range();
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }

    /// Unsmoothed rotation for the current progress (degrees).
    pub fn target_angle(&self) -> f32 {
        let end = self.cfg.rotation_end_progress;
        let fraction = if end > 0.0 {
            (self.progress() / end).min(1.0)
        } else {
            1.0
        };
        fraction * self.cfg.max_angle
    }

    /// Spring-smoothed rotation (degrees).
    pub fn angle(&self) -> f32 {
        self.rotation.value()
    }

    /// Disc opacity: 1 until the fade window, then linearly down to 0.
    pub fn opacity(&self) -> f32 {
        let start = self.cfg.fade_start_progress;
        let span = 1.0 - start;
        let p = self.progress();
        if p <= start {
            return 1.0;
        }
        if span <= 0.0 {
            return 0.0;
        }
        (1.0 - (p - start) / span).clamp(0.0, 1.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Cosmetic: the tonearm is down while scrolled in or dragging.
    pub fn indicator_engaged(&self) -> bool {
        self.dragging || self.progress() > self.cfg.indicator_epsilon
    }

    pub fn indicator_angle(&self) -> f32 {
        if self.indicator_engaged() {
            self.cfg.indicator_engaged_angle
        } else {
            self.cfg.indicator_rest_angle
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Viewport resized; the track length follows but progress is kept.
    pub fn set_viewport_height(&mut self, height: f32) {
        let progress = self.progress();
        self.viewport_height = sanitize(height);
        self.scroll_top = progress * self.scroll_range();
        self.retarget();
    }

    /// Scroll track position reported by the host (px).
    pub fn scroll_to(&mut self, scroll_top: f32) {
        if self.completed || !scroll_top.is_finite() {
            return;
        }
        self.scroll_top = scroll_top.clamp(0.0, self.scroll_range());
        self.retarget();
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.scroll_top + delta);
    }

    /// Pointer pressed on the disc. Switches to the direct-drive profile.
    pub fn begin_drag(&mut self, position: Point, disc: Option<Rect>) {
        if self.completed {
            return;
        }
        self.dragging = true;
        self.rotation.set_params(self.cfg.drag_spring);
        self.last_pointer_angle = measurable(disc).map(|rect| pointer_angle(rect, position));
        trace!(has_anchor = self.last_pointer_angle.is_some(), "turntable drag started");
    }

    /// Pointer moved while pressed. Returns the applied angle delta, or
    /// `None` when the sample was skipped.
    pub fn drag_to(&mut self, position: Point, disc: Option<Rect>) -> Option<f32> {
        if self.completed || !self.dragging {
            return None;
        }
        let Some(rect) = measurable(disc) else {
            warn!("turntable rect not measurable; skipping drag sample");
            return None;
        };
        if position.distance_to(rect.center()) < self.cfg.center_deadzone {
            trace!("drag sample inside centre deadzone");
            return None;
        }

        let angle = pointer_angle(rect, position);
        let last = self.last_pointer_angle.replace(angle)?;
        let delta = normalize_angle_delta(angle - last);
        self.scroll_by(delta * self.cfg.pixels_per_degree(self.scroll_range()));
        Some(delta)
    }

    /// Pointer released; back to the belt-drive profile.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.last_pointer_angle = None;
        self.rotation.set_params(self.cfg.scroll_spring);
    }

    /// Advance the spring by one frame. Returns `true` exactly once, on the
    /// frame the smoothed angle first reaches the completion angle.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.completed {
            return false;
        }
        let angle = self.rotation.step(dt);
        if angle >= self.cfg.completion_angle {
            self.completed = true;
            self.dragging = false;
            self.last_pointer_angle = None;
            debug!(angle, "turntable rotation complete");
            return true;
        }
        false
    }

    fn retarget(&mut self) {
        self.rotation.set_target(self.target_angle());
    }
}

fn sanitize(height: f32) -> f32 {
    if height.is_finite() { height.max(0.0) } else { 0.0 }
}

fn measurable(rect: Option<Rect>) -> Option<Rect> {
    rect.filter(Rect::is_measurable)
}

/// Pointer angle around the rect centre (degrees, atan2 convention).
fn pointer_angle(rect: Rect, position: Point) -> f32 {
    let c = rect.center();
    (position.y - c.y).atan2(position.x - c.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);
    const VIEWPORT_H: f32 = 800.0;

    fn disc() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 400.0)
    }

    fn on_disc(degrees: f32) -> Point {
        let c = disc().center();
        let r = 150.0;
        let rad = degrees.to_radians();
        Point::new(c.x + r * rad.cos(), c.y + r * rad.sin())
    }

    fn controller() -> TurntableController {
        TurntableController::new(TurntableConfig::default(), VIEWPORT_H)
    }

    #[test]
    fn progress_maps_to_rotation_then_fade() {
        let mut t = controller();
        assert_eq!(t.scroll_range(), 400.0);

        t.scroll_to(140.0);
        assert!((t.target_angle() - 90.0).abs() < 1e-3);
        assert_eq!(t.opacity(), 1.0);

        t.scroll_to(280.0);
        assert!((t.target_angle() - 180.0).abs() < 1e-3);

        t.scroll_to(380.0);
        assert!((t.target_angle() - 180.0).abs() < 1e-3);
        assert!((t.opacity() - 0.5).abs() < 1e-3);

        t.scroll_to(10_000.0);
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.opacity(), 0.0);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut t = controller();
        t.scroll_to(t.scroll_range());
        let fired = (0..2_000).filter(|_| t.tick(FRAME)).count();
        assert_eq!(fired, 1);
        assert!(t.is_complete());

        let angle = t.angle();
        t.scroll_to(0.0);
        assert!(!t.tick(FRAME));
        assert_eq!(t.angle(), angle);
    }

    #[test]
    fn drag_across_the_seam_moves_forward_slightly() {
        let mut t = controller();
        t.begin_drag(on_disc(179.0), Some(disc()));
        let delta = t.drag_to(on_disc(-179.0), Some(disc()));
        let delta = delta.map(|d| (d * 100.0).round() / 100.0);
        assert_eq!(delta, Some(2.0));

        let px_per_degree = 400.0 * 0.7 / 180.0;
        assert!((t.scroll_top() - 2.0 * px_per_degree).abs() < 1e-2);
    }

    #[test]
    fn half_turn_of_drag_covers_rotation_window() {
        let mut t = controller();
        t.begin_drag(on_disc(0.0), Some(disc()));
        for step in 1..=18 {
            t.drag_to(on_disc(step as f32 * 10.0), Some(disc()));
        }
        assert!((t.target_angle() - 180.0).abs() < 0.1);
    }

    #[test]
    fn unmeasured_disc_and_centre_samples_are_skipped() {
        let mut t = controller();
        t.begin_drag(on_disc(0.0), None);
        assert_eq!(t.drag_to(on_disc(30.0), None), None);
        let collapsed = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(t.drag_to(on_disc(30.0), Some(collapsed)), None);

        // First measurable sample only anchors.
        assert_eq!(t.drag_to(on_disc(30.0), Some(disc())), None);
        assert_eq!(t.drag_to(disc().center(), Some(disc())), None);
        assert_eq!(t.scroll_top(), 0.0);
        assert!(t.drag_to(on_disc(40.0), Some(disc())).is_some());
    }

    #[test]
    fn drag_selects_direct_drive_and_engages_indicator() {
        let mut t = controller();
        assert!(!t.indicator_engaged());
        assert_eq!(t.indicator_angle(), -10.0);

        t.begin_drag(on_disc(0.0), Some(disc()));
        assert!(t.indicator_engaged());
        assert_eq!(t.rotation.params(), t.cfg.drag_spring);

        t.end_drag();
        assert!(!t.indicator_engaged());
        assert_eq!(t.rotation.params(), t.cfg.scroll_spring);

        t.scroll_to(5.0);
        assert!(t.indicator_engaged());
        assert_eq!(t.indicator_angle(), 19.0);
    }

    #[test]
    fn resize_keeps_progress() {
        let mut t = controller();
        t.scroll_to(200.0);
        t.set_viewport_height(400.0);
        assert_eq!(t.scroll_range(), 200.0);
        assert!((t.progress() - 0.5).abs() < 1e-6);
    }
}
