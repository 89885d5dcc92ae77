use crate::constants::turntable as defaults;
use crate::spring::SpringParams;

/// Angles, progress windows and spring profiles for the opening screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurntableConfig {
    /// Rotation at the end of the rotation window (degrees).
    pub max_angle: f32,
    /// Progress at which rotation reaches `max_angle`.
    pub rotation_end_progress: f32,
    /// Smoothed angle that trips completion (degrees).
    pub completion_angle: f32,
    /// Progress at which the fade-out starts.
    pub fade_start_progress: f32,
    /// Scrollable range as a fraction of viewport height.
    pub scroll_range_fraction: f32,
    /// Progress above which the indicator engages.
    pub indicator_epsilon: f32,
    /// Pointer samples inside this radius of the disc centre are ignored (px).
    pub center_deadzone: f32,
    pub indicator_rest_angle: f32,
    pub indicator_engaged_angle: f32,
    /// Belt drive.
    pub scroll_spring: SpringParams,
    /// Direct drive.
    pub drag_spring: SpringParams,
}

impl Default for TurntableConfig {
    fn default() -> Self {
        Self {
            max_angle: defaults::MAX_ANGLE,
            rotation_end_progress: defaults::ROTATION_END_PROGRESS,
            completion_angle: defaults::COMPLETION_ANGLE,
            fade_start_progress: defaults::FADE_START_PROGRESS,
            scroll_range_fraction: defaults::SCROLL_RANGE_FRACTION,
            indicator_epsilon: defaults::INDICATOR_EPSILON,
            center_deadzone: defaults::CENTER_DEADZONE,
            indicator_rest_angle: defaults::INDICATOR_REST_ANGLE,
            indicator_engaged_angle: defaults::INDICATOR_ENGAGED_ANGLE,
            scroll_spring: SpringParams::new(
                defaults::SCROLL_STIFFNESS,
                defaults::SCROLL_DAMPING,
                defaults::SCROLL_MASS,
            ),
            drag_spring: SpringParams::new(
                defaults::DRAG_STIFFNESS,
                defaults::DRAG_DAMPING,
                defaults::DRAG_MASS,
            ),
        }
    }
}

impl TurntableConfig {
    /// Scroll pixels per degree of rotation for a given scroll range, so
    /// that a full `max_angle` of drag covers the rotation window.
    pub fn pixels_per_degree(&self, scroll_range: f32) -> f32 {
        if self.max_angle <= 0.0 {
            return 0.0;
        }
        scroll_range * self.rotation_end_progress / self.max_angle
    }
}
