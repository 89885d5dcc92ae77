//! Thresholds for the input arbitrator

use crate::constants::input as defaults;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConfig {
    /// Wheel deltas on both axes at or under this are ignored.
    pub wheel_min_delta: f32,
    /// Quiet window after a wheel signal (ms).
    pub wheel_cooldown_ms: u64,
    /// Minimum horizontal touch travel for a swipe (px).
    pub swipe_threshold: f32,
    /// Minimum horizontal pointer travel to commit a drag (px).
    pub drag_threshold: f32,
    /// Travel that turns a press into a drag and suppresses the click (px).
    pub drag_deadzone: f32,
    /// Visual drag offset limit as a multiple of card spacing.
    pub elastic_limit_factor: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_min_delta: defaults::WHEEL_MIN_DELTA,
            wheel_cooldown_ms: defaults::WHEEL_COOLDOWN_MS,
            swipe_threshold: defaults::SWIPE_THRESHOLD,
            drag_threshold: defaults::DRAG_THRESHOLD,
            drag_deadzone: defaults::DRAG_DEADZONE,
            elastic_limit_factor: defaults::ELASTIC_LIMIT_FACTOR,
        }
    }
}
