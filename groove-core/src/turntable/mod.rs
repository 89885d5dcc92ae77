//! Opening-screen turntable
//!
//! A scroll track and a drag surface both drive one scroll position. The
//! position maps to a target rotation, a spring smooths it, and the smoothed
//! value trips a one-shot completion near the end of the rotation window.

pub mod config;
pub mod controller;

pub use config::TurntableConfig;
pub use controller::TurntableController;

/// Fold a raw angle difference into `(-180, 180]` degrees.
///
/// A pointer crossing the atan2 discontinuity reports e.g. `-179 - 179 =
/// -358`; the real motion is `+2`.
pub fn normalize_angle_delta(delta: f32) -> f32 {
    if !delta.is_finite() {
        return 0.0;
    }
    let mut d = delta % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}
