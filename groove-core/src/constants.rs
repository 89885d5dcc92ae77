//! Centralized tuning constants for the collection and the opening screen
//!
//! Every value here is a default. [`crate::Tuning`] carries them at runtime
//! and `groove-config` can override each one, so tuning should happen here
//! first so every consumer moves together.

/// Viewport classification and card geometry.
pub mod layout {
    /// Widths below this are MOBILE.
    pub const MOBILE_MAX_WIDTH: f32 = 768.0;
    /// Widths below this (and not MOBILE) are TABLET; the rest DESKTOP.
    pub const TABLET_MAX_WIDTH: f32 = 1280.0;

    /// A phone on its side: narrower than this...
    pub const LANDSCAPE_MOBILE_MAX_WIDTH: f32 = 900.0;
    /// ...and shorter than this.
    pub const LANDSCAPE_MOBILE_MAX_HEIGHT: f32 = 500.0;

    /// Header chrome band on MOBILE (px).
    pub const HEADER_BAND_MOBILE: f32 = 72.0;
    /// Header chrome band on TABLET/DESKTOP (px).
    pub const HEADER_BAND: f32 = 96.0;
    /// Footer chrome band on MOBILE (px).
    pub const FOOTER_BAND_MOBILE: f32 = 72.0;
    /// Footer chrome band on TABLET/DESKTOP (px).
    pub const FOOTER_BAND: f32 = 96.0;

    /// Card width budget as a fraction of viewport width.
    pub const MOBILE_WIDTH_FRACTION: f32 = 0.75;
    /// Smallest MOBILE card (px).
    pub const MOBILE_MIN_CARD: f32 = 140.0;
    /// Largest MOBILE card (px).
    pub const MOBILE_MAX_CARD: f32 = 340.0;

    /// TABLET card width as a fraction of viewport width.
    pub const TABLET_WIDTH_FRACTION: f32 = 0.32;
    /// Smallest TABLET card (px).
    pub const TABLET_MIN_CARD: f32 = 200.0;
    /// Largest TABLET card (px).
    pub const TABLET_MAX_CARD: f32 = 320.0;

    /// DESKTOP card width as a fraction of viewport width.
    pub const DESKTOP_WIDTH_FRACTION: f32 = 0.28;
    /// Smallest DESKTOP card (px).
    pub const DESKTOP_MIN_CARD: f32 = 280.0;
    /// Largest DESKTOP card (px).
    pub const DESKTOP_MAX_CARD: f32 = 420.0;

    /// Landscape phones budget against viewport *height* instead.
    pub const LANDSCAPE_HEIGHT_FRACTION: f32 = 0.45;
    /// Largest landscape-phone card (px).
    pub const LANDSCAPE_MAX_CARD: f32 = 220.0;

    /// Card height budget as a fraction of the stage height.
    pub const STAGE_HEIGHT_FRACTION: f32 = 0.6;

    /// Viewports shorter than this use the smaller hard floor.
    pub const SHORT_VIEWPORT_HEIGHT: f32 = 600.0;
    /// Hard card floor on regular viewports (px).
    pub const CARD_FLOOR: f32 = 140.0;
    /// Hard card floor on short viewports (px).
    pub const SHORT_CARD_FLOOR: f32 = 100.0;

    /// Fixed horizontal spacing between stacked cards on MOBILE (px).
    pub const MOBILE_SPACING: f32 = 90.0;
    /// Card spacing on landscape phones (px).
    pub const LANDSCAPE_MOBILE_SPACING: f32 = 120.0;
    /// Spacing as a proportion of card size.
    pub const TABLET_SPACING_RATIO: f32 = 0.75;
    /// DESKTOP spacing as a proportion of card size.
    pub const DESKTOP_SPACING_RATIO: f32 = 0.8;
}

/// Gesture arbitration thresholds.
pub mod input {
    /// Wheel deltas (either axis) at or under this magnitude are noise.
    pub const WHEEL_MIN_DELTA: f32 = 20.0;
    /// Trackpads deliver bursts; one burst must move one card.
    pub const WHEEL_COOLDOWN_MS: u64 = 300;
    /// Horizontal touch travel needed to count as a swipe (px).
    pub const SWIPE_THRESHOLD: f32 = 50.0;
    /// Horizontal pointer travel needed to commit a drag (px).
    pub const DRAG_THRESHOLD: f32 = 50.0;
    /// Travel past which a press is a drag rather than a click (px).
    pub const DRAG_DEADZONE: f32 = 10.0;
    /// Visual drag offset saturates at this multiple of card spacing.
    pub const ELASTIC_LIMIT_FACTOR: f32 = 1.5;
}

/// Card stack presentation.
pub mod stack {
    /// Cards rendered on each side of the active one on MOBILE.
    pub const MOBILE_RENDER_RADIUS: usize = 1;
    /// Cards rendered on each side of the active one elsewhere.
    pub const RENDER_RADIUS: usize = 2;
    /// Z translation per step of distance on MOBILE (px).
    pub const MOBILE_DEPTH_STEP: f32 = -180.0;
    /// Z translation per step of distance (px).
    pub const DEPTH_STEP: f32 = -200.0;
    /// Y-axis rotation per step of distance (degrees).
    pub const MOBILE_ROTATION_STEP: f32 = -8.0;
    /// Y-axis rotation per step of distance off MOBILE (degrees).
    pub const ROTATION_STEP: f32 = -15.0;
    /// Scale of the active card.
    pub const ACTIVE_SCALE: f32 = 1.05;
    /// Scale lost per step of distance.
    pub const SCALE_STEP: f32 = 0.12;
    /// Scale never drops below this.
    pub const MIN_SCALE: f32 = 0.1;
    /// Stacking order of the active card; neighbours sit below it.
    pub const Z_ORDER_BASE: i32 = 100;
}

/// Opening-screen turntable.
pub mod turntable {
    /// Rotation reached at the end of the rotation window (degrees).
    pub const MAX_ANGLE: f32 = 180.0;
    /// Rotation spans progress `[0, ROTATION_END_PROGRESS]`.
    pub const ROTATION_END_PROGRESS: f32 = 0.7;
    /// Smoothed angle at which the one-shot completion fires.
    pub const COMPLETION_ANGLE: f32 = 179.0;
    /// Opacity fades 1 -> 0 over `[FADE_START_PROGRESS, 1]`.
    pub const FADE_START_PROGRESS: f32 = 0.9;
    /// Scrollable range as a fraction of viewport height (150vh track).
    pub const SCROLL_RANGE_FRACTION: f32 = 0.5;
    /// Progress above which the tonearm drops.
    pub const INDICATOR_EPSILON: f32 = 0.01;
    /// Pointer samples closer than this to the disc centre are ignored (px).
    pub const CENTER_DEADZONE: f32 = 40.0;
    /// Tonearm angle while parked (degrees).
    pub const INDICATOR_REST_ANGLE: f32 = -10.0;
    /// Tonearm angle once on the record (degrees).
    pub const INDICATOR_ENGAGED_ANGLE: f32 = 19.0;

    /// Belt drive: heavy and lagging, used for scroll input.
    pub const SCROLL_STIFFNESS: f32 = 50.0;
    /// Scroll spring damping.
    pub const SCROLL_DAMPING: f32 = 20.0;
    /// Scroll spring mass.
    pub const SCROLL_MASS: f32 = 1.0;
    /// Direct drive: hand on the platter.
    pub const DRAG_STIFFNESS: f32 = 800.0;
    /// Drag spring damping.
    pub const DRAG_DAMPING: f32 = 40.0;
    /// Drag spring mass.
    pub const DRAG_MASS: f32 = 0.2;
}

/// Spring integrator numerics.
pub mod spring {
    /// Fixed integration substep (s). Stiff drag springs need it small.
    pub const SUBSTEP_S: f32 = 0.001;
    /// Clamp frame dt to ~33ms (30fps floor) to prevent jumps on frame drops.
    pub const MAX_FRAME_DT_S: f32 = 0.033;
    /// Settle when closer than this to target...
    pub const REST_DELTA: f32 = 0.01;
    /// ...and slower than this (units/s).
    pub const REST_SPEED: f32 = 0.01;
}
