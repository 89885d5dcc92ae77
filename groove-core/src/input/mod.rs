//! Input arbitration
//!
//! Wheel, touch-swipe and pointer-drag gestures all collapse into one
//! [`Direction`]. A drag in progress owns the surface: wheel and touch input
//! are ignored until it is released or cancelled.

pub mod arbitrator;
pub mod config;
pub mod gesture;

pub use arbitrator::InputArbitrator;
pub use config::InputConfig;
pub use gesture::{GestureSource, GestureState, rubber_band};

use serde::Serialize;

/// Directional output of every gesture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the next album.
    Advance,
    /// Towards the previous album.
    Retreat,
}
