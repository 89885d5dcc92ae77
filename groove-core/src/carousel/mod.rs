//! Carousel state machine
//!
//! Owns the selected album index. Every change goes through [`transition`],
//! which clamps at both ends and never wraps. Detail view is the router's
//! business; the index here is left untouched while detail is open so going
//! back lands on the same card.

pub mod state;
pub mod transition;

pub use state::CarouselState;
pub use transition::{Signal, Transition, transition};
