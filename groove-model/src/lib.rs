//! Content records shared across groove crates.
//!
//! Albums are plain data. The interaction core only ever asks a [`Catalog`]
//! for its length and, for presentation, an album's accent color.

pub mod album;
pub mod catalog;
mod sample;

pub use album::{Album, AlbumKind, ProjectItem};
pub use catalog::Catalog;
