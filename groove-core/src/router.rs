//! ViewRouter: top-level mode switch

use std::fmt::{self, Display};

use serde::Serialize;
use tracing::debug;

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Turntable intro; shown until its rotation completes.
    Opening,
    /// Browsing the card stack.
    Collection,
    /// Immersive view of one album.
    Detail,
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Opening => "opening",
            ViewMode::Collection => "collection",
            ViewMode::Detail => "detail",
        })
    }
}

/// Owns the current [`ViewMode`]. Each method returns `(from, to)` when the
/// switch happened and `None` when it is not valid from the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    mode: ViewMode,
}

impl ViewRouter {
    /// Start on the opening screen unless it has been seen before.
    pub fn new(opening_seen: bool) -> Self {
        let mode = if opening_seen {
            ViewMode::Collection
        } else {
            ViewMode::Opening
        };
        Self { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn complete_opening(&mut self) -> Option<(ViewMode, ViewMode)> {
        self.switch(ViewMode::Opening, ViewMode::Collection)
    }

    pub fn open_detail(&mut self) -> Option<(ViewMode, ViewMode)> {
        self.switch(ViewMode::Collection, ViewMode::Detail)
    }

    pub fn close_detail(&mut self) -> Option<(ViewMode, ViewMode)> {
        self.switch(ViewMode::Detail, ViewMode::Collection)
    }

    fn switch(
        &mut self,
        from: ViewMode,
        to: ViewMode,
    ) -> Option<(ViewMode, ViewMode)> {
        if self.mode != from {
            return None;
        }
        self.mode = to;
        debug!(%from, %to, "view mode changed");
        Some((from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_gate_follows_flag() {
        assert_eq!(ViewRouter::new(false).mode(), ViewMode::Opening);
        assert_eq!(ViewRouter::new(true).mode(), ViewMode::Collection);
    }

    #[test]
    fn switches_only_from_their_source_mode() {
        let mut r = ViewRouter::new(false);
        assert_eq!(r.open_detail(), None);
        assert_eq!(
            r.complete_opening(),
            Some((ViewMode::Opening, ViewMode::Collection))
        );
        assert_eq!(r.complete_opening(), None);
        assert_eq!(
            r.open_detail(),
            Some((ViewMode::Collection, ViewMode::Detail))
        );
        assert_eq!(r.open_detail(), None);
        assert_eq!(
            r.close_detail(),
            Some((ViewMode::Detail, ViewMode::Collection))
        );
        assert_eq!(r.mode(), ViewMode::Collection);
    }
}
