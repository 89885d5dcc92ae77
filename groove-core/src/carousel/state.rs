//! CarouselState: the single writer of the collection index

use tracing::{debug, trace};

use super::transition::{Signal, Transition, transition};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    count: usize,
}

impl CarouselState {
    /// Start at index 0 over `count` albums.
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Start at `index`, clamped into range.
    pub fn with_index(count: usize, index: usize) -> Self {
        let mut s = Self::new(count);
        s.index = clamp_index(index, count);
        s
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Apply a navigation signal. Only [`Transition::MovedTo`] mutates.
    pub fn apply(&mut self, signal: Signal) -> Transition {
        let outcome = transition(self.index, self.count, signal);
        match outcome {
            Transition::MovedTo(to) => {
                debug!(from = self.index, to, ?signal, "carousel index changed");
                self.index = to;
            }
            Transition::DetailRequested(index) => {
                debug!(index, "detail requested for active album");
            }
            Transition::Unchanged => {
                trace!(index = self.index, ?signal, "signal dropped at bounds");
            }
        }
        outcome
    }

    /// Content changed size; keep the index valid.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.index = clamp_index(self.index, count);
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}
