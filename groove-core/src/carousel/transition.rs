use serde::Serialize;

use crate::input::Direction;

/// Navigation intent fed to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Next album.
    Advance,
    /// Previous album.
    Retreat,
    /// A click on card `i`.
    Select(usize),
}

impl From<Direction> for Signal {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Advance => Signal::Advance,
            Direction::Retreat => Signal::Retreat,
        }
    }
}

/// Outcome of applying a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Clamped, dropped, or nothing to select.
    Unchanged,
    /// Index moved to the carried value.
    MovedTo(usize),
    /// The active card was selected; open its detail view.
    DetailRequested(usize),
}

/// Pure transition function over `[0, count - 1]`.
///
/// With `count == 0` every signal is a no-op.
pub fn transition(current: usize, count: usize, signal: Signal) -> Transition {
    if count == 0 {
        return Transition::Unchanged;
    }
    let last = count - 1;
    let current = current.min(last);

    let next = match signal {
        Signal::Advance => current.saturating_add(1).min(last),
        Signal::Retreat => current.saturating_sub(1),
        Signal::Select(i) if i == current => {
            return Transition::DetailRequested(current);
        }
        Signal::Select(i) if i > last => return Transition::Unchanged,
        Signal::Select(i) => i,
    };

    if next == current {
        Transition::Unchanged
    } else {
        Transition::MovedTo(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_retreat_clamp() {
        assert_eq!(transition(0, 3, Signal::Advance), Transition::MovedTo(1));
        assert_eq!(transition(2, 3, Signal::Advance), Transition::Unchanged);
        assert_eq!(transition(0, 3, Signal::Retreat), Transition::Unchanged);
        assert_eq!(transition(2, 3, Signal::Retreat), Transition::MovedTo(1));
    }

    #[test]
    fn select_active_requests_detail_and_others_jump() {
        assert_eq!(
            transition(1, 4, Signal::Select(1)),
            Transition::DetailRequested(1)
        );
        assert_eq!(transition(1, 4, Signal::Select(3)), Transition::MovedTo(3));
        assert_eq!(transition(1, 4, Signal::Select(9)), Transition::Unchanged);
    }

    #[test]
    fn empty_collection_ignores_everything() {
        for signal in [Signal::Advance, Signal::Retreat, Signal::Select(0)] {
            assert_eq!(transition(0, 0, signal), Transition::Unchanged);
        }
    }
}
