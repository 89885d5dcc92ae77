use std::time::{Duration, Instant};

use tracing::{trace, warn};

use super::Session;
use super::messages::{Event, Key, Notification};
use crate::carousel::{Signal, Transition};
use crate::geometry::{Point, Rect};
use crate::input::Direction;
use crate::layout;
use crate::router::ViewMode;
use crate::store::OPENING_SEEN_KEY;

/// Apply one event. Never fails: events that do not apply to the current
/// view are dropped.
pub fn update(session: &mut Session, event: Event) -> Vec<Notification> {
    let mut out = Vec::new();
    if !trails_pointer(&event) {
        session.input.clear_click_suppression();
    }
    match event {
        Event::Resized { width, height } => handle_resize(session, width, height),
        Event::Wheel {
            delta_x,
            delta_y,
            at,
        } => {
            if browsing(session) {
                let dir = session.input.wheel(delta_x, delta_y, at);
                navigate(session, dir, &mut out);
            }
        }
        Event::TouchStart { x } => {
            if browsing(session) {
                session.input.touch_start(x);
            }
        }
        Event::TouchMove { x } => {
            if browsing(session) {
                session.input.touch_move(x);
            }
        }
        Event::TouchEnd => {
            if browsing(session) {
                let dir = session.input.touch_end();
                navigate(session, dir, &mut out);
            }
        }
        Event::PointerDown { position } => {
            if browsing(session) {
                session.input.drag_start(position);
            }
        }
        Event::PointerMove { position } => {
            if browsing(session) {
                session.input.drag_move(position);
            }
        }
        Event::PointerUp => {
            if browsing(session) {
                let dir = session.input.drag_end();
                navigate(session, dir, &mut out);
            }
        }
        Event::PointerCancel => session.input.drag_cancel(),
        Event::CardClicked { index } => handle_click(session, index, &mut out),
        Event::Key(key) => handle_key(session, key, &mut out),
        Event::TurntableScroll { scroll_top } => {
            if let Some(turntable) = session.turntable.as_mut() {
                turntable.scroll_to(scroll_top);
            }
        }
        Event::TurntableDragStart { position, disc } => {
            handle_turntable_drag(session, position, disc, true)
        }
        Event::TurntableDrag { position, disc } => {
            handle_turntable_drag(session, position, disc, false)
        }
        Event::TurntableDragEnd => {
            if let Some(turntable) = session.turntable.as_mut() {
                turntable.end_drag();
            }
        }
        Event::Frame(now) => handle_frame(session, now, &mut out),
        Event::Teardown => session.teardown(),
    }
    out
}

/// Events a host may deliver between a pointer release and the click it
/// produces. Anything else ends the window in which that click is swallowed.
fn trails_pointer(event: &Event) -> bool {
    matches!(
        event,
        Event::PointerMove { .. }
            | Event::PointerUp
            | Event::CardClicked { .. }
            | Event::Frame(_)
    )
}

fn browsing(session: &Session) -> bool {
    session.router.mode() == ViewMode::Collection
}

fn handle_resize(session: &mut Session, width: f32, height: f32) {
    let profile = layout::resolve_with(&session.tuning.layout, width, height);
    session.input.set_spacing(profile.x_spacing);
    if let Some(turntable) = session.turntable.as_mut() {
        turntable.set_viewport_height(profile.viewport_height);
    }
    trace!(
        device = %profile.device_class,
        card = profile.card_size,
        spacing = profile.x_spacing,
        "layout resolved"
    );
    session.layout = profile;
}

fn navigate(
    session: &mut Session,
    dir: Option<Direction>,
    out: &mut Vec<Notification>,
) {
    if let Some(dir) = dir {
        apply_signal(session, dir.into(), out);
    }
}

fn apply_signal(
    session: &mut Session,
    signal: Signal,
    out: &mut Vec<Notification>,
) {
    let from = session.carousel.index();
    match session.carousel.apply(signal) {
        Transition::Unchanged => {}
        Transition::MovedTo(to) => out.push(Notification::IndexChanged { from, to }),
        Transition::DetailRequested(index) => {
            out.push(Notification::DetailRequested { index });
            if let Some((from, to)) = session.router.open_detail() {
                // The stack is hidden now; nothing may stay attached to it.
                session.input.reset();
                out.push(Notification::ModeChanged { from, to });
            }
        }
    }
}

fn handle_click(session: &mut Session, index: usize, out: &mut Vec<Notification>) {
    if !browsing(session) {
        return;
    }
    if !session.input.take_click() {
        trace!(index, "click after drag suppressed");
        return;
    }
    apply_signal(session, Signal::Select(index), out);
}

fn handle_key(session: &mut Session, key: Key, out: &mut Vec<Notification>) {
    if session.input.is_dragging() {
        trace!(?key, "key ignored: drag in progress");
        return;
    }
    match (session.router.mode(), key) {
        (ViewMode::Collection, Key::Enter) => {
            let current = session.carousel.index();
            apply_signal(session, Signal::Select(current), out);
        }
        (ViewMode::Collection, Key::ArrowRight) => {
            apply_signal(session, Signal::Advance, out)
        }
        (ViewMode::Collection, Key::ArrowLeft) => {
            apply_signal(session, Signal::Retreat, out)
        }
        (ViewMode::Detail, Key::Escape) => {
            if let Some((from, to)) = session.router.close_detail() {
                out.push(Notification::ModeChanged { from, to });
            }
        }
        _ => {}
    }
}

fn handle_turntable_drag(
    session: &mut Session,
    position: Point,
    disc: Option<Rect>,
    start: bool,
) {
    let Some(turntable) = session.turntable.as_mut() else {
        return;
    };
    if start {
        turntable.begin_drag(position, disc);
    } else {
        turntable.drag_to(position, disc);
    }
}

fn handle_frame(session: &mut Session, now: Instant, out: &mut Vec<Notification>) {
    let dt = session
        .last_frame
        .map(|prev| now.saturating_duration_since(prev))
        .unwrap_or(Duration::ZERO);
    session.last_frame = Some(now);

    let Some(turntable) = session.turntable.as_mut() else {
        return;
    };
    if !turntable.tick(dt) {
        return;
    }

    out.push(Notification::OpeningCompleted);
    session.turntable = None;
    if let Some((from, to)) = session.router.complete_opening() {
        out.push(Notification::ModeChanged { from, to });
    }
    if let Err(err) = session.store.set_flag(OPENING_SEEN_KEY, true) {
        warn!(error = %err, "failed to persist opening flag");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;
    use crate::store::MemoryStore;
    use crate::tuning::Tuning;

    fn browsing_session(count: usize) -> Session {
        let store = MemoryStore::new().with_flag(OPENING_SEEN_KEY, true);
        Session::new(count, Viewport::new(1440.0, 900.0), Tuning::default(), store)
    }

    #[test]
    fn arrows_navigate_and_enter_opens_detail() {
        let mut s = browsing_session(4);
        assert_eq!(
            update(&mut s, Event::Key(Key::ArrowRight)),
            vec![Notification::IndexChanged { from: 0, to: 1 }]
        );
        assert!(update(&mut s, Event::Key(Key::ArrowLeft)).len() == 1);
        assert!(update(&mut s, Event::Key(Key::ArrowLeft)).is_empty());

        let out = update(&mut s, Event::Key(Key::Enter));
        assert_eq!(
            out,
            vec![
                Notification::DetailRequested { index: 0 },
                Notification::ModeChanged {
                    from: ViewMode::Collection,
                    to: ViewMode::Detail
                },
            ]
        );
        assert_eq!(s.detail_index(), Some(0));
    }

    #[test]
    fn detail_ignores_navigation_until_escape() {
        let mut s = browsing_session(4);
        update(&mut s, Event::CardClicked { index: 2 });
        update(&mut s, Event::CardClicked { index: 2 });
        assert_eq!(s.mode(), ViewMode::Detail);

        assert!(update(&mut s, Event::Key(Key::ArrowRight)).is_empty());
        let t0 = Instant::now();
        let wheel = Event::Wheel {
            delta_x: 0.0,
            delta_y: 80.0,
            at: t0,
        };
        assert!(update(&mut s, wheel).is_empty());
        assert_eq!(s.index(), 2);

        update(&mut s, Event::Key(Key::Escape));
        assert_eq!(s.mode(), ViewMode::Collection);
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn opening_screen_ignores_collection_input() {
        let mut s = Session::new(
            4,
            Viewport::new(1440.0, 900.0),
            Tuning::default(),
            MemoryStore::new(),
        );
        assert_eq!(s.mode(), ViewMode::Opening);
        assert!(update(&mut s, Event::Key(Key::ArrowRight)).is_empty());
        assert!(update(&mut s, Event::CardClicked { index: 1 }).is_empty());
        assert_eq!(s.index(), 0);
    }

    fn pointer(x: f32) -> Point {
        Point::new(x, 400.0)
    }

    #[test]
    fn keys_wait_for_an_active_drag() {
        let mut s = browsing_session(4);
        update(&mut s, Event::PointerDown { position: pointer(700.0) });
        update(&mut s, Event::PointerMove { position: pointer(600.0) });
        assert!(update(&mut s, Event::Key(Key::ArrowRight)).is_empty());
        assert!(update(&mut s, Event::Key(Key::Enter)).is_empty());
        assert_eq!(
            update(&mut s, Event::PointerUp),
            vec![Notification::IndexChanged { from: 0, to: 1 }]
        );
        assert_eq!(s.index(), 1);
        assert_eq!(s.mode(), ViewMode::Collection);
    }

    #[test]
    fn drag_without_trailing_click_leaves_no_suppression() {
        let mut s = browsing_session(4);
        update(&mut s, Event::PointerDown { position: pointer(700.0) });
        update(&mut s, Event::PointerMove { position: pointer(670.0) });
        assert!(update(&mut s, Event::PointerUp).is_empty());

        assert_eq!(
            update(&mut s, Event::Key(Key::ArrowRight)),
            vec![Notification::IndexChanged { from: 0, to: 1 }]
        );
        assert_eq!(
            update(&mut s, Event::CardClicked { index: 2 }),
            vec![Notification::IndexChanged { from: 1, to: 2 }]
        );
    }

    #[test]
    fn trailing_click_is_still_swallowed_across_frames() {
        let mut s = browsing_session(4);
        update(&mut s, Event::PointerDown { position: pointer(700.0) });
        update(&mut s, Event::PointerMove { position: pointer(670.0) });
        update(&mut s, Event::PointerUp);
        update(&mut s, Event::Frame(Instant::now()));
        assert!(update(&mut s, Event::CardClicked { index: 2 }).is_empty());
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn resize_rescales_layout_and_spacing() {
        let mut s = browsing_session(4);
        update(
            &mut s,
            Event::Resized {
                width: 400.0,
                height: 800.0,
            },
        );
        assert_eq!(s.layout().device_class, layout::DeviceClass::Mobile);
        assert_eq!(s.input().elastic_limit(), 1.5 * s.layout().x_spacing);
        assert_eq!(s.render_window(), 0..2);
    }
}
