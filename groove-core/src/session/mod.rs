//! Session: the whole interaction state and its reducer
//!
//! One [`Session`] per mounted front end. Hosts translate raw input into
//! [`Event`]s and pass each through [`update`], which returns the
//! [`Notification`]s the rest of the application reacts to.

pub mod messages;
pub mod update;

pub use messages::{Event, Key, Notification};
pub use update::update;

use std::ops::Range;
use std::time::Instant;

use tracing::debug;

use crate::carousel::CarouselState;
use crate::geometry::Viewport;
use crate::input::InputArbitrator;
use crate::layout::{self, LayoutProfile};
use crate::router::{ViewMode, ViewRouter};
use crate::stack::{self, CardTransform};
use crate::store::{OPENING_SEEN_KEY, PreferenceStore};
use crate::tuning::Tuning;
use crate::turntable::TurntableController;

#[derive(Debug)]
pub struct Session {
    tuning: Tuning,
    /// Single writer: [`update`] on `Resized`.
    layout: LayoutProfile,
    /// Single writer of the collection index.
    carousel: CarouselState,
    input: InputArbitrator,
    router: ViewRouter,
    /// Present only while the opening screen is showing.
    turntable: Option<TurntableController>,
    store: Box<dyn PreferenceStore>,
    last_frame: Option<Instant>,
}

impl Session {
    /// New session over `count` albums at index 0.
    ///
    /// Starts on the opening screen unless `store` says it was seen.
    pub fn new(
        count: usize,
        viewport: Viewport,
        tuning: Tuning,
        store: impl PreferenceStore + 'static,
    ) -> Self {
        let viewport = viewport.sanitized();
        let layout =
            layout::resolve_with(&tuning.layout, viewport.width, viewport.height);
        let router = ViewRouter::new(store.flag(OPENING_SEEN_KEY));
        let turntable = (router.mode() == ViewMode::Opening)
            .then(|| TurntableController::new(tuning.turntable, viewport.height));

        debug!(
            count,
            mode = %router.mode(),
            device = %layout.device_class,
            "session created"
        );

        Self {
            tuning,
            layout,
            carousel: CarouselState::new(count),
            input: InputArbitrator::new(tuning.input, layout.x_spacing),
            router,
            turntable,
            store: Box::new(store),
            last_frame: None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn layout(&self) -> &LayoutProfile {
        &self.layout
    }

    pub fn mode(&self) -> ViewMode {
        self.router.mode()
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn count(&self) -> usize {
        self.carousel.count()
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn input(&self) -> &InputArbitrator {
        &self.input
    }

    pub fn turntable(&self) -> Option<&TurntableController> {
        self.turntable.as_ref()
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Album shown in the detail view, if that view is active.
    pub fn detail_index(&self) -> Option<usize> {
        (self.mode() == ViewMode::Detail).then(|| self.index())
    }

    /// Live elastic offset of the card stack while dragging (px).
    pub fn drag_offset(&self) -> f32 {
        self.input.drag_offset()
    }

    /// Indices the stack renderer should materialize.
    pub fn render_window(&self) -> Range<usize> {
        stack::render_window(
            self.index(),
            self.count(),
            self.layout.device_class,
            &self.tuning.stack,
        )
    }

    /// Transforms for every card in [`Session::render_window`].
    pub fn card_transforms(&self) -> Vec<CardTransform> {
        stack::stack_transforms(
            self.index(),
            self.count(),
            &self.layout,
            &self.tuning.stack,
        )
    }

    /// Content reloaded with a different album count; the index clamps.
    pub fn set_count(&mut self, count: usize) {
        self.carousel.set_count(count);
    }

    /// Drop every in-flight gesture, cooldown and frame clock. The committed
    /// index and view mode are untouched.
    pub fn teardown(&mut self) {
        self.input.reset();
        if let Some(turntable) = self.turntable.as_mut() {
            turntable.end_drag();
        }
        self.last_frame = None;
        debug!("session torn down");
    }
}
