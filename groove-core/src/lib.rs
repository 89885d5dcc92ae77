//! groove interaction core
//!
//! Headless state for the record-collection front end: the layout resolver,
//! gesture arbitration, the carousel index, card stack transforms, the
//! turntable opening screen and the view router. Host environments translate
//! their raw events into [`Event`] values and feed them through [`update`];
//! everything else here is a pure function of that state.
//!
//! Notes
//! - Nothing in this crate blocks or spawns. Cooldowns are timestamp based,
//!   so there are no timers to cancel beyond [`Session::teardown`].
//! - Navigation never fails. Out-of-range requests clamp or are dropped.

pub mod carousel;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod router;
pub mod session;
pub mod spring;
pub mod stack;
pub mod store;
pub mod tuning;
pub mod turntable;

pub use carousel::{CarouselState, Signal, Transition};
pub use geometry::{Point, Rect, Viewport};
pub use input::{Direction, InputArbitrator, InputConfig};
pub use layout::{DeviceClass, LayoutConfig, LayoutProfile};
pub use router::{ViewMode, ViewRouter};
pub use session::{Event, Key, Notification, Session, update};
pub use spring::{Spring, SpringParams};
pub use stack::{CardTransform, StackConfig};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use tuning::Tuning;
pub use turntable::{TurntableConfig, TurntableController};
