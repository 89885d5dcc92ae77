//! Replay scripts: timestamped host events in JSON
//!
//! ```json
//! [
//!   { "at_ms": 0,   "kind": "wheel", "delta_y": 40 },
//!   { "at_ms": 50,  "kind": "wheel", "delta_y": 40 },
//!   { "at_ms": 400, "kind": "key", "key": "enter" }
//! ]
//! ```

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use serde::Deserialize;

use groove_core::{Event, Key, Point, Rect};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimedEvent {
    /// Milliseconds from the start of the replay.
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKey {
    Enter,
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl From<ScriptKey> for Key {
    fn from(key: ScriptKey) -> Self {
        match key {
            ScriptKey::Enter => Key::Enter,
            ScriptKey::Escape => Key::Escape,
            ScriptKey::ArrowLeft => Key::ArrowLeft,
            ScriptKey::ArrowRight => Key::ArrowRight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Resized {
        width: f32,
        height: f32,
    },
    Wheel {
        #[serde(default)]
        delta_x: f32,
        #[serde(default)]
        delta_y: f32,
    },
    TouchStart {
        x: f32,
    },
    TouchMove {
        x: f32,
    },
    TouchEnd,
    PointerDown {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    PointerCancel,
    Click {
        index: usize,
    },
    Key {
        key: ScriptKey,
    },
    TurntableScroll {
        scroll_top: f32,
    },
    TurntableDragStart {
        x: f32,
        y: f32,
        #[serde(default)]
        disc: Option<Rect>,
    },
    TurntableDrag {
        x: f32,
        y: f32,
        #[serde(default)]
        disc: Option<Rect>,
    },
    TurntableDragEnd,
    /// One animation frame.
    Frame,
    /// `count` frames `every_ms` apart, starting at `at_ms`.
    Frames {
        count: u32,
        #[serde(default = "default_frame_ms")]
        every_ms: u64,
    },
    Teardown,
}

fn default_frame_ms() -> u64 {
    16
}

pub fn parse(raw: &str) -> serde_json::Result<Vec<TimedEvent>> {
    serde_json::from_str(raw)
}

impl TimedEvent {
    /// Core events for this entry, stamped relative to `base`. Most entries
    /// produce one event; `frames` expands into several. Timestamps that do
    /// not fit an [`Instant`] are an error.
    pub fn to_events(&self, base: Instant) -> Result<Vec<(u64, Event)>> {
        let at = |ms: u64| {
            base.checked_add(Duration::from_millis(ms))
                .ok_or_else(|| anyhow!("timestamp {ms}ms is out of range"))
        };
        let single =
            |event: Event| -> Result<Vec<(u64, Event)>> { Ok(vec![(self.at_ms, event)]) };

        match self.event {
            ScriptEvent::Resized { width, height } => {
                single(Event::Resized { width, height })
            }
            ScriptEvent::Wheel { delta_x, delta_y } => single(Event::Wheel {
                delta_x,
                delta_y,
                at: at(self.at_ms)?,
            }),
            ScriptEvent::TouchStart { x } => single(Event::TouchStart { x }),
            ScriptEvent::TouchMove { x } => single(Event::TouchMove { x }),
            ScriptEvent::TouchEnd => single(Event::TouchEnd),
            ScriptEvent::PointerDown { x, y } => single(Event::PointerDown {
                position: Point::new(x, y),
            }),
            ScriptEvent::PointerMove { x, y } => single(Event::PointerMove {
                position: Point::new(x, y),
            }),
            ScriptEvent::PointerUp => single(Event::PointerUp),
            ScriptEvent::PointerCancel => single(Event::PointerCancel),
            ScriptEvent::Click { index } => single(Event::CardClicked { index }),
            ScriptEvent::Key { key } => single(Event::Key(key.into())),
            ScriptEvent::TurntableScroll { scroll_top } => {
                single(Event::TurntableScroll { scroll_top })
            }
            ScriptEvent::TurntableDragStart { x, y, disc } => {
                single(Event::TurntableDragStart {
                    position: Point::new(x, y),
                    disc,
                })
            }
            ScriptEvent::TurntableDrag { x, y, disc } => {
                single(Event::TurntableDrag {
                    position: Point::new(x, y),
                    disc,
                })
            }
            ScriptEvent::TurntableDragEnd => single(Event::TurntableDragEnd),
            ScriptEvent::Frame => single(Event::Frame(at(self.at_ms)?)),
            ScriptEvent::Frames { count, every_ms } => (0..u64::from(count))
                .map(|i| -> Result<(u64, Event)> {
                    let ms = i
                        .checked_mul(every_ms)
                        .and_then(|offset| self.at_ms.checked_add(offset))
                        .ok_or_else(|| {
                            anyhow!("frame {i} of entry at {}ms overflows", self.at_ms)
                        })?;
                    Ok((ms, Event::Frame(at(ms)?)))
                })
                .collect(),
            ScriptEvent::Teardown => single(Event::Teardown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_entries() {
        let script = parse(
            r#"[
                {"at_ms": 0, "kind": "wheel", "delta_y": 40},
                {"at_ms": 5, "kind": "key", "key": "arrow_left"},
                {"at_ms": 9, "kind": "turntable_drag", "x": 1, "y": 2,
                 "disc": {"x": 0, "y": 0, "width": 10, "height": 10}}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            script[0].event,
            ScriptEvent::Wheel {
                delta_x: 0.0,
                delta_y: 40.0
            }
        );
        assert_eq!(
            script[1].event,
            ScriptEvent::Key {
                key: ScriptKey::ArrowLeft
            }
        );
        assert!(matches!(
            script[2].event,
            ScriptEvent::TurntableDrag { disc: Some(_), .. }
        ));
    }

    #[test]
    fn frames_expand_with_their_own_timestamps() {
        let base = Instant::now();
        let entry = TimedEvent {
            at_ms: 100,
            event: ScriptEvent::Frames {
                count: 3,
                every_ms: 20,
            },
        };
        let events = entry.to_events(base).unwrap();
        let stamps: Vec<u64> = events.iter().map(|(ms, _)| *ms).collect();
        assert_eq!(stamps, vec![100, 120, 140]);
        assert_eq!(
            events[2].1,
            Event::Frame(base + Duration::from_millis(140))
        );
    }

    #[test]
    fn overflowing_frame_schedule_is_an_error() {
        let base = Instant::now();
        let frames = TimedEvent {
            at_ms: 10,
            event: ScriptEvent::Frames {
                count: 3,
                every_ms: u64::MAX,
            },
        };
        let err = frames.to_events(base).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(parse(r#"[{"at_ms": 0, "kind": "shake"}]"#).is_err());
    }
}
