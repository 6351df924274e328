//! Generic event system for the deck.
//!
//! Callers can subscribe to deck lifecycle events via [`EventController`].
//! Each event carries a set of [`EventKind`] flags (bitflags-style) so a
//! single occurrence can match multiple categories. The caller specifies an
//! [`EventFilter`] to receive only the events they care about; the filter is
//! a simple OR mask: an event is delivered when `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::sink::SeriesId;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    // ── Counters ─────────────────────────────────────────────────────────
    /// A counter was retargeted at a new value.
    pub const ANIMATION_RETARGETED: Self = Self(1 << 0);
    /// A counter finished interpolating and snapped to its target.
    pub const ANIMATION_COMPLETED: Self = Self(1 << 1);

    // ── Particle backdrop ────────────────────────────────────────────────
    /// The particle backdrop started running.
    pub const SIM_STARTED: Self = Self(1 << 2);
    /// The particle backdrop was torn down.
    pub const SIM_TORN_DOWN: Self = Self(1 << 3);

    // ── Data ─────────────────────────────────────────────────────────────
    /// A new series was registered.
    pub const SERIES_REGISTERED: Self = Self(1 << 4);
    /// One or more series received data.
    pub const SERIES_UPDATED: Self = Self(1 << 5);

    // ── Capabilities / appearance ────────────────────────────────────────
    /// The reduced-motion preference changed.
    pub const REDUCED_MOTION_CHANGED: Self = Self(1 << 6);
    /// The deck theme changed.
    pub const THEME_CHANGED: Self = Self(1 << 7);

    /// Matches every event.
    pub const ALL: Self = Self(u32::MAX);

    /// Whether any bit of `other` is set in `self`.
    pub fn contains_any(self, other: EventKind) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = EventKind;
    fn bitor(self, rhs: EventKind) -> EventKind {
        EventKind(self.0 | rhs.0)
    }
}

/// OR mask of [`EventKind`] bits a subscriber wants delivered.
pub type EventFilter = EventKind;

// ─────────────────────────────────────────────────────────────────────────────
// DeckEvent
// ─────────────────────────────────────────────────────────────────────────────

/// One event occurrence with optional metadata.
#[derive(Debug, Clone)]
pub struct DeckEvent {
    pub kinds: EventKind,
    /// Series this event concerns, when applicable.
    pub series: Option<SeriesId>,
    /// Counter target value, for animation events.
    pub target: Option<f64>,
    /// New reduced-motion state, for capability events.
    pub reduced_motion: Option<bool>,
}

impl DeckEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            series: None,
            target: None,
            reduced_motion: None,
        }
    }

    pub fn with_series(mut self, id: SeriesId) -> Self {
        self.series = Some(id);
        self
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = Some(reduced);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscription {
    filter: EventFilter,
    tx: Sender<DeckEvent>,
}

/// Hands out filtered event subscriptions and fans occurrences out to them.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<Vec<Subscription>>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe with a filter; only events matching at least one bit of the
    /// filter are delivered.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<DeckEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.inner.lock().unwrap().push(Subscription { filter, tx });
        rx
    }

    /// Emit an event to every subscriber whose filter matches. Disconnected
    /// subscribers are dropped.
    pub fn emit(&self, event: DeckEvent) {
        let mut subs = self.inner.lock().unwrap();
        subs.retain(|sub| {
            if !event.kinds.contains_any(sub.filter) {
                return true;
            }
            sub.tx.send(event.clone()).is_ok()
        });
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}
