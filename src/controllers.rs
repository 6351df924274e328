//! Controllers for interacting with the deck from external code.
//!
//! The controllers expose lightweight state and a subscription mechanism so
//! non-UI code can observe deck state and push simple requests (like pausing
//! the particle backdrop or flipping the motion preference).

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::motion::MotionPreference;

/// Controller for the consolidated reduced-motion capability check.
///
/// Every animated component in a deck consults the same controller, so a
/// single `set_reduced(true)` stops counters animating and prevents the
/// particle backdrop from starting.
#[derive(Clone)]
pub struct MotionController {
    pub(crate) inner: Arc<Mutex<MotionCtrlInner>>, // crate-visible for UI
}

pub(crate) struct MotionCtrlInner {
    pub(crate) preference: MotionPreference,
    pub(crate) listeners: Vec<Sender<MotionPreference>>,
}

impl MotionController {
    /// Create a controller seeded from the environment.
    pub fn new() -> Self {
        Self::with_preference(MotionPreference::from_env())
    }

    /// Create a controller with an explicit preference (overrides the
    /// environment).
    pub fn with_preference(preference: MotionPreference) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MotionCtrlInner {
                preference,
                listeners: Vec::new(),
            })),
        }
    }

    /// Current preference.
    pub fn preference(&self) -> MotionPreference {
        self.inner.lock().unwrap().preference
    }

    /// Whether non-essential animation should currently be suppressed.
    pub fn is_reduced(&self) -> bool {
        self.preference().is_reduced()
    }

    /// Change the preference at runtime and notify subscribers.
    pub fn set_reduced(&self, reduced: bool) {
        let mut inner = self.inner.lock().unwrap();
        let new = if reduced {
            MotionPreference::reduced()
        } else {
            MotionPreference::full()
        };
        if new == inner.preference {
            return;
        }
        inner.preference = new;
        inner.listeners.retain(|tx| tx.send(new).is_ok());
    }

    /// Subscribe to preference changes.
    pub fn subscribe(&self) -> Receiver<MotionPreference> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.listeners.push(tx);
        rx
    }
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Controller for the particle backdrop lifecycle.
///
/// Requests are recorded and applied by the deck on its next frame; whether
/// a request is honored can be observed through `is_running`.
#[derive(Clone)]
pub struct SimController {
    pub(crate) inner: Arc<Mutex<SimCtrlInner>>, // crate-visible for UI
}

pub(crate) struct SimCtrlInner {
    pub(crate) request_pause: Option<bool>,
    pub(crate) request_teardown: bool,
    pub(crate) running: bool,
}

impl SimController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SimCtrlInner {
                request_pause: None,
                request_teardown: false,
                running: false,
            })),
        }
    }

    /// Request the backdrop to pause (freeze particles in place).
    pub fn pause(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_pause = Some(true);
    }

    /// Request the backdrop to resume.
    pub fn resume(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_pause = Some(false);
    }

    /// Request permanent teardown: the redraw loop is cancelled and the
    /// backdrop never schedules another frame.
    pub fn teardown(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.request_teardown = true;
    }

    /// Last observed running state of the backdrop.
    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap().running
    }

    /// Drain pending requests. Called by the deck once per frame.
    pub(crate) fn take_requests(&self) -> (Option<bool>, bool) {
        let mut inner = self.inner.lock().unwrap();
        let pause = inner.request_pause.take();
        let teardown = inner.request_teardown;
        inner.request_teardown = false;
        (pause, teardown)
    }

    /// Publish the observed running state. Called by the deck.
    pub(crate) fn publish_running(&self, running: bool) {
        self.inner.lock().unwrap().running = running;
    }
}

impl Default for SimController {
    fn default() -> Self {
        Self::new()
    }
}
