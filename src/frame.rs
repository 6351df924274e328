//! The redraw-callback scheduling primitive.
//!
//! Anything that animates owns a [`FrameScheduler`] and asks it for one more
//! frame only while there is motion left to show. The production scheduler
//! wraps [`egui::Context::request_repaint`]; tests inject a counting spy to
//! verify that torn-down components stop requesting frames.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Requests a future redraw. Implementations must be cheap and reentrant;
/// a request is a hint to the frame loop, not a guarantee of exactly one frame.
pub trait FrameScheduler {
    /// Ask the frame loop for (at least) one more frame.
    fn request_frame(&self);
}

/// Scheduler backed by an egui context.
#[derive(Clone)]
pub struct EguiScheduler {
    ctx: egui::Context,
}

impl EguiScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl FrameScheduler for EguiScheduler {
    fn request_frame(&self) {
        self.ctx.request_repaint();
    }
}

/// Counting scheduler for tests: records every frame request.
#[derive(Clone, Default)]
pub struct CountingScheduler {
    requests: Arc<AtomicUsize>,
}

impl CountingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frame requests observed so far.
    pub fn count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }
}
