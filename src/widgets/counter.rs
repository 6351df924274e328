//! Animated counter widget.
//!
//! Owns one [`Animator`] and drives it against the UI clock: when the bound
//! value changes the animator is retargeted from its currently displayed
//! value, and the widget keeps requesting frames only while interpolation is
//! in flight. Under reduced motion the final value is shown immediately.

use eframe::egui::{Color32, Response, RichText, Ui};

use crate::animator::Animator;
use crate::config::CounterConfig;
use crate::frame::{EguiScheduler, FrameScheduler};

/// What happened during one frame of a counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFrame {
    /// The eased value to display this frame.
    pub display: f64,
    /// The animator was re-aimed at a new target this frame.
    pub retargeted: bool,
    /// The animator reached its target this frame (edge, not level).
    pub completed: bool,
}

/// Stateful widget animating a numeric readout toward its bound value.
pub struct AnimatedCounter {
    config: CounterConfig,
    animator: Animator,
    /// Whether the animator has seen its first target yet.
    primed: bool,
    was_finished: bool,
    torn_down: bool,
}

impl AnimatedCounter {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            animator: Animator::settled(0.0),
            primed: false,
            was_finished: false,
            torn_down: false,
        }
    }

    /// Stop animating permanently. Subsequent frames display the last target
    /// without motion and never request a redraw.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Advance the counter state one frame and decide whether another frame
    /// is needed. This is the widget minus the painting, usable under a
    /// synthetic clock and a scheduler spy.
    pub fn pump(
        &mut self,
        target: f64,
        now: f64,
        reduced_motion: bool,
        scheduler: &dyn FrameScheduler,
    ) -> CounterFrame {
        let mut frame = CounterFrame::default();

        if self.torn_down {
            frame.display = if self.primed {
                self.animator.target()
            } else {
                target
            };
            return frame;
        }

        if reduced_motion {
            // Skip interpolation entirely: emit the final value immediately.
            self.animator = Animator::settled(target);
            self.primed = true;
            self.was_finished = true;
            frame.display = target;
            return frame;
        }

        if !self.primed {
            // First sighting: animate up from zero.
            self.animator = Animator::new(
                0.0,
                target,
                now,
                self.config.duration_secs,
                self.config.easing,
            )
            .with_delay(self.config.delay_secs);
            self.primed = true;
            self.was_finished = false;
        } else if self.animator.retarget(target, now) {
            frame.retargeted = true;
            self.was_finished = false;
        }

        frame.display = self.animator.sample(now);
        let finished = self.animator.finished(now);
        if finished && !self.was_finished {
            frame.completed = true;
        }
        self.was_finished = finished;

        if !finished {
            scheduler.request_frame();
        }
        frame
    }

    /// Render the counter, animating toward `target`.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        target: f64,
        reduced_motion: bool,
        accent: Color32,
        unit: Option<&str>,
    ) -> (Response, CounterFrame) {
        let now = ui.input(|i| i.time);
        let scheduler = EguiScheduler::new(ui.ctx().clone());
        let frame = self.pump(target, now, reduced_motion, &scheduler);

        let text = format!("{:.*}", self.config.decimals, frame.display);
        let response = ui
            .horizontal(|ui| {
                let value = ui.label(RichText::new(text).monospace().strong().color(accent));
                if let Some(unit) = unit {
                    ui.label(RichText::new(unit).monospace().weak());
                }
                value
            })
            .inner;
        (response, frame)
    }
}
