//! Eased value interpolation with smooth retargeting.
//!
//! An [`Animator`] is a small interpolation-state object: it holds a start
//! value, a target value and a timing base, and answers "what value should be
//! displayed at time `now`?". Time is an `f64` in seconds, matching
//! `egui::InputState::time`, so the same code runs under the UI clock and
//! under synthetic clocks in tests.
//!
//! Retargeting mid-flight re-bases the animation on the *currently displayed*
//! value, so consecutive animations chain without a visible jump.

use serde::{Deserialize, Serialize};

/// Ease-out curve variant: `eased = 1 - (1 - t)^k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    /// k = 3. The default for counters.
    CubicOut,
    /// k = 4. Slightly snappier start, longer tail.
    QuarticOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::CubicOut
    }
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let inv = 1.0 - t;
        match self {
            Easing::CubicOut => 1.0 - inv * inv * inv,
            Easing::QuarticOut => 1.0 - inv * inv * inv * inv,
        }
    }
}

/// Interpolation state for one animated value.
#[derive(Debug, Clone)]
pub struct Animator {
    start_value: f64,
    target: f64,
    start_time: f64,
    duration: f64,
    delay: f64,
    easing: Easing,
}

impl Animator {
    /// Start a new animation from `start` toward `target`, based at `now`.
    pub fn new(start: f64, target: f64, now: f64, duration: f64, easing: Easing) -> Self {
        Self {
            start_value: start,
            target,
            start_time: now,
            duration,
            delay: 0.0,
            easing,
        }
    }

    /// An animator that is already at `value` (no motion). Used when reduced
    /// motion is requested: the final value is emitted immediately.
    pub fn settled(value: f64) -> Self {
        Self {
            start_value: value,
            target: value,
            start_time: 0.0,
            duration: 0.0,
            delay: 0.0,
            easing: Easing::CubicOut,
        }
    }

    /// Delay the start of interpolation by `delay` seconds after the timing base.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// The value currently animated toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Linear progress in `[0, 1]` at time `now`. A non-positive duration
    /// counts as already complete.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// The value to display at time `now`.
    ///
    /// Once progress reaches 1 this returns exactly `target`; the snap avoids
    /// the tail of floating-point residue near completion.
    pub fn sample(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target;
        }
        self.start_value + (self.target - self.start_value) * self.easing.apply(t)
    }

    /// Whether the animation has run to completion at time `now`.
    pub fn finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Re-aim at `new_target`, re-basing at `now`.
    ///
    /// The currently displayed value becomes the new start value so an
    /// in-flight animation continues smoothly instead of jumping back to its
    /// original start. Retargeting to the value already being animated toward
    /// is a no-op; returns whether the target actually changed.
    pub fn retarget(&mut self, new_target: f64, now: f64) -> bool {
        if new_target == self.target {
            return false;
        }
        self.start_value = self.sample(now);
        self.target = new_target;
        self.start_time = now;
        self.delay = 0.0;
        true
    }
}
