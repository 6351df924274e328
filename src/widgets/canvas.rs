//! Particle backdrop widget.
//!
//! Owns one [`ParticleSim`] and one drawing surface: the widget allocates a
//! rect, runs one simulation tick, paints, and requests the next frame while
//! the simulation is running. Teardown cancels the loop for good: afterwards
//! the widget neither paints nor schedules. Under reduced motion the
//! simulation never starts at all.

use egui::{Rect, Ui, Vec2};

use crate::config::ParticleConfig;
use crate::frame::{EguiScheduler, FrameScheduler};
use crate::particles::{ParticleSim, SimPhase};
use crate::theme::ParticleColors;

/// Stateful widget running one particle simulation on one canvas.
pub struct ParticleCanvas {
    sim: ParticleSim,
    warned_no_surface: bool,
    paused_by_motion: bool,
}

impl ParticleCanvas {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            sim: ParticleSim::new(config),
            warned_no_surface: false,
            paused_by_motion: false,
        }
    }

    pub fn sim(&self) -> &ParticleSim {
        &self.sim
    }

    /// Pause/resume ticking (particles freeze in place, painting continues).
    pub fn set_paused(&mut self, paused: bool) {
        self.sim.set_paused(paused);
    }

    /// Cancel the redraw loop permanently.
    pub fn teardown(&mut self) {
        self.sim.teardown();
    }

    pub fn is_torn_down(&self) -> bool {
        self.sim.phase() == SimPhase::TornDown
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Advance the lifecycle and simulation one frame; decides whether
    /// another frame is needed. Returns whether the frame should be painted.
    ///
    /// Separated from painting so the lifecycle is testable under a scheduler
    /// spy: after [`teardown`](Self::teardown) this never requests a frame
    /// again.
    pub fn pump(
        &mut self,
        size: Vec2,
        dt: f32,
        reduced_motion: bool,
        scheduler: &dyn FrameScheduler,
    ) -> bool {
        if self.sim.phase() == SimPhase::TornDown {
            return false;
        }

        // Decorative component policy: no drawing surface means no work and
        // no error. Stay quiet apart from one debug line.
        if size.x <= 0.0 || size.y <= 0.0 {
            if !self.warned_no_surface {
                log::debug!("particle backdrop has no drawing surface; skipping");
                self.warned_no_surface = true;
            }
            return false;
        }
        self.warned_no_surface = false;

        if reduced_motion {
            // Reduced motion: the simulation does not start; if it already
            // ran, freeze it rather than destroying state.
            if !self.sim.is_paused() {
                self.sim.set_paused(true);
                self.paused_by_motion = true;
            }
            return self.sim.phase() == SimPhase::Running;
        }
        if self.paused_by_motion {
            // Only undo our own freeze; external pauses stay in force.
            self.sim.set_paused(false);
            self.paused_by_motion = false;
        }

        match self.sim.phase() {
            SimPhase::Initialized => self.sim.start(size),
            SimPhase::Running => self.sim.set_size(size),
            SimPhase::TornDown => return false,
        }
        self.sim.tick(dt);

        if self.sim.is_running() {
            scheduler.request_frame();
        }
        true
    }

    /// Allocate `rect` and run one frame of the backdrop inside it.
    pub fn show_in(
        &mut self,
        ui: &mut Ui,
        rect: Rect,
        colors: &ParticleColors,
        reduced_motion: bool,
    ) {
        let dt = ui.input(|i| i.stable_dt);
        let scheduler = EguiScheduler::new(ui.ctx().clone());
        if self.pump(rect.size(), dt, reduced_motion, &scheduler) {
            let veil = ui.visuals().extreme_bg_color.gamma_multiply(0.3);
            self.sim.paint_backdrop(ui.painter(), rect, veil);
            self.sim.paint(ui.painter(), rect, colors);
        }
    }

    /// Fill the remaining space with the backdrop.
    pub fn show(&mut self, ui: &mut Ui, colors: &ParticleColors, reduced_motion: bool) {
        let rect = ui.available_rect_before_wrap();
        self.show_in(ui, rect, colors, reduced_motion);
    }
}
