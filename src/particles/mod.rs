//! Bounded particle simulation for the deck backdrop.
//!
//! The simulator owns a fixed-size particle set created once at start: a
//! fixed quantity per category with randomized positions, velocities and
//! visual attributes drawn from category-specific ranges. Particles are
//! recycled by wrapping at the canvas edges rather than being destroyed, so
//! the set never reallocates while running.
//!
//! Simulation state is plain data with no drawing dependencies; painting
//! lives in [`render`]. This keeps the update loop testable without a UI.

pub mod render;

use std::collections::VecDeque;

use egui::Vec2;
use rand::Rng;

use crate::config::ParticleConfig;

/// Closed set of particle categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Slow free-floating specks.
    Drift,
    /// Brighter accents with a glow disc.
    Pulse,
    /// Particles held on a circular band around the orbit center.
    Orbit,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 3] = [
        ParticleKind::Drift,
        ParticleKind::Pulse,
        ParticleKind::Orbit,
    ];
}

/// One simulated particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: ParticleKind,
    pub glyph: char,
    pub size: f32,
    pub opacity: f32,
    /// Orbit direction, +1 or -1. Unused for other kinds.
    spin: f32,
    /// Recent positions, newest first, for the fading trail.
    trail: VecDeque<Vec2>,
}

impl Particle {
    /// Recent positions, newest first.
    pub fn trail(&self) -> impl Iterator<Item = &Vec2> {
        self.trail.iter()
    }
}

/// Lifecycle phase of a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Created, particle set not yet seeded.
    Initialized,
    /// Ticking and painting.
    Running,
    /// Redraw loop cancelled; the simulator is permanently inert.
    TornDown,
}

/// Fixed-size particle set with a per-frame update loop.
pub struct ParticleSim {
    particles: Vec<Particle>,
    size: Vec2,
    config: ParticleConfig,
    phase: SimPhase,
    paused: bool,
}

impl ParticleSim {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            particles: Vec::new(),
            size: Vec2::ZERO,
            config,
            phase: SimPhase::Initialized,
            paused: false,
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running && !self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Seed the particle set and enter the running phase.
    ///
    /// Does nothing once torn down, and re-seeds nothing if already running.
    pub fn start(&mut self, size: Vec2) {
        self.start_with_rng(size, &mut rand::thread_rng());
    }

    /// [`start`](Self::start) with a caller-supplied RNG, for deterministic
    /// seeding in tests.
    pub fn start_with_rng<R: Rng>(&mut self, size: Vec2, rng: &mut R) {
        if self.phase != SimPhase::Initialized {
            return;
        }
        self.size = size;
        self.particles = Vec::with_capacity(self.config.total_count());
        for kind in ParticleKind::ALL {
            let count = match kind {
                ParticleKind::Drift => self.config.drift_count,
                ParticleKind::Pulse => self.config.pulse_count,
                ParticleKind::Orbit => self.config.orbit_count,
            };
            for _ in 0..count {
                let p = self.spawn(kind, rng);
                self.particles.push(p);
            }
        }
        self.phase = SimPhase::Running;
        log::debug!(
            "particle backdrop started: {} particles on {:.0}x{:.0}",
            self.particles.len(),
            size.x,
            size.y
        );
    }

    fn spawn<R: Rng>(&self, kind: ParticleKind, rng: &mut R) -> Particle {
        let cfg = &self.config;
        let (w, h) = (self.size.x.max(1.0), self.size.y.max(1.0));

        let glyphs = match kind {
            ParticleKind::Drift => &cfg.drift_glyphs,
            ParticleKind::Pulse => &cfg.pulse_glyphs,
            ParticleKind::Orbit => &cfg.orbit_glyphs,
        };
        let glyph = if glyphs.is_empty() {
            '·'
        } else {
            glyphs[rng.gen_range(0..glyphs.len())]
        };

        let pos = match kind {
            // Orbit particles spawn on the band so the spring has little work
            // to do on the first frames.
            ParticleKind::Orbit => {
                let center = self.orbit_center();
                let (lo, hi) = self.orbit_band();
                let radius = rng.gen_range(lo..=hi.max(lo + 1.0));
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            }
            _ => Vec2::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)),
        };

        let speed_scale = match kind {
            ParticleKind::Drift => rng.gen_range(0.5..1.2),
            ParticleKind::Pulse => rng.gen_range(0.2..0.6),
            ParticleKind::Orbit => 0.0, // velocity is recomputed every tick
        };
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let vel = Vec2::new(angle.cos(), angle.sin()) * cfg.base_speed * speed_scale;

        let (size_lo, size_hi) = cfg.size_range;
        let (op_lo, op_hi) = cfg.opacity_range;
        Particle {
            pos,
            vel,
            kind,
            glyph,
            size: rng.gen_range(size_lo..=size_hi.max(size_lo)),
            opacity: rng.gen_range(op_lo..=op_hi.max(op_lo)),
            spin: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            trail: VecDeque::with_capacity(cfg.trail_length),
        }
    }

    /// Pause or resume ticking. A paused simulator still paints its last
    /// frame but does not move.
    pub fn set_paused(&mut self, paused: bool) {
        if self.phase == SimPhase::Running {
            self.paused = paused;
        }
    }

    /// Cancel the update loop permanently. After teardown every `tick` is a
    /// no-op and the owning widget must not schedule further frames.
    pub fn teardown(&mut self) {
        if self.phase != SimPhase::TornDown {
            log::debug!("particle backdrop torn down");
        }
        self.phase = SimPhase::TornDown;
        self.particles.clear();
    }

    /// Notify the simulator of a canvas resize. Particles keep their
    /// positions and are folded back by the wrap rule.
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn orbit_center(&self) -> Vec2 {
        Vec2::new(
            self.size.x * self.config.orbit_center.0,
            self.size.y * self.config.orbit_center.1,
        )
    }

    fn orbit_band(&self) -> (f32, f32) {
        let reference = self.size.x.min(self.size.y).max(1.0);
        (
            reference * self.config.orbit_band.0,
            reference * self.config.orbit_band.1,
        )
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != SimPhase::Running || self.paused {
            return;
        }
        let dt = dt.clamp(0.0, 0.25);
        let center = self.orbit_center();
        let (band_lo, band_hi) = self.orbit_band();
        let margin = self.config.wrap_margin.max(0.0);
        let (w, h) = (self.size.x, self.size.y);
        let stiffness = self.config.orbit_stiffness;
        let angular = self.config.orbit_angular_speed;
        let trail_length = self.config.trail_length;

        for p in &mut self.particles {
            if trail_length > 0 {
                if p.trail.len() == trail_length {
                    p.trail.pop_back();
                }
                p.trail.push_front(p.pos);
            }

            if p.kind == ParticleKind::Orbit {
                // Spring-like band hold: tangential motion plus a radial
                // restoring velocity when the particle strays off the band.
                let offset = p.pos - center;
                let dist = offset.length().max(1.0);
                let dir = offset / dist;
                let tangent = Vec2::new(-dir.y, dir.x) * p.spin;
                let radial = if dist < band_lo {
                    (band_lo - dist) * stiffness
                } else if dist > band_hi {
                    -(dist - band_hi) * stiffness
                } else {
                    0.0
                };
                p.vel = tangent * (angular * dist) + dir * radial;
            }

            p.pos += p.vel * dt;

            // Wrap: reposition to the opposite edge instead of discarding.
            if p.pos.x < -margin {
                p.pos.x = w + margin;
            } else if p.pos.x > w + margin {
                p.pos.x = -margin;
            }
            if p.pos.y < -margin {
                p.pos.y = h + margin;
            } else if p.pos.y > h + margin {
                p.pos.y = -margin;
            }
        }
    }
}
