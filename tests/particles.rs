use egui::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sparkdeck::config::ParticleConfig;
use sparkdeck::frame::CountingScheduler;
use sparkdeck::particles::{ParticleKind, ParticleSim, SimPhase};
use sparkdeck::widgets::ParticleCanvas;

const CANVAS: Vec2 = Vec2::new(320.0, 200.0);

fn seeded_sim(config: ParticleConfig, seed: u64) -> ParticleSim {
    let mut sim = ParticleSim::new(config);
    let mut rng = StdRng::seed_from_u64(seed);
    sim.start_with_rng(CANVAS, &mut rng);
    sim
}

#[test]
fn start_seeds_fixed_counts_per_category() {
    let config = ParticleConfig::default();
    let expected = config.total_count();
    let sim = seeded_sim(config, 1);

    assert_eq!(sim.phase(), SimPhase::Running);
    assert_eq!(sim.particles().len(), expected);
    let orbits = sim
        .particles()
        .iter()
        .filter(|p| p.kind == ParticleKind::Orbit)
        .count();
    assert_eq!(orbits, ParticleConfig::default().orbit_count);
}

#[test]
fn wrap_invariant_holds_over_many_frames() {
    let config = ParticleConfig::default();
    let margin = config.wrap_margin;
    let mut sim = seeded_sim(config, 7);

    for frame in 0..2_000 {
        sim.tick(1.0 / 60.0);
        for p in sim.particles() {
            assert!(
                p.pos.x >= -margin && p.pos.x <= CANVAS.x + margin,
                "frame {frame}: x={} escaped the wrap margin",
                p.pos.x
            );
            assert!(
                p.pos.y >= -margin && p.pos.y <= CANVAS.y + margin,
                "frame {frame}: y={} escaped the wrap margin",
                p.pos.y
            );
        }
    }
}

#[test]
fn wrap_invariant_survives_oversized_timesteps() {
    let config = ParticleConfig {
        base_speed: 500.0,
        ..ParticleConfig::default()
    };
    let margin = config.wrap_margin;
    let mut sim = seeded_sim(config, 11);

    for _ in 0..200 {
        // Deliberately huge dt; the simulator clamps it.
        sim.tick(5.0);
        for p in sim.particles() {
            assert!(p.pos.x >= -margin && p.pos.x <= CANVAS.x + margin);
            assert!(p.pos.y >= -margin && p.pos.y <= CANVAS.y + margin);
        }
    }
}

#[test]
fn particles_are_recycled_not_destroyed() {
    let config = ParticleConfig::default();
    let expected = config.total_count();
    let mut sim = seeded_sim(config, 3);
    for _ in 0..1_000 {
        sim.tick(1.0 / 60.0);
    }
    assert_eq!(
        sim.particles().len(),
        expected,
        "wrapping must reposition particles, never drop them"
    );
}

#[test]
fn orbit_particles_stay_near_the_band() {
    let config = ParticleConfig::default();
    let band_hi = CANVAS.x.min(CANVAS.y) * config.orbit_band.1;
    let center = Vec2::new(
        CANVAS.x * config.orbit_center.0,
        CANVAS.y * config.orbit_center.1,
    );
    let mut sim = seeded_sim(config, 5);

    for _ in 0..600 {
        sim.tick(1.0 / 60.0);
    }
    for p in sim.particles().iter().filter(|p| p.kind == ParticleKind::Orbit) {
        let dist = (p.pos - center).length();
        assert!(
            dist <= band_hi * 1.3 + 4.0,
            "orbit particle drifted to {dist:.1} (band top {band_hi:.1})"
        );
    }
}

#[test]
fn paused_sim_freezes_positions() {
    let mut sim = seeded_sim(ParticleConfig::default(), 9);
    sim.set_paused(true);
    let before: Vec<Vec2> = sim.particles().iter().map(|p| p.pos).collect();
    for _ in 0..10 {
        sim.tick(1.0 / 60.0);
    }
    let after: Vec<Vec2> = sim.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after, "paused simulation must not move");
}

#[test]
fn teardown_clears_and_blocks_restart() {
    let mut sim = seeded_sim(ParticleConfig::default(), 13);
    sim.teardown();
    assert_eq!(sim.phase(), SimPhase::TornDown);
    assert!(sim.particles().is_empty());

    // Start after teardown must be refused.
    sim.start(CANVAS);
    assert_eq!(sim.phase(), SimPhase::TornDown);
    assert!(sim.particles().is_empty());
}

#[test]
fn canvas_schedules_while_running() {
    let spy = CountingScheduler::new();
    let mut canvas = ParticleCanvas::new(ParticleConfig::default());

    assert!(canvas.pump(CANVAS, 1.0 / 60.0, false, &spy));
    assert!(canvas.is_running());
    assert_eq!(spy.count(), 1);
    canvas.pump(CANVAS, 1.0 / 60.0, false, &spy);
    assert_eq!(spy.count(), 2);
}

#[test]
fn canvas_teardown_stops_frame_callbacks() {
    let spy = CountingScheduler::new();
    let mut canvas = ParticleCanvas::new(ParticleConfig::default());

    canvas.pump(CANVAS, 1.0 / 60.0, false, &spy);
    let before = spy.count();

    canvas.teardown();
    assert!(canvas.is_torn_down());
    for _ in 0..5 {
        assert!(!canvas.pump(CANVAS, 1.0 / 60.0, false, &spy));
    }
    assert_eq!(
        spy.count(),
        before,
        "no frame callbacks may fire after teardown"
    );
}

#[test]
fn reduced_motion_prevents_simulation_start() {
    let spy = CountingScheduler::new();
    let mut canvas = ParticleCanvas::new(ParticleConfig::default());

    for _ in 0..5 {
        canvas.pump(CANVAS, 1.0 / 60.0, true, &spy);
    }
    assert!(!canvas.is_running());
    assert_eq!(canvas.sim().phase(), SimPhase::Initialized);
    assert_eq!(spy.count(), 0, "reduced motion must not schedule frames");
}

#[test]
fn zero_area_surface_is_a_silent_noop() {
    let spy = CountingScheduler::new();
    let mut canvas = ParticleCanvas::new(ParticleConfig::default());

    assert!(!canvas.pump(Vec2::ZERO, 1.0 / 60.0, false, &spy));
    assert!(!canvas.pump(Vec2::new(100.0, 0.0), 1.0 / 60.0, false, &spy));
    assert_eq!(spy.count(), 0);
    assert_eq!(canvas.sim().phase(), SimPhase::Initialized);
}
