//! Demo: the particle backdrop on its own
//!
//! What it demonstrates
//! - Tuning `ParticleConfig` (counts, orbit band, trails).
//! - Pausing and tearing down the backdrop from outside via `SimController`.
//!
//! How to run
//! ```bash
//! cargo run --example particles_only
//! ```
//! The backdrop pauses after ten seconds and resumes after fifteen.

use sparkdeck::{channel_deck, run_deck, DeckConfig, DeckTheme, SimController};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // No series at all; the deck is pure decoration here.
    let (_sink, rx) = channel_deck();

    let sim = SimController::new();
    let remote = sim.clone();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(10));
        remote.pause();
        std::thread::sleep(Duration::from_secs(5));
        remote.resume();
    });

    let mut config = DeckConfig::default();
    config.title = "Particles".into();
    config.theme = DeckTheme::Midnight;
    config.heading = Some("backdrop only".into());
    config.particles.drift_count = 48;
    config.particles.orbit_count = 24;
    config.particles.trail_length = 8;
    config.particles.orbit_band = (0.22, 0.30);
    config.controllers.sim = Some(sim);

    run_deck(rx, config)
}
