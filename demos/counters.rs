//! Demo: animated counters without the backdrop
//!
//! What it demonstrates
//! - Disabling deck features for a minimal embedded look.
//! - Quartic easing and decimal formatting on counters.
//! - Smooth retargeting: each new sample re-bases the animation on the
//!   currently displayed value.
//!
//! How to run
//! ```bash
//! cargo run --example counters
//! ```

use sparkdeck::{channel_deck, run_deck, DeckConfig, Easing};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, rx) = channel_deck();
    let revenue = sink.create_series("revenue", Some("$"));
    let sessions = sink.create_series("sessions", None);

    std::thread::spawn(move || {
        let mut revenue_total = 1000.0;
        let mut n: u64 = 0;
        loop {
            revenue_total += 37.5 + 20.0 * ((n as f64) * 0.4).sin();
            let _ = sink.push(&revenue, revenue_total);
            let _ = sink.push(&sessions, 300.0 + 80.0 * ((n as f64) * 0.25).cos());
            n = n.wrapping_add(1);
            std::thread::sleep(Duration::from_millis(1500));
        }
    });

    let mut config = DeckConfig::default();
    config.title = "Counters".into();
    config.features.particles = false;
    config.features.bounds = false;
    config.counter.easing = Easing::QuarticOut;
    config.counter.duration_secs = 0.8;
    config.counter.decimals = 2;

    run_deck(rx, config)
}
