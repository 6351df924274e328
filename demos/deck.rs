//! Demo: full deck with live series
//!
//! What it demonstrates
//! - Feeding samples into the deck using `channel_deck()` and `SeriesSink`.
//! - Animated counters, sparklines and the particle backdrop together.
//!
//! How to run
//! ```bash
//! cargo run --example deck
//! ```
//! You should see three tiles updating once a second over a particle backdrop.

use sparkdeck::{channel_deck, run_deck, DeckConfig};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, rx) = channel_deck();
    let latency = sink.create_series("latency", Some("ms"));
    let throughput = sink.create_series("throughput", Some("req/s"));
    let errors = sink.create_series("errors", None);

    // Producer: one sample per series per second
    std::thread::spawn(move || {
        let mut n: u64 = 0;
        loop {
            let t = n as f64;
            // Ignore errors if the UI closed (receiver dropped)
            let _ = sink.push(&latency, 40.0 + 25.0 * (t * 0.35).sin());
            let _ = sink.push(&throughput, 1200.0 + 300.0 * (t * 0.2).cos());
            let _ = sink.push(&errors, ((t * 0.7).sin().abs() * 6.0).floor());
            n = n.wrapping_add(1);
            std::thread::sleep(Duration::from_secs(1));
        }
    });

    let mut config = DeckConfig::default();
    config.heading = Some("ops overview".into());
    config.subheading = Some("live · trailing 12 samples".into());

    // Run the UI until closed
    run_deck(rx, config)
}
