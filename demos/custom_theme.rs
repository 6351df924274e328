//! Demo: a user-defined theme, saved to and loaded from disk
//!
//! What it demonstrates
//! - Building a `DeckTheme::Custom` with its own accent and particle colors.
//! - Persisting the configuration with `save_config_json` / `load_config_json`.
//!
//! How to run
//! ```bash
//! cargo run --example custom_theme
//! ```

use egui::Color32;
use sparkdeck::persistence::{load_config_json, save_config_json};
use sparkdeck::theme::{CustomTheme, ParticleColors};
use sparkdeck::{channel_deck, run_deck, DeckConfig, DeckTheme};
use std::time::Duration;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut config = DeckConfig::default();
    config.title = "Custom theme".into();
    config.theme = DeckTheme::Custom(CustomTheme {
        visuals: None,
        accents: vec![
            Color32::from_rgb(255, 99, 132),
            Color32::from_rgb(54, 162, 235),
            Color32::from_rgb(255, 206, 86),
        ],
        particles: ParticleColors {
            drift: Color32::from_rgb(110, 110, 140),
            pulse: Color32::from_rgb(255, 99, 132),
            orbit: Color32::from_rgb(54, 162, 235),
        },
        label: Some("Demo Brand".into()),
    });

    // Round-trip the config through disk, as an app restoring user settings
    // would.
    let path = std::env::temp_dir().join("sparkdeck_demo_config.json");
    save_config_json(&path, &config).expect("failed to save demo config");
    let config = load_config_json(&path).expect("failed to load demo config");

    let (sink, rx) = channel_deck();
    let alpha = sink.create_series("alpha", None);
    let beta = sink.create_series("beta", None);
    std::thread::spawn(move || {
        let mut n: u64 = 0;
        loop {
            let t = n as f64;
            let _ = sink.push(&alpha, 50.0 + 30.0 * (t * 0.3).sin());
            let _ = sink.push(&beta, 20.0 + 15.0 * (t * 0.5).cos());
            n = n.wrapping_add(1);
            std::thread::sleep(Duration::from_millis(800));
        }
    });

    run_deck(rx, config)
}
