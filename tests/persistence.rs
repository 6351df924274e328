use egui::Color32;

use sparkdeck::config::DeckConfig;
use sparkdeck::persistence::{
    load_config_json, load_config_json_or_default, save_config_json, DeckConfigSerde,
};
use sparkdeck::theme::{CustomTheme, DeckTheme, ParticleColors};
use sparkdeck::Easing;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("sparkdeck_{}_{}.json", name, std::process::id()))
}

fn sample_config() -> DeckConfig {
    let mut config = DeckConfig::default();
    config.title = "Ops Deck".into();
    config.heading = Some("production".into());
    config.features.particles = false;
    config.sparkline.window = 24;
    config.counter.duration_secs = 0.6;
    config.counter.easing = Easing::QuarticOut;
    config.counter.decimals = 2;
    config.particles.drift_count = 5;
    config.particles.wrap_margin = 12.0;
    config.reduced_motion = Some(true);
    config.theme = DeckTheme::Midnight;
    config
}

#[test]
fn json_round_trip_preserves_settings() {
    let path = temp_path("roundtrip");
    let config = sample_config();
    save_config_json(&path, &config).expect("save must succeed");

    let loaded = load_config_json(&path).expect("load must succeed");
    assert_eq!(loaded.title, "Ops Deck");
    assert_eq!(loaded.heading.as_deref(), Some("production"));
    assert!(!loaded.features.particles);
    assert_eq!(loaded.sparkline.window, 24);
    assert_eq!(loaded.counter.duration_secs, 0.6);
    assert_eq!(loaded.counter.easing, Easing::QuarticOut);
    assert_eq!(loaded.counter.decimals, 2);
    assert_eq!(loaded.particles.drift_count, 5);
    assert_eq!(loaded.particles.wrap_margin, 12.0);
    assert_eq!(loaded.reduced_motion, Some(true));
    assert_eq!(loaded.theme, DeckTheme::Midnight);

    std::fs::remove_file(&path).ok();
}

#[test]
fn custom_theme_round_trips_palettes() {
    let path = temp_path("custom_theme");
    let mut config = DeckConfig::default();
    config.theme = DeckTheme::Custom(CustomTheme {
        visuals: None,
        accents: vec![Color32::from_rgb(1, 2, 3), Color32::from_rgb(4, 5, 6)],
        particles: ParticleColors {
            drift: Color32::from_rgb(10, 20, 30),
            pulse: Color32::from_rgb(40, 50, 60),
            orbit: Color32::from_rgb(70, 80, 90),
        },
        label: Some("Brand".into()),
    });
    save_config_json(&path, &config).expect("save must succeed");
    let loaded = load_config_json(&path).expect("load must succeed");

    match loaded.theme {
        DeckTheme::Custom(custom) => {
            assert_eq!(custom.accents.len(), 2);
            assert_eq!(custom.accents[0], Color32::from_rgb(1, 2, 3));
            assert_eq!(custom.particles.pulse, Color32::from_rgb(40, 50, 60));
            assert_eq!(custom.label.as_deref(), Some("Brand"));
            assert!(custom.visuals.is_none(), "visuals are not persisted");
        }
        other => panic!("expected custom theme, got {other:?}"),
    }

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = temp_path("does_not_exist");
    std::fs::remove_file(&path).ok();
    let config = load_config_json_or_default(&path);
    assert_eq!(config.title, DeckConfig::default().title);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "not json at all {{{").unwrap();
    let config = load_config_json_or_default(&path);
    assert_eq!(config.title, DeckConfig::default().title);
    std::fs::remove_file(&path).ok();
}

#[test]
fn serde_snapshot_applies_over_defaults() {
    let snapshot = DeckConfigSerde::from(&sample_config());
    let mut restored = DeckConfig::default();
    snapshot.apply_to(&mut restored);
    assert_eq!(restored.sparkline.window, 24);
    assert_eq!(restored.theme, DeckTheme::Midnight);
    assert!(
        restored.native_options.is_none(),
        "runtime-only fields stay untouched"
    );
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_round_trip_preserves_settings() {
    use sparkdeck::persistence::{load_config_yaml, save_config_yaml};
    let path = std::env::temp_dir().join(format!("sparkdeck_yaml_{}.yaml", std::process::id()));
    save_config_yaml(&path, &sample_config()).expect("save must succeed");
    let loaded = load_config_yaml(&path).expect("load must succeed");
    assert_eq!(loaded.sparkline.window, 24);
    std::fs::remove_file(&path).ok();
}
