//! Deck configuration persistence: save and load to/from JSON (and YAML
//! behind the `yaml` feature).
//!
//! Plain config types serialize directly; the theme needs a serializable
//! mirror because it holds egui types (`Color32`, `Visuals`). Runtime-only
//! fields (native window options, controllers) are not persisted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{CounterConfig, DeckConfig, FeatureFlags, ParticleConfig, SparklineConfig};
use crate::theme::{CustomTheme, DeckTheme, ParticleColors};

/// Errors from saving or loading deck configuration.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config json error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "yaml")]
    #[error("config yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// ---------- Serializable mirror types ----------

/// Serializable version of [`DeckTheme`].
///
/// Custom visuals are not persisted (egui `Visuals` has no stable serialized
/// form); a loaded custom theme falls back to dark visuals with the stored
/// palettes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ThemeSerde {
    Dark,
    Light,
    Terminal,
    Midnight,
    Custom {
        accents: Vec<[u8; 4]>,
        drift: [u8; 4],
        pulse: [u8; 4],
        orbit: [u8; 4],
        label: Option<String>,
    },
}

fn rgba(c: egui::Color32) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

fn color(v: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(v[0], v[1], v[2], v[3])
}

impl From<&DeckTheme> for ThemeSerde {
    fn from(t: &DeckTheme) -> Self {
        match t {
            DeckTheme::Dark => ThemeSerde::Dark,
            DeckTheme::Light => ThemeSerde::Light,
            DeckTheme::Terminal => ThemeSerde::Terminal,
            DeckTheme::Midnight => ThemeSerde::Midnight,
            DeckTheme::Custom(custom) => {
                let p = custom.particles;
                ThemeSerde::Custom {
                    accents: custom.accents.iter().copied().map(rgba).collect(),
                    drift: rgba(p.drift),
                    pulse: rgba(p.pulse),
                    orbit: rgba(p.orbit),
                    label: custom.label.clone(),
                }
            }
        }
    }
}

impl From<ThemeSerde> for DeckTheme {
    fn from(t: ThemeSerde) -> Self {
        match t {
            ThemeSerde::Dark => DeckTheme::Dark,
            ThemeSerde::Light => DeckTheme::Light,
            ThemeSerde::Terminal => DeckTheme::Terminal,
            ThemeSerde::Midnight => DeckTheme::Midnight,
            ThemeSerde::Custom {
                accents,
                drift,
                pulse,
                orbit,
                label,
            } => DeckTheme::Custom(CustomTheme {
                visuals: None,
                accents: accents.into_iter().map(color).collect(),
                particles: ParticleColors {
                    drift: color(drift),
                    pulse: color(pulse),
                    orbit: color(orbit),
                },
                label,
            }),
        }
    }
}

/// Serializable snapshot of a [`DeckConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckConfigSerde {
    pub title: String,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub features: FeatureFlags,
    pub sparkline: SparklineConfig,
    pub counter: CounterConfig,
    pub particles: ParticleConfig,
    pub theme: ThemeSerde,
    pub reduced_motion: Option<bool>,
}

impl From<&DeckConfig> for DeckConfigSerde {
    fn from(c: &DeckConfig) -> Self {
        Self {
            title: c.title.clone(),
            heading: c.heading.clone(),
            subheading: c.subheading.clone(),
            features: c.features.clone(),
            sparkline: c.sparkline.clone(),
            counter: c.counter.clone(),
            particles: c.particles.clone(),
            theme: (&c.theme).into(),
            reduced_motion: c.reduced_motion,
        }
    }
}

impl DeckConfigSerde {
    /// Apply stored settings to a config, leaving runtime-only fields
    /// (native options, controllers) untouched.
    pub fn apply_to(self, c: &mut DeckConfig) {
        c.title = self.title;
        c.heading = self.heading;
        c.subheading = self.subheading;
        c.features = self.features;
        c.sparkline = self.sparkline;
        c.counter = self.counter;
        c.particles = self.particles;
        c.theme = self.theme.into();
        c.reduced_motion = self.reduced_motion;
    }
}

// ---------- File helpers ----------

/// Save a config snapshot as pretty-printed JSON.
pub fn save_config_json<P: AsRef<Path>>(path: P, config: &DeckConfig) -> Result<(), PersistError> {
    let snapshot = DeckConfigSerde::from(config);
    let text = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Load a config snapshot from JSON, applied over defaults.
pub fn load_config_json<P: AsRef<Path>>(path: P) -> Result<DeckConfig, PersistError> {
    let text = std::fs::read_to_string(&path)?;
    let snapshot: DeckConfigSerde = serde_json::from_str(&text)?;
    let mut config = DeckConfig::default();
    snapshot.apply_to(&mut config);
    Ok(config)
}

/// Save a config snapshot as YAML.
#[cfg(feature = "yaml")]
pub fn save_config_yaml<P: AsRef<Path>>(path: P, config: &DeckConfig) -> Result<(), PersistError> {
    let snapshot = DeckConfigSerde::from(config);
    let text = serde_yaml::to_string(&snapshot)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Load a config snapshot from YAML, applied over defaults.
#[cfg(feature = "yaml")]
pub fn load_config_yaml<P: AsRef<Path>>(path: P) -> Result<DeckConfig, PersistError> {
    let text = std::fs::read_to_string(&path)?;
    let snapshot: DeckConfigSerde = serde_yaml::from_str(&text)?;
    let mut config = DeckConfig::default();
    snapshot.apply_to(&mut config);
    Ok(config)
}

/// Load a config if the file exists, falling back to defaults (and a warning
/// log) on any error.
pub fn load_config_json_or_default<P: AsRef<Path>>(path: P) -> DeckConfig {
    match load_config_json(&path) {
        Ok(config) => config,
        Err(PersistError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            DeckConfig::default()
        }
        Err(e) => {
            log::warn!(
                "failed to load deck config from {}: {e}",
                path.as_ref().display()
            );
            DeckConfig::default()
        }
    }
}
