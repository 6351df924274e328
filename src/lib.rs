//! SparkDeck crate root: re-exports and module wiring.
//!
//! This crate provides terminal-style dashboard decoration for egui/eframe:
//! glyph sparklines, eased animated counters and a bounded particle backdrop,
//! plus a ready-to-use deck UI that ties them together.
//!
//! Cohesive modules:
//! - `spark`: pure series→glyph quantization and meter bars
//! - `animator`: eased value interpolation with smooth retargeting
//! - `particles`: the bounded particle simulation and its painting
//! - `frame`: the redraw-callback scheduling primitive
//! - `motion`: the consolidated reduced-motion capability check
//! - `sink`: data types and channels to feed samples
//! - `data`: per-series trailing windows and the ingesting store
//! - `widgets`: Sparkline, MeterBar, AnimatedCounter, ParticleCanvas
//! - `controllers`: external control of motion preference and the backdrop
//! - `events`: filtered event subscriptions
//! - `config`: shared configuration
//! - `theme`: visual themes and the accent palette
//! - `persistence`: config save/load
//! - `app`: embeddable panel and standalone run helpers

pub mod animator;
pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod events;
pub mod frame;
pub mod motion;
pub mod particles;
pub mod persistence;
pub mod sink;
pub mod spark;
pub mod theme;
pub mod widgets;

// Public re-exports for a compact external API
pub use animator::{Animator, Easing};
pub use app::{run_deck, run_deck_default, DeckApp, DeckPanel};
pub use config::{
    Controllers, CounterConfig, DeckConfig, FeatureFlags, ParticleConfig, SparklineConfig,
};
pub use controllers::{MotionController, SimController};
pub use events::{DeckEvent, EventController, EventFilter, EventKind};
pub use frame::{CountingScheduler, EguiScheduler, FrameScheduler};
pub use motion::MotionPreference;
pub use particles::{Particle, ParticleKind, ParticleSim, SimPhase};
pub use sink::{channel_deck, DeckCommand, Series, SeriesId, SeriesSink};
pub use spark::{meter, quantize, sparkline, sparkline_with, BLOCK_GLYPHS};
pub use theme::{CustomTheme, DeckTheme, ParticleColors};
pub use widgets::{AnimatedCounter, MeterBar, ParticleCanvas, Sparkline};
