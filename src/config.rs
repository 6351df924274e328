//! Configuration types shared across the deck.

use serde::{Deserialize, Serialize};

use crate::animator::Easing;
use crate::controllers::{MotionController, SimController};
use crate::events::EventController;
use crate::spark::BLOCK_GLYPHS;
use crate::theme::DeckTheme;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual deck features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused deck for embedded dashboards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Show the deck heading row.
    pub heading: bool,
    /// Show animated counters on series tiles.
    pub counters: bool,
    /// Show sparkline glyph rows on series tiles.
    pub sparklines: bool,
    /// Show a meter bar placing the latest sample within the window range.
    pub meters: bool,
    /// Show min/max captions under each sparkline.
    pub bounds: bool,
    /// Show the "updated at" timestamp on series tiles.
    pub timestamps: bool,
    /// Run the decorative particle backdrop.
    pub particles: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            heading: true,
            counters: true,
            sparklines: true,
            meters: true,
            bounds: true,
            timestamps: true,
            particles: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sparkline configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for sparkline rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SparklineConfig {
    /// Ordered glyph palette, lowest level first. Its length is the number of
    /// quantization levels.
    pub palette: Vec<char>,
    /// Trailing-window length for new series.
    pub window: usize,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self {
            palette: BLOCK_GLYPHS.to_vec(),
            window: 12,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Counter configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for animated counters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Interpolation duration in seconds.
    pub duration_secs: f64,
    /// Delay before interpolation starts, in seconds.
    pub delay_secs: f64,
    /// Ease-out variant.
    pub easing: Easing,
    /// Decimal places shown on the counter.
    pub decimals: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            delay_secs: 0.0,
            easing: Easing::CubicOut,
            decimals: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Particle configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Tunables for the particle backdrop.
///
/// Counts are fixed at simulation start; everything else is a presentation
/// parameter that can be adjusted freely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Number of drifting particles.
    pub drift_count: usize,
    /// Number of pulsing (glowing) particles.
    pub pulse_count: usize,
    /// Number of orbiting particles.
    pub orbit_count: usize,
    /// Glyph choices per category, picked at random per particle.
    pub drift_glyphs: Vec<char>,
    pub pulse_glyphs: Vec<char>,
    pub orbit_glyphs: Vec<char>,
    /// Particle font size range in points.
    pub size_range: (f32, f32),
    /// Particle opacity range.
    pub opacity_range: (f32, f32),
    /// Base speed in points per second; per-particle speed is randomized
    /// around this.
    pub base_speed: f32,
    /// How far outside the canvas a particle may travel before wrapping to
    /// the opposite edge, in points.
    pub wrap_margin: f32,
    /// Orbit center as a fraction of the canvas size.
    pub orbit_center: (f32, f32),
    /// Orbit radius band as fractions of the smaller canvas dimension; the
    /// spring only engages outside this band.
    pub orbit_band: (f32, f32),
    /// Spring stiffness of the radial restoring force.
    pub orbit_stiffness: f32,
    /// Tangential speed maintaining the orbit, in radians per second.
    pub orbit_angular_speed: f32,
    /// Positions remembered per particle for the fading trail; 0 disables
    /// trails.
    pub trail_length: usize,
    /// Per-step opacity multiplier along the trail.
    pub trail_decay: f32,
    /// Draw a soft glow disc behind pulse particles.
    pub glow: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            drift_count: 28,
            pulse_count: 10,
            orbit_count: 14,
            drift_glyphs: vec!['·', '∙', '.'],
            pulse_glyphs: vec!['✦', '+', '*'],
            orbit_glyphs: vec!['○', '◦', 'o'],
            size_range: (9.0, 16.0),
            opacity_range: (0.25, 0.9),
            base_speed: 18.0,
            wrap_margin: 48.0,
            orbit_center: (0.5, 0.42),
            orbit_band: (0.18, 0.32),
            orbit_stiffness: 2.4,
            orbit_angular_speed: 0.45,
            trail_length: 5,
            trail_decay: 0.55,
            glow: true,
        }
    }
}

impl ParticleConfig {
    /// Total particle count across all categories.
    pub fn total_count(&self) -> usize {
        self.drift_count + self.pulse_count + self.orbit_count
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Controllers sub-config
// ─────────────────────────────────────────────────────────────────────────────

/// Optional programmatic controllers attached to the deck.
#[derive(Clone, Default)]
pub struct Controllers {
    pub motion: Option<MotionController>,
    pub sim: Option<SimController>,
    pub event: Option<EventController>,
}

// ─────────────────────────────────────────────────────────────────────────────
// DeckConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the deck.
///
/// Organised into sub-configs for clarity:
///
/// | Field         | Purpose |
/// |---------------|---------|
/// | `features`    | Toggle individual deck features on/off |
/// | `sparkline`   | Glyph palette and window length |
/// | `counter`     | Easing, duration, formatting |
/// | `particles`   | Backdrop tunables |
/// | `theme`       | Visual theme |
/// | `controllers` | Programmatic interaction handles |
#[derive(Clone)]
pub struct DeckConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered inside the deck.
    pub heading: Option<String>,
    /// Optional subheadline below the headline.
    pub subheading: Option<String>,

    /// Toggle individual deck features on/off.
    pub features: FeatureFlags,
    /// Sparkline rendering settings.
    pub sparkline: SparklineConfig,
    /// Counter animation settings.
    pub counter: CounterConfig,
    /// Particle backdrop tunables.
    pub particles: ParticleConfig,
    /// Visual theme.
    pub theme: DeckTheme,

    /// Force the reduced-motion preference instead of reading the
    /// environment. `None` = resolve from the environment.
    pub reduced_motion: Option<bool>,

    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    /// External controllers for programmatic interaction.
    pub controllers: Controllers,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: "SparkDeck".to_string(),
            heading: None,
            subheading: None,
            features: FeatureFlags::default(),
            sparkline: SparklineConfig::default(),
            counter: CounterConfig::default(),
            particles: ParticleConfig::default(),
            theme: DeckTheme::default(),
            reduced_motion: None,
            native_options: None,
            controllers: Controllers::default(),
        }
    }
}
