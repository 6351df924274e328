//! Deck theme definitions.
//!
//! A [`DeckTheme`] bundles egui visuals, the accent palette used to color
//! series tiles, and the per-category particle colors. Applying a theme also
//! refreshes the global accent palette consulted when a new series is
//! registered.

use eframe::egui::{Color32, Context, Visuals};
use once_cell::sync::Lazy;
use std::sync::Mutex;

// Global palette used for series accent allocation. Updated whenever a theme
// is applied; cloned on read so callers can freely mutate the result.
static GLOBAL_PALETTE: Lazy<Mutex<Vec<Color32>>> =
    Lazy::new(|| Mutex::new(DeckTheme::Terminal.accent_colors()));

/// Get a copy of the current global accent palette.
///
/// Exposed primarily for unit tests; production code should rely on
/// [`alloc_accent`] which consults the same palette.
pub fn global_palette() -> Vec<Color32> {
    GLOBAL_PALETTE.lock().unwrap().clone()
}

/// Update the global accent palette. Called automatically when a
/// [`DeckTheme`] is applied, but user code (or tests) may call it directly.
pub(crate) fn set_global_palette(new: Vec<Color32>) {
    let mut guard = GLOBAL_PALETTE.lock().unwrap();
    *guard = new;
}

/// Allocate the accent color for the `idx`-th registered series.
pub fn alloc_accent(idx: usize) -> Color32 {
    let palette = GLOBAL_PALETTE.lock().unwrap();
    if palette.is_empty() {
        return Color32::WHITE;
    }
    palette[idx % palette.len()]
}

/// Colors for the three particle categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleColors {
    pub drift: Color32,
    pub pulse: Color32,
    pub orbit: Color32,
}

/// User-defined custom theme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomTheme {
    /// Visuals for the egui context (optional, fallback to dark).
    pub visuals: Option<Visuals>,
    /// Series accent palette.
    pub accents: Vec<Color32>,
    /// Particle category colors.
    pub particles: ParticleColors,
    /// Optional label for UI display.
    pub label: Option<String>,
}

/// Visual theme for the deck, including user-defined custom themes.
#[derive(Clone, Debug, PartialEq)]
pub enum DeckTheme {
    /// Neutral dark theme.
    Dark,
    /// Light theme.
    Light,
    /// Green-on-black terminal look. The default.
    Terminal,
    /// Deep blue-violet night theme.
    Midnight,
    /// User-defined custom theme.
    Custom(CustomTheme),
}

impl Default for DeckTheme {
    fn default() -> Self {
        DeckTheme::Terminal
    }
}

impl DeckTheme {
    /// All built-in themes (useful for combo-box UIs).
    pub fn all() -> &'static [DeckTheme] {
        &[
            DeckTheme::Dark,
            DeckTheme::Light,
            DeckTheme::Terminal,
            DeckTheme::Midnight,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            DeckTheme::Dark => "Dark".to_string(),
            DeckTheme::Light => "Light".to_string(),
            DeckTheme::Terminal => "Terminal".to_string(),
            DeckTheme::Midnight => "Midnight".to_string(),
            DeckTheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Apply this theme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            DeckTheme::Dark => ctx.set_visuals(Visuals::dark()),
            DeckTheme::Light => ctx.set_visuals(Visuals::light()),
            DeckTheme::Terminal => {
                let mut v = Visuals::dark();
                let bg = Color32::from_rgb(8, 10, 8);
                let panel = Color32::from_rgb(14, 18, 14);
                let fg = Color32::from_rgb(140, 220, 140);
                v.panel_fill = bg;
                v.window_fill = panel;
                v.extreme_bg_color = bg;
                v.faint_bg_color = panel;
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = panel;
                v.widgets.noninteractive.fg_stroke.color = fg;
                v.widgets.inactive.bg_fill = panel;
                v.widgets.inactive.fg_stroke.color = Color32::from_rgb(90, 150, 90);
                ctx.set_visuals(v);
            }
            DeckTheme::Midnight => {
                let mut v = Visuals::dark();
                let bg = Color32::from_rgb(13, 15, 30);
                let panel = Color32::from_rgb(22, 25, 48);
                let fg = Color32::from_rgb(200, 205, 235);
                v.panel_fill = bg;
                v.window_fill = panel;
                v.extreme_bg_color = bg;
                v.faint_bg_color = panel;
                v.override_text_color = Some(fg);
                v.widgets.noninteractive.bg_fill = panel;
                v.widgets.noninteractive.fg_stroke.color = fg;
                ctx.set_visuals(v);
            }
            DeckTheme::Custom(custom) => {
                if let Some(visuals) = &custom.visuals {
                    ctx.set_visuals(visuals.clone());
                } else {
                    ctx.set_visuals(Visuals::dark());
                }
            }
        }

        // Refresh the global palette so future series registrations allocate
        // accents appropriate for the newly-applied theme.
        set_global_palette(self.accent_colors());
    }

    /// Series accent palette for this theme (up to 8 colors).
    pub fn accent_colors(&self) -> Vec<Color32> {
        match self {
            DeckTheme::Dark => vec![
                Color32::from_rgb(31, 119, 180),
                Color32::from_rgb(255, 127, 14),
                Color32::from_rgb(44, 160, 44),
                Color32::from_rgb(214, 39, 40),
                Color32::from_rgb(148, 103, 189),
                Color32::from_rgb(227, 119, 194),
                Color32::from_rgb(127, 127, 127),
                Color32::from_rgb(188, 189, 34),
            ],
            DeckTheme::Light => vec![
                Color32::from_rgb(228, 26, 28),
                Color32::from_rgb(55, 126, 184),
                Color32::from_rgb(77, 175, 74),
                Color32::from_rgb(152, 78, 163),
                Color32::from_rgb(255, 127, 0),
                Color32::from_rgb(166, 86, 40),
                Color32::from_rgb(247, 129, 191),
                Color32::from_rgb(153, 153, 153),
            ],
            DeckTheme::Terminal => vec![
                Color32::from_rgb(80, 250, 123),
                Color32::from_rgb(139, 233, 253),
                Color32::from_rgb(241, 250, 140),
                Color32::from_rgb(255, 184, 108),
                Color32::from_rgb(255, 121, 198),
                Color32::from_rgb(189, 147, 249),
                Color32::from_rgb(248, 248, 242),
                Color32::from_rgb(98, 114, 164),
            ],
            DeckTheme::Midnight => vec![
                Color32::from_rgb(136, 192, 208),
                Color32::from_rgb(129, 161, 193),
                Color32::from_rgb(180, 142, 173),
                Color32::from_rgb(163, 190, 140),
                Color32::from_rgb(235, 203, 139),
                Color32::from_rgb(208, 135, 112),
                Color32::from_rgb(191, 97, 106),
                Color32::from_rgb(216, 222, 233),
            ],
            DeckTheme::Custom(custom) => custom.accents.clone(),
        }
    }

    /// Particle category colors for this theme.
    pub fn particle_colors(&self) -> ParticleColors {
        match self {
            DeckTheme::Dark => ParticleColors {
                drift: Color32::from_rgb(100, 140, 180),
                pulse: Color32::from_rgb(255, 170, 60),
                orbit: Color32::from_rgb(120, 200, 120),
            },
            DeckTheme::Light => ParticleColors {
                drift: Color32::from_rgb(120, 150, 190),
                pulse: Color32::from_rgb(230, 120, 40),
                orbit: Color32::from_rgb(80, 160, 80),
            },
            DeckTheme::Terminal => ParticleColors {
                drift: Color32::from_rgb(60, 160, 90),
                pulse: Color32::from_rgb(140, 255, 170),
                orbit: Color32::from_rgb(100, 220, 220),
            },
            DeckTheme::Midnight => ParticleColors {
                drift: Color32::from_rgb(94, 129, 172),
                pulse: Color32::from_rgb(235, 203, 139),
                orbit: Color32::from_rgb(136, 192, 208),
            },
            DeckTheme::Custom(custom) => custom.particles,
        }
    }
}
