//! Sparkline and meter-bar widgets.
//!
//! Thin egui wrappers over the pure renderers in [`crate::spark`]: a series
//! becomes a row of monospace glyphs, a fraction becomes a fixed-width bar.

use egui::{Color32, Response, RichText, Ui};

use crate::spark;

/// A one-line glyph chart for a series of samples.
pub struct Sparkline<'a> {
    values: &'a [f64],
    palette: &'a [char],
    color: Color32,
    size: Option<f32>,
}

impl<'a> Sparkline<'a> {
    pub fn new(values: &'a [f64], palette: &'a [char]) -> Self {
        Self {
            values,
            palette,
            color: Color32::WHITE,
            size: None,
        }
    }

    /// Glyph color (typically the series accent).
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Override the text size in points.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let glyphs = spark::sparkline_with(self.values, self.palette);
        let mut text = RichText::new(glyphs).monospace().color(self.color);
        if let Some(size) = self.size {
            text = text.size(size);
        }
        ui.label(text)
    }
}

/// A labelled terminal-style meter bar for a fraction in `[0, 1]`.
pub struct MeterBar<'a> {
    label: &'a str,
    fraction: f64,
    width: usize,
    color: Color32,
}

impl<'a> MeterBar<'a> {
    pub fn new(label: &'a str, fraction: f64) -> Self {
        Self {
            label,
            fraction,
            width: 16,
            color: Color32::WHITE,
        }
    }

    /// Bar width in cells.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let bar = spark::meter(self.fraction, self.width);
        ui.horizontal(|ui| {
            if !self.label.is_empty() {
                ui.label(RichText::new(self.label).monospace());
            }
            ui.label(RichText::new(bar).monospace().color(self.color))
        })
        .inner
    }
}
