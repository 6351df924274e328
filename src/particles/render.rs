//! Painting for the particle backdrop.

use egui::{Align2, Color32, FontId, Painter, Rect};

use super::{ParticleKind, ParticleSim, SimPhase};
use crate::theme::ParticleColors;

impl ParticleSim {
    /// Paint the current particle set into `rect`.
    ///
    /// Drawing is clipped to the rect so wrap-margin overshoot never bleeds
    /// into neighbouring UI. A torn-down or unseeded simulator paints
    /// nothing.
    pub fn paint(&self, painter: &Painter, rect: Rect, colors: &ParticleColors) {
        if self.phase() == SimPhase::TornDown || self.particles().is_empty() {
            return;
        }
        let painter = painter.with_clip_rect(rect);
        let trail_decay = self.config().trail_decay.clamp(0.0, 1.0);
        let glow = self.config().glow;

        for p in self.particles() {
            let color = match p.kind {
                ParticleKind::Drift => colors.drift,
                ParticleKind::Pulse => colors.pulse,
                ParticleKind::Orbit => colors.orbit,
            };
            let font = FontId::monospace(p.size);

            // Fading trail: the glyph re-drawn at recent positions with
            // geometrically decaying opacity, newest first.
            let mut alpha = p.opacity * trail_decay;
            for past in p.trail() {
                if alpha < 0.02 {
                    break;
                }
                painter.text(
                    rect.min + *past,
                    Align2::CENTER_CENTER,
                    p.glyph,
                    font.clone(),
                    color.gamma_multiply(alpha),
                );
                alpha *= trail_decay;
            }

            let pos = rect.min + p.pos;
            if glow && p.kind == ParticleKind::Pulse {
                // Soft glow: two translucent discs behind the glyph.
                painter.circle_filled(pos, p.size * 1.1, color.gamma_multiply(p.opacity * 0.10));
                painter.circle_filled(pos, p.size * 0.6, color.gamma_multiply(p.opacity * 0.18));
            }
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                p.glyph,
                font,
                color.gamma_multiply(p.opacity),
            );
        }
    }

    /// Paint a translucent veil over `rect` before the particles, softening
    /// whatever is behind the backdrop.
    pub fn paint_backdrop(&self, painter: &Painter, rect: Rect, fill: Color32) {
        if self.phase() == SimPhase::TornDown {
            return;
        }
        painter.rect_filled(rect, egui::CornerRadius::ZERO, fill);
    }
}
