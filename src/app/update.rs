//! Per-frame update logic for [`DeckPanel`].
//!
//! Each frame: apply the theme if it changed, drain the sink channel, apply
//! controller requests, paint the particle backdrop behind the content, then
//! lay out one tile per series (name, animated counter, sparkline, bounds,
//! updated-at).

use eframe::egui;
use eframe::egui::RichText;

use super::DeckPanel;
use crate::events::{DeckEvent, EventKind};
use crate::spark;
use crate::widgets::{AnimatedCounter, MeterBar, Sparkline};

impl DeckPanel {
    /// Main per-frame update. Call from an egui `Ui` context each frame.
    pub fn update(&mut self, ui: &mut egui::Ui) {
        if !self.theme_applied {
            self.config.theme.apply(ui.ctx());
            self.theme_applied = true;
        }

        self.update_data();
        self.apply_controllers();

        let reduced = self.motion_ctrl.is_reduced();
        if reduced != self.last_reduced {
            self.last_reduced = reduced;
            self.emit(
                DeckEvent::new(EventKind::REDUCED_MOTION_CHANGED).with_reduced_motion(reduced),
            );
        }

        // Backdrop first: it only paints, so the tiles lay out over it.
        if self.config.features.particles {
            let rect = ui.available_rect_before_wrap();
            let colors = self.config.theme.particle_colors();
            let was_running = self.backdrop.is_running();
            self.backdrop.show_in(ui, rect, &colors, reduced);
            if let Some(ctrl) = &self.sim_ctrl {
                ctrl.publish_running(self.backdrop.is_running());
            }
            if !was_running && self.backdrop.is_running() && !self.sim_started_emitted {
                self.sim_started_emitted = true;
                self.emit(DeckEvent::new(EventKind::SIM_STARTED));
            }
        }

        if self.config.features.heading {
            if let Some(heading) = &self.config.heading {
                ui.heading(RichText::new(heading).monospace());
            }
            if let Some(subheading) = &self.config.subheading {
                ui.label(RichText::new(subheading).monospace().weak());
            }
            if self.config.heading.is_some() || self.config.subheading.is_some() {
                ui.add_space(8.0);
            }
        }

        self.render_tiles(ui);
    }

    /// Data-only pass: drain pending sink commands into the store.
    pub fn update_data(&mut self) {
        let (registered, updated) = self.store.ingest(&self.rx);
        if registered {
            self.emit(DeckEvent::new(EventKind::SERIES_REGISTERED));
        }
        if updated {
            self.emit(DeckEvent::new(EventKind::SERIES_UPDATED));
        }
    }

    fn apply_controllers(&mut self) {
        if let Some(ctrl) = &self.sim_ctrl {
            let (pause, teardown) = ctrl.take_requests();
            if let Some(paused) = pause {
                self.backdrop.set_paused(paused);
            }
            if teardown {
                self.backdrop.teardown();
                self.emit(DeckEvent::new(EventKind::SIM_TORN_DOWN));
            }
        }
    }

    fn render_tiles(&mut self, ui: &mut egui::Ui) {
        let reduced = self.last_reduced;
        let features = self.config.features.clone();
        let palette = self.config.sparkline.palette.clone();
        let counter_cfg = self.config.counter.clone();

        // Collect the tile data up front so the counters map can be borrowed
        // mutably while iterating.
        struct Tile {
            id: crate::sink::SeriesId,
            name: String,
            unit: Option<String>,
            accent: egui::Color32,
            values: Vec<f64>,
            updated: Option<String>,
        }
        let tiles: Vec<Tile> = self
            .store
            .iter()
            .map(|entry| Tile {
                id: entry.id,
                name: entry.name.clone(),
                unit: entry.unit.clone(),
                accent: entry.accent,
                values: entry.buffer.values(),
                updated: entry
                    .last_updated
                    .map(|t| t.format("%H:%M:%S").to_string()),
            })
            .collect();

        if tiles.is_empty() {
            ui.label(RichText::new("waiting for series…").monospace().weak());
            return;
        }

        let mut events: Vec<DeckEvent> = Vec::new();
        ui.horizontal_wrapped(|ui| {
            for tile in &tiles {
                ui.group(|ui| {
                    ui.set_min_width(160.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&tile.name)
                                .monospace()
                                .color(tile.accent),
                        );

                        if features.counters {
                            let target = tile.values.last().copied().unwrap_or(0.0);
                            let counter = self
                                .counters
                                .entry(tile.id)
                                .or_insert_with(|| AnimatedCounter::new(counter_cfg.clone()));
                            let (_, frame) =
                                counter.show(ui, target, reduced, tile.accent, tile.unit.as_deref());
                            if frame.retargeted {
                                events.push(
                                    DeckEvent::new(EventKind::ANIMATION_RETARGETED)
                                        .with_series(tile.id)
                                        .with_target(target),
                                );
                            }
                            if frame.completed {
                                events.push(
                                    DeckEvent::new(EventKind::ANIMATION_COMPLETED)
                                        .with_series(tile.id)
                                        .with_target(target),
                                );
                            }
                        }

                        if features.sparklines {
                            Sparkline::new(&tile.values, &palette)
                                .color(tile.accent)
                                .show(ui);
                        }

                        if features.meters {
                            if let (Some(latest), Some((min, max))) =
                                (tile.values.last(), spark::bounds(&tile.values))
                            {
                                let range = max - min;
                                let fraction = if range.abs() < f64::EPSILON {
                                    0.0
                                } else {
                                    (latest - min) / range
                                };
                                MeterBar::new("", fraction)
                                    .width(12)
                                    .color(tile.accent)
                                    .show(ui);
                            }
                        }

                        if features.bounds {
                            if let Some((min, max)) = spark::bounds(&tile.values) {
                                ui.label(
                                    RichText::new(format!("{min:.1} – {max:.1}"))
                                        .monospace()
                                        .weak()
                                        .size(10.0),
                                );
                            }
                        }

                        if features.timestamps {
                            if let Some(updated) = &tile.updated {
                                ui.label(
                                    RichText::new(format!("updated {updated}"))
                                        .monospace()
                                        .weak()
                                        .size(10.0),
                                );
                            }
                        }
                    });
                });
            }
        });
        for event in events {
            self.emit(event);
        }
    }
}
