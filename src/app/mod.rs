//! Ready-to-use deck UI: an embeddable panel, an `eframe::App` wrapper and
//! standalone run helpers.

mod update;

use std::collections::HashMap;
use std::sync::mpsc::Receiver;

use crate::config::DeckConfig;
use crate::controllers::{MotionController, SimController};
use crate::data::SeriesStore;
use crate::events::EventController;
use crate::motion::MotionPreference;
use crate::sink::{DeckCommand, SeriesId};
use crate::widgets::{AnimatedCounter, ParticleCanvas};

/// Embeddable deck panel: drain the sink, drive the widgets, draw tiles.
///
/// In standalone mode it is driven by [`DeckApp`]; in embedded mode the host
/// application calls [`update`](DeckPanel::update) from any `egui::Ui` each
/// frame.
pub struct DeckPanel {
    pub(crate) rx: Receiver<DeckCommand>,
    pub(crate) store: SeriesStore,
    pub(crate) config: DeckConfig,
    pub(crate) counters: HashMap<SeriesId, AnimatedCounter>,
    pub(crate) backdrop: ParticleCanvas,
    pub(crate) motion_ctrl: MotionController,
    pub(crate) sim_ctrl: Option<SimController>,
    pub(crate) event_ctrl: Option<EventController>,
    pub(crate) theme_applied: bool,
    pub(crate) last_reduced: bool,
    pub(crate) sim_started_emitted: bool,
}

impl DeckPanel {
    pub fn new(rx: Receiver<DeckCommand>, config: DeckConfig) -> Self {
        let motion_ctrl = config.controllers.motion.clone().unwrap_or_else(|| {
            match config.reduced_motion {
                Some(true) => MotionController::with_preference(MotionPreference::reduced()),
                Some(false) => MotionController::with_preference(MotionPreference::full()),
                None => MotionController::new(),
            }
        });
        let sim_ctrl = config.controllers.sim.clone();
        let event_ctrl = config.controllers.event.clone();
        let last_reduced = motion_ctrl.is_reduced();
        Self {
            rx,
            store: SeriesStore::new(config.sparkline.window),
            backdrop: ParticleCanvas::new(config.particles.clone()),
            counters: HashMap::new(),
            motion_ctrl,
            sim_ctrl,
            event_ctrl,
            config,
            theme_applied: false,
            last_reduced,
            sim_started_emitted: false,
        }
    }

    /// The motion controller this deck consults.
    pub fn motion_controller(&self) -> MotionController {
        self.motion_ctrl.clone()
    }

    /// Number of registered series.
    pub fn series_count(&self) -> usize {
        self.store.len()
    }

    /// Whether the particle backdrop is currently ticking.
    pub fn is_backdrop_running(&self) -> bool {
        self.backdrop.is_running()
    }

    /// Switch the theme at runtime.
    pub fn set_theme(&mut self, theme: crate::theme::DeckTheme) {
        self.config.theme = theme;
        self.theme_applied = false;
        self.emit(crate::events::DeckEvent::new(
            crate::events::EventKind::THEME_CHANGED,
        ));
    }

    /// Tear the deck down: the particle loop is cancelled and every counter
    /// stops animating. No frame is scheduled afterwards.
    pub fn teardown(&mut self) {
        self.backdrop.teardown();
        for counter in self.counters.values_mut() {
            counter.teardown();
        }
        self.emit(crate::events::DeckEvent::new(
            crate::events::EventKind::SIM_TORN_DOWN,
        ));
    }

    pub(crate) fn emit(&self, event: crate::events::DeckEvent) {
        if let Some(ctrl) = &self.event_ctrl {
            ctrl.emit(event);
        }
    }
}

/// Standalone deck application.
pub struct DeckApp {
    panel: DeckPanel,
}

impl DeckApp {
    pub fn new(rx: Receiver<DeckCommand>, config: DeckConfig) -> Self {
        Self {
            panel: DeckPanel::new(rx, config),
        }
    }

    pub fn panel_mut(&mut self) -> &mut DeckPanel {
        &mut self.panel
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.update(ui);
        });
    }
}

/// Run the deck as a native window until closed.
pub fn run_deck(rx: Receiver<DeckCommand>, config: DeckConfig) -> eframe::Result<()> {
    let title = config.title.clone();
    let native_options = config.native_options.clone().unwrap_or_else(|| {
        let mut options = eframe::NativeOptions::default();
        options.viewport = egui::ViewportBuilder::default().with_inner_size([900.0, 600.0]);
        options
    });
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(DeckApp::new(rx, config)))),
    )
}

/// [`run_deck`] with a default configuration.
pub fn run_deck_default(rx: Receiver<DeckCommand>) -> eframe::Result<()> {
    run_deck(rx, DeckConfig::default())
}
