//! Series buffers and the store that feeds the deck widgets.
//!
//! A [`SeriesBuffer`] keeps the trailing window of samples a sparkline
//! renders; the [`SeriesStore`] owns one entry per registered series, drains
//! the command channel once per frame, and allocates accent colors in
//! registration order from the active theme palette.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local};
use egui::Color32;

use crate::sink::{DeckCommand, SeriesId};
use crate::theme;

/// Default trailing-window length for a new series.
pub const DEFAULT_WINDOW: usize = 12;

/// Fixed-length trailing window of samples.
#[derive(Debug, Clone)]
pub struct SeriesBuffer {
    window: usize,
    samples: VecDeque<f64>,
}

impl SeriesBuffer {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            samples: VecDeque::with_capacity(window.max(1)),
        }
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.window {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Replace the window contents. Only the trailing `window` samples of
    /// `values` are kept.
    pub fn set(&mut self, values: Vec<f64>) {
        self.samples.clear();
        let skip = values.len().saturating_sub(self.window);
        self.samples.extend(values.into_iter().skip(skip));
    }

    /// Resize the window, evicting oldest samples if it shrinks.
    pub fn resize(&mut self, window: usize) {
        self.window = window.max(1);
        while self.samples.len() > self.window {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Samples oldest-first as a contiguous vector.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }
}

/// Everything the deck tracks for one registered series.
#[derive(Debug, Clone)]
pub struct SeriesEntry {
    pub id: SeriesId,
    pub name: String,
    pub unit: Option<String>,
    pub accent: Color32,
    pub buffer: SeriesBuffer,
    /// When the series last received data; `None` until the first sample.
    pub last_updated: Option<DateTime<Local>>,
}

/// Store of all registered series in registration order.
#[derive(Default)]
pub struct SeriesStore {
    entries: HashMap<SeriesId, SeriesEntry>,
    order: Vec<SeriesId>,
    window: usize,
}

impl SeriesStore {
    pub fn new(window: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            window: window.max(1),
        }
    }

    /// Drain every pending command from the sink channel.
    ///
    /// Returns `(registered, updated)`: whether any series was registered and
    /// whether any series received data this frame.
    pub fn ingest(&mut self, rx: &Receiver<DeckCommand>) -> (bool, bool) {
        let mut registered = false;
        let mut updated = false;
        while let Ok(cmd) = rx.try_recv() {
            match cmd {
                DeckCommand::RegisterSeries { id, name, unit } => {
                    self.register(id, name, unit);
                    registered = true;
                }
                DeckCommand::Push { series_id, value } => {
                    if let Some(entry) = self.touch(series_id) {
                        entry.buffer.push(value);
                        updated = true;
                    }
                }
                DeckCommand::PushMany { series_id, values } => {
                    if let Some(entry) = self.touch(series_id) {
                        for v in values {
                            entry.buffer.push(v);
                        }
                        updated = true;
                    }
                }
                DeckCommand::SetValues { series_id, values } => {
                    if let Some(entry) = self.touch(series_id) {
                        entry.buffer.set(values);
                        updated = true;
                    }
                }
                DeckCommand::SetWindow { series_id, len } => {
                    if let Some(entry) = self.entries.get_mut(&series_id) {
                        entry.buffer.resize(len);
                    }
                }
                DeckCommand::Clear { series_id } => {
                    if let Some(entry) = self.entries.get_mut(&series_id) {
                        entry.buffer.clear();
                        updated = true;
                    }
                }
            }
        }
        (registered, updated)
    }

    fn register(&mut self, id: SeriesId, name: String, unit: Option<String>) {
        if self.entries.contains_key(&id) {
            return;
        }
        let accent = theme::alloc_accent(self.order.len());
        self.order.push(id);
        self.entries.insert(
            id,
            SeriesEntry {
                id,
                name,
                unit,
                accent,
                buffer: SeriesBuffer::new(self.window),
                last_updated: None,
            },
        );
    }

    fn touch(&mut self, id: SeriesId) -> Option<&mut SeriesEntry> {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.last_updated = Some(Local::now());
                Some(entry)
            }
            None => {
                log::debug!("dropping command for unregistered series {id}");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: SeriesId) -> Option<&SeriesEntry> {
        self.entries.get(&id)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }
}
