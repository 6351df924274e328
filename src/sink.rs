//! Data source types and channels for feeding samples into the deck UI.
//!
//! The deck never owns hard-coded sample arrays; callers create a
//! [`SeriesSink`], register named series and push samples from any thread.
//! Commands travel over a plain `std::sync::mpsc` channel and are drained by
//! the UI once per frame.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::{Receiver, Sender};

/// Numeric identifier for a series, assigned by the library when creating a
/// [`Series`].
pub type SeriesId = u32;

/// Declaration of a series; returned to the caller after registration.
#[derive(Debug, Clone)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    /// Optional unit label displayed next to the counter (e.g. "ms", "%").
    pub unit: Option<String>,
}

/// Messages sent over the channel to drive the deck.
pub enum DeckCommand {
    /// Register a new series with a numeric ID and optional unit string.
    RegisterSeries {
        id: SeriesId,
        name: String,
        unit: Option<String>,
    },
    /// Append a single sample to the given series.
    Push { series_id: SeriesId, value: f64 },
    /// Append a chunk of samples to the given series.
    PushMany {
        series_id: SeriesId,
        values: Vec<f64>,
    },
    /// Replace the series window contents with the provided samples.
    SetValues {
        series_id: SeriesId,
        values: Vec<f64>,
    },
    /// Resize the trailing window of the given series.
    SetWindow { series_id: SeriesId, len: usize },
    /// Remove all samples for the given series (the series stays registered).
    Clear { series_id: SeriesId },
}

/// Convenience sender for feeding samples into the deck.
#[derive(Clone)]
pub struct SeriesSink {
    tx: Sender<DeckCommand>,
}

impl SeriesSink {
    /// Create and register a new [`Series`] with a unique numeric ID.
    pub fn create_series<S: Into<String>>(&self, name: S, unit: Option<S>) -> Series {
        static NEXT_ID: AtomicU32 = AtomicU32::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let name = name.into();
        let unit_str = unit.map(|s| s.into());
        // Inform the UI about the new series
        let _ = self.tx.send(DeckCommand::RegisterSeries {
            id,
            name: name.clone(),
            unit: unit_str.clone(),
        });
        Series {
            id,
            name,
            unit: unit_str,
        }
    }

    /// Send a single sample for a given [`Series`].
    pub fn push(
        &self,
        series: &Series,
        value: f64,
    ) -> Result<(), std::sync::mpsc::SendError<DeckCommand>> {
        self.tx.send(DeckCommand::Push {
            series_id: series.id,
            value,
        })
    }

    /// Send a single sample for a given series ID.
    pub fn push_by_id(
        &self,
        series_id: SeriesId,
        value: f64,
    ) -> Result<(), std::sync::mpsc::SendError<DeckCommand>> {
        self.tx.send(DeckCommand::Push { series_id, value })
    }

    /// Send a chunk of samples (more efficient than sample-by-sample).
    pub fn push_many<I>(
        &self,
        series: &Series,
        values: I,
    ) -> Result<(), std::sync::mpsc::SendError<DeckCommand>>
    where
        I: Into<Vec<f64>>,
    {
        self.tx.send(DeckCommand::PushMany {
            series_id: series.id,
            values: values.into(),
        })
    }

    /// Replace the entire window for a given series with the provided samples.
    /// Existing samples are discarded.
    pub fn set_values<I>(
        &self,
        series: &Series,
        values: I,
    ) -> Result<(), std::sync::mpsc::SendError<DeckCommand>>
    where
        I: Into<Vec<f64>>,
    {
        self.tx.send(DeckCommand::SetValues {
            series_id: series.id,
            values: values.into(),
        })
    }

    /// Resize the trailing window of a given series.
    pub fn set_window(
        &self,
        series: &Series,
        len: usize,
    ) -> Result<(), std::sync::mpsc::SendError<DeckCommand>> {
        self.tx.send(DeckCommand::SetWindow {
            series_id: series.id,
            len,
        })
    }

    /// Remove all samples for a given series.
    #[inline]
    pub fn clear(&self, series: &Series) -> Result<(), std::sync::mpsc::SendError<DeckCommand>> {
        self.tx.send(DeckCommand::Clear {
            series_id: series.id,
        })
    }
}

/// Create a new channel pair for the deck: `(SeriesSink, Receiver<DeckCommand>)`.
pub fn channel_deck() -> (SeriesSink, Receiver<DeckCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (SeriesSink { tx }, rx)
}
