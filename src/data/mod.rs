//! Data-side state for the deck: per-series trailing windows and the store
//! that ingests sink commands each frame.

pub mod series;

pub use series::{SeriesBuffer, SeriesEntry, SeriesStore};
