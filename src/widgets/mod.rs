//! Ready-to-use egui widgets wrapping the core utilities.

pub mod canvas;
pub mod counter;
pub mod sparkline;

pub use canvas::ParticleCanvas;
pub use counter::{AnimatedCounter, CounterFrame};
pub use sparkline::{MeterBar, Sparkline};
