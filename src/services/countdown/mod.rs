//! Countdown timer for the exam session.
//!
//! The engine is a small state machine driven by the UI thread; the
//! display helpers derive the readout purely from its state.

mod display;
mod engine;

pub use display::{format_remaining, is_warning, progress_fraction, WARNING_THRESHOLD_SECS};
pub use engine::{CountdownEngine, CountdownPhase, TICK_PERIOD};
