//! Plot pretty 1d data graphs in the terminal.
//!
//! Renders a slice of samples as a compact block-glyph sparkline,
//! optionally enclosed in a box with a centered title, min/mid/max value
//! labels and x-axis tick marks:
//!
//! ```text
//! ╭──────Gaussian───────╮
//! │        ▁▄▅▄▁        ├ max: 0.15
//! │      ▁▅█████▅▁      ├      0.075
//! │▁▁▁▂▃▆█████████▆▃▂▁▁▁├ min: 0
//! ╰┬─────┬─────┬───────┬╯
//!  0     5     10      21
//! ```
//!
//! Sequences wider than the plot are reduced with an area-preserving box
//! filter, so every sample contributes to the chart in proportion to the
//! columns it overlaps.

pub mod config;
pub mod error;
pub mod glyphs;
pub mod render;
pub mod style;
pub mod term;

pub use config::Config;
pub use error::RenderError;
pub use glyphs::Ramp;
pub use render::{render, render_with, Sample, FRAME_OVERHEAD};
pub use style::{Color, StyleDecorator, TextStyle};
pub use term::{FixedWidth, TermWidth, TerminalWidthProvider, FALLBACK_WIDTH};
