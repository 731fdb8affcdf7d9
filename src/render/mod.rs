//! The rendering engine.
//!
//! Turns a slice of samples and a [`Config`] into a complete text block:
//! scaling parameters are resolved against the data and the terminal,
//! the samples are resampled into one aggregated value per display
//! column, and the frame renderer quantizes those values row by row
//! while laying out borders, labels and axis ticks.

mod frame;
mod quantize;
mod resample;
mod scale;

pub use frame::FRAME_OVERHEAD;
pub use quantize::Quantizer;
pub use scale::{ResolvedRange, ResolvedWidth};

use num_traits::ToPrimitive;
use tracing::debug;

use crate::config::Config;
use crate::error::RenderError;
use crate::term::{TermWidth, TerminalWidthProvider};

/// Numeric input accepted by the renderer.
///
/// Blanket-implemented for every ordered numeric type convertible to
/// `f64`; the engine does its arithmetic in `f64` regardless of the
/// source precision.
pub trait Sample: Copy + PartialOrd + ToPrimitive {
    /// Lossy conversion used for scaling and resampling.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Copy + PartialOrd + ToPrimitive> Sample for T {}

/// Render `samples` as a sparkline, sizing against the attached terminal.
///
/// Convenience wrapper around [`render_with`] using [`TermWidth`].
pub fn render<T: Sample>(samples: &[T], config: &Config<T>) -> Result<String, RenderError> {
    render_with(samples, config, &TermWidth)
}

/// Render `samples` as a sparkline, sizing against an injected width
/// source.
///
/// ```
/// use sparkplot::{render_with, Config, FixedWidth};
///
/// let samples = [1.0_f64, 3.0, 2.0, 4.0];
/// let chart = render_with(&samples, &Config::new().styled(false), &FixedWidth(80)).unwrap();
/// assert_eq!(chart, "▁▅▃█");
/// ```
pub fn render_with<T: Sample>(
    samples: &[T],
    config: &Config<T>,
    term: &dyn TerminalWidthProvider,
) -> Result<String, RenderError> {
    if samples.is_empty() {
        return Err(RenderError::EmptyInput);
    }
    if config.rows == 0 {
        return Err(RenderError::ZeroRows);
    }

    let range = scale::resolve_range(samples, config.min, config.max)?;
    let width = scale::resolve_width(config.columns, samples.len(), config.framed, term)?;
    debug!(
        min = range.min,
        max = range.max,
        columns = width.columns,
        scale = width.scale,
        "resolved plot scaling"
    );

    let columns = resample::downsample(samples, width);
    let renderer = frame::FrameRenderer::new(config, range, width.columns, samples.len());
    Ok(renderer.render(&columns))
}
