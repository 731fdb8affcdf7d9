//! Render failure modes.

use thiserror::Error;

/// Errors reported by [`render`](crate::render()) before any output is
/// assembled; no partial text is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The sample sequence was empty.
    #[error("sample sequence is empty")]
    EmptyInput,

    /// The resolved scaling range was inverted.
    #[error("scaling range is inverted: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },

    /// The resolved display width exceeds the sample count. Upsampling to
    /// a canvas wider than the data is not implemented.
    #[error("plot width {width} exceeds the {samples} available samples")]
    UnsupportedWidth { width: usize, samples: usize },

    /// A zero-line plot height was requested.
    #[error("plot height must be at least one line")]
    ZeroRows,
}
