//! Plot configuration.

use crate::glyphs::Ramp;

/// Options controlling a single render.
///
/// Collects everything a caller might tune so that repeated renders do
/// not clutter the call site, in the builder style of the rest of the
/// crate. `T` is the sample type; the optional scaling bounds share it.
#[derive(Debug, Clone)]
pub struct Config<T> {
    /// Plot height in text lines; taller plots resolve finer detail.
    pub(crate) rows: usize,
    /// Plot width in columns; 0 means one column per sample, clamped to
    /// the terminal.
    pub(crate) columns: usize,
    /// Whether to enclose the plot in a box outline with labels.
    pub(crate) framed: bool,
    /// Whether to emit ANSI styling.
    pub(crate) styled: bool,
    /// Caption centered in the top border; empty for none.
    pub(crate) title: String,
    /// Lower scaling bound; observed from the data when absent.
    pub(crate) min: Option<T>,
    /// Upper scaling bound; observed from the data when absent.
    pub(crate) max: Option<T>,
    /// Glyph repertoire used for cells and the frame.
    pub(crate) ramp: Ramp,
}

impl<T> Default for Config<T> {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 0,
            framed: false,
            styled: true,
            title: String::new(),
            min: None,
            max: None,
            ramp: Ramp::Unicode,
        }
    }
}

impl<T> Config<T> {
    /// A one-line, auto-width, unframed, colored plot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plot height in text lines.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the plot width in columns (0 = one column per sample).
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Enclose the plot in a box outline with value labels and axis ticks.
    pub fn framed(mut self, framed: bool) -> Self {
        self.framed = framed;
        self
    }

    /// Toggle ANSI styling of the output.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Set the caption centered in the top border.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the lower scaling bound.
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper scaling bound.
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Set both scaling bounds.
    pub fn range(mut self, min: T, max: T) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Select the glyph ramp.
    pub fn ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = ramp;
        self
    }
}
