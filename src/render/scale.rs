//! Range and width resolution.

use crate::error::RenderError;
use crate::term::TerminalWidthProvider;

use super::Sample;

/// The value range used for vertical scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    pub min: f64,
    pub max: f64,
}

impl ResolvedRange {
    /// Position of `value` inside the range, clamped into `[0, 1]`.
    ///
    /// A degenerate range (min == max) maps every value to 0 rather than
    /// dividing by zero.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        (value.clamp(self.min, self.max) - self.min) / (self.max - self.min)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// The column count and sample-to-column ratio used for resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWidth {
    /// Number of display columns.
    pub columns: usize,
    /// Ratio columns / samples, at most 1.
    pub scale: f64,
}

/// Resolve the scaling range from overrides and observed data extrema.
///
/// Explicit bounds win verbatim even when the data escapes them;
/// out-of-range samples are clamped during quantization, not rejected.
/// Missing bounds are observed from a single scan of the data.
pub(crate) fn resolve_range<T: Sample>(
    samples: &[T],
    min: Option<T>,
    max: Option<T>,
) -> Result<ResolvedRange, RenderError> {
    let (min, max) = match (min, max) {
        (Some(lo), Some(hi)) => (lo.as_f64(), hi.as_f64()),
        (lo, hi) => {
            let (observed_lo, observed_hi) = observe(samples);
            (
                lo.map_or(observed_lo, Sample::as_f64),
                hi.map_or(observed_hi, Sample::as_f64),
            )
        }
    };
    if min > max {
        return Err(RenderError::InvertedRange { min, max });
    }
    Ok(ResolvedRange { min, max })
}

fn observe<T: Sample>(samples: &[T]) -> (f64, f64) {
    samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), sample| {
            let value = sample.as_f64();
            (lo.min(value), hi.max(value))
        })
}

/// Resolve the display width against the terminal and the sample count.
///
/// A requested width of 0 defaults to one column per sample. The result
/// is clamped to the terminal width minus the frame decoration, but may
/// never exceed the sample count: stretching the data over a wider
/// canvas would require interpolation, which is not implemented.
pub(crate) fn resolve_width(
    requested: usize,
    samples: usize,
    framed: bool,
    term: &dyn TerminalWidthProvider,
) -> Result<ResolvedWidth, RenderError> {
    let overhead = if framed { super::FRAME_OVERHEAD } else { 0 };
    // A terminal narrower than the frame decoration still gets one data
    // column instead of a zero-width plot.
    let available = term.width().saturating_sub(overhead).max(1);

    let requested = if requested == 0 { samples } else { requested };
    let columns = requested.min(available);
    if columns > samples {
        return Err(RenderError::UnsupportedWidth {
            width: columns,
            samples,
        });
    }
    Ok(ResolvedWidth {
        columns,
        scale: columns as f64 / samples as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::MockTerminalWidthProvider;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn terminal(width: usize) -> MockTerminalWidthProvider {
        let mut term = MockTerminalWidthProvider::new();
        term.expect_width().return_const(width);
        term
    }

    #[test]
    fn range_is_observed_from_data() {
        let range = resolve_range(&[3.0, -1.0, 2.5], None, None).unwrap();
        assert_eq!(range, ResolvedRange { min: -1.0, max: 3.0 });
    }

    #[test]
    fn explicit_bounds_win_over_data() {
        let range = resolve_range(&[3.0, -1.0, 2.5], Some(0.0), Some(1.0)).unwrap();
        assert_eq!(range, ResolvedRange { min: 0.0, max: 1.0 });
    }

    #[test]
    fn partial_override_observes_the_missing_bound() {
        let range = resolve_range(&[3.0, -1.0, 2.5], Some(0.0), None).unwrap();
        assert_eq!(range, ResolvedRange { min: 0.0, max: 3.0 });
    }

    #[test]
    fn inverted_override_is_rejected() {
        let err = resolve_range(&[1.0], Some(2.0), Some(1.0)).unwrap_err();
        assert_eq!(err, RenderError::InvertedRange { min: 2.0, max: 1.0 });
    }

    #[test]
    fn constant_series_resolves_to_a_degenerate_range() {
        let range = resolve_range(&[5.0, 5.0], None, None).unwrap();
        assert_eq!(range.min, range.max);
        assert_eq!(range.fraction(5.0), 0.0);
        assert_eq!(range.fraction(99.0), 0.0);
    }

    #[test]
    fn fraction_clamps_out_of_range_values() {
        let range = ResolvedRange { min: 0.0, max: 10.0 };
        assert_eq!(range.fraction(-5.0), 0.0);
        assert_eq!(range.fraction(15.0), 1.0);
        assert_eq!(range.fraction(2.5), 0.25);
    }

    #[test]
    fn auto_width_defaults_to_the_sample_count() {
        let width = resolve_width(0, 40, false, &terminal(80)).unwrap();
        assert_eq!(width.columns, 40);
        assert_eq!(width.scale, 1.0);
    }

    #[test]
    fn width_clamps_to_the_terminal() {
        let width = resolve_width(0, 200, false, &terminal(80)).unwrap();
        assert_eq!(width.columns, 80);
        assert_eq!(width.scale, 80.0 / 200.0);
    }

    #[test]
    fn framed_plots_reserve_label_columns() {
        let width = resolve_width(0, 200, true, &terminal(80)).unwrap();
        assert_eq!(width.columns, 80 - super::super::FRAME_OVERHEAD);
    }

    #[rstest]
    #[case(22, 21)]
    #[case(200, 21)]
    fn width_beyond_sample_count_is_unsupported(#[case] requested: usize, #[case] samples: usize) {
        let err = resolve_width(requested, samples, false, &terminal(500)).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnsupportedWidth { width: requested, samples }
        );
    }

    #[test]
    fn sub_overhead_terminal_degrades_to_one_column() {
        let width = resolve_width(0, 3, true, &terminal(5)).unwrap();
        assert_eq!(width.columns, 1);
    }
}
