//! Column quantization.

use crate::glyphs::Ramp;

use super::scale::ResolvedRange;

/// Maps aggregated column values onto discrete glyph levels.
///
/// With R rows and a ramp of G glyphs the plot resolves R·G distinct
/// levels; display row r (0 = bottom) owns the interval
/// `[r·G, r·G + G − 1]`. A cell below its row's interval stays blank, a
/// cell above it renders the full block, and a cell inside it renders
/// the partial glyph for the remainder.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    range: ResolvedRange,
    rows: usize,
    ramp: Ramp,
}

impl Quantizer {
    pub fn new(range: ResolvedRange, rows: usize, ramp: Ramp) -> Self {
        Self { range, rows, ramp }
    }

    /// Total number of distinct levels.
    pub fn levels(&self) -> usize {
        self.rows * self.ramp.levels()
    }

    /// Quantized level of `value`, clamped into `[0, levels() − 1]`.
    pub fn level(&self, value: f64) -> usize {
        let top = self.levels() - 1;
        let level = (self.range.fraction(value) * top as f64).floor() as usize;
        level.min(top)
    }

    /// Glyph (or blank) rendered for `value` in display row `row`.
    pub fn cell(&self, value: f64, row: usize) -> &'static str {
        let glyph_count = self.ramp.levels();
        let region_min = row * glyph_count;
        let region_max = region_min + glyph_count - 1;
        let level = self.level(value);
        if level < region_min {
            " "
        } else if level > region_max {
            self.ramp.glyph(glyph_count - 1)
        } else {
            self.ramp.glyph(level - region_min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn quantizer(rows: usize) -> Quantizer {
        Quantizer::new(ResolvedRange { min: 0.0, max: 1.0 }, rows, Ramp::Unicode)
    }

    #[test]
    fn values_outside_the_range_clamp_to_the_extremes() {
        let q = quantizer(1);
        assert_eq!(q.level(-10.0), 0);
        assert_eq!(q.level(10.0), 7);
    }

    #[test]
    fn a_degenerate_range_maps_everything_to_the_bottom() {
        let q = Quantizer::new(ResolvedRange { min: 2.0, max: 2.0 }, 3, Ramp::Unicode);
        assert_eq!(q.level(-1.0), 0);
        assert_eq!(q.level(2.0), 0);
        assert_eq!(q.level(1e9), 0);
        assert_eq!(q.cell(1e9, 0), "▁");
        assert_eq!(q.cell(1e9, 1), " ");
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.5, 11)] // floor(0.5 * 23)
    #[case(1.0, 23)]
    fn levels_follow_the_fraction(#[case] value: f64, #[case] level: usize) {
        assert_eq!(quantizer(3).level(value), level);
    }

    #[test]
    fn rows_partition_the_level_space() {
        let q = quantizer(2);
        // Level 3 lives in the bottom row's [0, 7] interval.
        assert_eq!(q.level(0.25), 3);
        assert_eq!(q.cell(0.25, 0), "▄");
        assert_eq!(q.cell(0.25, 1), " ");
        // Level 11 saturates the bottom row and fills part of the top.
        assert_eq!(q.level(0.75), 11);
        assert_eq!(q.cell(0.75, 0), "█");
        assert_eq!(q.cell(0.75, 1), "▄");
    }

    #[test]
    fn more_rows_never_lose_level_resolution() {
        let values: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let mut distinct_previous = 0;
        for rows in 1..=6 {
            let q = quantizer(rows);
            let mut levels: Vec<usize> = values.iter().map(|&v| q.level(v)).collect();
            levels.dedup();
            assert!(
                levels.len() >= distinct_previous,
                "resolution dropped at {rows} rows"
            );
            distinct_previous = levels.len();
        }
    }

    #[test]
    fn ascii_ramp_uses_three_levels_per_row() {
        let q = Quantizer::new(ResolvedRange { min: 0.0, max: 1.0 }, 2, Ramp::Ascii);
        assert_eq!(q.levels(), 6);
        assert_eq!(q.cell(0.0, 0), ".");
        assert_eq!(q.cell(1.0, 0), "O");
        assert_eq!(q.cell(1.0, 1), "O");
    }
}
