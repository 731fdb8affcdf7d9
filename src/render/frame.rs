//! Frame assembly: borders, title, value labels and axis ticks.

use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::glyphs::{BoxGlyphs, Ramp};
use crate::style::{Color, StyleDecorator, TextStyle};

use super::quantize::Quantizer;
use super::scale::ResolvedRange;

/// Width of a numeric value label field.
const VALUE_WIDTH: usize = 12;
/// Width of a label header such as `" max: "`.
const HEADER_WIDTH: usize = 6;
/// Columns consumed by the frame decoration: two vertical borders plus
/// one trailing value label.
pub const FRAME_OVERHEAD: usize = 2 + HEADER_WIDTH + VALUE_WIDTH;

/// Blank columns flanking an axis tick label.
const TICK_MARGIN: usize = 2;

/// Composes the final text block for one render.
pub(crate) struct FrameRenderer<'a> {
    rows: usize,
    width: usize,
    framed: bool,
    title: &'a str,
    range: ResolvedRange,
    ramp: Ramp,
    boxes: &'static BoxGlyphs,
    quantizer: Quantizer,
    decorator: StyleDecorator,
    /// Source sample count, labelled along the x axis.
    samples: usize,
}

/// Axis tick positions along the bottom border.
struct AxisTicks {
    /// Display column of each tick.
    columns: Vec<usize>,
    /// Sample index printed under each tick.
    values: Vec<usize>,
    spacing: usize,
}

impl<'a> FrameRenderer<'a> {
    pub fn new<T>(
        config: &'a Config<T>,
        range: ResolvedRange,
        width: usize,
        samples: usize,
    ) -> Self {
        Self {
            rows: config.rows,
            width,
            framed: config.framed,
            title: &config.title,
            range,
            ramp: config.ramp,
            boxes: config.ramp.box_glyphs(),
            quantizer: Quantizer::new(range, config.rows, config.ramp),
            decorator: StyleDecorator::new(config.styled),
            samples,
        }
    }

    /// Assemble the full output block from the aggregated column values.
    pub fn render(&self, columns: &[f64]) -> String {
        let mut out = String::new();
        if self.framed {
            self.top_border(&mut out);
        }
        self.body(&mut out, columns);
        if self.framed {
            self.bottom_border(&mut out);
            self.tick_labels(&mut out);
        }
        out
    }

    fn frame_text(&self, text: &str) -> String {
        self.decorator.apply(text, TextStyle::fg(Color::Green))
    }

    fn data_text(&self, text: &str) -> String {
        self.decorator.apply(text, TextStyle::fg(Color::Blue))
    }

    /// Top rule with the title centered inside it. A title wider than
    /// the plot is emitted on its own line instead of overflowing the
    /// border.
    fn top_border(&self, out: &mut String) {
        let title_width = self.title.width();
        if !self.title.is_empty() && title_width > self.width {
            out.push_str(&self.frame_text(self.title));
            out.push('\n');
            return;
        }

        let mut line = String::from(self.boxes.nw_corner);
        if self.title.is_empty() {
            for _ in 0..self.width {
                line.push_str(self.boxes.horizontal);
            }
        } else {
            let filler = self.width - title_width;
            for _ in 0..filler / 2 {
                line.push_str(self.boxes.horizontal);
            }
            line.push_str(self.title);
            for _ in 0..self.width - filler / 2 - title_width {
                line.push_str(self.boxes.horizontal);
            }
        }
        line.push_str(self.boxes.ne_corner);
        out.push_str(&self.frame_text(&line));
        out.push('\n');
    }

    /// Glyph rows, top line first, with borders and value labels when
    /// framed.
    fn body(&self, out: &mut String, columns: &[f64]) {
        for row in (0..self.rows).rev() {
            if self.framed {
                out.push_str(&self.frame_text(self.boxes.vertical));
            }
            let mut cells = String::new();
            for &value in columns {
                cells.push_str(self.quantizer.cell(value, row));
            }
            out.push_str(&self.data_text(&cells));
            if self.framed {
                out.push_str(&self.frame_text(self.boxes.vertical_tick));
                out.push_str(&self.frame_text(&self.row_label(row)));
            }
            if row > 0 {
                out.push('\n');
            }
        }
    }

    /// Trailing label for one body row: extremes on the outer rows, the
    /// row-center value on interior rows.
    fn row_label(&self, row: usize) -> String {
        let min = format_value(self.range.min);
        let max = format_value(self.range.max);
        if self.rows == 1 {
            return format!(
                " min: {min:<value$}, max: {max:<value$}",
                value = VALUE_WIDTH
            );
        }
        if row == self.rows - 1 {
            format!(" max: {max:<value$}", value = VALUE_WIDTH)
        } else if row == 0 {
            format!(" min: {min:<value$}", value = VALUE_WIDTH)
        } else {
            let glyph_count = self.ramp.levels();
            let center = (row * glyph_count + glyph_count / 2) as f64;
            let value = center * self.range.span() / (self.rows * glyph_count) as f64
                + self.range.min;
            format!("      {:<value$}", format_value(value), value = VALUE_WIDTH)
        }
    }

    fn axis_ticks(&self) -> AxisTicks {
        let spacing = 2 * TICK_MARGIN + digit_width(self.samples);
        let count = self.width / spacing + 1;
        let mut columns: Vec<usize> = (0..count - 1).map(|i| i * spacing).collect();
        let mut values: Vec<usize> = (0..count - 1).map(|i| i * self.samples / count).collect();
        // The final tick always marks the true endpoint, no matter how
        // the spacing divides the width.
        columns.push(self.width - 1);
        values.push(self.samples);
        AxisTicks {
            columns,
            values,
            spacing,
        }
    }

    /// Bottom rule with a tick mark at every labelled column.
    fn bottom_border(&self, out: &mut String) {
        out.push('\n');
        let ticks = self.axis_ticks();
        let mut line = String::from(self.boxes.sw_corner);
        let mut next = 0;
        for column in 0..self.width {
            if ticks.columns.get(next) == Some(&column) {
                line.push_str(self.boxes.horizontal_tick);
                next += 1;
            } else {
                line.push_str(self.boxes.horizontal);
            }
        }
        line.push_str(self.boxes.se_corner);
        out.push_str(&self.frame_text(&line));
    }

    /// Tick labels, visually centered under their marks: the right half
    /// of each label and the left half of its predecessor overhang into
    /// the gap between ticks, and the remaining space is padded.
    fn tick_labels(&self, out: &mut String) {
        out.push('\n');
        let ticks = self.axis_ticks();
        let mut line = String::from(" ");
        line.push_str(&ticks.values[0].to_string());

        let last = ticks.values.len() - 1;
        if last == 0 {
            out.push_str(&self.frame_text(&line));
            return;
        }

        // Printed column, tracked so the endpoint label can be pushed
        // under the final tick.
        let mut column = 1;
        for i in 1..last {
            let current = digit_width(ticks.values[i]);
            let previous = digit_width(ticks.values[i - 1]);
            column += current;
            let right = current - current / 2;
            let left = previous / 2;
            let fill = ticks.spacing.saturating_sub(right + left).max(1);
            for _ in 0..fill {
                line.push(' ');
            }
            line.push_str(&ticks.values[i].to_string());
            column += fill;
        }

        let endpoint = digit_width(ticks.values[last]);
        let fill = (ticks.columns[last] + 2)
            .saturating_sub(column + endpoint)
            .max(1);
        for _ in 0..fill {
            line.push(' ');
        }
        line.push_str(&ticks.values[last].to_string());
        out.push_str(&self.frame_text(&line));
    }
}

/// Format a value label: at most six fractional digits, trailing zeros
/// trimmed, so labels stay inside their fixed-width field.
fn format_value(value: f64) -> String {
    let text = format!("{value:.6}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Characters needed to print `n` along the axis, per the base-10
/// description length ⌈log10(n + 1)⌉ (0 measures zero wide, which keeps
/// the origin label flush with the left edge).
fn digit_width(n: usize) -> usize {
    ((n + 1) as f64).log10().ceil() as usize
}
