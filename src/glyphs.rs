//! Glyph sets used to draw plots.
//!
//! The ramp maps quantized levels onto partially-filled block characters;
//! the box set supplies the frame outline. Both come in a unicode and a
//! plain-ASCII variant, selected at runtime through [`Ramp`].

/// Eighth-block characters (U+2581..U+2588), lowest fill first.
const UNICODE_RAMP: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Three-level fallback for terminals without block-element support.
const ASCII_RAMP: [&str; 3] = [".", "o", "O"];

/// Vertical fill strategy for plot cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ramp {
    /// Unicode eighth blocks, eight fill levels per row.
    #[default]
    Unicode,
    /// Plain ASCII, three fill levels per row.
    Ascii,
}

impl Ramp {
    /// Number of fill levels one plot row can express.
    pub fn levels(&self) -> usize {
        match self {
            Ramp::Unicode => UNICODE_RAMP.len(),
            Ramp::Ascii => ASCII_RAMP.len(),
        }
    }

    /// Glyph for a fill level in `[0, levels())`; saturates at the full block.
    pub fn glyph(&self, index: usize) -> &'static str {
        match self {
            Ramp::Unicode => UNICODE_RAMP[index.min(UNICODE_RAMP.len() - 1)],
            Ramp::Ascii => ASCII_RAMP[index.min(ASCII_RAMP.len() - 1)],
        }
    }

    /// Box outline set drawn from the same character repertoire.
    pub fn box_glyphs(&self) -> &'static BoxGlyphs {
        match self {
            Ramp::Unicode => &UNICODE_BOX,
            Ramp::Ascii => &ASCII_BOX,
        }
    }
}

/// Frame outline characters.
#[derive(Debug, Clone, Copy)]
pub struct BoxGlyphs {
    pub nw_corner: &'static str,
    pub ne_corner: &'static str,
    pub sw_corner: &'static str,
    pub se_corner: &'static str,
    pub horizontal: &'static str,
    /// Horizontal rule glyph carrying an x-axis tick mark.
    pub horizontal_tick: &'static str,
    pub vertical: &'static str,
    /// Vertical border glyph pointing at a value label.
    pub vertical_tick: &'static str,
}

/// ╭────╮
/// │test├
/// ╰┬──┬╯
const UNICODE_BOX: BoxGlyphs = BoxGlyphs {
    nw_corner: "╭",
    ne_corner: "╮",
    sw_corner: "╰",
    se_corner: "╯",
    horizontal: "─",
    horizontal_tick: "┬",
    vertical: "│",
    vertical_tick: "├",
};

/// +----+
/// |test|
/// +,--,+
const ASCII_BOX: BoxGlyphs = BoxGlyphs {
    nw_corner: "+",
    ne_corner: "+",
    sw_corner: "+",
    se_corner: "+",
    horizontal: "-",
    horizontal_tick: ",",
    vertical: "|",
    vertical_tick: "|",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ramp_levels_match_repertoire() {
        assert_eq!(Ramp::Unicode.levels(), 8);
        assert_eq!(Ramp::Ascii.levels(), 3);
    }

    #[test]
    fn glyph_saturates_at_full_block() {
        assert_eq!(Ramp::Unicode.glyph(0), "▁");
        assert_eq!(Ramp::Unicode.glyph(7), "█");
        assert_eq!(Ramp::Unicode.glyph(99), "█");
        assert_eq!(Ramp::Ascii.glyph(99), "O");
    }
}
