//! ANSI SGR text styling.
//!
//! Rendered fragments that deserve color pass through a [`StyleDecorator`],
//! which wraps them in Select Graphic Rendition escape sequences. When
//! styling is disabled the decorator degrades to a passthrough, so one
//! render path serves both terminals and pipes.

use itertools::Itertools;

/// Foreground colors understood by the decorator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Blue,
}

impl Color {
    /// SGR foreground parameter. Terminal emulators are free to redefine
    /// the palette, so "red" is whatever the emulator says it is.
    fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}

/// A set of SGR attributes applied to one text fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub inverse: bool,
}

impl TextStyle {
    /// A plain style with only a foreground color.
    pub fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Active SGR parameters, colors before font faces.
    fn codes(&self) -> Vec<u8> {
        let mut codes = Vec::with_capacity(4);
        if let Some(color) = self.color {
            codes.push(color.code());
        }
        if self.bold {
            codes.push(1);
        }
        if self.underline {
            codes.push(4);
        }
        if self.inverse {
            codes.push(7);
        }
        codes
    }
}

/// Pure string transform wrapping fragments in SGR escapes.
#[derive(Debug, Clone, Copy)]
pub struct StyleDecorator {
    enabled: bool,
}

impl StyleDecorator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Wrap `text` in the escape codes for `style`, followed by a reset.
    /// Returns the text unchanged when styling is disabled or the style
    /// is empty.
    pub fn apply(&self, text: &str, style: TextStyle) -> String {
        if !self.enabled || style.is_plain() {
            return text.to_string();
        }
        format!("\x1b[{}m{}\x1b[m", style.codes().iter().join(";"), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_decorator_is_a_passthrough() {
        let decorator = StyleDecorator::new(false);
        let style = TextStyle::fg(Color::Red).bold().inverse();
        assert_eq!(decorator.apply("plain", style), "plain");
    }

    #[test]
    fn empty_style_is_a_passthrough() {
        let decorator = StyleDecorator::new(true);
        assert_eq!(decorator.apply("plain", TextStyle::default()), "plain");
    }

    #[test]
    fn single_color_wraps_and_resets() {
        let decorator = StyleDecorator::new(true);
        assert_eq!(
            decorator.apply("data", TextStyle::fg(Color::Blue)),
            "\x1b[34mdata\x1b[m"
        );
    }

    #[test]
    fn combined_styles_join_codes_with_semicolons() {
        let decorator = StyleDecorator::new(true);
        let style = TextStyle::fg(Color::Green).bold().underline().inverse();
        assert_eq!(
            decorator.apply("x", style),
            "\x1b[32;1;4;7mx\x1b[m"
        );
    }
}
