//! Terminal width discovery.

/// Width assumed when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: usize = 80;

/// Source of the current display width in columns.
///
/// Injected into the renderer so the core stays testable without a real
/// terminal attached.
#[cfg_attr(test, mockall::automock)]
pub trait TerminalWidthProvider {
    /// Current display width in columns.
    fn width(&self) -> usize;
}

/// Queries the attached terminal, falling back to [`FALLBACK_WIDTH`]
/// when stdout is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermWidth;

impl TerminalWidthProvider for TermWidth {
    fn width(&self) -> usize {
        crossterm::terminal::size()
            .map(|(columns, _rows)| columns as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }
}

/// A constant width, for tests and non-terminal output.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub usize);

impl TerminalWidthProvider for FixedWidth {
    fn width(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_reports_its_constant() {
        assert_eq!(FixedWidth(120).width(), 120);
    }
}
