use crate::source_control::LineRange;

/// A selection as editors report it: 0-based line numbers.
///
/// `anchor_line` is where the selection started and `active_line` is where
/// the cursor is, so `anchor_line` may be greater than `active_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor_line: u32,
    pub active_line: u32,
    /// True when nothing is selected (a bare cursor).
    pub is_empty: bool,
}

impl Selection {
    /// A bare cursor on a 0-based line.
    #[must_use]
    pub fn cursor(line: u32) -> Self {
        Self {
            anchor_line: line,
            active_line: line,
            is_empty: true,
        }
    }

    /// A non-empty selection between two 0-based lines.
    #[must_use]
    pub fn lines(anchor_line: u32, active_line: u32) -> Self {
        Self {
            anchor_line,
            active_line,
            is_empty: false,
        }
    }

    /// 1-based line the cursor is on.
    #[must_use]
    pub fn cursor_line(&self) -> u32 {
        self.active_line.saturating_add(1)
    }

    /// 1-based, ordered line range covered by the selection.
    #[must_use]
    pub fn to_line_range(&self) -> LineRange {
        LineRange::new(
            self.anchor_line.saturating_add(1),
            self.active_line.saturating_add(1),
        )
    }
}
