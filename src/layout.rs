//! Width-consistent bordered text blocks.
//!
//! Pure text layout: given a terminal width, computes a clamped box width
//! and renders border and content lines of identical length. Lengths are
//! counted in `char`s, one column per box-drawing glyph.

use std::cmp;

/// Default floor for the box width.
pub const MIN_WIDTH: usize = 30;
/// Default ceiling for the box width.
pub const MAX_WIDTH: usize = 80;

/// Renders bordered lines of a fixed width.
///
/// Every operation on one instance produces a string of exactly
/// `box_width` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    /// Total width of every rendered line.
    pub box_width: usize,
    /// Width available for content between the borders and their padding.
    pub inner_width: usize,
}

impl BoxLayout {
    /// Layout sized to a terminal, clamped to the default 30..=80 range.
    pub fn new(terminal_width: usize) -> Self {
        Self::with_limits(terminal_width, MIN_WIDTH, MAX_WIDTH)
    }

    /// Layout with custom width limits.
    ///
    /// `box_width` is `terminal_width - 4`, capped at `max_width` and then
    /// raised to `min_width`. The floor is applied last, so a `min_width`
    /// above `max_width` wins.
    pub fn with_limits(terminal_width: usize, min_width: usize, max_width: usize) -> Self {
        let box_width = cmp::max(
            min_width,
            cmp::min(max_width, terminal_width.saturating_sub(4)),
        );
        Self {
            box_width,
            inner_width: box_width.saturating_sub(4),
        }
    }

    /// Cut `text` down to the inner width.
    ///
    /// Text that fits is returned unchanged. Longer text is cut and given a
    /// `...` suffix so the result is exactly `inner_width` chars; when the
    /// inner width is too small to hold the suffix, the cut is bare.
    pub fn truncate(&self, text: &str) -> String {
        if text.chars().count() <= self.inner_width {
            return text.to_string();
        }
        if self.inner_width < 3 {
            return text.chars().take(self.inner_width).collect();
        }
        let kept: String = text.chars().take(self.inner_width - 3).collect();
        format!("{kept}...")
    }

    /// A content line: truncated text between padded borders.
    pub fn line(&self, text: &str) -> String {
        let truncated = self.truncate(text);
        let padding = self.inner_width - truncated.chars().count();
        format!("│ {truncated}{} │", " ".repeat(padding))
    }

    /// A content line with no text.
    pub fn blank(&self) -> String {
        self.line("")
    }

    /// The top border.
    pub fn top(&self) -> String {
        format!("┌{}┐", "─".repeat(self.box_width.saturating_sub(2)))
    }

    /// The bottom border.
    pub fn bottom(&self) -> String {
        format!("└{}┘", "─".repeat(self.box_width.saturating_sub(2)))
    }

    /// A horizontal separator between sections.
    pub fn separator(&self) -> String {
        format!("├{}┤", "─".repeat(self.box_width.saturating_sub(2)))
    }
}
