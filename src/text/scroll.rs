//! Scroll offset bookkeeping for multi-line inputs.

/// Mirror of the external scrollbar widget.
///
/// The text input writes every field each tick. Only `value` is read back,
/// after the host lets the user drag the scrollbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollbarState {
    pub value: usize,
    pub max: usize,
    pub step_count: usize,
    pub visible: bool,
}

/// First visible display line, kept within `[0, max(total - visible, 0)]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSync {
    offset: usize,
}

impl ScrollSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current first visible line.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Largest valid offset for a block of `total_lines`.
    #[must_use]
    pub fn max_offset(total_lines: usize, visible_lines: usize) -> usize {
        total_lines.saturating_sub(visible_lines.max(1))
    }

    /// Clamp the offset to the current block and return it.
    pub fn recompute(&mut self, total_lines: usize, visible_lines: usize) -> usize {
        self.offset = self.offset.min(Self::max_offset(total_lines, visible_lines));
        self.offset
    }

    /// Move to `offset`, clamped to the block.
    pub fn scroll_to(&mut self, offset: usize, total_lines: usize, visible_lines: usize) -> usize {
        self.offset = offset;
        self.recompute(total_lines, visible_lines)
    }

    /// Scroll the minimum amount that brings `caret_line` into view.
    pub fn ensure_caret_visible(
        &mut self,
        caret_line: usize,
        total_lines: usize,
        visible_lines: usize,
    ) -> usize {
        let visible_lines = visible_lines.max(1);
        if caret_line < self.offset {
            self.offset = caret_line;
        } else if caret_line - self.offset >= visible_lines {
            self.offset = caret_line + 1 - visible_lines;
        }
        self.recompute(total_lines, visible_lines)
    }

    /// Jump to the tail of the block.
    pub fn scroll_to_end(&mut self, total_lines: usize, visible_lines: usize) -> usize {
        self.offset = Self::max_offset(total_lines, visible_lines);
        self.offset
    }

    /// Scrollbar fields for the current block.
    #[must_use]
    pub fn scrollbar(&self, total_lines: usize, visible_lines: usize) -> ScrollbarState {
        let max = Self::max_offset(total_lines, visible_lines);
        ScrollbarState {
            value: self.offset,
            max,
            step_count: max,
            visible: max > 0,
        }
    }
}
