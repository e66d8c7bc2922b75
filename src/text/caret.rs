//! Mapping between logical caret offsets and wrapped visual positions.
//!
//! Both directions are pure functions over the current display lines. Line
//! `i` spans offsets `[start(i), start(i) + logical_len(i)]`, where `start`
//! adds one implicit separator per earlier line (see [`crate::text::layout`]).
//! Those spans tile the value, so every offset in `[0, len]` round-trips
//! through a visual position, with one exception: when the value ends in
//! whitespace consumed by a soft wrap, no line holds the end offset and it
//! maps to column 0 of the last line.

use crate::text::layout::DisplayLine;
use crate::text::value::Caret;

/// A caret location on screen: display line plus column in that line's
/// logical (non-synthetic) span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualPosition {
    pub line: usize,
    pub column: usize,
}

impl VisualPosition {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Visual position of `caret` in a value of `len` chars.
///
/// If the walk runs past the last line without reaching the offset (the value
/// ends in whitespace that a wrap consumed, so no line holds the end), the
/// result is column 0 of the last line.
#[must_use]
pub fn offset_to_position(
    caret: Caret,
    len: usize,
    lines: &[DisplayLine],
    hyphenate: bool,
) -> VisualPosition {
    let offset = caret.offset(len);
    let mut before = 0usize; // logical chars on lines strictly before `line`
    for (line, display) in lines.iter().enumerate() {
        let through = before + display.logical_len(hyphenate);
        if offset <= through + line {
            return VisualPosition::new(line, offset - before - line);
        }
        before = through;
    }
    VisualPosition::new(lines.len().saturating_sub(1), 0)
}

/// Logical offset for a visual position.
///
/// Lines past the end clamp to the last line, and columns past a line's
/// logical length snap to its last caret column.
#[must_use]
pub fn position_to_offset(
    position: VisualPosition,
    lines: &[DisplayLine],
    hyphenate: bool,
) -> usize {
    if lines.is_empty() {
        return 0;
    }
    let target = position.line.min(lines.len() - 1);
    let start: usize = lines[..target]
        .iter()
        .map(|l| l.logical_len(hyphenate) + 1)
        .sum();
    start + position.column.min(lines[target].logical_len(hyphenate))
}

/// Offset of the first caret column on display line `line`.
#[must_use]
pub fn line_start(line: usize, lines: &[DisplayLine], hyphenate: bool) -> usize {
    position_to_offset(VisualPosition::new(line, 0), lines, hyphenate)
}

/// Offset of the last caret column on display line `line`.
#[must_use]
pub fn line_end(line: usize, lines: &[DisplayLine], hyphenate: bool) -> usize {
    position_to_offset(VisualPosition::new(line, usize::MAX), lines, hyphenate)
}
