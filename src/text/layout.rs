//! Display lines produced by wrapping the text value.
//!
//! A [`LineLayout`] turns the logical value into an ordered list of
//! [`DisplayLine`]s. Each line carries its rendered chars and a
//! [`BreakKind`] that says how many trailing chars of the rendered form are
//! synthetic. Every line except the last also owns one *implicit separator*
//! position in the value: the hard `'\n'` for a `Normal` line, the breaking
//! whitespace for a `WordWrap` line, and the last chunk char for a
//! `WordBroken` line. With that convention the line starting at display
//! index `i` begins at logical offset `sum(logical_len(j) + 1 for j < i)`.

// Wrapping loops read better with explicit indices
#![allow(clippy::needless_range_loop)]

use unicode_width::UnicodeWidthChar;

/// Trailing char of a broken-word line that stands for the break itself.
pub const WRAP_MARKER: char = '\u{200B}';

/// Hyphen glyph appended to a broken word when hyphenation is on.
pub const BREAK_HYPHEN: char = '-';

/// How a display line ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BreakKind {
    /// Ends at a hard line break or at the end of the value.
    #[default]
    Normal,
    /// Soft-wrapped at whitespace.
    WordWrap,
    /// A word too long for the line was split mid-word.
    WordBroken,
}

/// Number of synthetic trailing chars in a line of the given kind.
#[must_use]
pub const fn synthetic_count(kind: BreakKind, hyphenate: bool) -> usize {
    match kind {
        BreakKind::Normal => 0,
        BreakKind::WordWrap => 1,
        BreakKind::WordBroken => {
            if hyphenate {
                3
            } else {
                2
            }
        }
    }
}

/// One rendered line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub break_kind: BreakKind,
}

impl DisplayLine {
    #[must_use]
    pub fn new(text: impl Into<String>, break_kind: BreakKind) -> Self {
        Self {
            text: text.into(),
            break_kind,
        }
    }

    /// Rendered length in chars, synthetic chars included.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of caret columns on this line that map to the value.
    #[must_use]
    pub fn logical_len(&self, hyphenate: bool) -> usize {
        self.char_len()
            .saturating_sub(synthetic_count(self.break_kind, hyphenate))
    }

    /// Terminal display width of the rendered text.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.text.chars().map(char_width).sum()
    }

    /// Cell at which the char at `column` is drawn.
    #[must_use]
    pub fn cell_of_column(&self, column: usize) -> usize {
        self.text.chars().take(column).map(char_width).sum()
    }

    /// Char column drawn over `cell`.
    ///
    /// A cell covered by a wide char maps to that char. Cells past the end
    /// map to the rendered length.
    #[must_use]
    pub fn column_at_cell(&self, cell: usize) -> usize {
        let mut used = 0;
        for (column, c) in self.text.chars().enumerate() {
            used += char_width(c);
            if used > cell {
                return column;
            }
        }
        self.char_len()
    }
}

/// Line count and widest line of a wrapped block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMeasure {
    pub line_count: usize,
    pub max_width: usize,
}

impl TextMeasure {
    #[must_use]
    pub fn of(lines: &[DisplayLine]) -> Self {
        Self {
            line_count: lines.len(),
            max_width: lines.iter().map(DisplayLine::display_width).max().unwrap_or(0),
        }
    }
}

/// Produces display lines for a value at a given width.
///
/// Implementations must be deterministic: the same `(value, width,
/// hyphenate)` always yields the same lines. A `width` of 0 disables
/// wrapping.
pub trait LineLayout {
    fn wrap(&self, value: &str, width: usize, hyphenate: bool) -> Vec<DisplayLine>;
}

impl<F> LineLayout for F
where
    F: Fn(&str, usize, bool) -> Vec<DisplayLine>,
{
    fn wrap(&self, value: &str, width: usize, hyphenate: bool) -> Vec<DisplayLine> {
        self(value, width, hyphenate)
    }
}

fn char_width(c: char) -> usize {
    if c == WRAP_MARKER {
        0
    } else {
        c.width().unwrap_or(0)
    }
}

/// Greedy word wrap over a monospace cell grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospaceWrap;

impl MonospaceWrap {
    fn wrap_hard_line(
        chars: &[char],
        width: usize,
        hyphenate: bool,
        is_last: bool,
        out: &mut Vec<DisplayLine>,
    ) {
        let mut start = 0usize;
        loop {
            let rest = &chars[start..];
            let rest_width: usize = rest.iter().copied().map(char_width).sum();
            if width == 0 || rest_width <= width {
                if !rest.is_empty() || start == 0 || !is_last {
                    out.push(DisplayLine::new(rest.iter().collect::<String>(), BreakKind::Normal));
                }
                return;
            }

            // Longest prefix that fits, at least one char.
            let mut end = start;
            let mut used = 0usize;
            while end < chars.len() {
                let w = char_width(chars[end]);
                if used + w > width && end > start {
                    break;
                }
                used += w;
                end += 1;
            }

            // Prefer breaking at the last whitespace inside the fitting
            // prefix, or right after it.
            let mut brk = None;
            let upper = end.min(chars.len() - 1);
            for k in (start + 1..=upper).rev() {
                if chars[k].is_whitespace() {
                    brk = Some(k);
                    break;
                }
            }

            if let Some(k) = brk {
                let mut text: String = chars[start..k].iter().collect();
                text.push(chars[k]);
                out.push(DisplayLine::new(text, BreakKind::WordWrap));
                start = k + 1;
            } else {
                let mut chunk_end = end;
                if hyphenate && chunk_end - start > 1 {
                    let chunk_width: usize =
                        chars[start..chunk_end].iter().copied().map(char_width).sum();
                    if chunk_width + 1 > width {
                        chunk_end -= 1;
                    }
                }
                let mut text: String = chars[start..chunk_end].iter().collect();
                if hyphenate {
                    text.push(BREAK_HYPHEN);
                }
                text.push(WRAP_MARKER);
                out.push(DisplayLine::new(text, BreakKind::WordBroken));
                start = chunk_end;
            }

            if start >= chars.len() {
                if !is_last {
                    out.push(DisplayLine::new(String::new(), BreakKind::Normal));
                }
                return;
            }
        }
    }
}

impl LineLayout for MonospaceWrap {
    fn wrap(&self, value: &str, width: usize, hyphenate: bool) -> Vec<DisplayLine> {
        let hard_lines: Vec<&str> = value.split('\n').collect();
        let count = hard_lines.len();
        let mut out = Vec::with_capacity(count);
        for (i, line) in hard_lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            Self::wrap_hard_line(&chars, width, hyphenate, i + 1 == count, &mut out);
        }
        out
    }
}

/// Everything needed to derive display lines for a value.
pub struct LayoutContext<'a> {
    pub layout: &'a dyn LineLayout,
    /// Text area width in cells.
    pub width: usize,
    /// Text area height in rows.
    pub height: usize,
    pub multiline: bool,
    pub hyphenate: bool,
    /// Display every char as this one (password style).
    pub mask: Option<char>,
}

/// Columns reserved for the scrollbar once it becomes visible.
pub const SCROLLBAR_COLUMNS: usize = 1;

impl LayoutContext<'_> {
    /// Rows available for text, never less than one.
    #[must_use]
    pub fn visible_lines(&self) -> usize {
        self.height.max(1)
    }

    /// Display lines for `value`.
    ///
    /// Single-line inputs never wrap. A multi-line input whose lines overflow
    /// the viewport is re-wrapped with room left for the scrollbar.
    #[must_use]
    pub fn lines(&self, value: &str) -> Vec<DisplayLine> {
        let masked;
        let text = match self.mask {
            Some(mask) => {
                masked = std::iter::repeat_n(mask, value.chars().count()).collect::<String>();
                masked.as_str()
            }
            None => value,
        };

        if !self.multiline {
            return self.layout.wrap(text, 0, self.hyphenate);
        }

        let width = self.width.max(1);
        let lines = self.layout.wrap(text, width, self.hyphenate);
        if lines.len() > self.visible_lines() && width > SCROLLBAR_COLUMNS {
            return self
                .layout
                .wrap(text, width - SCROLLBAR_COLUMNS, self.hyphenate);
        }
        lines
    }

    /// Whether lines for this value overflow the viewport.
    #[must_use]
    pub fn overflows(&self, lines: &[DisplayLine]) -> bool {
        self.multiline && lines.len() > self.visible_lines()
    }
}
