//! The owned text value and the caret that points into it.

use ropey::Rope;
use std::fmt;

/// Insertion point inside a [`TextValue`].
///
/// Offsets are counted in chars. `End` always means "after the last char",
/// including for an empty value, so callers never see a stale `At(len)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Caret {
    /// Before the char at this offset.
    At(usize),
    /// After the last char.
    #[default]
    End,
}

impl Caret {
    /// Build a caret for `offset`, folding anything at or past `len` into `End`.
    #[must_use]
    pub fn normalized(offset: usize, len: usize) -> Self {
        if offset >= len { Self::End } else { Self::At(offset) }
    }

    /// Resolve to a concrete offset in a value of `len` chars.
    #[must_use]
    pub fn offset(self, len: usize) -> usize {
        match self {
            Self::At(n) => n.min(len),
            Self::End => len,
        }
    }

    /// Re-normalize against a (possibly changed) length.
    #[must_use]
    pub fn normalize(self, len: usize) -> Self {
        match self {
            Self::At(n) => Self::normalized(n, len),
            Self::End => Self::End,
        }
    }

    #[must_use]
    pub fn is_end(self) -> bool {
        self == Self::End
    }
}

/// Text value of a text input.
///
/// Backed by a rope so single-char inserts and removals at a char offset stay
/// cheap, and cloning a candidate for validation shares structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextValue {
    rope: Rope,
}

impl TextValue {
    /// Create an empty value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Insert a char before `offset` (clamped to the end).
    pub fn insert_char(&mut self, offset: usize, c: char) {
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert_char(offset, c);
    }

    /// Remove the char at `offset`. Returns `false` when out of range.
    pub fn remove_char(&mut self, offset: usize) -> bool {
        if offset >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(offset..=offset);
        true
    }

    /// Whether the value holds a line break.
    #[must_use]
    pub fn contains_line_break(&self) -> bool {
        self.rope.chars().any(|c| c == '\n')
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl From<String> for TextValue {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for TextValue {
    fn eq(&self, other: &str) -> bool {
        self.rope == other
    }
}

impl PartialEq<&str> for TextValue {
    fn eq(&self, other: &&str) -> bool {
        self.rope == *other
    }
}
