//! Keys the text input understands.

use bitflags::bitflags;

bitflags! {
    /// Modifiers held with a key.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 1;
        /// Alt/Option key.
        const ALT = 1 << 1;
        /// Control key.
        const CTRL = 1 << 2;
        /// Command/Windows key.
        const SUPER = 1 << 3;
    }
}

/// Key identity after locale mapping.
///
/// Printable input, space included, arrives as `Char`. Every other variant
/// is a control key; keys the widget has no use for are dropped by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Printable character.
    Char(char),
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
}

/// One tick's key with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key pressed without modifiers.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Printable input.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    #[must_use]
    pub const fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// All of `modifiers` are held. An empty set never counts as held.
    #[must_use]
    pub fn holds(&self, modifiers: KeyModifiers) -> bool {
        !modifiers.is_empty() && self.modifiers.contains(modifiers)
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.holds(KeyModifiers::SHIFT)
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.holds(KeyModifiers::CTRL)
    }

    #[must_use]
    pub fn alt(&self) -> bool {
        self.holds(KeyModifiers::ALT)
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyEvent {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}
