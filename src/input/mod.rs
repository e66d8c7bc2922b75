//! Keyboard input consumed by the text input.
//!
//! Device polling and locale key tables live outside this crate. A host
//! implements [`KeySource`] and hands the widget at most one [`KeyEvent`]
//! per tick; a printable character arrives as [`KeyCode::Char`], so printable
//! and control input can never both be pending in the same tick.

mod keyboard;
mod source;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use source::{KeySource, ScriptedKeys};
