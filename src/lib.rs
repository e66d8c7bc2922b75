//! `textinput` - Text input widget core
//!
//! Caret bookkeeping, word-wrap aware caret mapping, validated edits and
//! scroll synchronization for single- and multi-line text inputs. Rendering
//! and focus arbitration stay with the host UI; this crate owns the value.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow text::TextInput etc
#![allow(clippy::struct_excessive_bools)] // Options carry several flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::cast_possible_truncation)] // Blink phase is truncated on purpose
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod error;
pub mod event;
pub mod input;
pub mod text;

pub use error::{Error, Rejection, Result};
pub use event::{
    LogLevel, VALUE_CHANGED, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};

// Re-export input types
pub use input::{KeyCode, KeyEvent, KeyModifiers, KeySource, ScriptedKeys};

// Re-export commonly used types
pub use text::{
    Caret, DisplayLine, Edit, KeyOutcome, LineLayout, MonospaceWrap, MutationPipeline,
    NavigationResolver, ScrollSync, ScrollbarState, TextInput, TextInputOptions, TextValidator,
    TextValue, VisualPosition,
};
