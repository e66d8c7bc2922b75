//! Text value, layout and editing for the text input widget.
//!
//! The pieces are small and composable:
//!
//! - [`TextValue`] and [`Caret`]: the owned value and the insertion point
//! - [`LineLayout`] / [`MonospaceWrap`]: value to [`DisplayLine`]s
//! - [`caret`]: offset to visual position mapping and back
//! - [`ScrollSync`]: scroll offset tied to the caret and a scrollbar
//! - [`MutationPipeline`]: validated, all-or-nothing edits
//! - [`NavigationResolver`]: key events to caret moves or edits
//! - [`TextInput`]: the widget that owns all of the above
//!
//! # Examples
//!
//! ```
//! use textinput::{KeyCode, KeyEvent, TextInput, TextInputOptions};
//!
//! let mut input = TextInput::new(TextInputOptions::single_line().with_character_limit(5))
//!     .with_viewport(40, 1);
//! input.set_focused(true);
//! for c in "hello!".chars() {
//!     input.handle_key(KeyEvent::char(c));
//! }
//! assert_eq!(input.text(), "hello");
//!
//! input.handle_key(KeyEvent::key(KeyCode::Home));
//! input.handle_key(KeyEvent::key(KeyCode::Delete));
//! assert_eq!(input.text(), "ello");
//! ```

mod blink;
pub mod caret;
mod input;
mod layout;
mod mutation;
mod navigation;
mod scroll;
mod validate;
mod value;

pub use blink::CaretBlink;
pub use caret::{VisualPosition, line_end, line_start, offset_to_position, position_to_offset};
pub use input::{KeyOutcome, TextInput, TextInputOptions, Viewport};
pub use layout::{
    BREAK_HYPHEN, BreakKind, DisplayLine, LayoutContext, LineLayout, MonospaceWrap,
    SCROLLBAR_COLUMNS, TextMeasure, WRAP_MARKER, synthetic_count,
};
pub use mutation::{Committed, Edit, InputRules, MutationPipeline};
pub use navigation::{NavigationContext, NavigationResolver, Resolution};
pub use scroll::{ScrollSync, ScrollbarState};
pub use validate::{AlphaNumeric, Lowercase, NfcNormalize, NumbersOnly, TextValidator};
pub use value::{Caret, TextValue};
