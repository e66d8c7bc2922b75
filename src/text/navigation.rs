//! Key intents resolved into caret moves or edits.

use crate::input::{KeyCode, KeyEvent, KeyModifiers};
use crate::text::caret::{self, VisualPosition};
use crate::text::layout::DisplayLine;
use crate::text::mutation::Edit;
use crate::text::value::Caret;

/// What a key asks the text input to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Move the caret; never validated.
    Move(Caret),
    /// Run an edit through the mutation pipeline.
    Edit(Edit),
    /// The key does nothing here.
    Ignore,
}

/// Snapshot of the state a key is resolved against.
#[derive(Clone, Copy, Debug)]
pub struct NavigationContext<'a> {
    pub caret: Caret,
    pub len: usize,
    pub lines: &'a [DisplayLine],
    pub multiline: bool,
    pub hyphenate: bool,
    /// Held with Home/End to jump to the whole value's start/end.
    pub document_modifier: KeyModifiers,
}

/// Stateless key-to-intent resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationResolver;

impl NavigationResolver {
    #[must_use]
    pub fn resolve(event: KeyEvent, ctx: &NavigationContext<'_>) -> Resolution {
        let len = ctx.len;
        let at = ctx.caret.offset(len);
        let move_to = |offset: usize| Resolution::Move(Caret::normalized(offset, len));

        match event.code {
            KeyCode::Left => move_to(at.saturating_sub(1)),
            KeyCode::Right => move_to((at + 1).min(len)),
            KeyCode::Backspace if at > 0 => Resolution::Edit(Edit::DeleteBackward),
            KeyCode::Delete if at < len => Resolution::Edit(Edit::DeleteForward),
            KeyCode::Backspace | KeyCode::Delete => Resolution::Ignore,
            KeyCode::Home | KeyCode::End => {
                let to_end = event.code == KeyCode::End;
                if !ctx.multiline || event.holds(ctx.document_modifier) {
                    return move_to(if to_end { len } else { 0 });
                }
                let here = Self::position(ctx);
                let offset = if to_end {
                    caret::line_end(here.line, ctx.lines, ctx.hyphenate)
                } else {
                    caret::line_start(here.line, ctx.lines, ctx.hyphenate)
                };
                move_to(offset)
            }
            KeyCode::Up | KeyCode::Down if ctx.multiline => {
                let here = Self::position(ctx);
                let target = match (event.code, here.line) {
                    (KeyCode::Up, 0) => return Resolution::Ignore,
                    (KeyCode::Up, line) => line - 1,
                    (_, line) if line + 1 >= ctx.lines.len() => return Resolution::Ignore,
                    (_, line) => line + 1,
                };
                let offset = caret::position_to_offset(
                    VisualPosition::new(target, here.column),
                    ctx.lines,
                    ctx.hyphenate,
                );
                move_to(offset)
            }
            KeyCode::Up | KeyCode::Down => Resolution::Ignore,
            // Tab types a space, not a tab char.
            KeyCode::Tab => Resolution::Edit(Edit::InsertChar(' ')),
            KeyCode::Enter if ctx.multiline => Resolution::Edit(Edit::InsertLineBreak),
            KeyCode::Enter | KeyCode::Esc => Resolution::Ignore,
            KeyCode::Char(c) => Resolution::Edit(Edit::InsertChar(c)),
        }
    }

    fn position(ctx: &NavigationContext<'_>) -> VisualPosition {
        caret::offset_to_position(ctx.caret, ctx.len, ctx.lines, ctx.hyphenate)
    }
}
