//! The text input widget: owns the value, caret and scroll state and drives
//! every edit through the navigation resolver and mutation pipeline.

use std::time::Duration;

use crate::error::{Error, Rejection, Result};
use crate::event::{LogLevel, VALUE_CHANGED, emit_event, emit_log};
use crate::input::{KeyEvent, KeyModifiers, KeySource};
use crate::text::blink::CaretBlink;
use crate::text::caret::{self, VisualPosition};
use crate::text::layout::{DisplayLine, LayoutContext, LineLayout, MonospaceWrap};
use crate::text::mutation::{Edit, InputRules, MutationPipeline};
use crate::text::navigation::{NavigationContext, NavigationResolver, Resolution};
use crate::text::scroll::{ScrollSync, ScrollbarState};
use crate::text::validate::TextValidator;
use crate::text::value::{Caret, TextValue};

/// Text input configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct TextInputOptions {
    /// Accept line breaks and wrap words.
    pub multiline: bool,
    /// Maximum chars the user may type; 0 means unlimited. Programmatic
    /// assignment ignores it.
    pub character_limit: usize,
    /// Reject edits whose wrapped text no longer fits the viewport. `None`
    /// means on for single-line and off for multi-line inputs.
    pub limit_by_size: Option<bool>,
    /// Broken words end with a hyphen glyph.
    pub hyphenate_broken_words: bool,
    /// Blink phases per second.
    pub caret_blink_speed: f32,
    /// Blink phases the caret stays solid after it moves.
    pub caret_blink_after_move_delay: f32,
    /// Display every char as this one.
    pub mask_char: Option<char>,
    /// Shown while unfocused and empty.
    pub placeholder: String,
    /// Assigned when focus leaves an empty input.
    pub value_when_empty: Option<String>,
    /// Modifier that makes Home/End jump to the start/end of the whole value.
    pub document_modifier: KeyModifiers,
}

impl Default for TextInputOptions {
    fn default() -> Self {
        Self {
            multiline: false,
            character_limit: 0,
            limit_by_size: None,
            hyphenate_broken_words: true,
            caret_blink_speed: 2.0,
            caret_blink_after_move_delay: 2.0,
            mask_char: None,
            placeholder: String::new(),
            value_when_empty: None,
            document_modifier: KeyModifiers::CTRL,
        }
    }
}

impl TextInputOptions {
    #[must_use]
    pub fn single_line() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_character_limit(mut self, limit: usize) -> Self {
        self.character_limit = limit;
        self
    }

    #[must_use]
    pub fn with_limit_by_size(mut self, enabled: bool) -> Self {
        self.limit_by_size = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_hyphenation(mut self, enabled: bool) -> Self {
        self.hyphenate_broken_words = enabled;
        self
    }

    #[must_use]
    pub fn with_caret_blink(mut self, speed: f32, after_move_delay: f32) -> Self {
        self.caret_blink_speed = speed;
        self.caret_blink_after_move_delay = after_move_delay;
        self
    }

    #[must_use]
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask_char = Some(mask);
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_value_when_empty(mut self, value: impl Into<String>) -> Self {
        self.value_when_empty = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_document_modifier(mut self, modifier: KeyModifiers) -> Self {
        self.document_modifier = modifier;
        self
    }

    /// Size limiting after applying the single/multi-line default.
    #[must_use]
    pub fn effective_limit_by_size(&self) -> bool {
        self.limit_by_size.unwrap_or(!self.multiline)
    }

    /// Check that numeric options are usable.
    pub fn validate(&self) -> Result<()> {
        let check = |name: &'static str, v: f32| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidOption {
                    name,
                    reason: format!("must be finite and non-negative, got {v}"),
                })
            }
        };
        check("caret_blink_speed", self.caret_blink_speed)?;
        check(
            "caret_blink_after_move_delay",
            self.caret_blink_after_move_delay,
        )
    }

    fn rules(&self) -> InputRules {
        InputRules {
            character_limit: self.character_limit,
            multiline: self.multiline,
            limit_by_size: self.effective_limit_by_size(),
        }
    }
}

/// Text area size in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// What handling a key did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key has no meaning here.
    Ignored,
    /// The caret moved (or stayed put on a caret-only key).
    Moved,
    /// The value changed.
    Edited,
    /// An edit was accepted but left the value as it was.
    Unchanged,
    /// The edit was refused; value and caret are untouched.
    Rejected(Rejection),
}

type ChangeCallback = Box<dyn FnMut(&str)>;

/// A single-caret text input.
pub struct TextInput {
    value: TextValue,
    caret: Caret,
    options: TextInputOptions,
    pipeline: MutationPipeline,
    layout: Box<dyn LineLayout>,
    viewport: Viewport,
    scroll: ScrollSync,
    scrollbar: Option<ScrollbarState>,
    blink: CaretBlink,
    focused: bool,
    on_change: Option<ChangeCallback>,
}

impl TextInput {
    /// Create an empty input with the built-in monospace wrapper.
    #[must_use]
    pub fn new(options: TextInputOptions) -> Self {
        let placeholder = if options.multiline {
            options.placeholder.clone()
        } else {
            options.placeholder.replace('\n', "")
        };
        let options = TextInputOptions {
            placeholder,
            ..options
        };
        Self {
            value: TextValue::new(),
            caret: Caret::End,
            pipeline: MutationPipeline::new(options.rules()),
            layout: Box::new(MonospaceWrap),
            viewport: Viewport::new(20, if options.multiline { 4 } else { 1 }),
            scroll: ScrollSync::new(),
            scrollbar: options.multiline.then(ScrollbarState::default),
            blink: CaretBlink::new(
                options.caret_blink_speed,
                options.caret_blink_after_move_delay,
            ),
            focused: false,
            on_change: None,
            options,
        }
    }

    /// Like [`TextInput::new`], rejecting unusable options.
    pub fn try_new(options: TextInputOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::new(options))
    }

    /// Replace the line layout provider.
    #[must_use]
    pub fn with_layout(mut self, layout: impl LineLayout + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, width: usize, height: usize) -> Self {
        self.set_viewport(width, height);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    #[must_use]
    pub fn options(&self) -> &TextInputOptions {
        &self.options
    }

    #[must_use]
    pub fn value(&self) -> &TextValue {
        &self.value
    }

    /// The value as a `String`.
    #[must_use]
    pub fn text(&self) -> String {
        self.value.to_string()
    }

    #[must_use]
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Place the caret; offsets past the end become [`Caret::End`].
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = caret.normalize(self.value.len_chars());
    }

    /// Move the caret to the end, optionally scrolling to it.
    pub fn reset_caret(&mut self, scroll_to_caret: bool) {
        self.caret = Caret::End;
        if scroll_to_caret {
            self.scroll_to_caret();
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport = Viewport::new(width, height);
        self.sync_scroll();
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Change focus. Losing focus while empty assigns `value_when_empty`.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        if !focused && self.value.is_empty() {
            if let Some(default) = self.options.value_when_empty.clone() {
                self.set_value(&default);
            }
        }
    }

    /// The caret should be drawn this tick.
    #[must_use]
    pub fn is_caret_visible(&self) -> bool {
        self.focused && self.blink.is_on()
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    /// Render the placeholder instead of the value.
    #[must_use]
    pub fn showing_placeholder(&self) -> bool {
        !self.focused && self.value.is_empty()
    }

    /// Switch between single- and multi-line mode. Going single-line strips
    /// line breaks from the value.
    pub fn set_multiline(&mut self, multiline: bool) {
        if self.options.multiline == multiline {
            return;
        }
        self.options.multiline = multiline;
        self.pipeline.set_rules(self.options.rules());
        self.scrollbar = multiline.then(ScrollbarState::default);
        self.scroll = ScrollSync::new();
        if !multiline {
            self.options.placeholder = self.options.placeholder.replace('\n', "");
            if self.value.contains_line_break() {
                let text = self.text();
                self.set_value(&text);
            }
        }
        self.sync_scroll();
    }

    pub fn set_character_limit(&mut self, limit: usize) {
        self.options.character_limit = limit;
        self.pipeline.set_rules(self.options.rules());
    }

    pub fn set_limit_by_size(&mut self, enabled: bool) {
        self.options.limit_by_size = Some(enabled);
        self.pipeline.set_rules(self.options.rules());
    }

    /// Register a validator; validators run in registration order.
    pub fn add_validator(&mut self, validator: impl TextValidator + 'static) {
        self.pipeline.add_validator(validator);
    }

    /// Observe committed value changes.
    pub fn on_value_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Assign the value directly, bypassing validation and the character
    /// limit. Single-line inputs drop line breaks.
    pub fn set_value(&mut self, text: &str) {
        let value = if self.options.multiline {
            TextValue::from(text)
        } else {
            TextValue::from(text.replace('\n', ""))
        };
        let changed = value != self.value;
        self.value = value;
        self.caret = self.caret.normalize(self.value.len_chars());
        emit_log(
            LogLevel::Debug,
            &format!("value assigned ({} chars)", self.value.len_chars()),
        );
        if changed {
            self.notify_change();
        }
        self.sync_scroll();
    }

    /// Run `edit` at the caret through the pipeline.
    ///
    /// Returns whether the value changed.
    pub fn apply_edit(&mut self, edit: Edit) -> Result<bool> {
        self.caret = self.caret.normalize(self.value.len_chars());
        let committed = {
            let ctx = self.layout_context();
            self.pipeline.apply(&self.value, self.caret, edit, &ctx)
        };
        match committed {
            Ok(committed) => {
                self.value = committed.value;
                self.caret = committed.caret;
                self.blink.pause();
                if committed.changed {
                    self.notify_change();
                }
                self.scroll_to_caret();
                Ok(committed.changed)
            }
            Err(rejection) => {
                emit_log(
                    LogLevel::Debug,
                    &format!("edit {edit:?} rejected: {rejection}"),
                );
                Err(Error::Rejected(rejection))
            }
        }
    }

    /// Handle one key.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        let len = self.value.len_chars();
        self.caret = self.caret.normalize(len);
        let resolution = {
            let lines = self.display_lines();
            let ctx = NavigationContext {
                caret: self.caret,
                len,
                lines: &lines,
                multiline: self.options.multiline,
                hyphenate: self.options.hyphenate_broken_words,
                document_modifier: self.options.document_modifier,
            };
            NavigationResolver::resolve(event, &ctx)
        };

        match resolution {
            Resolution::Ignore => KeyOutcome::Ignored,
            Resolution::Move(caret) => {
                if caret != self.caret {
                    self.caret = caret;
                    self.blink.pause();
                }
                self.scroll_to_caret();
                KeyOutcome::Moved
            }
            Resolution::Edit(edit) => match self.apply_edit(edit) {
                Ok(true) => KeyOutcome::Edited,
                Ok(false) => KeyOutcome::Unchanged,
                Err(Error::Rejected(rejection)) => KeyOutcome::Rejected(rejection),
                Err(_) => KeyOutcome::Ignored,
            },
        }
    }

    /// Advance one tick: blink, scrollbar read-back, then at most one key
    /// from `keys` when focused.
    pub fn update<S>(&mut self, elapsed: Duration, keys: &mut S) -> Option<KeyOutcome>
    where
        S: KeySource + ?Sized,
    {
        self.blink.advance(elapsed);
        self.read_back_scrollbar();
        let outcome = if self.focused {
            keys.poll().map(|event| self.handle_key(event))
        } else {
            None
        };
        self.sync_scroll();
        outcome
    }

    /// Place the caret from a click at `(column, row)` cells inside the text
    /// area.
    pub fn click(&mut self, column: usize, row: usize) {
        let len = self.value.len_chars();
        self.caret = if len == 0 {
            Caret::End
        } else if !self.options.multiline {
            let lines = self.display_lines();
            let offset = lines.first().map_or(column, |line| line.column_at_cell(column));
            Caret::normalized(offset, len)
        } else {
            let lines = self.display_lines();
            let line = (row + self.scroll.offset()).min(lines.len().saturating_sub(1));
            let column = lines.get(line).map_or(column, |l| l.column_at_cell(column));
            let position = VisualPosition::new(line, column);
            let offset = caret::position_to_offset(
                position,
                &lines,
                self.options.hyphenate_broken_words,
            );
            Caret::normalized(offset, len)
        };
        self.blink.pause();
    }

    /// Display lines for the current value and viewport.
    #[must_use]
    pub fn display_lines(&self) -> Vec<DisplayLine> {
        self.layout_context().lines(&self.text())
    }

    /// Display lines inside the scroll window.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<DisplayLine> {
        let lines = self.display_lines();
        if !self.options.multiline {
            return lines;
        }
        let visible = self.layout_context().visible_lines();
        let from = self.scroll.offset().min(lines.len());
        let to = (from + visible).min(lines.len());
        lines[from..to].to_vec()
    }

    /// Visual position of the caret in the full display line list.
    #[must_use]
    pub fn caret_position(&self) -> VisualPosition {
        let lines = self.display_lines();
        caret::offset_to_position(
            self.caret,
            self.value.len_chars(),
            &lines,
            self.options.hyphenate_broken_words,
        )
    }

    /// Caret cell `(column, row)` relative to the text area, or `None` when
    /// it should not be drawn this tick.
    #[must_use]
    pub fn caret_cell(&self) -> Option<(usize, usize)> {
        if !self.is_caret_visible() {
            return None;
        }
        let lines = self.display_lines();
        let position = caret::offset_to_position(
            self.caret,
            self.value.len_chars(),
            &lines,
            self.options.hyphenate_broken_words,
        );
        let row = if self.options.multiline {
            let first = self.scroll.offset();
            let visible = self.layout_context().visible_lines();
            if position.line < first || position.line >= first + visible {
                return None;
            }
            position.line - first
        } else {
            0
        };
        let column = lines
            .get(position.line)
            .map_or(0, |line| line.cell_of_column(position.column));
        Some((column, row))
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Scroll to `offset`, clamped to the content.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        if !self.options.multiline {
            return;
        }
        let total = self.display_lines().len();
        let visible = self.layout_context().visible_lines();
        self.scroll.scroll_to(offset, total, visible);
        self.write_scrollbar(total, visible);
    }

    /// Scrollbar mirror; `None` for single-line inputs.
    #[must_use]
    pub fn scrollbar(&self) -> Option<ScrollbarState> {
        self.scrollbar
    }

    /// Mutable scrollbar mirror for hosts that let the user drag it. The
    /// dragged `value` is picked up on the next [`TextInput::update`].
    pub fn scrollbar_mut(&mut self) -> Option<&mut ScrollbarState> {
        self.scrollbar.as_mut()
    }

    /// Scroll so the caret line is visible. At the end of the value the view
    /// jumps straight to the tail.
    pub fn scroll_to_caret(&mut self) {
        if !self.options.multiline {
            return;
        }
        let len = self.value.len_chars();
        self.caret = self.caret.normalize(len);
        let lines = self.display_lines();
        let visible = self.layout_context().visible_lines();
        if self.caret.is_end() {
            self.scroll.scroll_to_end(lines.len(), visible);
        } else {
            let position = caret::offset_to_position(
                self.caret,
                len,
                &lines,
                self.options.hyphenate_broken_words,
            );
            self.scroll
                .ensure_caret_visible(position.line, lines.len(), visible);
        }
        self.write_scrollbar(lines.len(), visible);
    }

    fn layout_context(&self) -> LayoutContext<'_> {
        LayoutContext {
            layout: self.layout.as_ref(),
            width: self.viewport.width,
            height: self.viewport.height,
            multiline: self.options.multiline,
            hyphenate: self.options.hyphenate_broken_words,
            mask: self.options.mask_char,
        }
    }

    fn sync_scroll(&mut self) {
        if !self.options.multiline {
            return;
        }
        let total = self.display_lines().len();
        let visible = self.layout_context().visible_lines();
        self.scroll.recompute(total, visible);
        self.write_scrollbar(total, visible);
    }

    fn write_scrollbar(&mut self, total: usize, visible: usize) {
        if let Some(bar) = self.scrollbar.as_mut() {
            *bar = self.scroll.scrollbar(total, visible);
        }
    }

    fn read_back_scrollbar(&mut self) {
        let Some(dragged) = self.scrollbar.map(|bar| bar.value) else {
            return;
        };
        if dragged == self.scroll.offset() {
            return;
        }
        let total = self.display_lines().len();
        let visible = self.layout_context().visible_lines();
        let applied = self.scroll.scroll_to(dragged, total, visible);
        if applied != dragged {
            emit_log(
                LogLevel::Debug,
                &format!("scrollbar value {dragged} clamped to {applied}"),
            );
        }
    }

    fn notify_change(&mut self) {
        let text = self.value.to_string();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&text);
        }
        emit_event(VALUE_CHANGED, &text);
    }
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInput")
            .field("value", &self.value)
            .field("caret", &self.caret)
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .field("scroll", &self.scroll)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}
