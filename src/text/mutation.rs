//! Validated, all-or-nothing text edits at the caret.

use crate::error::Rejection;
use crate::text::layout::{LayoutContext, TextMeasure};
use crate::text::validate::TextValidator;
use crate::text::value::{Caret, TextValue};

/// A single edit applied at the caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
    InsertLineBreak,
}

impl Edit {
    /// Whether the edit can make the value longer.
    #[must_use]
    pub fn adds_chars(self) -> bool {
        matches!(self, Self::InsertChar(_) | Self::InsertLineBreak)
    }
}

/// Built-in checks run before the pluggable validators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputRules {
    /// Maximum length in chars; 0 disables the check.
    pub character_limit: usize,
    pub multiline: bool,
    /// Reject values whose wrapped block does not fit the viewport.
    pub limit_by_size: bool,
}

/// Result of an accepted edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Committed {
    pub value: TextValue,
    pub caret: Caret,
    /// `value` differs from the value before the edit.
    pub changed: bool,
}

/// Applies edits and runs the validation chain in a fixed order: character
/// limit, line breaks, size fit, then validators in registration order. The
/// first failing rule rejects the edit.
#[derive(Default)]
pub struct MutationPipeline {
    rules: InputRules,
    validators: Vec<Box<dyn TextValidator>>,
}

impl MutationPipeline {
    #[must_use]
    pub fn new(rules: InputRules) -> Self {
        Self {
            rules,
            validators: Vec::new(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> InputRules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: InputRules) {
        self.rules = rules;
    }

    /// Append a validator; it runs after every earlier one.
    pub fn add_validator(&mut self, validator: impl TextValidator + 'static) {
        self.validators.push(Box::new(validator));
    }

    pub fn clear_validators(&mut self) {
        self.validators.clear();
    }

    #[must_use]
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Apply `edit` at `caret` and validate the outcome.
    ///
    /// Neither `value` nor `caret` is touched; on `Ok` the caller commits the
    /// returned pair, on `Err` it keeps what it had.
    pub fn apply(
        &self,
        value: &TextValue,
        caret: Caret,
        edit: Edit,
        fit: &LayoutContext<'_>,
    ) -> Result<Committed, Rejection> {
        let len = value.len_chars();
        let at = caret.offset(len);

        let mut candidate = value.clone();
        let candidate_caret = match edit {
            Edit::InsertChar(c) => {
                candidate.insert_char(at, c);
                at + 1
            }
            Edit::InsertLineBreak => {
                candidate.insert_char(at, '\n');
                at + 1
            }
            Edit::DeleteBackward => {
                if at > 0 && candidate.remove_char(at - 1) {
                    at - 1
                } else {
                    at
                }
            }
            Edit::DeleteForward => {
                candidate.remove_char(at);
                at
            }
        };

        if candidate == *value {
            return Ok(Committed {
                value: candidate,
                caret: Caret::normalized(candidate_caret, len),
                changed: false,
            });
        }

        // A rewriting validator may change the length; the caret keeps its
        // distance from the end of the value.
        let suffix = candidate.len_chars().saturating_sub(candidate_caret);
        let candidate = self.validate(candidate, value, edit, fit)?;
        let new_len = candidate.len_chars();
        let changed = candidate != *value;
        Ok(Committed {
            value: candidate,
            caret: Caret::normalized(new_len.saturating_sub(suffix), new_len),
            changed,
        })
    }

    fn validate(
        &self,
        candidate: TextValue,
        previous: &TextValue,
        edit: Edit,
        fit: &LayoutContext<'_>,
    ) -> Result<TextValue, Rejection> {
        let len = candidate.len_chars();
        let limit = self.rules.character_limit;
        if edit.adds_chars() && limit != 0 && len > limit {
            return Err(Rejection::CharacterLimit {
                limit,
                attempted: len,
            });
        }

        if !self.rules.multiline && candidate.contains_line_break() {
            return Err(Rejection::LineBreakInSingleLine);
        }

        let mut text = candidate.to_string();

        if self.rules.limit_by_size {
            let measure = TextMeasure::of(&fit.lines(&text));
            let (measured, available) = if self.rules.multiline {
                (measure.line_count, fit.height)
            } else {
                (measure.max_width, fit.width)
            };
            if measured >= available {
                return Err(Rejection::ExceedsSize {
                    measured,
                    available,
                });
            }
        }

        if self.validators.is_empty() {
            return Ok(candidate);
        }

        let previous = previous.to_string();
        for (index, validator) in self.validators.iter().enumerate() {
            if !validator.validate(&mut text, &previous) {
                return Err(Rejection::Validator { index });
            }
        }
        if !self.rules.multiline && text.contains('\n') {
            return Err(Rejection::LineBreakInSingleLine);
        }
        Ok(TextValue::from(text))
    }
}

impl std::fmt::Debug for MutationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationPipeline")
            .field("rules", &self.rules)
            .field("validators", &self.validators.len())
            .finish()
    }
}
