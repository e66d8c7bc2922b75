//! Per-tick key sources.

use std::collections::VecDeque;

use super::KeyEvent;

/// Supplies the key pressed during the current tick, if any.
pub trait KeySource {
    /// Take the pending event for this tick.
    fn poll(&mut self) -> Option<KeyEvent>;
}

impl<F> KeySource for F
where
    F: FnMut() -> Option<KeyEvent>,
{
    fn poll(&mut self) -> Option<KeyEvent> {
        self()
    }
}

/// A key source that replays a fixed script, one event per tick.
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    pending: VecDeque<Option<KeyEvent>>,
}

impl ScriptedKeys {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for a future tick.
    pub fn push(&mut self, event: impl Into<KeyEvent>) -> &mut Self {
        self.pending.push_back(Some(event.into()));
        self
    }

    /// Queue a tick with no input.
    pub fn idle(&mut self) -> &mut Self {
        self.pending.push_back(None);
        self
    }

    /// Queue one character event per char of `text`.
    pub fn type_str(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.pending.push_back(Some(KeyEvent::char(c)));
        }
        self
    }

    /// Number of ticks still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll(&mut self) -> Option<KeyEvent> {
        self.pending.pop_front().flatten()
    }
}
