//! Shared helpers for textinput integration tests.
//!
//! - [`setup_test_logging`] routes `tracing` output to the test writer
//! - [`InputHarness`] wraps a focused [`TextInput`] and drives it one tick at
//!   a time through [`ScriptedKeys`]

#![allow(dead_code)] // Shared test helpers; not every integration test uses every helper
#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry

use std::sync::Once;
use std::time::Duration;

use textinput::{KeyCode, KeyEvent, KeyOutcome, ScriptedKeys, TextInput, TextInputOptions};

/// One frame at 60 Hz.
pub const TICK: Duration = Duration::from_millis(16);

/// Sample values used across tests.
pub const FOX: &str = "The quick brown fox";
pub const PANGRAM: &str = "pack my box with five dozen liquor jugs";

pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A focused text input plus the key script feeding it.
pub struct InputHarness {
    pub input: TextInput,
    pub keys: ScriptedKeys,
    ticks: usize,
}

impl InputHarness {
    pub fn new(options: TextInputOptions, width: usize, height: usize) -> Self {
        setup_test_logging();
        let mut input = TextInput::new(options).with_viewport(width, height);
        input.set_focused(true);
        Self {
            input,
            keys: ScriptedKeys::new(),
            ticks: 0,
        }
    }

    pub fn single_line(width: usize) -> Self {
        Self::new(TextInputOptions::single_line(), width, 1)
    }

    pub fn multiline(width: usize, height: usize) -> Self {
        Self::new(TextInputOptions::multiline(), width, height)
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.input.set_value(value);
        self
    }

    /// Run one tick and return what the polled key did.
    pub fn tick(&mut self) -> Option<KeyOutcome> {
        self.ticks += 1;
        let outcome = self.input.update(TICK, &mut self.keys);
        tracing::debug!(tick = self.ticks, ?outcome, caret = ?self.input.caret(), "tick");
        outcome
    }

    /// Queue `event` and run the tick that consumes it.
    pub fn press(&mut self, event: impl Into<KeyEvent>) -> KeyOutcome {
        self.keys.push(event);
        self.tick().unwrap_or(KeyOutcome::Ignored)
    }

    pub fn press_code(&mut self, code: KeyCode) -> KeyOutcome {
        self.press(KeyEvent::key(code))
    }

    /// Type `text` one char per tick; returns every outcome.
    pub fn type_text(&mut self, text: &str) -> Vec<KeyOutcome> {
        text.chars().map(|c| self.press(c)).collect()
    }

    /// Run ticks until the script is drained.
    pub fn drain(&mut self) {
        while self.keys.remaining() > 0 {
            self.tick();
        }
    }

    pub fn text(&self) -> String {
        self.input.text()
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }
}
