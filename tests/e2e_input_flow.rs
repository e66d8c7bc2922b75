//! E2E tests for key input flowing through the text input.
//!
//! Each test drives a focused input tick by tick with scripted keys and
//! checks value, caret, scroll and notifications together.

mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use fixtures::{FOX, InputHarness, PANGRAM, TICK};
use textinput::text::{BreakKind, DisplayLine, VisualPosition, WRAP_MARKER};
use textinput::{
    Caret, KeyCode, KeyEvent, KeyModifiers, KeyOutcome, Rejection, TextInput, TextInputOptions,
    VALUE_CHANGED, set_event_callback,
};

// ============================================================================
// Character limit
// ============================================================================

#[test]
fn test_e2e_limit_accepts_up_to_limit() {
    let mut h = InputHarness::new(TextInputOptions::single_line().with_character_limit(5), 40, 1)
        .with_value("abcd");
    assert_eq!(h.input.caret(), Caret::End);

    assert_eq!(h.press('e'), KeyOutcome::Edited);
    assert_eq!(h.text(), "abcde");

    let outcome = h.press('f');
    assert_eq!(
        outcome,
        KeyOutcome::Rejected(Rejection::CharacterLimit {
            limit: 5,
            attempted: 6
        })
    );
    assert_eq!(h.text(), "abcde");
    assert_eq!(h.input.caret(), Caret::End);
}

#[test]
fn test_e2e_rejected_edit_leaves_state_identical() {
    let mut h = InputHarness::single_line(40).with_value("12");
    h.input.add_validator(textinput::text::NumbersOnly::integers());
    h.input.set_caret(Caret::At(1));

    let before = (h.input.value().clone(), h.input.caret());
    assert_eq!(
        h.press('x'),
        KeyOutcome::Rejected(Rejection::Validator { index: 0 })
    );
    assert_eq!((h.input.value().clone(), h.input.caret()), before);

    assert_eq!(h.press('5'), KeyOutcome::Edited);
    assert_eq!(h.text(), "152");
    assert_eq!(h.input.caret(), Caret::At(2));
}

// ============================================================================
// Navigation over wrapped lines
// ============================================================================

#[test]
fn test_e2e_arrow_up_keeps_column() {
    let mut h = InputHarness::multiline(10, 4).with_value(FOX);
    let lines = h.input.display_lines();
    assert_eq!(lines[0], DisplayLine::new("The quick ", BreakKind::WordWrap));
    assert_eq!(lines[1], DisplayLine::new("brown fox", BreakKind::Normal));

    h.input.set_caret(Caret::At(14));
    assert_eq!(h.input.caret_position(), VisualPosition::new(1, 4));

    assert_eq!(h.press_code(KeyCode::Up), KeyOutcome::Moved);
    assert_eq!(h.input.caret(), Caret::At(4));
    assert_eq!(h.input.caret_position(), VisualPosition::new(0, 4));

    h.press_code(KeyCode::Down);
    assert_eq!(h.input.caret(), Caret::At(14));
}

#[test]
fn test_e2e_home_visual_line_and_document() {
    let mut h = InputHarness::multiline(10, 4).with_value(FOX);

    h.input.set_caret(Caret::At(14));
    h.press_code(KeyCode::Home);
    assert_eq!(h.input.caret(), Caret::At(10));

    h.input.set_caret(Caret::At(14));
    h.press(KeyEvent::with_ctrl(KeyCode::Home));
    assert_eq!(h.input.caret(), Caret::At(0));

    h.press_code(KeyCode::End);
    assert_eq!(h.input.caret(), Caret::At(9));
    h.press(KeyEvent::with_ctrl(KeyCode::End));
    assert_eq!(h.input.caret(), Caret::End);
}

#[test]
fn test_e2e_custom_document_modifier() {
    let options = TextInputOptions::multiline().with_document_modifier(KeyModifiers::ALT);
    let mut h = InputHarness::new(options, 10, 4).with_value(FOX);
    h.input.set_caret(Caret::At(14));

    h.press(KeyEvent::with_ctrl(KeyCode::Home));
    assert_eq!(h.input.caret(), Caret::At(10));
    h.press(KeyEvent::new(KeyCode::Home, KeyModifiers::ALT));
    assert_eq!(h.input.caret(), Caret::At(0));
}

#[test]
fn test_e2e_backspace_and_delete_at_bounds_are_noops() {
    let seen = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&seen);
    let mut h = InputHarness::single_line(40).with_value("abc");
    h.input.on_value_change(move |_| *counter.borrow_mut() += 1);

    h.input.set_caret(Caret::At(0));
    assert_eq!(h.press_code(KeyCode::Backspace), KeyOutcome::Ignored);
    assert_eq!(h.text(), "abc");
    assert_eq!(h.input.caret(), Caret::At(0));

    h.input.set_caret(Caret::End);
    assert_eq!(h.press_code(KeyCode::Delete), KeyOutcome::Ignored);
    assert_eq!(h.text(), "abc");
    assert_eq!(h.input.caret(), Caret::End);

    assert_eq!(*seen.borrow(), 0);
}

#[test]
fn test_e2e_enter_then_up_inserts_on_first_line() {
    let mut h = InputHarness::multiline(20, 4);
    h.type_text("ab");
    assert_eq!(h.press_code(KeyCode::Enter), KeyOutcome::Edited);
    h.type_text("cd");
    assert_eq!(h.text(), "ab\ncd");

    h.press_code(KeyCode::Up);
    assert_eq!(h.input.caret(), Caret::At(2));
    h.press('X');
    assert_eq!(h.text(), "abX\ncd");
    assert_eq!(h.input.caret_position(), VisualPosition::new(0, 3));
}

#[test]
fn test_e2e_custom_layout_provider() {
    // Fixed three-char chunks, broken without hyphens.
    let chunks = |value: &str, _width: usize, _hyphenate: bool| {
        let chars: Vec<char> = value.chars().collect();
        let count = chars.chunks(3).count().max(1);
        let mut lines: Vec<DisplayLine> = chars
            .chunks(3)
            .enumerate()
            .map(|(i, chunk)| {
                let mut text: String = chunk.iter().collect();
                if i + 1 < count {
                    text.push(WRAP_MARKER);
                    DisplayLine::new(text, BreakKind::WordBroken)
                } else {
                    DisplayLine::new(text, BreakKind::Normal)
                }
            })
            .collect();
        if lines.is_empty() {
            lines.push(DisplayLine::default());
        }
        lines
    };
    let mut h = InputHarness::multiline(10, 4);
    h.input = TextInput::new(TextInputOptions::multiline().with_hyphenation(false))
        .with_layout(chunks)
        .with_viewport(10, 4)
        .with_value("abcdefg");
    h.input.set_focused(true);

    assert_eq!(h.input.display_lines().len(), 3);
    h.input.set_caret(Caret::At(4));
    assert_eq!(h.input.caret_position(), VisualPosition::new(1, 1));
    h.press_code(KeyCode::Down);
    assert_eq!(h.input.caret(), Caret::End);
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_e2e_typing_keeps_tail_in_view() {
    let mut h = InputHarness::multiline(12, 2);
    for outcome in h.type_text(PANGRAM) {
        assert_eq!(outcome, KeyOutcome::Edited);
    }
    assert_eq!(h.text(), PANGRAM);

    let total = h.input.display_lines().len();
    assert!(total > 2);
    assert_eq!(h.input.scroll_offset(), total - 2);

    let bar = h.input.scrollbar().expect("multi-line input has a scrollbar");
    assert!(bar.visible);
    assert_eq!(bar.max, total - 2);
    assert_eq!(bar.value, total - 2);
    assert_eq!(h.input.caret_cell().map(|(_, row)| row), Some(1));
}

#[test]
fn test_e2e_scrollbar_drag_then_caret_move_scrolls_back() {
    let mut h = InputHarness::multiline(20, 2).with_value("a\nb\nc\nd\ne");
    h.input.set_caret(Caret::At(0));
    h.input.set_scroll_offset(0);

    if let Some(bar) = h.input.scrollbar_mut() {
        bar.value = 2;
    }
    h.tick();
    assert_eq!(h.input.scroll_offset(), 2);
    assert_eq!(h.input.visible_lines()[0].text, "c");
    // Caret on line 0 is scrolled out.
    assert_eq!(h.input.caret_cell(), None);

    h.press_code(KeyCode::Right);
    assert_eq!(h.input.scroll_offset(), 0);
    assert_eq!(h.input.scrollbar().map(|b| b.value), Some(0));
}

#[test]
fn test_e2e_zero_height_viewport_shows_one_line() {
    let mut h = InputHarness::multiline(20, 0).with_value("a\nb\nc");
    h.input.reset_caret(true);
    assert_eq!(h.input.scroll_offset(), 2);
    assert_eq!(h.input.visible_lines().len(), 1);
}

// ============================================================================
// Pointer, focus and display
// ============================================================================

#[test]
fn test_e2e_click_then_type() {
    let mut h = InputHarness::single_line(40).with_value("helo");
    h.input.click(3, 0);
    assert_eq!(h.input.caret(), Caret::At(3));
    h.press('l');
    assert_eq!(h.text(), "hello");
}

#[test]
fn test_e2e_click_below_last_line_clamps() {
    let mut h = InputHarness::multiline(10, 4).with_value(FOX);
    h.input.click(3, 10);
    assert_eq!(h.input.caret(), Caret::At(13));
    h.input.click(50, 10);
    assert_eq!(h.input.caret(), Caret::End);
}

#[test]
fn test_e2e_masked_input() {
    let mut h = InputHarness::new(TextInputOptions::single_line().with_mask('*'), 40, 1);
    h.type_text("pw");
    assert_eq!(h.text(), "pw");
    assert_eq!(h.input.display_lines()[0].text, "**");
    assert_eq!(h.input.caret_cell(), Some((2, 0)));
}

#[test]
fn test_e2e_focus_placeholder_and_default_value() {
    let options = TextInputOptions::single_line()
        .with_placeholder("Name")
        .with_value_when_empty("anonymous");
    let mut h = InputHarness::new(options, 40, 1);
    assert!(!h.input.showing_placeholder());

    h.type_text("x");
    h.press_code(KeyCode::Backspace);
    assert_eq!(h.text(), "");

    h.input.set_focused(false);
    assert_eq!(h.text(), "anonymous");
    assert!(!h.input.showing_placeholder());
    assert!(!h.input.is_caret_visible());

    h.input.set_value("");
    assert!(h.input.showing_placeholder());
    assert_eq!(h.input.placeholder(), "Name");
}

#[test]
fn test_e2e_unfocused_input_ignores_keys() {
    let mut h = InputHarness::single_line(40);
    h.input.set_focused(false);
    h.keys.type_str("abc");
    assert_eq!(h.tick(), None);
    assert_eq!(h.text(), "");
    assert_eq!(h.keys.remaining(), 3);

    h.input.set_focused(true);
    h.drain();
    assert_eq!(h.text(), "abc");
    assert_eq!(h.ticks(), 4);
}

#[test]
fn test_e2e_caret_blinks_between_keys() {
    let mut h = InputHarness::single_line(40);
    h.press('a');
    assert!(h.input.is_caret_visible());

    // A delay of 2 phases at 2 phases/s keeps the caret solid for a second.
    let hidden = (0..200u128).find_map(|i| {
        h.keys.idle();
        h.tick();
        (!h.input.is_caret_visible()).then_some(i)
    });
    let first_hidden = hidden.expect("caret should blink once idle");
    assert!(first_hidden * TICK.as_millis() >= 1_000);

    h.press_code(KeyCode::Left);
    assert!(h.input.is_caret_visible());
}

#[test]
fn test_e2e_value_changed_event() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        if name == VALUE_CHANGED && data.starts_with("evt-") {
            if let Ok(mut v) = sink.lock() {
                v.push(data.to_string());
            }
        }
    });

    let mut h = InputHarness::single_line(40).with_value("evt-");
    h.press('1');
    h.press_code(KeyCode::Left);
    h.press_code(KeyCode::Enter);
    textinput::clear_event_callback();

    let seen = events.lock().map(|v| v.clone()).unwrap_or_default();
    assert_eq!(seen, vec!["evt-".to_string(), "evt-1".to_string()]);
}
