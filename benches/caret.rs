//! Caret mapping and edit pipeline benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textinput::text::{LineLayout, MonospaceWrap, offset_to_position, position_to_offset};
use textinput::{Caret, KeyCode, KeyEvent, TextInput, TextInputOptions};

fn paragraph(words: usize) -> String {
    let sample = ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur"];
    (0..words)
        .map(|i| sample[i % sample.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn wrap(c: &mut Criterion) {
    let short = paragraph(20);
    let long = paragraph(2_000);

    c.bench_function("wrap_short_w40", |b| {
        b.iter(|| MonospaceWrap.wrap(black_box(&short), 40, true));
    });

    c.bench_function("wrap_long_w80", |b| {
        b.iter(|| MonospaceWrap.wrap(black_box(&long), 80, true));
    });
}

fn caret_mapping(c: &mut Criterion) {
    let text = paragraph(2_000);
    let len = text.chars().count();
    let lines = MonospaceWrap.wrap(&text, 80, true);
    let middle = Caret::At(len / 2);

    c.bench_function("offset_to_position_middle", |b| {
        b.iter(|| offset_to_position(black_box(middle), len, &lines, true));
    });

    let pos = offset_to_position(middle, len, &lines, true);
    c.bench_function("position_to_offset_middle", |b| {
        b.iter(|| position_to_offset(black_box(pos), &lines, true));
    });
}

fn typing(c: &mut Criterion) {
    c.bench_function("type_200_chars_multiline", |b| {
        b.iter(|| {
            let mut input = TextInput::new(TextInputOptions::multiline()).with_viewport(40, 10);
            input.set_focused(true);
            for ch in paragraph(40).chars().take(200) {
                input.handle_key(KeyEvent::char(ch));
            }
            black_box(input.text())
        });
    });

    let mut input = TextInput::new(TextInputOptions::multiline())
        .with_viewport(40, 10)
        .with_value(&paragraph(400));
    input.set_focused(true);
    c.bench_function("arrow_up_down_long_value", |b| {
        b.iter(|| {
            input.handle_key(KeyEvent::key(KeyCode::Up));
            input.handle_key(KeyEvent::key(KeyCode::Down));
        });
    });
}

criterion_group!(benches, wrap, caret_mapping, typing);
criterion_main!(benches);
