//! Multi-cursor editing and input decoding benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use ten::input::InputDecoder;
use ten::text::{CursorSet, Document, Editor};

fn column_editor(rows: usize) -> Editor {
    let lines: Vec<String> = (0..rows).map(|i| format!("row {i:>5} text")).collect();
    let cursors = CursorSet::from_cursors((0..rows).map(|row| (row, 4)));
    Editor::with_state(Document::from_lines(&lines), cursors).unwrap()
}

fn insert_with_many_cursors(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_char");
    for rows in [1, 16, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter_batched(
                || column_editor(rows),
                |mut editor| {
                    editor.insert_char(black_box('x'));
                    editor
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn newline_and_join(c: &mut Criterion) {
    c.bench_function("newline_then_backspace_64_cursors", |b| {
        b.iter_batched(
            || column_editor(64),
            |mut editor| {
                editor.insert_newline();
                editor.delete_backward();
                editor
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn clone_column(c: &mut Criterion) {
    c.bench_function("clone_down_100_times", |b| {
        b.iter_batched(
            || {
                let lines = vec!["abcdef"; 128];
                Editor::with_state(Document::from_lines(&lines), CursorSet::new()).unwrap()
            },
            |mut editor| {
                for _ in 0..100 {
                    editor.clone_down();
                }
                editor
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn decode_typing(c: &mut Criterion) {
    let mut bytes = Vec::new();
    for _ in 0..100 {
        bytes.extend_from_slice(b"hello world\r\x1b[A\x1b[B\x0a\x7f");
    }

    c.bench_function("decode_mixed_input", |b| {
        b.iter(|| {
            let mut decoder = InputDecoder::new();
            black_box(decoder.feed(black_box(&bytes)))
        });
    });
}

criterion_group!(
    benches,
    insert_with_many_cursors,
    newline_and_join,
    clone_column,
    decode_typing
);
criterion_main!(benches);
