//! Fuzz target for multi-cursor editing.
//!
//! Any operation sequence must keep the cursor set non-empty and
//! duplicate-free with every cursor on an existing row, and drawing must
//! never panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use ten::grid::CellGrid;
use ten::input::InputEvent;
use ten::{EditorConfig, Session};

#[derive(Arbitrary, Debug)]
enum Op {
    Char(char),
    Newline,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    CloneUp,
    CloneDown,
    Resize(u8, u8),
}

impl Op {
    fn event(&self) -> InputEvent {
        match *self {
            Op::Char(ch) => InputEvent::Printable(ch),
            Op::Newline => InputEvent::Printable('\n'),
            Op::Backspace => InputEvent::Backspace,
            Op::Up => InputEvent::ArrowUp,
            Op::Down => InputEvent::ArrowDown,
            Op::Left => InputEvent::ArrowLeft,
            Op::Right => InputEvent::ArrowRight,
            Op::CloneUp => InputEvent::CloneUp,
            Op::CloneDown => InputEvent::CloneDown,
            Op::Resize(w, h) => InputEvent::Resize {
                width: u16::from(w),
                height: u16::from(h),
            },
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let Ok(mut session) = Session::new(EditorConfig::default(), 60, 8) else {
        return;
    };

    for op in ops.iter().take(256) {
        let _ = session.handle(op.event());

        let editor = session.editor();
        let rows = editor.document().len();
        let cursors = editor.cursors();
        assert!(!cursors.as_slice().is_empty());
        let unique: HashSet<_> = cursors.iter().collect();
        assert_eq!(unique.len(), cursors.len());
        assert!(cursors.iter().all(|c| c.row < rows));

        let (width, height) = session.size();
        let mut grid = CellGrid::new(width, height);
        session.draw(&mut grid);
    }
});
