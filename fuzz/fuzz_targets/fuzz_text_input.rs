//! Fuzz target for text input editing and rendering.
//!
//! Drives the input with arbitrary edit events and renders after each one
//! into an arbitrary viewport. Any panic or debug assertion is a bug.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termwidgets::{CellGrid, InputEvent, InputOptions, RenderMode, TextInput, Viewport};

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(char),
    Clear,
    DeleteBackward,
    DeleteWordBackward,
    MoveLeft,
    MoveLeftWord,
    MoveRight,
    MoveRightWord,
    SetText(String),
}

#[derive(Arbitrary, Debug)]
struct Input {
    horizontal: bool,
    width: u8,
    height: u8,
    rect: (i16, i16, i16, i16),
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mode = if input.horizontal {
        RenderMode::Horizontal
    } else {
        RenderMode::Wrap
    };
    let mut widget = TextInput::with_options(InputOptions::new().mode(mode));
    let mut grid = CellGrid::new(u32::from(input.width), u32::from(input.height));
    let (x1, x2, y1, y2) = input.rect;
    let vp = Viewport::new(&grid, x1.into(), x2.into(), y1.into(), y2.into());

    for op in input.ops.into_iter().take(4096) {
        let event = match op {
            Op::Insert(ch) => InputEvent::Insert(ch),
            Op::Clear => InputEvent::Clear,
            Op::DeleteBackward => InputEvent::DeleteBackward,
            Op::DeleteWordBackward => InputEvent::DeleteWordBackward,
            Op::MoveLeft => InputEvent::MoveLeft,
            Op::MoveLeftWord => InputEvent::MoveLeftWord,
            Op::MoveRight => InputEvent::MoveRight,
            Op::MoveRightWord => InputEvent::MoveRightWord,
            Op::SetText(text) => {
                let _ = widget.set_text(&text);
                continue;
            }
        };
        widget.handle(event);
        assert!(widget.cursor() <= widget.len());

        let rows = widget.render(&mut grid, vp);
        assert!(rows <= vp.height());
        assert_eq!(rows, widget.measure(vp));
    }
});
