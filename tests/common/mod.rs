#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a different subset

use std::cell::RefCell;
use std::rc::Rc;

use termwidgets::surface::print_str;
use termwidgets::{
    CellGrid, InputEvent, Label, NodeContent, Style, Surface, TextInput, TreeNode, Viewport,
};

/// Names of destroyed nodes, in destroy order.
pub type DestroyLog = Rc<RefCell<Vec<String>>>;

pub fn destroy_log() -> DestroyLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Node content that records its own destruction.
pub struct Tracked {
    name: String,
    log: DestroyLog,
}

impl NodeContent for Tracked {
    fn draw(&self, surface: &mut dyn Surface, rect: Viewport, selected: bool) {
        let marker = if selected { ">" } else { "" };
        let text = format!("{marker}{}", self.name);
        print_str(surface, rect.x1, rect.y1, rect.x2, Style::NONE, &text);
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push(self.name.clone());
    }
}

pub fn tracked(name: &str, log: &DestroyLog) -> TreeNode {
    TreeNode::new(Tracked {
        name: name.to_string(),
        log: Rc::clone(log),
    })
}

pub fn label(text: &str) -> TreeNode {
    TreeNode::new(Label::new(text))
}

/// Input with `text` typed one codepoint at a time.
pub fn typed(text: &str) -> TextInput {
    let mut input = TextInput::new();
    for ch in text.chars() {
        input.handle(InputEvent::Insert(ch));
    }
    input
}

/// Surface that records every coordinate it was handed outside its bounds.
pub struct BoundedSurface {
    pub grid: CellGrid,
    pub out_of_bounds: Vec<(u32, u32)>,
}

impl BoundedSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: CellGrid::new(width, height),
            out_of_bounds: Vec::new(),
        }
    }

    fn check(&mut self, x: u32, y: u32) -> bool {
        let inside = x < self.grid.width() && y < self.grid.height();
        if !inside {
            self.out_of_bounds.push((x, y));
        }
        inside
    }
}

impl Surface for BoundedSurface {
    fn set_cell(&mut self, x: u32, y: u32, ch: char, style: Style) {
        if self.check(x, y) {
            self.grid.set_cell(x, y, ch, style);
        }
    }

    fn set_cursor(&mut self, x: u32, y: u32) {
        if self.check(x, y) {
            self.grid.set_cursor(x, y);
        }
    }

    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }
}

/// Blank grid and a viewport covering all of it.
pub fn grid(width: u32, height: u32) -> (CellGrid, Viewport) {
    let grid = CellGrid::new(width, height);
    let viewport = Viewport::full(&grid);
    (grid, viewport)
}
