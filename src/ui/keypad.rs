//! Button grid layout. Each key carries the message it sends, so the
//! dispatch never looks at label text.

use crate::app::domain::{InputEvent, Message, Operator, TrigFunction};

pub const COLUMNS: i32 = 4;
pub const ROWS: i32 = 8;

/// Colour group of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Digit,
    Operator,
    Function,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySpec {
    pub label: &'static str,
    pub message: Message,
    pub role: KeyRole,
    pub row: i32,
    pub col: i32,
    pub span: i32,
}

const fn key(label: &'static str, event: InputEvent, role: KeyRole, row: i32, col: i32) -> KeySpec {
    KeySpec {
        label,
        message: Message::Input(event),
        role,
        row,
        col,
        span: 1,
    }
}

const fn digit(label: &'static str, d: u8, row: i32, col: i32) -> KeySpec {
    key(label, InputEvent::Digit(d), KeyRole::Digit, row, col)
}

const fn op(label: &'static str, operator: Operator, row: i32, col: i32) -> KeySpec {
    key(label, InputEvent::Operator(operator), KeyRole::Operator, row, col)
}

pub const KEYPAD: [KeySpec; 29] = [
    digit("7", 7, 0, 0),
    digit("8", 8, 0, 1),
    digit("9", 9, 0, 2),
    op("/", Operator::Divide, 0, 3),
    digit("4", 4, 1, 0),
    digit("5", 5, 1, 1),
    digit("6", 6, 1, 2),
    op("*", Operator::Multiply, 1, 3),
    digit("1", 1, 2, 0),
    digit("2", 2, 2, 1),
    digit("3", 3, 2, 2),
    op("-", Operator::Subtract, 2, 3),
    digit("0", 0, 3, 0),
    key(".", InputEvent::DecimalPoint, KeyRole::Digit, 3, 1),
    op("+", Operator::Add, 3, 2),
    key("=", InputEvent::Equals, KeyRole::Operator, 3, 3),
    key("√", InputEvent::Sqrt, KeyRole::Function, 4, 0),
    key("^", InputEvent::Exponent, KeyRole::Operator, 4, 1),
    key("%", InputEvent::Percentage, KeyRole::Function, 4, 2),
    key("M+", InputEvent::MemoryStore, KeyRole::Function, 4, 3),
    key("MC", InputEvent::MemoryClear, KeyRole::Function, 5, 0),
    key("MR", InputEvent::MemoryRecall, KeyRole::Function, 5, 1),
    key("sin", InputEvent::Trig(TrigFunction::Sin), KeyRole::Function, 5, 2),
    key("cos", InputEvent::Trig(TrigFunction::Cos), KeyRole::Function, 5, 3),
    key("tan", InputEvent::Trig(TrigFunction::Tan), KeyRole::Function, 6, 0),
    key("C", InputEvent::Clear, KeyRole::Control, 6, 1),
    key("History", InputEvent::ShowHistory, KeyRole::Control, 6, 2),
    key("Exit", InputEvent::Exit, KeyRole::Control, 6, 3),
    KeySpec {
        span: COLUMNS,
        ..key("Dark/Light", InputEvent::ToggleTheme, KeyRole::Control, 7, 0)
    },
];

/// Pixel rectangle `(x, y, w, h)` of a key inside a grid area.
pub fn key_rect(key_spec: &KeySpec, x: i32, y: i32, width: i32, height: i32) -> (i32, i32, i32, i32) {
    let cell_w = width / COLUMNS;
    let cell_h = height / ROWS;
    (
        x + key_spec.col * cell_w,
        y + key_spec.row * cell_h,
        cell_w * key_spec.span,
        cell_h,
    )
}
