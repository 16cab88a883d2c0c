/// Binary arithmetic operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

/// Every input the calculator core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Sqrt,
    Exponent,
    Percentage,
    MemoryStore,
    MemoryClear,
    MemoryRecall,
    Trig(TrigFunction),
    ShowHistory,
    ToggleTheme,
    Exit,
}

impl InputEvent {
    /// Map a typed character to an event.
    pub fn from_char(ch: char) -> Option<Self> {
        let event = match ch {
            '0'..='9' => Self::Digit(ch as u8 - b'0'),
            '.' | ',' => Self::DecimalPoint,
            '+' => Self::Operator(Operator::Add),
            '-' => Self::Operator(Operator::Subtract),
            '*' | 'x' => Self::Operator(Operator::Multiply),
            '/' => Self::Operator(Operator::Divide),
            '^' => Self::Exponent,
            '%' => Self::Percentage,
            '=' | '\r' | '\n' => Self::Equals,
            'c' | 'C' | '\u{1b}' => Self::Clear,
            'h' | 'H' => Self::ShowHistory,
            _ => return None,
        };
        Some(event)
    }
}

/// All messages that can be sent through the FLTK channel.
/// Keypad buttons and menu callbacks send one of these; the dispatch loop in
/// main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Input(InputEvent),

    // Edit
    CopyDisplay,

    // Settings & Help
    OpenSettings,
    ShowAbout,
}

impl From<InputEvent> for Message {
    fn from(event: InputEvent) -> Self {
        Message::Input(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(InputEvent::from_char('0'), Some(InputEvent::Digit(0)));
        assert_eq!(InputEvent::from_char('7'), Some(InputEvent::Digit(7)));
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            InputEvent::from_char('*'),
            Some(InputEvent::Operator(Operator::Multiply))
        );
        assert_eq!(InputEvent::from_char('^'), Some(InputEvent::Exponent));
        assert_eq!(InputEvent::from_char('\r'), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_char('\u{1b}'), Some(InputEvent::Clear));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(InputEvent::from_char('q'), None);
        assert_eq!(InputEvent::from_char('('), None);
        assert_eq!(InputEvent::from_char(' '), None);
    }
}
