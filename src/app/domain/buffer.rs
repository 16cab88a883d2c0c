//! The expression the user is typing.

/// How a second decimal point inside one number is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalPolicy {
    /// Append it anyway; evaluation reports the malformed number later.
    #[default]
    Lenient,
    /// Ignore the keystroke.
    Strict,
}

const OPERATOR_SYMBOLS: [char; 5] = ['+', '-', '*', '/', '^'];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn push_digit(&mut self, digit: u8) {
        if let Some(ch) = char::from_digit(u32::from(digit), 10) {
            self.text.push(ch);
        }
    }

    /// Returns `false` when the point was rejected by a strict policy.
    pub fn push_decimal_point(&mut self, policy: DecimalPolicy) -> bool {
        if policy == DecimalPolicy::Strict {
            let segment = self.current_segment();
            if segment.contains('.') || segment.contains(['e', 'E']) {
                return false;
            }
        }
        self.text.push('.');
        true
    }

    /// Append `" op "` and return the history entry for it, or `None` when the
    /// buffer is empty.
    ///
    /// A trailing operator is replaced rather than followed by another one.
    /// The entry is `"<buffer> <op>"`, except for `^`, which keeps the
    /// trailing space: `"<buffer> ^ "`.
    pub fn push_operator(&mut self, symbol: char) -> Option<String> {
        self.strip_trailing_operator();
        if self.text.is_empty() {
            return None;
        }
        let entry = if symbol == '^' {
            format!("{} ^ ", self.text)
        } else {
            format!("{} {}", self.text, symbol)
        };
        self.text.push(' ');
        self.text.push(symbol);
        self.text.push(' ');
        Some(entry)
    }

    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// True when the buffer ends with an operator boundary such as `"2 + "`.
    #[cfg(test)]
    pub fn ends_with_operator(&self) -> bool {
        self.trailing_operator_len().is_some()
    }

    fn trailing_operator_len(&self) -> Option<usize> {
        let mut tail = self.text.chars().rev();
        match (tail.next(), tail.next(), tail.next()) {
            (Some(' '), Some(op), Some(' ')) if OPERATOR_SYMBOLS.contains(&op) => Some(3),
            _ => None,
        }
    }

    fn strip_trailing_operator(&mut self) {
        if let Some(len) = self.trailing_operator_len() {
            self.text.truncate(self.text.len() - len);
        }
    }

    /// The number currently being typed: everything after the last space.
    fn current_segment(&self) -> &str {
        match self.text.rfind(' ') {
            Some(idx) => &self.text[idx + 1..],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> ExpressionBuffer {
        let mut buf = ExpressionBuffer::new();
        for ch in keys.chars() {
            match ch {
                '0'..='9' => buf.push_digit(ch as u8 - b'0'),
                '.' => {
                    buf.push_decimal_point(DecimalPolicy::Lenient);
                }
                op => {
                    buf.push_operator(op);
                }
            }
        }
        buf
    }

    #[test]
    fn test_digits_and_points_append_verbatim() {
        assert_eq!(typed("3.5").as_str(), "3.5");
        assert_eq!(typed("3.5.2").as_str(), "3.5.2");
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut buf = ExpressionBuffer::new();
        buf.push_digit(12);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_operator_on_empty_buffer_is_noop() {
        let mut buf = ExpressionBuffer::new();
        assert_eq!(buf.push_operator('+'), None);
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn test_operator_spacing_and_entry() {
        let mut buf = typed("12");
        assert_eq!(buf.push_operator('*'), Some("12 *".to_string()));
        assert_eq!(buf.as_str(), "12 * ");
        assert!(buf.ends_with_operator());
    }

    #[test]
    fn test_exponent_entry_keeps_trailing_space() {
        let mut buf = typed("2");
        assert_eq!(buf.push_operator('^'), Some("2 ^ ".to_string()));
        assert_eq!(buf.as_str(), "2 ^ ");
    }

    #[test]
    fn test_trailing_operator_is_replaced() {
        let mut buf = typed("2*");
        assert_eq!(buf.push_operator('-'), Some("2 -".to_string()));
        assert_eq!(buf.as_str(), "2 - ");
        assert_eq!(buf.push_operator('^'), Some("2 ^ ".to_string()));
        assert_eq!(buf.as_str(), "2 ^ ");
    }

    #[test]
    fn test_never_two_consecutive_operators() {
        let buf = typed("1+-*/2*+3//");
        assert_eq!(buf.as_str(), "1 / 2 + 3 / ");
        let compact: Vec<char> = buf.as_str().chars().filter(|c| !c.is_whitespace()).collect();
        for pair in compact.windows(2) {
            assert!(!(OPERATOR_SYMBOLS.contains(&pair[0]) && OPERATOR_SYMBOLS.contains(&pair[1])));
        }
    }

    #[test]
    fn test_negative_result_is_not_an_operator() {
        let mut buf = ExpressionBuffer::new();
        buf.replace("-3");
        assert!(!buf.ends_with_operator());
        assert_eq!(buf.push_operator('+'), Some("-3 +".to_string()));
        assert_eq!(buf.as_str(), "-3 + ");
    }

    #[test]
    fn test_strict_policy_rejects_second_point() {
        let mut buf = typed("3.5");
        assert!(!buf.push_decimal_point(DecimalPolicy::Strict));
        assert_eq!(buf.as_str(), "3.5");

        buf.push_operator('+');
        assert!(buf.push_decimal_point(DecimalPolicy::Strict));
        assert_eq!(buf.as_str(), "3.5 + .");
    }

    #[test]
    fn test_strict_policy_rejects_point_after_exponent_notation() {
        let mut buf = ExpressionBuffer::new();
        buf.replace("1e+16");
        assert!(!buf.push_decimal_point(DecimalPolicy::Strict));
        assert_eq!(buf.as_str(), "1e+16");
    }

    #[test]
    fn test_clear() {
        let mut buf = typed("9+9");
        buf.clear();
        assert!(buf.is_empty());
    }
}
