//! Arithmetic expression evaluation.
//!
//! The input never reaches anything but a fixed token grammar: digits,
//! decimal point, `+ - * / ^` and parentheses. Whitespace is removed before
//! tokenizing, so `"1 2"` reads as `12`.

pub mod lexer;
pub mod parser;

use tracing::debug;

use crate::app::domain::Number;
use crate::app::infrastructure::error::ExpressionError;

/// Evaluate a buffer such as `"2 + 3 * 4"` or `"2 ^ 3"`.
pub fn evaluate(source: &str) -> Result<Number, ExpressionError> {
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    let tokens = lexer::tokenize(&compact)?;
    let tree = parser::parse(&tokens)?;
    let value = tree.eval()?;
    debug!(expression = %compact, result = %value, "evaluated expression");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(source: &str) -> String {
        evaluate(source).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4"), "14");
        assert_eq!(eval("(2 + 3) * 4"), "20");
        assert_eq!(eval("10 - 4 - 3"), "3");
        assert_eq!(eval("2 * 3 ^ 2"), "18");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(eval("2 ^ 3"), "8");
        assert_eq!(eval("2 ^ 3 ^ 2"), "512");
        assert_eq!(eval("-2 ^ 2"), "-4");
        assert_eq!(eval("2 ^ -1"), "0.5");
        assert_eq!(eval("9 ^ 0.5"), "3.0");
    }

    #[test]
    fn test_single_numeral_is_stable() {
        assert_eq!(eval("42"), "42");
        assert_eq!(eval("3.5"), "3.5");
        assert_eq!(eval("-3"), "-3");
    }

    #[test]
    fn test_division_produces_float() {
        assert_eq!(eval("6 / 3"), "2.0");
        assert_eq!(eval("7 / 2"), "3.5");
        assert_eq!(eval("1 / 3"), "0.3333333333333333");
    }

    #[test]
    fn test_mixed_types() {
        assert_eq!(eval("1.5 + 1"), "2.5");
        assert_eq!(eval("0.5 * 4"), "2.0");
    }

    #[test]
    fn test_chained_scientific_result() {
        assert_eq!(eval("1e+16 + 1e+16"), "2e+16");
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(eval("  1 2 +\t3 "), "15");
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate("5 / 0"), Err(ExpressionError::DivisionByZero));
        assert_eq!(evaluate(""), Err(ExpressionError::Empty));
        assert_eq!(evaluate("   "), Err(ExpressionError::Empty));
        assert_eq!(evaluate("2 + "), Err(ExpressionError::UnexpectedEnd));
        assert!(matches!(evaluate("abc"), Err(ExpressionError::UnexpectedCharacter { .. })));
        assert!(matches!(evaluate("3.5.2"), Err(ExpressionError::UnexpectedToken { .. })));
        assert_eq!(evaluate("0 ^ -2"), Err(ExpressionError::ZeroToNegativePower));
        assert_eq!(evaluate("10.0 ^ 400"), Err(ExpressionError::Overflow));
    }

    #[test]
    fn test_oversized_literals_overflow() {
        assert_eq!(evaluate("1e+3000"), Err(ExpressionError::Overflow));
        assert_eq!(evaluate("-1e+3000"), Err(ExpressionError::Overflow));
        assert_eq!(evaluate(&"9".repeat(400)), Err(ExpressionError::Overflow));
        assert_eq!(evaluate("2 + 1e+3000"), Err(ExpressionError::Overflow));
    }

    #[test]
    fn test_rejects_code_like_input() {
        assert!(evaluate("print(1)").is_err());
        assert!(evaluate("2 ** 3").is_err());
        assert!(evaluate("1; 2").is_err());
    }
}
