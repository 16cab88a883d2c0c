use std::fmt;

use crate::app::domain::Number;
use crate::app::infrastructure::error::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(Number),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

/// A token together with its byte offset in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Split a whitespace-free expression into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ExpressionError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let token = match bytes[pos] {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'^' => Token::Caret,
            b'(' => Token::OpenParen,
            b')' => Token::CloseParen,
            b'0'..=b'9' | b'.' => {
                let end = scan_number(bytes, pos);
                let number = parse_literal(&source[pos..end])?;
                tokens.push(Spanned { token: Token::Number(number), position: pos });
                pos = end;
                continue;
            }
            _ => {
                // Report the full character, not a UTF-8 fragment.
                let ch = source[pos..].chars().next().unwrap_or('\u{fffd}');
                return Err(ExpressionError::UnexpectedCharacter { ch, position: pos });
            }
        };
        tokens.push(Spanned { token, position: pos });
        pos += 1;
    }

    Ok(tokens)
}

/// Find the end of the numeric literal starting at `start`: digits with at
/// most one decimal point, optionally followed by an exponent.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    let mut seen_dot = false;
    while pos < bytes.len() {
        match bytes[pos] {
            b'0'..=b'9' => pos += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                pos += 1;
            }
            _ => break,
        }
    }

    // An exponent is only consumed when at least one digit follows it, so a
    // stray `e` is left behind and reported as an unexpected character.
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut cursor = pos + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let digits_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > digits_start {
            pos = cursor;
        }
    }

    pos
}

fn parse_literal(literal: &str) -> Result<Number, ExpressionError> {
    let malformed = || ExpressionError::MalformedNumber(literal.to_string());

    if !literal.bytes().any(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let is_integer = literal.bytes().all(|b| b.is_ascii_digit());
    if !is_integer {
        return parse_float(literal);
    }

    if literal.len() > 1 && literal.starts_with('0') && literal.bytes().any(|b| b != b'0') {
        return Err(ExpressionError::LeadingZeros(literal.to_string()));
    }

    match literal.parse::<i64>() {
        Ok(i) => Ok(Number::Integer(i)),
        // Too wide for an i64: keep going as a float.
        Err(_) => parse_float(literal),
    }
}

/// Literals past `f64::MAX` parse to infinity; that is an overflow, not a value.
fn parse_float(literal: &str) -> Result<Number, ExpressionError> {
    let value: f64 = literal
        .parse()
        .map_err(|_| ExpressionError::MalformedNumber(literal.to_string()))?;
    if value.is_finite() {
        Ok(Number::Float(value))
    } else {
        Err(ExpressionError::Overflow)
    }
}
