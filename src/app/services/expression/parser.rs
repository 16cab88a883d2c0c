//! Recursive-descent parser producing an expression tree.
//!
//! Grammar, loosest to tightest:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := factor (('*' | '/') factor)*
//! factor  := ('+' | '-') factor | power
//! power   := primary ('^' factor)?
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! `^` is right-associative and binds tighter than a unary sign on its left,
//! so `-2^2` is `-4` while `2^-1` is `0.5`.

use super::lexer::{Spanned, Token};
use crate::app::domain::Number;
use crate::app::infrastructure::error::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Number),
    Negate(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluate the tree, left operand first.
    pub fn eval(&self) -> Result<Number, ExpressionError> {
        match self {
            Expr::Literal(n) => Ok(*n),
            Expr::Negate(inner) => inner.eval()?.neg(),
            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.eval()?;
                let b = rhs.eval()?;
                match op {
                    BinaryOp::Add => a.add(b),
                    BinaryOp::Subtract => a.sub(b),
                    BinaryOp::Multiply => a.mul(b),
                    BinaryOp::Divide => a.div(b),
                    BinaryOp::Power => a.pow(b),
                }
            }
        }
    }
}

pub fn parse(tokens: &[Spanned]) -> Result<Expr, ExpressionError> {
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(Spanned { token: Token::CloseParen, position }) => {
            Err(ExpressionError::UnmatchedParenthesis { position })
        }
        Some(Spanned { token, position }) => Err(ExpressionError::UnexpectedToken {
            token: token.to_string(),
            position,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Spanned> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Spanned> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: Token) -> bool {
        match self.peek() {
            Some(s) if s.token == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expr(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(Token::Plus) {
                BinaryOp::Add
            } else if self.eat(Token::Minus) {
                BinaryOp::Subtract
            } else {
                return Ok(lhs);
            };
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expr, ExpressionError> {
        let mut lhs = self.factor()?;
        loop {
            let op = if self.eat(Token::Star) {
                BinaryOp::Multiply
            } else if self.eat(Token::Slash) {
                BinaryOp::Divide
            } else {
                return Ok(lhs);
            };
            let rhs = self.factor()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn factor(&mut self) -> Result<Expr, ExpressionError> {
        if self.eat(Token::Plus) {
            return self.factor();
        }
        if self.eat(Token::Minus) {
            return Ok(Expr::Negate(Box::new(self.factor()?)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.primary()?;
        if self.eat(Token::Caret) {
            let exponent = self.factor()?;
            return Ok(Expr::binary(BinaryOp::Power, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Expr, ExpressionError> {
        match self.next() {
            Some(Spanned { token: Token::Number(n), .. }) => Ok(Expr::Literal(n)),
            Some(Spanned { token: Token::OpenParen, position }) => {
                let inner = self.expr()?;
                if self.eat(Token::CloseParen) {
                    Ok(inner)
                } else {
                    Err(ExpressionError::UnmatchedParenthesis { position })
                }
            }
            Some(Spanned { token, position }) => Err(ExpressionError::UnexpectedToken {
                token: token.to_string(),
                position,
            }),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::expression::lexer::tokenize;

    fn tree(source: &str) -> Result<Expr, ExpressionError> {
        parse(&tokenize(source)?)
    }

    fn lit(i: i64) -> Expr {
        Expr::Literal(Number::Integer(i))
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            tree("2+3*4").unwrap(),
            Expr::binary(BinaryOp::Add, lit(2), Expr::binary(BinaryOp::Multiply, lit(3), lit(4)))
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            tree("8-3-2").unwrap(),
            Expr::binary(BinaryOp::Subtract, Expr::binary(BinaryOp::Subtract, lit(8), lit(3)), lit(2))
        );
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(
            tree("2^3^2").unwrap(),
            Expr::binary(BinaryOp::Power, lit(2), Expr::binary(BinaryOp::Power, lit(3), lit(2)))
        );
    }

    #[test]
    fn test_unary_minus_below_power() {
        assert_eq!(
            tree("-2^2").unwrap(),
            Expr::Negate(Box::new(Expr::binary(BinaryOp::Power, lit(2), lit(2))))
        );
        assert_eq!(
            tree("2^-1").unwrap(),
            Expr::binary(BinaryOp::Power, lit(2), Expr::Negate(Box::new(lit(1))))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(&[]), Err(ExpressionError::Empty));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(tree("2+"), Err(ExpressionError::UnexpectedEnd));
        assert_eq!(tree("2^"), Err(ExpressionError::UnexpectedEnd));
    }

    #[test]
    fn test_doubled_binary_operator() {
        assert_eq!(
            tree("2*/3"),
            Err(ExpressionError::UnexpectedToken { token: "/".to_string(), position: 2 })
        );
    }

    #[test]
    fn test_adjacent_numbers_rejected() {
        assert_eq!(
            tree("3.5.2"),
            Err(ExpressionError::UnexpectedToken { token: "0.2".to_string(), position: 3 })
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            tree("(2+3)*4").unwrap(),
            Expr::binary(BinaryOp::Multiply, Expr::binary(BinaryOp::Add, lit(2), lit(3)), lit(4))
        );
        assert_eq!(tree("(2+3"), Err(ExpressionError::UnmatchedParenthesis { position: 0 }));
        assert_eq!(tree("2+3)"), Err(ExpressionError::UnmatchedParenthesis { position: 3 }));
    }
}
