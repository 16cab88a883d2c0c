//! Tagged numeric value produced by the evaluator.
//!
//! Integers stay exact as long as they fit an `i64`; anything involving a
//! float, a true division or an overflow becomes a `Float`. The tag decides
//! how the value is displayed.

use std::fmt;

use crate::app::infrastructure::error::ExpressionError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

type Arith = Result<Number, ExpressionError>;

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Integer(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    fn finite(value: f64) -> Arith {
        if value.is_finite() {
            Ok(Number::Float(value))
        } else {
            Err(ExpressionError::Overflow)
        }
    }

    pub fn add(self, rhs: Number) -> Arith {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_add(b) {
                Some(v) => Ok(Number::Integer(v)),
                None => Self::finite(a as f64 + b as f64),
            },
            (a, b) => Self::finite(a.as_f64() + b.as_f64()),
        }
    }

    pub fn sub(self, rhs: Number) -> Arith {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_sub(b) {
                Some(v) => Ok(Number::Integer(v)),
                None => Self::finite(a as f64 - b as f64),
            },
            (a, b) => Self::finite(a.as_f64() - b.as_f64()),
        }
    }

    pub fn mul(self, rhs: Number) -> Arith {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_mul(b) {
                Some(v) => Ok(Number::Integer(v)),
                None => Self::finite(a as f64 * b as f64),
            },
            (a, b) => Self::finite(a.as_f64() * b.as_f64()),
        }
    }

    /// True division: the quotient is always a float, even for `6 / 3`.
    pub fn div(self, rhs: Number) -> Arith {
        if rhs.is_zero() {
            return Err(ExpressionError::DivisionByZero);
        }
        Self::finite(self.as_f64() / rhs.as_f64())
    }

    pub fn pow(self, rhs: Number) -> Arith {
        if self.is_zero() && rhs.as_f64() < 0.0 {
            return Err(ExpressionError::ZeroToNegativePower);
        }
        match (self, rhs) {
            (Number::Integer(base), Number::Integer(exp)) if exp >= 0 => {
                let exact = u32::try_from(exp).ok().and_then(|e| base.checked_pow(e));
                match exact {
                    Some(v) => Ok(Number::Integer(v)),
                    None => Self::finite((base as f64).powf(exp as f64)),
                }
            }
            (base, exp) => {
                let (b, e) = (base.as_f64(), exp.as_f64());
                if b < 0.0 && e.fract() != 0.0 {
                    return Err(ExpressionError::ComplexResult);
                }
                Self::finite(b.powf(e))
            }
        }
    }

    pub fn neg(self) -> Arith {
        match self {
            Number::Integer(i) => match i.checked_neg() {
                Some(v) => Ok(Number::Integer(v)),
                None => Self::finite(-(i as f64)),
            },
            Number::Float(f) => Ok(Number::Float(-f)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => f.write_str(&format_float(x)),
        }
    }
}

/// Format a float the way a calculator display should show it.
///
/// Uses the shortest representation that round-trips, always keeps a decimal
/// point (`2.0`), and switches to scientific notation with a signed two-digit
/// exponent outside `[1e-4, 1e16)`.
pub fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(d) => ('-', d),
            None => ('+', exponent),
        };
        return format!("{}e{}{:0>2}", mantissa, sign, digits);
    }

    let plain = format!("{}", value);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}
