//! Single-argument operations that act on the whole display value.

use crate::app::domain::{Number, TrigFunction};
use crate::app::infrastructure::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    SquareRoot,
    Percentage,
    Sin,
    Cos,
    Tan,
}

impl From<TrigFunction> for UnaryFunction {
    fn from(func: TrigFunction) -> Self {
        match func {
            TrigFunction::Sin => Self::Sin,
            TrigFunction::Cos => Self::Cos,
            TrigFunction::Tan => Self::Tan,
        }
    }
}

impl UnaryFunction {
    /// Name used in history entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SquareRoot => "sqrt",
            Self::Percentage => "percent",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Apply the function. Trigonometric functions take degrees.
    pub fn apply(&self, input: f64) -> Result<f64, CalcError> {
        let output = match self {
            Self::SquareRoot => {
                if input < 0.0 {
                    return Err(CalcError::Domain(format!(
                        "square root of {}",
                        Number::Float(input)
                    )));
                }
                input.sqrt()
            }
            Self::Percentage => input / 100.0,
            Self::Sin => input.to_radians().sin(),
            Self::Cos => input.to_radians().cos(),
            Self::Tan => input.to_radians().tan(),
        };

        if output.is_finite() {
            Ok(output)
        } else {
            Err(CalcError::Domain(format!(
                "{} of {} is undefined",
                self.label(),
                Number::Float(input)
            )))
        }
    }

    /// `"sqrt(16.0) = 4.0"`
    pub fn history_entry(&self, input: f64, output: f64) -> String {
        format!(
            "{}({}) = {}",
            self.label(),
            Number::Float(input),
            Number::Float(output)
        )
    }
}

/// Read the whole display as one finite number.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(CalcError::InvalidNumber(format!(
            "'{}' is not a finite number",
            trimmed
        ))),
        Err(_) => Err(CalcError::InvalidNumber(format!(
            "could not convert '{}' to a number",
            trimmed
        ))),
    }
}
